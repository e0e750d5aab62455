use std::io;
use tracing::Level;
use tracing_subscriber::{filter, fmt, prelude::*, EnvFilter};

pub fn start_expdist_tracing_subscriber() {
    // Get the stdout logging filter level from the RUST_LOG environment variable
    //   - INFO messages are logged by default
    //   - RUST_LOG=debug also shows how many values were decoded and dropped
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Info and debug go to stdout, warnings and errors only to stderr
    let stdout_log = fmt::layer().with_filter(env_filter).with_filter(
        filter::filter_fn(|metadata| *metadata.level() > Level::WARN),
    );
    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter::LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(stderr_log)
        .init()
}
