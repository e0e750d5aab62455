use clap::Parser;
use expdist::io::load_data_from_file;
use expdist::tracing::start_expdist_tracing_subscriber;
use expdist::ExponentReport;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error, info};

/// Prints a histogram from a report written by exponent-histogram
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short, long)]
    /// Print the full-range histogram instead of the used range
    full: bool,

    #[arg()]
    /// The report file
    report: String,
}

fn main() -> ExitCode {
    start_expdist_tracing_subscriber();

    let args = Args::parse();
    let report_path = Path::new(&args.report);

    info!("loading report at {}", args.report);
    let report = match load_data_from_file::<ExponentReport>(report_path) {
        Ok(report) => report,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    debug!(
        "{} report of {} with {} normal values",
        report.format, report.source, report.normal_count
    );

    let histogram = if args.full { &report.full } else { &report.used };
    match ExponentReport::write_table(histogram, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("could not print histogram: {}", err);
            ExitCode::FAILURE
        }
    }
}
