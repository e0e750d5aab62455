use clap::Parser;
use expdist::io::{create_output_file, dump_data_to_file};
use expdist::report::analyze_file;
use expdist::tracing::start_expdist_tracing_subscriber;
use expdist::{ExponentReport, FloatFormat};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

/// Computes histograms of exponent field usage in a raw binary file of floating-point numbers.
/// The file is read in the host's native byte order.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short, long, value_enum, default_value_t = FloatFormat::Float32)]
    /// Data type of the floats in the file
    dtype: FloatFormat,

    #[arg(short, long, default_value_t = String::from("exponent_hist.bin"), verbatim_doc_comment)]
    /// Where to write the report.
    /// Load it again with print-exponent-histogram.
    output: String,

    #[arg()]
    /// Path to the binary input file
    filename: String,
}

fn main() -> ExitCode {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_expdist_tracing_subscriber();

    // Parse arguments from the command line
    let args = Args::parse();
    let input_path = Path::new(&args.filename);
    let output_path = Path::new(&args.output);

    match run(input_path, output_path, args.dtype) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(input_path: &Path, output_path: &Path, format: FloatFormat) -> expdist::Result<()> {
    // Create the output file so a bad output location errors before computation
    let output_file = create_output_file(output_path)?;

    info!("analyzing {} as {}", input_path.display(), format);
    let report = analyze_file(input_path, format)?;
    info!(
        "{} normal values over {} used-range bins",
        report.normal_count,
        report.used.counts().len()
    );

    ExponentReport::write_table(&report.used, &mut io::stdout().lock()).map_err(|source| {
        expdist::ExpDistError::Io {
            path: "<stdout>".into(),
            source,
        }
    })?;

    info!("dumping report to {}", output_path.display());
    dump_data_to_file(&report, output_file)?;

    info!("done!");
    Ok(())
}
