mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use engine_logging::{engine_error, engine_info};
use stackdown_engine::{convert_export, ConversionReport, ConvertOptions, PublicationConfig};

use crate::logging::LogDestination;

/// Convert a Substack export archive into Markdown documents plus an
/// aggregate index.
#[derive(Debug, Parser)]
#[command(name = "stackdown", version, about)]
struct Cli {
    /// Path to the export ZIP archive.
    archive: PathBuf,

    /// Directory the documents and index are written to.
    #[arg(short, long, default_value = "substack_markdown")]
    output: PathBuf,

    /// Publication identifier used when a post has no canonical URL.
    #[arg(short, long, default_value = "newsletter")]
    publication: String,

    /// Also write logs to ./stackdown.log.
    #[arg(long)]
    log_file: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });

    match run(&cli) {
        Ok(report) => {
            engine_info!(
                "Conversion complete: {} converted, {} skipped",
                report.converted,
                report.skipped
            );
            engine_info!("Output directory: {}", report.output_dir.display());
            engine_info!("Index written to {}", report.index_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            engine_error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ConversionReport> {
    if !cli.archive.exists() {
        anyhow::bail!("file not found: {}", cli.archive.display());
    }
    let options = ConvertOptions {
        output_dir: cli.output.clone(),
        publication: PublicationConfig::new(cli.publication.clone()),
    };
    convert_export(&cli.archive, &options).context("conversion failed")
}
