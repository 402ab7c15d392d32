//! scriptmap - static classifier for JavaScript script references.
//!
//! CLI entry point.

use clap::Parser;
use scriptmap::report::{render_summary, write_reports};
use scriptmap::{Config, ConsoleOutput, Pipeline};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("scriptmap=debug,info")
    } else {
        EnvFilter::new("scriptmap=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

fn run(config: &Config) -> Result<(), ExitCode> {
    let primary_domain = config.primary_domain().map_err(|e| {
        error!("{}", e);
        ExitCode::FAILURE
    })?;

    let paths = config.report_paths().map_err(|e| {
        error!("{}", e);
        ExitCode::FAILURE
    })?;

    let pipeline = Pipeline::new(primary_domain.as_str());
    let records = match pipeline.process_path(&config.input) {
        Ok(records) => records,
        Err(e) => {
            error!("{}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    if let Err(e) = write_reports(&records, &primary_domain, &paths) {
        error!("Failed to write reports: {}", e);
        return Err(ExitCode::FAILURE);
    }
    info!("Reports written for {} scripts", records.len());

    if config.stdout {
        println!("{}", render_summary(&records, &primary_domain));
    } else {
        ConsoleOutput::new(config.verbose, config.quiet).print_complete(&records, &paths);
    }

    Ok(())
}
