use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use workshop::config::WorkshopConfig;
use workshop::io::cli::Cli;
use workshop::{driver, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: WorkshopConfig = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            WorkshopConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed WorkshopConfig: {config:?}");

    let summary = driver::run(&args.job_file, &args.output_folder, config, args.resume)?;
    info!("[MAIN] run finished: {summary:?}");

    Ok(())
}
