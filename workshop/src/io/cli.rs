use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Job describing the shape type, the base and the cuts to place
    #[arg(short, long, value_name = "FILE")]
    pub job_file: PathBuf,
    /// Folder for the resulting json and svg, saved progress is kept in a subfolder
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Continue from the progress saved by a previous run instead of creating a new base
    #[arg(short, long)]
    pub resume: bool,
}
