use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Packs the files listed in INPUT onto as few discs (bins) as possible using best-fit decreasing.
/// INPUT holds one `<tag> <size>` record per line.
#[derive(Parser, Debug)]
#[command(name = "obf", about, disable_version_flag = true)]
pub struct Cli {
    #[arg(value_name = "INPUT")]
    pub input_file: Option<PathBuf>,
    /// Save the report to FILE instead of `output.txt` next to the input file
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    /// Append to the report file instead of overwriting it
    #[arg(short, long)]
    pub append: bool,
    /// Capacity of a single bin, overrides the config file
    #[arg(short, long, value_name = "SIZE")]
    pub capacity: Option<f64>,
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Additionally write the instance and solution as JSON to FILE
    #[arg(short, long, value_name = "FILE")]
    pub json_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Print the program version
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}
