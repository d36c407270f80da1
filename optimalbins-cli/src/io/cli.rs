use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Packs the items of an instance file into its bins.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance with the items and bins to pack
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Receives `sol_<stem>.json` and one `sol_<stem>_<i>.svg` per bin, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON with the algorithm, heuristic and drawing options, defaults are used if absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Verbosity of the log written to stdout
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
