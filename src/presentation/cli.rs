//! CLI Argument Parsing
//!
//! Every flag is optional. With none, the program reads the CSV files from
//! the working directory and starts the console menu.

use std::path::PathBuf;

use clap::Parser;

/// QuickBite - order and daily collections tracker
#[derive(Parser, Debug)]
#[command(name = "quickbite")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Reads menu_items.csv, order_details.csv and collection_report.csv, \
then starts the interactive menu. New orders are kept for this session only.")]
pub struct Cli {
    /// Directory holding the CSV files (overrides config and QUICKBITE_DATA_DIR)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: ./quickbite.toml, then the user config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
