//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "app-listing",
    version,
    about = "Print a Markdown listing of mobile apps described in a JSON file."
)]
pub struct Cli {
    /// JSON file containing an array of app records. A missing `.json` extension is tried automatically.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}
