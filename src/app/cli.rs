use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::search::RECOMMENDED_MAX_NUMBERS;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds every subset of a number list that sums to a target and records the search tree.", long_about = None)]
#[clap(group(ArgGroup::new("source").required(true).args(["numbers", "file"])))]
pub struct Cli {
    /// Numbers separated by commas or spaces, e.g. "2, 3, 5"
    #[clap(short, long, allow_hyphen_values = true)]
    pub numbers: Option<String>,

    /// Text file holding the numbers
    #[clap(short, long)]
    pub file: Option<PathBuf>,

    /// Target sum (a whole number)
    #[clap(short, long, allow_hyphen_values = true)]
    pub target: String,

    /// Use the memoized search; no exploration tree is recorded.
    #[clap(long)]
    pub optimized: bool,

    /// Write the JSON result document to this path
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum accepted count of numbers
    #[clap(long, default_value_t = RECOMMENDED_MAX_NUMBERS)]
    pub max_numbers: usize,

    /// Suppress verbose output, only printing the summary line or errors.
    #[clap(short, long)]
    pub quiet: bool,
}
