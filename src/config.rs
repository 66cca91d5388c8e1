//! File locations for a run
//!
//! The four table names are fixed; only the directory holding them can be
//! changed from the command line.

use clap::Parser;
use std::path::{Path, PathBuf};

pub const ZIPS_FILE: &str = "zips.csv";
pub const PLANS_FILE: &str = "plans.csv";
pub const TARGETS_FILE: &str = "slcsp.csv";
pub const ANSWER_FILE: &str = "slcsp_answer.csv";

/// Compute the second-lowest-cost Silver plan rate for each target ZIP
#[derive(Parser, Debug)]
#[command(name = "slcsp")]
#[command(about = "Fill slcsp.csv with second-lowest-cost Silver plan rates")]
pub struct Args {
    /// Directory containing zips.csv, plans.csv and slcsp.csv
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,
}

/// Resolved input and output paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub zips: PathBuf,
    pub plans: PathBuf,
    pub targets: PathBuf,
    pub answer: PathBuf,
}

impl Paths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            zips: dir.join(ZIPS_FILE),
            plans: dir.join(PLANS_FILE),
            targets: dir.join(TARGETS_FILE),
            answer: dir.join(ANSWER_FILE),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl From<&Args> for Paths {
    fn from(args: &Args) -> Self {
        Self::in_dir(&args.data_dir)
    }
}
