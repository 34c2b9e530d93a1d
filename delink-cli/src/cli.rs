//! CLI structure and argument handling.
//!
//! The tool takes a single target path, preferably via `--file` (both
//! `--file PATH` and `--file=PATH` work). When the flag is absent, the
//! LAST positional argument is used instead. That fallback is a
//! documented part of the CLI contract, not an accident of parsing.

use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line tool that replaces a symbolic link with the file it
/// points to.
#[derive(Debug, Parser)]
#[command(name = "delink")]
#[command(version, about = "Replace a symbolic link with the file it points to", long_about = None)]
pub struct Cli {
    /// The symbolic link to collapse
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Fallback target paths; the last one is used when --file is absent
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// The path to operate on: `--file` wins, otherwise the last
    /// positional argument.
    pub fn target(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .or_else(|| self.paths.last().map(PathBuf::as_path))
    }
}
