use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "line-guard")]
#[command(author, version, about = "Report source lines exceeding the maximum line width")]
#[command(long_about = "A style checker that scans a single file and reports every line \
    longer than 80 characters.\n\n\
    Exit codes:\n  \
    0 - File fully scanned (violations do not affect the exit code)\n  \
    2 - Usage error or the file could not be read")]
pub struct Cli {
    /// Path of the file to check
    pub path: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
