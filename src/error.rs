use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineGuardError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LineGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
