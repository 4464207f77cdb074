pub mod checker;
pub mod cli;
pub mod error;
pub mod output;

pub use error::{LineGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
