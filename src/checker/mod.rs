use std::path::{Path, PathBuf};

/// Maximum permitted line width before a violation is reported.
pub const MAX_LINE_WIDTH: usize = 80;

pub const LINE_LENGTH_CATEGORY: &str = "whitespace/line_length";
pub const LINE_LENGTH_CONFIDENCE: u8 = 2;

/// A single reported rule violation: location, category, confidence and message.
///
/// Created at the moment a violation is detected and consumed immediately by the
/// output layer; diagnostics are never accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    /// 1-based line number within the checked file.
    pub line: usize,
    pub category: &'static str,
    pub confidence: u8,
    pub message: String,
}

pub struct LineWidthChecker {
    max_width: usize,
}

impl LineWidthChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_width: MAX_LINE_WIDTH,
        }
    }

    /// Check one line against the width rule.
    ///
    /// Width is measured in Unicode scalar values. The reading layer strips the
    /// line terminator before the check, so terminated and unterminated final
    /// lines are measured identically.
    #[must_use]
    pub fn check_line(&self, path: &Path, line_number: usize, content: &str) -> Option<Diagnostic> {
        let width = content.chars().count();
        if width <= self.max_width {
            return None;
        }

        Some(Diagnostic {
            path: path.to_path_buf(),
            line: line_number,
            category: LINE_LENGTH_CATEGORY,
            confidence: LINE_LENGTH_CONFIDENCE,
            message: format!("Lines should be <= {} characters long", self.max_width),
        })
    }
}

impl Default for LineWidthChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
