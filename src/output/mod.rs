use std::io::Write;

use crate::checker::Diagnostic;
use crate::error::Result;

/// Render a diagnostic using the fixed compiler-warning template:
/// `{file}:{line}: warning: {message} [{category}] [{confidence}]`
#[must_use]
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!(
        "{}:{}: warning: {} [{}] [{}]",
        diagnostic.path.display(),
        diagnostic.line,
        diagnostic.message,
        diagnostic.category,
        diagnostic.confidence
    )
}

/// Write one formatted diagnostic line to the sink.
///
/// # Errors
/// Returns an error if writing to the sink fails.
pub fn write_diagnostic<W: Write>(sink: &mut W, diagnostic: &Diagnostic) -> Result<()> {
    writeln!(sink, "{}", format_diagnostic(diagnostic))?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
