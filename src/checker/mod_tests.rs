use std::path::Path;

use super::*;

#[test]
fn check_line_passes_short_line() {
    let checker = LineWidthChecker::new();

    let result = checker.check_line(Path::new("test.c"), 1, "int main() {");

    assert!(result.is_none());
}

#[test]
fn check_line_passes_exactly_80_characters() {
    let checker = LineWidthChecker::new();
    let line = "x".repeat(80);

    let result = checker.check_line(Path::new("test.c"), 1, &line);

    assert!(result.is_none());
}

#[test]
fn check_line_fails_81_characters() {
    let checker = LineWidthChecker::new();
    let line = "x".repeat(81);

    let result = checker.check_line(Path::new("test.c"), 1, &line);

    assert!(result.is_some());
}

#[test]
fn check_line_passes_empty_line() {
    let checker = LineWidthChecker::new();

    let result = checker.check_line(Path::new("test.c"), 1, "");

    assert!(result.is_none());
}

#[test]
fn diagnostic_carries_location_and_rule_fields() {
    let checker = LineWidthChecker::new();
    let line = "y".repeat(85);

    let diagnostic = checker
        .check_line(Path::new("src/lib.c"), 42, &line)
        .expect("85 characters should violate the width rule");

    assert_eq!(diagnostic.path, Path::new("src/lib.c"));
    assert_eq!(diagnostic.line, 42);
    assert_eq!(diagnostic.category, "whitespace/line_length");
    assert_eq!(diagnostic.confidence, 2);
    assert_eq!(diagnostic.message, "Lines should be <= 80 characters long");
}

#[test]
fn width_is_measured_in_characters_not_bytes() {
    let checker = LineWidthChecker::new();
    // 80 multibyte characters: 240 bytes but within the width limit
    let line = "あ".repeat(80);

    let result = checker.check_line(Path::new("test.c"), 1, &line);

    assert!(result.is_none());

    let line = "あ".repeat(81);
    let result = checker.check_line(Path::new("test.c"), 1, &line);

    assert!(result.is_some());
}
