use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error enum in the workspace carries an ErrorLocation.
/// If capture breaks, every error message loses its pointer back to the failing call.
#[test]
#[track_caller]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Creating ErrorLocation from the caller
    let location = ErrorLocation::from(Location::caller());

    // THEN: File, line and column are populated
    assert!(location.file.ends_with(".rs"), "Should capture file path");
    assert!(location.line > 0, "Should capture line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the bracketed `[file:line:column]` display format.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops the brackets or a
/// component, which would make error strings inconsistent across crates.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A fixed location
    let location = ErrorLocation {
        file: "src/gateway/mod.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting as string
    let formatted = location.to_string();

    // THEN: Should produce "[file:line:column]"
    assert_eq!(formatted, "[src/gateway/mod.rs:42:7]");
}

/// **VALUE**: Verifies that `ErrorLocation::caller()` reports the call site of a
/// `#[track_caller]` constructor, not the constructor body.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` is removed from `caller()`,
/// which would make every error point at error_location.rs.
#[test]
fn given_track_caller_helper_when_called_twice_then_lines_differ() {
    // GIVEN: A constructor-style helper
    #[track_caller]
    fn construct() -> ErrorLocation {
        ErrorLocation::caller()
    }

    // WHEN: Capturing from two call sites
    let first = construct();
    let second = construct();

    // THEN: Both point into this test file on consecutive lines
    assert!(first.file.contains("error_location.rs"));
    assert!(first.file.contains("tests"), "Should point at the test, not the helper");
    assert_eq!(first.line + 1, second.line);
}
