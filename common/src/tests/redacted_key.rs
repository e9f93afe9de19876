use crate::RedactedApiKey;

/// **VALUE**: Verifies the credential never leaks through Debug or Display.
///
/// **WHY THIS MATTERS**: Clients get logged with `{:?}` all the time. If the key
/// shows up there, it ends up in log files and bug reports.
#[test]
fn given_api_key_when_formatted_then_value_is_redacted() {
    // GIVEN: A key with a recognizable value
    let key = RedactedApiKey::from("u1234-secretvalue");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{key:?}");
    let display = format!("{key}");

    // THEN: Neither contains the raw value
    assert!(!debug.contains("secretvalue"));
    assert!(!display.contains("secretvalue"));
    assert_eq!(key.expose(), "u1234-secretvalue");
}

#[test]
fn given_api_key_when_serialized_then_returns_error() {
    let key = RedactedApiKey::new("u1234-secretvalue");

    let result = serde_json::to_string(&key);

    assert!(result.is_err(), "Serialization must be refused");
    assert!(!result.unwrap_err().to_string().contains("secretvalue"));
}

#[test]
fn given_whitespace_key_when_checked_then_is_blank() {
    assert!(RedactedApiKey::new("   ").is_blank());
    assert!(!RedactedApiKey::new("   ").is_empty());
    assert!(RedactedApiKey::new("").is_blank());
    assert!(!RedactedApiKey::new("abc").is_blank());
    assert_eq!(RedactedApiKey::new("abc").len(), 3);
}
