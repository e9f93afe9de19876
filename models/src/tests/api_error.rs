use crate::{ApiError, ErrorKind};

/// **VALUE**: Verifies a remote `fail` error keeps its type, parameter and value.
///
/// **WHY THIS MATTERS**: The bad-credential case is reported as
/// `invalid_parameter` on `api_key` with the key echoed back. Callers rely on all
/// three fields to tell a bad key from a bad request.
#[test]
fn given_remote_error_json_when_decoded_then_fields_pass_through() {
    // GIVEN: A remote error object
    let json = r#"{"type":"invalid_parameter","parameter_name":"api_key","passed_value":"u1-abc"}"#;

    // WHEN: Decoding
    let error: ApiError = serde_json::from_str(json).unwrap();

    // THEN: Everything is preserved
    assert_eq!(error.kind, ErrorKind::InvalidParameter);
    assert_eq!(error.kind.as_str(), "invalid_parameter");
    assert_eq!(error.parameter_name.as_deref(), Some("api_key"));
    assert_eq!(error.passed_value.as_deref(), Some("u1-abc"));
    assert_eq!(error.message, None);
}

#[test]
fn given_unknown_or_missing_type_when_decoded_then_kind_is_system() {
    let unknown: ApiError = serde_json::from_str(r#"{"type":"quota_exceeded"}"#).unwrap();
    let missing: ApiError = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();

    assert_eq!(unknown.kind, ErrorKind::System);
    assert_eq!(missing.kind, ErrorKind::System);
    assert_eq!(missing.message.as_deref(), Some("boom"));
}

#[test]
fn given_numeric_passed_value_when_decoded_then_kept_as_text() {
    let error: ApiError =
        serde_json::from_str(r#"{"type":"not_found","parameter_name":"id","passed_value":123}"#)
            .unwrap();

    assert_eq!(error.kind, ErrorKind::NotFound);
    assert_eq!(error.passed_value.as_deref(), Some("123"));
}

/// **BUG THIS CATCHES**: Would catch Display starting to print `passed_value`,
/// which carries the credential for bad-key failures.
#[test]
fn given_error_with_passed_value_when_displayed_then_value_is_omitted() {
    let error = ApiError {
        kind: ErrorKind::InvalidParameter,
        parameter_name: Some(String::from("api_key")),
        passed_value: Some(String::from("u1-secret")),
        message: None,
    };

    let shown = error.to_string();

    assert_eq!(shown, "invalid_parameter (parameter: api_key)");
    assert!(!shown.contains("u1-secret"));
}

#[test]
fn given_kinds_when_classified_then_only_validation_kinds_are_client_side() {
    assert!(ErrorKind::NoFriendlyName.is_client_side());
    assert!(ErrorKind::IncorrectParameters.is_client_side());
    assert!(!ErrorKind::NotFound.is_client_side());
    assert!(!ApiError::system("socket closed").is_client_side());
}
