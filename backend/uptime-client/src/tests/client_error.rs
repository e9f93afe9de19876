use crate::error::client::ClientError;

use models::{ApiError, ErrorKind};

/// **VALUE**: Verifies internal errors keep the location they were raised at.
///
/// **WHY THIS MATTERS**: Decode failures can come from several places; the
/// location in the message is what tells them apart in a log.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the
/// constructors, which moves every location into `client.rs`.
#[test]
fn given_decode_error_when_formatted_then_includes_caller_location() {
    // GIVEN: A decode error built here
    let error = ClientError::decode("missing stat");

    // WHEN: Formatting
    let text = error.to_string();

    // THEN: Message and this file are named
    assert!(text.contains("Decode Error: missing stat"));
    assert!(text.contains("client_error.rs"));
}

#[test]
fn given_server_status_when_categorized_then_status_class() {
    assert_eq!(ClientError::from_http_response(503, "").category(), "server_error");
    assert_eq!(ClientError::from_http_response(404, "").category(), "client_error");
}

/// **VALUE**: Verifies the single conversion point keeps remote errors intact
/// and turns everything else into `system`.
#[test]
fn given_client_errors_when_converted_then_remote_kept_and_rest_system() {
    // GIVEN: A remote failure and a transport failure
    let remote = ClientError::remote(ApiError::new(ErrorKind::NotFound, "gone"));
    let server = ClientError::from_http_response(502, "bad gateway");

    // WHEN: Converting to the public error
    let remote = ApiError::from(remote);
    let server = ApiError::from(server);

    // THEN: The remote error is unchanged; the server error is system
    assert_eq!(remote, ApiError::new(ErrorKind::NotFound, "gone"));
    assert_eq!(server.kind, ErrorKind::System);
    assert!(server.message.unwrap_or_default().contains("502"));
}
