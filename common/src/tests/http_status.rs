use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_categorized_then_match_http_classes() {
    assert_eq!(HttpStatusCode(200).category(), "success");
    assert_eq!(HttpStatusCode(404).category(), "client_error");
    assert_eq!(HttpStatusCode(503).category(), "server_error");
    assert_eq!(HttpStatusCode(302).category(), "unexpected_status");
    assert!(HttpStatusCode::from(204).is_success());
    assert_eq!(HttpStatusCode(418).to_string(), "418");
}
