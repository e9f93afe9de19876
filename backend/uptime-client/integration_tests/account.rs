use crate::helpers::{API_KEY, body_prefix, fail, ok, post, setup};

use uptime_client::Operation;

use models::ErrorKind;

use serde_json::json;
use wiremock::matchers::{body_string, header};

/// **VALUE**: Verifies the request shape: headers, credential first, then format.
///
/// **WHY THIS MATTERS**: The remote only answers JSON for form posts that carry
/// `format=json`; a cached answer would hide account changes.
#[tokio::test]
async fn given_account_request_when_sent_then_form_post_with_fixed_headers() {
    // GIVEN: A server expecting the exact body and headers
    let (server, client) = setup().await;
    post(Operation::GetAccountDetails)
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header("cache-control", "no-cache"))
        .and(body_string(body_prefix()))
        .respond_with(ok(json!({
            "account": {
                "email": "ops@example.com",
                "monitor_limit": 50,
                "monitor_interval": 1,
                "up_monitors": 1,
                "down_monitors": 0,
                "paused_monitors": 2
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching account details
    let account = client.get_account_details().await.unwrap();

    // THEN: The payload is typed
    assert_eq!(account.email.as_deref(), Some("ops@example.com"));
    assert_eq!(account.monitor_limit, Some(50));
    assert_eq!(account.paused_monitors, Some(2));
}

/// **VALUE**: Verifies a rejected credential comes back exactly as the remote reported it.
///
/// **BUG THIS CATCHES**: Would catch the remote error being flattened into a
/// `system` error or losing its parameter name and passed value.
#[tokio::test]
async fn given_bad_key_when_account_requested_then_invalid_parameter_for_api_key() {
    // GIVEN: The remote refusing the key
    let (server, client) = setup().await;
    post(Operation::GetAccountDetails)
        .respond_with(fail(json!({
            "type": "invalid_parameter",
            "parameter_name": "api_key",
            "passed_value": API_KEY
        })))
        .mount(&server)
        .await;

    // WHEN: Fetching account details
    let error = client.get_account_details().await.unwrap_err();

    // THEN: Type, parameter and value pass through
    assert_eq!(error.kind, ErrorKind::InvalidParameter);
    assert_eq!(error.parameter_name.as_deref(), Some("api_key"));
    assert_eq!(error.passed_value.as_deref(), Some(API_KEY));
    assert!(!error.to_string().contains(API_KEY));
}
