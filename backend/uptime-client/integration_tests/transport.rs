use crate::helpers::{client_for, post, setup};

use uptime_client::Operation;

use models::ErrorKind;

use std::time::Duration;

use wiremock::ResponseTemplate;

/// **VALUE**: Verifies transport failures resolve to a `system` error.
///
/// **WHY THIS MATTERS**: Callers only ever see `ApiError`; a refused connection
/// must not panic or leak a transport type.
#[tokio::test]
async fn given_unreachable_server_when_called_then_system_error() {
    // GIVEN: A client pointed at a closed port
    let client = client_for("http://127.0.0.1:9/v2/", 2);

    // WHEN: Making any call
    let error = client.get_account_details().await.unwrap_err();

    // THEN: system kind with the transport message
    assert_eq!(error.kind, ErrorKind::System);
    assert!(error.message.is_some());
}

#[tokio::test]
async fn given_server_error_status_when_called_then_system_error_with_status() {
    let (server, client) = setup().await;
    post(Operation::GetMonitors)
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let error = client.get_all_monitors().await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::System);
    assert!(error.message.unwrap_or_default().contains("503"));
}

#[tokio::test]
async fn given_non_json_body_when_called_then_system_error() {
    let (server, client) = setup().await;
    post(Operation::GetMonitors)
        .respond_with(ResponseTemplate::new(200).set_body_string("<xml/>"))
        .mount(&server)
        .await;

    let error = client.get_all_monitors().await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::System);
}

/// **VALUE**: Verifies the configured timeout bounds a slow response.
#[tokio::test]
async fn given_slow_server_when_called_then_timeout_is_system_error() {
    let server = wiremock::MockServer::start().await;
    post(Operation::GetAccountDetails)
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    let client = client_for(&format!("{}/v2/", server.uri()), 1);

    let error = client.get_account_details().await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::System);
}

#[tokio::test]
async fn given_base_url_without_trailing_slash_when_called_then_operation_appended() {
    let server = wiremock::MockServer::start().await;
    post(Operation::GetAccountDetails)
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"stat":"ok","account":{}}"#))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&format!("{}/v2", server.uri()), 5);

    let account = client.get_account_details().await.unwrap();

    assert_eq!(account.email, None);
}
