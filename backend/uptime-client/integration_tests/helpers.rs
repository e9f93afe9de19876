use uptime_client::{ClientConfig, Operation, UptimeClient};

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const API_KEY: &str = "u956-afus321g565fghr519";

/// Mock server plus a client pointed at its `/v2/` prefix.
pub async fn setup() -> (MockServer, UptimeClient) {
    let server = MockServer::start().await;
    let client = client_for(&format!("{}/v2/", server.uri()), 5);
    (server, client)
}

pub fn client_for(base_url: &str, timeout_secs: u64) -> UptimeClient {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        timeout_secs,
    };
    UptimeClient::with_config(API_KEY, &config).expect("client should build")
}

/// POST to the endpoint of `operation`.
pub fn post(operation: Operation) -> MockBuilder {
    Mock::given(method("POST")).and(path(format!("/v2/{operation}")))
}

/// `stat: ok` merged into `payload`.
pub fn ok(payload: Value) -> ResponseTemplate {
    let mut body = json!({ "stat": "ok" });
    if let (Some(target), Value::Object(fields)) = (body.as_object_mut(), payload) {
        target.extend(fields);
    }
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn fail(error: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "stat": "fail", "error": error }))
}

/// The form body prefix every request starts with.
pub fn body_prefix() -> String {
    format!("api_key={API_KEY}&format=json")
}

/// Bodies received for `operation`, in arrival order.
pub async fn bodies(server: &MockServer, operation: Operation) -> Vec<String> {
    let wanted = format!("/v2/{operation}");
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == wanted)
        .map(|request| String::from_utf8_lossy(&request.body).into_owned())
        .collect()
}
