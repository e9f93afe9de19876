use crate::gateway::{Gateway, Operation};

use std::time::Duration;

#[test]
fn given_base_without_trailing_slash_when_joined_then_operation_appended() {
    let gateway = Gateway::new("https://api.example.com/v2", Duration::from_secs(5)).unwrap();

    let url = gateway.endpoint(Operation::GetMaintenanceWindows).unwrap();

    assert_eq!(url.as_str(), "https://api.example.com/v2/getMWindows");
}

#[test]
fn given_operations_when_named_then_remote_endpoint_names() {
    assert_eq!(Operation::GetStatusPages.to_string(), "getPSPs");
    assert_eq!(Operation::DeleteMaintenanceWindow.name(), "deleteMWindow");
    assert_eq!(Operation::ResetMonitor.name(), "resetMonitor");
}

#[test]
fn given_malformed_base_url_when_gateway_built_then_error() {
    assert!(Gateway::new("not a url", Duration::from_secs(5)).is_err());
}
