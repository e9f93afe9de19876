use crate::helpers::{bodies, body_prefix, fail, ok, post, setup};

use uptime_client::Operation;

use models::{
    ErrorKind, KeywordType, MonitorStatus, MonitorType, MonitorUpdate, NewMonitor,
    NewMonitorBuilder,
};

use serde_json::json;
use wiremock::matchers::{body_string, body_string_contains};

/// **VALUE**: Verifies an id-list lookup sends `monitors=111-222` and keeps the
/// remote's order.
#[tokio::test]
async fn given_two_ids_when_monitors_fetched_then_hyphen_list_sent_and_order_kept() {
    // GIVEN: A server answering for both ids
    let (server, client) = setup().await;
    post(Operation::GetMonitors)
        .and(body_string(format!("{}&monitors=111-222", body_prefix())))
        .respond_with(ok(json!({
            "pagination": {"offset": 0, "limit": 50, "total": 2},
            "monitors": [
                {"id": 111, "friendly_name": "First", "type": 1, "status": 2},
                {"id": 222, "friendly_name": "Second", "type": 3, "status": 9}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching by ids
    let page = client.get_monitors_by_ids(&[111, 222]).await.unwrap();

    // THEN: Both come back in order
    let ids: Vec<i64> = page.monitors.iter().map(|monitor| monitor.id).collect();
    assert_eq!(ids, vec![111, 222]);
    assert_eq!(page.monitors[1].status, Some(MonitorStatus::Down));
    assert!(page.monitors[1].is_down());
}

/// **VALUE**: Verifies updating a monitor that does not exist sends no mutation.
///
/// **WHY THIS MATTERS**: The lookup guards every update; an edit for a missing id
/// must stop before `editMonitor` is called.
///
/// **BUG THIS CATCHES**: Would catch the facade ignoring an empty lookup result.
#[tokio::test]
async fn given_missing_monitor_when_updated_then_not_found_without_edit() {
    // GIVEN: A lookup that finds nothing, and an edit endpoint that must stay idle
    let (server, client) = setup().await;
    post(Operation::GetMonitors)
        .respond_with(ok(json!({"monitors": []})))
        .expect(1)
        .mount(&server)
        .await;
    post(Operation::EditMonitor)
        .respond_with(ok(json!({"monitor": {"id": 999}})))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Updating monitor 999
    let update = MonitorUpdate {
        friendly_name: Some(String::from("Renamed")),
        ..MonitorUpdate::new(999)
    };
    let error = client.update_monitor(&update).await.unwrap_err();

    // THEN: not_found from the lookup
    assert_eq!(error.kind, ErrorKind::NotFound);
    assert_eq!(error.parameter_name.as_deref(), Some("id"));
}

#[tokio::test]
async fn given_existing_monitor_when_updated_then_only_changes_sent() {
    // GIVEN: A monitor with a 300 s interval
    let (server, client) = setup().await;
    post(Operation::GetMonitors)
        .and(body_string_contains("monitors=5"))
        .and(body_string_contains("alert_contacts=1"))
        .respond_with(ok(json!({
            "monitors": [{
                "id": 5, "friendly_name": "Shop", "url": "https://shop.example.com",
                "type": 1, "interval": 300, "status": 2
            }]
        })))
        .mount(&server)
        .await;
    post(Operation::EditMonitor)
        .respond_with(ok(json!({"monitor": {"id": 5}})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Updating with the same name and a new interval
    let update = MonitorUpdate {
        friendly_name: Some(String::from("Shop")),
        interval: Some(60),
        ..MonitorUpdate::new(5)
    };
    let acknowledged = client.update_monitor(&update).await.unwrap();

    // THEN: The edit carries only the id and the interval
    assert_eq!(acknowledged.id, 5);
    assert_eq!(
        bodies(&server, Operation::EditMonitor).await,
        vec![format!("{}&id=5&interval=60", body_prefix())]
    );
}

#[tokio::test]
async fn given_running_monitor_when_paused_then_status_zero_sent() {
    let (server, client) = setup().await;
    post(Operation::GetMonitors)
        .respond_with(ok(json!({"monitors": [{"id": 5, "status": 2}]})))
        .mount(&server)
        .await;
    post(Operation::EditMonitor)
        .and(body_string_contains("status=0"))
        .respond_with(ok(json!({"monitor": {"id": 5, "status": 0}})))
        .expect(1)
        .mount(&server)
        .await;

    let acknowledged = client.pause_monitor(5).await.unwrap();

    assert_eq!(acknowledged.status, Some(MonitorStatus::Paused));
}

#[tokio::test]
async fn given_existing_monitor_when_deleted_then_lookup_then_delete() {
    // GIVEN: Monitor 7 exists
    let (server, client) = setup().await;
    post(Operation::GetMonitors)
        .respond_with(ok(json!({"monitors": [{"id": 7}]})))
        .expect(1)
        .mount(&server)
        .await;
    post(Operation::DeleteMonitor)
        .and(body_string(format!("{}&id=7", body_prefix())))
        .respond_with(ok(json!({"monitor": {"id": 7}})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Deleting it
    let acknowledged = client.delete_monitor(7).await.unwrap();

    // THEN: The delete was acknowledged
    assert_eq!(acknowledged.id, 7);
}

#[tokio::test]
async fn given_existing_monitor_when_reset_then_reset_sent() {
    let (server, client) = setup().await;
    post(Operation::GetMonitors)
        .respond_with(ok(json!({"monitors": [{"id": "8"}]})))
        .mount(&server)
        .await;
    post(Operation::ResetMonitor)
        .respond_with(ok(json!({"monitor": {"id": 8}})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.reset_monitor(8).await.unwrap().id, 8);
}

/// **VALUE**: Verifies a failed lookup is returned unmodified.
///
/// **BUG THIS CATCHES**: Would catch lookup failures being rewritten as
/// `not_found`, hiding the real cause.
#[tokio::test]
async fn given_failing_lookup_when_deleted_then_lookup_error_returned() {
    let (server, client) = setup().await;
    post(Operation::GetMonitors)
        .respond_with(fail(json!({"type": "internal", "message": "try again"})))
        .mount(&server)
        .await;
    post(Operation::DeleteMonitor)
        .respond_with(ok(json!({"monitor": {"id": 7}})))
        .expect(0)
        .mount(&server)
        .await;

    let error = client.delete_monitor(7).await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::Internal);
    assert_eq!(error.message.as_deref(), Some("try again"));
}

#[tokio::test]
async fn given_valid_monitor_when_created_then_acknowledged() {
    // GIVEN: A keyword monitor built fluently
    let (server, client) = setup().await;
    post(Operation::NewMonitor)
        .and(body_string_contains("type=2"))
        .and(body_string_contains("keyword_value=Welcome"))
        .and(body_string_contains("interval=300"))
        .respond_with(ok(json!({"monitor": {"id": 777810874, "status": 1}})))
        .expect(1)
        .mount(&server)
        .await;
    let monitor = NewMonitorBuilder::default()
        .with_friendly_name("Landing")
        .with_url("https://example.com")
        .with_type(MonitorType::Keyword)
        .with_keyword(KeywordType::Exists, "Welcome")
        .with_interval_secs(300)
        .build()
        .unwrap();

    // WHEN: Creating it
    let acknowledged = client.create_monitor(&monitor).await.unwrap();

    // THEN: The new id comes back
    assert_eq!(acknowledged.id, 777810874);
    assert_eq!(acknowledged.status, Some(MonitorStatus::NotCheckedYet));
}

#[tokio::test]
async fn given_monitor_without_url_when_created_then_rejected_locally() {
    let (server, client) = setup().await;
    post(Operation::NewMonitor)
        .respond_with(ok(json!({"monitor": {"id": 1}})))
        .expect(0)
        .mount(&server)
        .await;

    let error = client
        .create_monitor(&NewMonitor::new("Site", " ", MonitorType::Http))
        .await
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::NoUrl);
    assert!(error.is_client_side());
}

#[tokio::test]
async fn given_duplicate_monitor_when_created_then_remote_error_passes_through() {
    let (server, client) = setup().await;
    post(Operation::NewMonitor)
        .respond_with(fail(json!({
            "type": "already_exists",
            "message": "monitor already exists"
        })))
        .mount(&server)
        .await;

    let error = client
        .create_monitor(&NewMonitor::new("Site", "https://example.com", MonitorType::Http))
        .await
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::AlreadyExists);
}
