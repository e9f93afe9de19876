use crate::helpers::{body_prefix, ok, post, setup};

use uptime_client::Operation;

use models::{ErrorKind, NewStatusPage, StatusPageMonitors, StatusPageSort, StatusPageUpdate};

use serde_json::json;
use wiremock::matchers::{body_string, body_string_contains};

#[tokio::test]
async fn given_blank_name_when_status_page_created_then_rejected_locally() {
    let (server, client) = setup().await;
    post(Operation::NewStatusPage)
        .respond_with(ok(json!({"psp": {"id": 1}})))
        .expect(0)
        .mount(&server)
        .await;

    let error = client
        .create_status_page(&NewStatusPage::new(" ", StatusPageMonitors::All))
        .await
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::NoFriendlyName);
}

/// **VALUE**: Verifies an empty monitor selection never reaches the remote.
///
/// **BUG THIS CATCHES**: Would catch `newPSP` being sent without its required
/// `monitors` parameter when the selection list is empty.
#[tokio::test]
async fn given_empty_monitor_selection_when_status_page_created_then_rejected_locally() {
    // GIVEN: A mock that must never be hit
    let (server, client) = setup().await;
    post(Operation::NewStatusPage)
        .respond_with(ok(json!({"psp": {"id": 1}})))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Creating a page that selects no monitors
    let error = client
        .create_status_page(&NewStatusPage::new("Public", StatusPageMonitors::Only(vec![])))
        .await
        .unwrap_err();

    // THEN: Canned incorrect-parameters error naming the operation
    assert_eq!(error.kind, ErrorKind::IncorrectParameters);
    assert!(
        error.message.as_deref().is_some_and(|message| message.starts_with("newPSP:")),
        "{:?}",
        error.message
    );
}

#[tokio::test]
async fn given_status_page_for_all_monitors_when_created_then_type_and_zero_sent() {
    let (server, client) = setup().await;
    post(Operation::NewStatusPage)
        .and(body_string(format!(
            "{}&type=1&friendly_name=Public&monitors=0",
            body_prefix()
        )))
        .respond_with(ok(json!({"psp": {"id": 2345, "status": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let acknowledged = client
        .create_status_page(&NewStatusPage::new("Public", StatusPageMonitors::All))
        .await
        .unwrap();

    assert_eq!(acknowledged.id, 2345);
}

#[tokio::test]
async fn given_status_pages_when_listed_then_monitor_scope_decoded() {
    let (server, client) = setup().await;
    post(Operation::GetStatusPages)
        .respond_with(ok(json!({
            "pagination": {"offset": 0, "limit": 50, "total": 2},
            "psps": [
                {"id": 1, "friendly_name": "All", "monitors": 0, "sort": 1, "status": 1,
                 "standard_url": "https://stats.uptimerobot.com/abc", "custom_url": ""},
                {"id": 2, "friendly_name": "Some", "monitors": [15830, 32696], "sort": 3, "status": 0}
            ]
        })))
        .mount(&server)
        .await;

    let page = client.get_all_status_pages().await.unwrap();

    assert_eq!(page.psps[0].monitors, Some(StatusPageMonitors::All));
    assert_eq!(
        page.psps[1].monitors,
        Some(StatusPageMonitors::Only(vec![15830, 32696]))
    );
    assert_eq!(page.psps[1].sort, Some(StatusPageSort::UpDownPaused));
}

#[tokio::test]
async fn given_status_page_update_when_sent_then_changed_sort_only() {
    let (server, client) = setup().await;
    post(Operation::GetStatusPages)
        .and(body_string_contains("psps=2"))
        .respond_with(ok(json!({
            "psps": [{"id": 2, "friendly_name": "Some", "monitors": 0, "sort": 1, "status": 1}]
        })))
        .mount(&server)
        .await;
    post(Operation::EditStatusPage)
        .and(body_string(format!("{}&id=2&sort=2", body_prefix())))
        .respond_with(ok(json!({"psp": {"id": 2}})))
        .expect(1)
        .mount(&server)
        .await;

    let update = StatusPageUpdate {
        friendly_name: Some(String::from("Some")),
        sort: Some(StatusPageSort::FriendlyNameDesc),
        ..StatusPageUpdate::new(2)
    };

    assert_eq!(client.update_status_page(&update).await.unwrap().id, 2);
}

#[tokio::test]
async fn given_existing_status_page_when_deleted_then_delete_sent() {
    let (server, client) = setup().await;
    post(Operation::GetStatusPages)
        .respond_with(ok(json!({"psps": [{"id": 3}]})))
        .mount(&server)
        .await;
    post(Operation::DeleteStatusPage)
        .and(body_string(format!("{}&id=3", body_prefix())))
        .respond_with(ok(json!({"psp": {"id": 3}})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.delete_status_page(3).await.unwrap().id, 3);
}
