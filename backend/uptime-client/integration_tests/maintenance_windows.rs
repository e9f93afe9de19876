use crate::helpers::{bodies, body_prefix, ok, post, setup};

use uptime_client::Operation;

use models::{
    ErrorKind, MaintenanceWindowType, MaintenanceWindowUpdate, NewMaintenanceWindow, StartTime,
};

use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::body_string;

#[tokio::test]
async fn given_invalid_windows_when_created_then_rejected_without_request() {
    // GIVEN: A server that must stay idle
    let (server, client) = setup().await;
    post(Operation::NewMaintenanceWindow)
        .respond_with(ok(json!({"mwindow": {"id": 1}})))
        .expect(0)
        .mount(&server)
        .await;
    let at_two = StartTime::time_of_day(2, 0).unwrap();

    // WHEN: Creating windows that break each rule
    let no_name = NewMaintenanceWindow::daily("", at_two.clone(), 30);
    let mut no_days = NewMaintenanceWindow::weekly("Backups", &[], at_two.clone(), 30);
    no_days.value = Some(String::from(" "));
    let once_at_time_of_day = NewMaintenanceWindow::once("Migration", at_two, 30);

    // THEN: Each gets its canned error
    assert_eq!(
        client.create_maintenance_window(&no_name).await.unwrap_err().kind,
        ErrorKind::NoFriendlyName
    );
    assert_eq!(
        client.create_maintenance_window(&no_days).await.unwrap_err().kind,
        ErrorKind::NoValue
    );
    assert_eq!(
        client
            .create_maintenance_window(&once_at_time_of_day)
            .await
            .unwrap_err()
            .kind,
        ErrorKind::IncorrectParameters
    );
}

#[tokio::test]
async fn given_one_off_window_when_created_then_epoch_start_sent() {
    let (server, client) = setup().await;
    post(Operation::NewMaintenanceWindow)
        .and(body_string(format!(
            "{}&friendly_name=Migration&type=1&start_time=1700000000&duration=60",
            body_prefix()
        )))
        .respond_with(ok(json!({"mwindow": {"id": 581, "status": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let window = NewMaintenanceWindow::once(
        "Migration",
        StartTime::Epoch(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
        60,
    );
    let acknowledged = client.create_maintenance_window(&window).await.unwrap();

    assert_eq!(acknowledged.id, 581);
}

#[tokio::test]
async fn given_windows_when_listed_by_ids_then_start_times_typed() {
    let (server, client) = setup().await;
    post(Operation::GetMaintenanceWindows)
        .and(body_string(format!("{}&mwindows=581-582", body_prefix())))
        .respond_with(ok(json!({
            "pagination": {"offset": 0, "limit": 10, "total": 2},
            "mwindows": [
                {"id": 581, "type": 1, "friendly_name": "Migration",
                 "start_time": 1700000000, "duration": 60, "value": "", "status": 1},
                {"id": 582, "type": 3, "friendly_name": "Backups",
                 "start_time": "02:30", "duration": 30, "value": "1-3", "status": 1}
            ]
        })))
        .mount(&server)
        .await;

    let page = client
        .get_maintenance_windows_by_ids(&[581, 582])
        .await
        .unwrap();

    assert_eq!(page.mwindows.len(), 2);
    assert!(matches!(page.mwindows[0].start_time, Some(StartTime::Epoch(_))));
    assert_eq!(
        page.mwindows[1].start_time,
        Some(StartTime::TimeOfDay(String::from("02:30")))
    );
    assert_eq!(
        page.mwindows[1].window_type,
        Some(MaintenanceWindowType::Weekly)
    );
}

#[tokio::test]
async fn given_window_update_when_sent_then_lookup_and_changed_duration_only() {
    let (server, client) = setup().await;
    post(Operation::GetMaintenanceWindows)
        .respond_with(ok(json!({
            "mwindows": [{"id": 582, "type": 2, "friendly_name": "Nightly",
                          "start_time": "02:00", "duration": 30}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    post(Operation::EditMaintenanceWindow)
        .respond_with(ok(json!({"mwindow": {"id": 582}})))
        .expect(1)
        .mount(&server)
        .await;

    let update = MaintenanceWindowUpdate {
        friendly_name: Some(String::from("Nightly")),
        duration: Some(45),
        ..MaintenanceWindowUpdate::new(582)
    };
    client.update_maintenance_window(&update).await.unwrap();

    assert_eq!(
        bodies(&server, Operation::EditMaintenanceWindow).await,
        vec![format!("{}&id=582&duration=45", body_prefix())]
    );
}

#[tokio::test]
async fn given_missing_window_when_deleted_then_not_found() {
    let (server, client) = setup().await;
    post(Operation::GetMaintenanceWindows)
        .respond_with(ok(json!({"mwindows": []})))
        .mount(&server)
        .await;
    post(Operation::DeleteMaintenanceWindow)
        .respond_with(ok(json!({"mwindow": {"id": 1}})))
        .expect(0)
        .mount(&server)
        .await;

    let error = client.delete_maintenance_window(1).await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::NotFound);
}
