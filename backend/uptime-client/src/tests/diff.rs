use crate::client::diff::{
    alert_contact_changes, changed, maintenance_window_changes, monitor_changes,
    status_page_changes,
};

use models::{
    AlertContact, AlertContactAssignment, AlertContactUpdate, MaintenanceWindow,
    MaintenanceWindowUpdate, Monitor, MonitorUpdate, StatusPage, StatusPageMonitors,
    StatusPageUpdate,
};

use serde_json::json;

fn monitor(value: serde_json::Value) -> Monitor {
    serde_json::from_value(value).unwrap()
}

#[test]
fn given_equal_values_when_compared_then_dropped() {
    assert_eq!(changed(Some(5), Some(&5)), None);
    assert_eq!(changed(Some(5), Some(&6)), Some(5));
    assert_eq!(changed(Some(5), None), Some(5));
    assert_eq!(changed::<i64>(None, Some(&6)), None);
}

/// **VALUE**: Verifies an update identical to the current contact keeps only the id.
///
/// **WHY THIS MATTERS**: Partial updates must not resend values the remote already has.
#[test]
fn given_identical_alert_contact_update_when_diffed_then_only_id_remains() {
    // GIVEN: The current contact and an update repeating its values
    let current: AlertContact = serde_json::from_value(json!({
        "id": 9, "friendly_name": "Ops", "type": 2, "value": "ops@example.com"
    }))
    .unwrap();
    let update = AlertContactUpdate {
        friendly_name: Some(String::from("Ops")),
        value: Some(String::from("ops@example.com")),
        ..AlertContactUpdate::new(9)
    };

    // WHEN: Diffing
    let changes = alert_contact_changes(&update, &current);

    // THEN: Nothing left to send but the id
    assert_eq!(changes, AlertContactUpdate::new(9));
}

#[test]
fn given_monitor_update_when_diffed_then_only_changed_fields_kept() {
    // GIVEN: A running monitor and an update touching name and interval
    let current = monitor(json!({
        "id": 1, "friendly_name": "Shop", "url": "https://shop.example.com",
        "type": 1, "interval": 300, "status": 2
    }));
    let update = MonitorUpdate {
        friendly_name: Some(String::from("Shop")),
        url: Some(String::from("https://shop.example.com")),
        interval: Some(60),
        ..MonitorUpdate::new(1)
    };

    // WHEN: Diffing
    let changes = monitor_changes(&update, &current);

    // THEN: Only the interval survives
    assert_eq!(
        changes,
        MonitorUpdate {
            interval: Some(60),
            ..MonitorUpdate::new(1)
        }
    );
}

#[test]
fn given_pause_of_paused_monitor_when_diffed_then_status_dropped() {
    let paused = monitor(json!({"id": 1, "status": 0}));
    let running = monitor(json!({"id": 1, "status": 2}));

    assert_eq!(monitor_changes(&MonitorUpdate::pause(1), &paused).paused, None);
    assert_eq!(
        monitor_changes(&MonitorUpdate::pause(1), &running).paused,
        Some(true)
    );
    assert_eq!(
        monitor_changes(&MonitorUpdate::resume(1), &paused).paused,
        Some(false)
    );
}

/// **VALUE**: Verifies alert contact and window assignments compare as sets.
///
/// **BUG THIS CATCHES**: Would catch resending assignments only because the
/// remote listed them in a different order.
#[test]
fn given_reordered_assignments_when_diffed_then_dropped() {
    let current = monitor(json!({
        "id": 1,
        "alert_contacts": [
            {"id": "2", "threshold": 5, "recurrence": 10},
            {"id": "1", "threshold": 0, "recurrence": 0}
        ],
        "mwindows": [{"id": 7}, {"id": 3}]
    }));
    let same = MonitorUpdate {
        alert_contacts: Some(vec![
            AlertContactAssignment::new(1),
            AlertContactAssignment {
                id: 2,
                threshold: 5,
                recurrence: 10,
            },
        ]),
        mwindows: Some(vec![3, 7]),
        ..MonitorUpdate::new(1)
    };
    let different = MonitorUpdate {
        mwindows: Some(vec![3]),
        ..MonitorUpdate::new(1)
    };

    let unchanged = monitor_changes(&same, &current);
    let changed_windows = monitor_changes(&different, &current);

    assert_eq!(unchanged.alert_contacts, None);
    assert_eq!(unchanged.mwindows, None);
    assert_eq!(changed_windows.mwindows, Some(vec![3]));
}

#[test]
fn given_unreported_monitor_fields_when_diffed_then_kept() {
    let current = monitor(json!({"id": 1}));
    let update = MonitorUpdate {
        ignore_ssl_errors: Some(true),
        ..MonitorUpdate::new(1)
    };

    assert_eq!(monitor_changes(&update, &current).ignore_ssl_errors, Some(true));
}

#[test]
fn given_maintenance_window_update_when_diffed_then_duration_only() {
    let current: MaintenanceWindow = serde_json::from_value(json!({
        "id": 5, "type": 2, "friendly_name": "Nightly", "start_time": "02:00", "duration": 30
    }))
    .unwrap();
    let update = MaintenanceWindowUpdate {
        friendly_name: Some(String::from("Nightly")),
        start_time: current.start_time.clone(),
        duration: Some(45),
        ..MaintenanceWindowUpdate::new(5)
    };

    let changes = maintenance_window_changes(&update, &current);

    assert_eq!(
        changes,
        MaintenanceWindowUpdate {
            duration: Some(45),
            ..MaintenanceWindowUpdate::new(5)
        }
    );
}

#[test]
fn given_status_page_update_when_diffed_then_write_only_fields_kept() {
    let current: StatusPage = serde_json::from_value(json!({
        "id": 3, "friendly_name": "Public", "monitors": 0, "sort": 1, "status": 1
    }))
    .unwrap();
    let update = StatusPageUpdate {
        monitors: Some(StatusPageMonitors::All),
        password: Some(String::from("hunter2")),
        ..StatusPageUpdate::new(3)
    };

    let changes = status_page_changes(&update, &current);

    assert_eq!(changes.monitors, None);
    assert_eq!(changes.password.as_deref(), Some("hunter2"));
}
