use crate::codec::{ById, EncodeForm, encode};
use crate::gateway::Operation;

use common::RedactedApiKey;
use models::{
    AlertContactAssignment, AlertContactUpdate, DateRange, LogType, MonitorStatus, MonitorType,
    MonitorUpdate, MonitorsRequest, NewMaintenanceWindow, NewMonitor, NewStatusPage, PageParams,
    StartTime, StatusPageMonitors, StatusPagesRequest,
};

use chrono::{TimeZone, Utc};
use url::form_urlencoded;

const KEY: &str = "u123-abcdef";

fn pairs<R: EncodeForm>(request: &R) -> Vec<(String, String)> {
    let body = encode(&RedactedApiKey::new(KEY), request);
    form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}

fn value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn names(pairs: &[(String, String)]) -> Vec<&str> {
    pairs.iter().map(|(key, _)| key.as_str()).collect()
}

/// **VALUE**: Verifies the credential and format lead every body.
///
/// **WHY THIS MATTERS**: The remote rejects requests without `format=json` by
/// answering in XML, which the decoder cannot read.
#[test]
fn given_default_request_when_encoded_then_only_key_and_format() {
    // WHEN: Encoding an unfiltered monitor request
    let pairs = pairs(&MonitorsRequest::all());

    // THEN: Nothing else is on the wire
    assert_eq!(
        pairs,
        vec![
            (String::from("api_key"), String::from(KEY)),
            (String::from("format"), String::from("json")),
        ]
    );
}

/// **VALUE**: Verifies id lists are hyphen-joined in caller order.
///
/// **BUG THIS CATCHES**: Would catch sorting, deduplicating or comma-joining ids.
#[test]
fn given_monitor_ids_when_encoded_then_hyphen_joined_in_order() {
    let pairs = pairs(&MonitorsRequest::for_ids([222, 111, 333]));

    assert_eq!(value(&pairs, "monitors"), Some("222-111-333"));
}

#[test]
fn given_include_flags_when_encoded_then_only_true_flags_present() {
    // GIVEN: Two flags set, the rest left false
    let request = MonitorsRequest {
        logs: true,
        ssl: true,
        ..MonitorsRequest::all()
    };

    // WHEN: Encoding
    let pairs = pairs(&request);

    // THEN: `=1` for set flags, nothing for the others
    assert_eq!(value(&pairs, "logs"), Some("1"));
    assert_eq!(value(&pairs, "ssl"), Some("1"));
    assert_eq!(value(&pairs, "response_times"), None);
    assert_eq!(value(&pairs, "alert_contacts"), None);
    assert!(!pairs.iter().any(|(_, value)| value == "0"));
}

#[test]
fn given_filters_when_encoded_then_codes_and_epochs() {
    // GIVEN: Type, status and log filters plus two custom ranges
    let first = DateRange::new(
        Utc.timestamp_opt(1_000, 0).unwrap(),
        Utc.timestamp_opt(2_000, 0).unwrap(),
    )
    .unwrap();
    let second = DateRange::new(
        Utc.timestamp_opt(3_000, 0).unwrap(),
        Utc.timestamp_opt(4_000, 0).unwrap(),
    )
    .unwrap();
    let request = MonitorsRequest {
        types: vec![MonitorType::Http, MonitorType::Keyword],
        statuses: vec![MonitorStatus::Paused, MonitorStatus::Down],
        log_types: vec![LogType::Down],
        custom_uptime_ratios: vec![7, 30],
        custom_uptime_ranges: vec![first, second],
        logs_start_date: Some(Utc.timestamp_opt(1_500, 0).unwrap()),
        ..MonitorsRequest::all()
    };

    // WHEN: Encoding
    let pairs = pairs(&request);

    // THEN: API conventions apply
    assert_eq!(value(&pairs, "types"), Some("1-2"));
    assert_eq!(value(&pairs, "statuses"), Some("0-9"));
    assert_eq!(value(&pairs, "log_types"), Some("1"));
    assert_eq!(value(&pairs, "custom_uptime_ratios"), Some("7-30"));
    assert_eq!(
        value(&pairs, "custom_uptime_ranges"),
        Some("1000_2000-3000_4000")
    );
    assert_eq!(value(&pairs, "logs_start_date"), Some("1500"));
}

/// **VALUE**: Verifies pagination is only sent when it differs from the defaults.
#[test]
fn given_page_params_when_encoded_then_defaults_omitted() {
    let default_page = pairs(&StatusPagesRequest::default());
    assert_eq!(value(&default_page, "offset"), None);
    assert_eq!(value(&default_page, "limit"), None);

    let second_page = pairs(&StatusPagesRequest {
        page: PageParams::new(50, 50),
        ..StatusPagesRequest::default()
    });
    assert_eq!(value(&second_page, "offset"), Some("50"));
    assert_eq!(value(&second_page, "limit"), None);
}

#[test]
fn given_search_text_when_encoded_then_round_trips_through_form_encoding() {
    let request = MonitorsRequest {
        search: Some(String::from("shop & blog=1")),
        ..MonitorsRequest::all()
    };

    let pairs = pairs(&request);

    assert_eq!(value(&pairs, "search"), Some("shop & blog=1"));
}

/// **VALUE**: Verifies an update that carries no changes encodes only the id.
///
/// **WHY THIS MATTERS**: After diffing, unchanged fields are `None` and must not
/// reach the wire as empty strings, which the remote would apply.
#[test]
fn given_empty_alert_contact_update_when_encoded_then_only_id() {
    let pairs = pairs(&AlertContactUpdate::new(9));

    assert_eq!(names(&pairs), vec!["api_key", "format", "id"]);
    assert_eq!(value(&pairs, "id"), Some("9"));
}

#[test]
fn given_new_monitor_with_contacts_and_headers_when_encoded_then_composite_values() {
    // GIVEN: A monitor with two alert contacts and a header
    let mut monitor = NewMonitor::new("Shop", "https://shop.example.com", MonitorType::Http);
    monitor.alert_contacts = vec![
        AlertContactAssignment::new(1),
        AlertContactAssignment {
            id: 2,
            threshold: 5,
            recurrence: 10,
        },
    ];
    monitor
        .custom_http_headers
        .insert(String::from("X-Token"), String::from("abc"));

    // WHEN: Encoding
    let pairs = pairs(&monitor);

    // THEN: Assignments are `id_threshold_recurrence`, headers are JSON
    assert_eq!(value(&pairs, "type"), Some("1"));
    assert_eq!(value(&pairs, "alert_contacts"), Some("1_0_0-2_5_10"));
    assert_eq!(value(&pairs, "custom_http_headers"), Some(r#"{"X-Token":"abc"}"#));
    assert_eq!(value(&pairs, "mwindows"), None);
    assert_eq!(value(&pairs, "ignore_ssl_errors"), None);
}

/// **VALUE**: Verifies a heartbeat monitor without a URL sends no `url` field.
///
/// **BUG THIS CATCHES**: Would catch the encoder writing `url=` for monitor
/// types that have no URL, which the remote reads as an invalid URL.
#[test]
fn given_heartbeat_monitor_without_url_when_encoded_then_url_omitted() {
    // GIVEN: A heartbeat monitor with a blank URL
    let monitor = NewMonitor::new("Beat", "", MonitorType::Heartbeat);
    assert!(monitor.violation().is_none());

    // WHEN: Encoding
    let pairs = pairs(&monitor);

    // THEN: No url parameter at all
    assert_eq!(
        names(&pairs),
        vec!["api_key", "format", "friendly_name", "type"]
    );
    assert_eq!(value(&pairs, "type"), Some("5"));
}

#[test]
fn given_pause_and_resume_when_encoded_then_status_codes() {
    assert_eq!(value(&pairs(&MonitorUpdate::pause(5)), "status"), Some("0"));
    assert_eq!(value(&pairs(&MonitorUpdate::resume(5)), "status"), Some("1"));
    assert_eq!(value(&pairs(&MonitorUpdate::new(5)), "status"), None);
}

#[test]
fn given_maintenance_windows_when_encoded_then_start_time_by_kind() {
    // GIVEN: A one-off and a weekly window
    let once = NewMaintenanceWindow::once(
        "Migration",
        StartTime::Epoch(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
        60,
    );
    let weekly = NewMaintenanceWindow::weekly(
        "Backups",
        &[1, 3, 5],
        StartTime::time_of_day(2, 30).unwrap(),
        45,
    );

    // WHEN: Encoding both
    let once = pairs(&once);
    let weekly = pairs(&weekly);

    // THEN: Epoch seconds for one-off, HH:mm and a day list for weekly
    assert_eq!(value(&once, "start_time"), Some("1700000000"));
    assert_eq!(value(&once, "value"), None);
    assert_eq!(value(&weekly, "type"), Some("3"));
    assert_eq!(value(&weekly, "start_time"), Some("02:30"));
    assert_eq!(value(&weekly, "value"), Some("1-3-5"));
    assert_eq!(value(&weekly, "duration"), Some("45"));
}

#[test]
fn given_status_page_when_encoded_then_type_and_monitor_scope() {
    let all = pairs(&NewStatusPage::new("Public", StatusPageMonitors::All));
    assert_eq!(value(&all, "type"), Some("1"));
    assert_eq!(value(&all, "monitors"), Some("0"));

    let some = pairs(&NewStatusPage::new(
        "Public",
        StatusPageMonitors::Only(vec![4, 8]),
    ));
    assert_eq!(value(&some, "monitors"), Some("4-8"));

    let none = pairs(&NewStatusPage::new("Public", StatusPageMonitors::Only(vec![])));
    assert_eq!(value(&none, "monitors"), None);
}

#[test]
fn given_by_id_request_when_encoded_then_operation_and_id() {
    let request = ById::new(Operation::ResetMonitor, 77);

    assert_eq!(request.operation(), Operation::ResetMonitor);
    assert_eq!(value(&pairs(&request), "id"), Some("77"));
}
