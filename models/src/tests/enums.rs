use crate::{AlertContactType, MaintenanceWindowType, MonitorStatus, MonitorType};

/// **VALUE**: Verifies unknown integer codes survive as `Unrecognized` instead of
/// failing the decode.
///
/// **WHY THIS MATTERS**: The remote adds monitor and contact types over time. A strict
/// enum would make every `getMonitors` call fail the day a new type ships.
#[test]
fn given_unknown_code_when_converted_then_becomes_unrecognized_and_round_trips() {
    let unknown = MonitorType::from(42);

    assert_eq!(unknown, MonitorType::Unrecognized(42));
    assert!(!unknown.is_recognized());
    assert_eq!(unknown.code(), 42);
}

#[test]
fn given_known_codes_when_converted_then_map_to_variants() {
    assert_eq!(MonitorType::from(4), MonitorType::Port);
    assert_eq!(MonitorStatus::from(9), MonitorStatus::Down);
    assert_eq!(AlertContactType::from(1), AlertContactType::Sms);
    assert_eq!(AlertContactType::Slack.code(), 11);
    assert_eq!(i64::from(MonitorStatus::SeemsDown), 8);
}

#[test]
fn given_enum_when_serialized_then_uses_integer_code() {
    assert_eq!(serde_json::to_string(&MonitorType::Keyword).unwrap(), "2");
    let decoded: MonitorStatus = serde_json::from_str("0").unwrap();
    assert_eq!(decoded, MonitorStatus::Paused);
}

#[test]
fn given_window_types_when_checked_then_only_weekly_and_monthly_need_days() {
    assert!(MaintenanceWindowType::Weekly.needs_days());
    assert!(MaintenanceWindowType::Monthly.needs_days());
    assert!(!MaintenanceWindowType::Once.needs_days());
    assert!(!MaintenanceWindowType::Daily.needs_days());
}
