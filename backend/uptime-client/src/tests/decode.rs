use crate::codec::{decode_entity, decode_page, fields, parse_envelope};
use crate::error::client::ClientError;

use models::{
    AccountDetails, AlertContactRef, AlertContactsPage, ApiError, ErrorKind, MonitorRef,
    MonitorStatus, MonitorsPage,
};

/// **VALUE**: Verifies a `fail` response surfaces the remote error verbatim.
///
/// **WHY THIS MATTERS**: The remote's type, parameter and passed value are what
/// callers need to fix a request. Bad credentials are reported this way.
#[test]
fn given_fail_response_when_parsed_then_remote_error_with_details() {
    // GIVEN: The remote's answer to a bad key
    let body = r#"{"stat":"fail","error":{"type":"invalid_parameter","parameter_name":"api_key","passed_value":"bad-key"}}"#;

    // WHEN: Parsing
    let result = parse_envelope(body);

    // THEN: Remote error with every detail kept
    let error = match result {
        Err(ClientError::Remote { error, .. }) => error,
        other => panic!("expected remote error, got {other:?}"),
    };
    assert_eq!(error.kind, ErrorKind::InvalidParameter);
    assert_eq!(error.parameter_name.as_deref(), Some("api_key"));
    assert_eq!(error.passed_value.as_deref(), Some("bad-key"));
}

#[test]
fn given_fail_with_unknown_type_when_parsed_then_system_kind() {
    let body = r#"{"stat":"fail","error":{"type":"rate_limited","message":"slow down"}}"#;

    let error = ApiError::from(parse_envelope(body).unwrap_err());

    assert_eq!(error.kind, ErrorKind::System);
    assert_eq!(error.message.as_deref(), Some("slow down"));
}

/// **VALUE**: Verifies anything but `ok`/`fail` is a decode failure.
///
/// **BUG THIS CATCHES**: Would catch treating a missing `stat` as success and
/// returning an empty payload.
#[test]
fn given_unknown_or_missing_stat_when_parsed_then_decode_error() {
    for body in [r#"{"stat":"maybe"}"#, r#"{"monitors":[]}"#, "[1,2]"] {
        let result = parse_envelope(body);
        assert!(
            matches!(result, Err(ClientError::Decode { .. })),
            "{body} gave {result:?}"
        );
    }
}

#[test]
fn given_invalid_json_when_parsed_then_json_error_becomes_system() {
    let result = parse_envelope("<html>502</html>");

    assert!(matches!(result, Err(ClientError::Json { .. })));
    assert_eq!(ApiError::from(result.unwrap_err()).kind, ErrorKind::System);
}

#[test]
fn given_ok_monitors_page_when_decoded_then_order_and_pagination_kept() {
    let body = r#"{"stat":"ok","pagination":{"offset":0,"limit":50,"total":2},
        "monitors":[{"id":222,"status":2},{"id":"111","status":"0"}]}"#;

    let page: MonitorsPage = decode_page(body).unwrap();

    let ids: Vec<i64> = page.monitors.iter().map(|monitor| monitor.id).collect();
    assert_eq!(ids, vec![222, 111]);
    assert_eq!(page.pagination.and_then(|p| p.total), Some(2));
    assert!(page.monitors[1].is_paused());
}

#[test]
fn given_ok_entity_when_decoded_then_named_field_used() {
    let body = r#"{"stat":"ok","monitor":{"id":777810874,"status":1}}"#;

    let monitor: MonitorRef = decode_entity(body, fields::MONITOR).unwrap();

    assert_eq!(monitor.id, 777810874);
    assert_eq!(monitor.status, Some(MonitorStatus::NotCheckedYet));
}

/// **VALUE**: Verifies both spellings the remote uses for alert contact acks decode.
#[test]
fn given_alert_contact_ack_spellings_when_decoded_then_both_accepted() {
    let created = r#"{"stat":"ok","alertcontact":{"id":"4631","status":0}}"#;
    let edited = r#"{"stat":"ok","alert_contact":{"id":4631}}"#;

    let created: AlertContactRef = decode_entity(created, fields::ALERT_CONTACT).unwrap();
    let edited: AlertContactRef = decode_entity(edited, fields::ALERT_CONTACT).unwrap();

    assert_eq!(created.id, 4631);
    assert_eq!(edited.id, 4631);
    assert_eq!(edited.status, None);
}

#[test]
fn given_ok_without_entity_when_decoded_then_decode_error() {
    let result: Result<AccountDetails, _> = decode_entity(r#"{"stat":"ok"}"#, fields::ACCOUNT);

    assert!(matches!(result, Err(ClientError::Decode { .. })));
}

#[test]
fn given_account_payload_when_decoded_then_counters_typed() {
    let body = r#"{"stat":"ok","account":{"email":"ops@example.com","user_id":1234,
        "firstname":"Ops","monitor_limit":50,"monitor_interval":1,
        "up_monitors":"3","down_monitors":0,"paused_monitors":"","total_monitors_count":5}}"#;

    let account: AccountDetails = decode_entity(body, fields::ACCOUNT).unwrap();

    assert_eq!(account.email.as_deref(), Some("ops@example.com"));
    assert_eq!(account.first_name.as_deref(), Some("Ops"));
    assert_eq!(account.up_monitors, Some(3));
    assert_eq!(account.paused_monitors, None);
    assert_eq!(account.sms_credits, None);
}

#[test]
fn given_alert_contacts_with_flat_pagination_when_decoded_then_pagination_filled() {
    let body = r#"{"stat":"ok","offset":0,"limit":50,"total":1,
        "alert_contacts":[{"id":"0993765","friendly_name":"Ops","type":2,"status":2,"value":"ops@example.com"}]}"#;

    let page: AlertContactsPage = decode_page(body).unwrap();

    assert_eq!(page.alert_contacts.len(), 1);
    assert_eq!(page.alert_contacts[0].id, 993765);
    assert_eq!(page.pagination.and_then(|p| p.total), Some(1));
}
