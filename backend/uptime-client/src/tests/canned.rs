use crate::canned::{self, CannedError};
use crate::gateway::Operation;

use models::ErrorKind;

/// **VALUE**: Verifies canned failures carry their tag and an operation-specific message.
///
/// **WHY THIS MATTERS**: Callers branch on `kind` and show `message`; a rejected
/// create has to say which operation refused it.
///
/// **BUG THIS CATCHES**: Would catch a canned error mapped to the wrong kind or a
/// message missing the `<operation>: ` prefix.
#[test]
fn given_canned_error_when_built_then_message_names_operation() {
    // GIVEN: The no-value failure
    let canned = CannedError::NoValue;

    // WHEN: Building it for alert contact creation
    let error = canned.build(Operation::NewAlertContact);

    // THEN: Kind and message are fixed
    assert_eq!(error.kind, ErrorKind::NoValue);
    assert_eq!(
        error.message.as_deref(),
        Some("newAlertContact: a value is required")
    );
    assert!(error.passed_value.is_none());
}

#[test]
fn given_every_canned_error_when_built_then_kind_round_trips() {
    let all = [
        CannedError::NoFriendlyName,
        CannedError::NoValue,
        CannedError::NoUrl,
        CannedError::IncorrectParameters,
        CannedError::NotFound,
    ];

    for canned in all {
        let error = canned.build(Operation::NewMonitor);
        assert_eq!(CannedError::from_kind(error.kind), Some(canned));
    }
}

/// **VALUE**: Verifies the precondition lookup failure points at the id.
///
/// **BUG THIS CATCHES**: Would catch `not_found` losing the id or the operation name.
#[test]
fn given_missing_entity_when_not_found_built_then_names_id_and_operation() {
    // WHEN: Monitor 42 was not found before an edit
    let error = canned::not_found(Operation::EditMonitor, 42);

    // THEN: Kind, parameter and message identify it
    assert_eq!(error.kind, ErrorKind::NotFound);
    assert_eq!(error.parameter_name.as_deref(), Some("id"));
    let message = error.message.unwrap_or_default();
    assert!(message.starts_with("editMonitor: "));
    assert!(message.contains("42"));
}

#[test]
fn given_remote_kind_when_mapped_then_no_canned_error() {
    assert_eq!(CannedError::from_kind(ErrorKind::InvalidParameter), None);
    assert_eq!(CannedError::from_kind(ErrorKind::System), None);
}
