use crate::helpers::{bodies, body_prefix, ok, post, setup};

use uptime_client::Operation;

use models::{AlertContactType, AlertContactUpdate, ErrorKind, NewAlertContact};

use serde_json::json;
use wiremock::matchers::body_string;

/// **VALUE**: Verifies SMS contacts are refused without touching the network.
///
/// **WHY THIS MATTERS**: The remote does not allow creating SMS contacts over the
/// API; the client answers for it instead of spending a request.
#[tokio::test]
async fn given_sms_contact_when_created_then_incorrect_parameters_and_no_request() {
    // GIVEN: A server that must receive nothing at all
    let (server, client) = setup().await;
    post(Operation::NewAlertContact)
        .respond_with(ok(json!({"alertcontact": {"id": 1}})))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Creating an SMS contact
    let contact = NewAlertContact::new(AlertContactType::Sms, "+15550100", "On call");
    let error = client.create_alert_contact(&contact).await.unwrap_err();

    // THEN: Refused locally
    assert_eq!(error.kind, ErrorKind::IncorrectParameters);
    assert_eq!(
        error.message.as_deref(),
        Some("newAlertContact: the parameters are incorrect")
    );
    assert!(
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .is_empty()
    );
}

#[tokio::test]
async fn given_blank_fields_when_contact_created_then_canned_errors() {
    let (_server, client) = setup().await;

    let no_name = NewAlertContact::new(AlertContactType::Email, "ops@example.com", "  ");
    let no_value = NewAlertContact::new(AlertContactType::Email, "", "Ops");

    assert_eq!(
        client.create_alert_contact(&no_name).await.unwrap_err().kind,
        ErrorKind::NoFriendlyName
    );
    assert_eq!(
        client.create_alert_contact(&no_value).await.unwrap_err().kind,
        ErrorKind::NoValue
    );
}

#[tokio::test]
async fn given_email_contact_when_created_then_acknowledged() {
    let (server, client) = setup().await;
    post(Operation::NewAlertContact)
        .and(body_string(format!(
            "{}&type=2&value=ops%40example.com&friendly_name=Ops+team",
            body_prefix()
        )))
        .respond_with(ok(json!({"alertcontact": {"id": "4631", "status": 0}})))
        .expect(1)
        .mount(&server)
        .await;

    let contact = NewAlertContact::new(AlertContactType::Email, "ops@example.com", "Ops team");
    let acknowledged = client.create_alert_contact(&contact).await.unwrap();

    assert_eq!(acknowledged.id, 4631);
}

/// **VALUE**: Verifies an update repeating current values encodes only the id.
///
/// **BUG THIS CATCHES**: Would catch the diff step being skipped and unchanged
/// values being resent.
#[tokio::test]
async fn given_identical_update_when_sent_then_body_carries_only_id() {
    // GIVEN: Contact 9 as the remote currently has it
    let (server, client) = setup().await;
    post(Operation::GetAlertContacts)
        .and(body_string(format!("{}&alert_contacts=9", body_prefix())))
        .respond_with(ok(json!({
            "alert_contacts": [{
                "id": "9", "friendly_name": "Ops", "type": 2, "status": 2,
                "value": "ops@example.com"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    post(Operation::EditAlertContact)
        .respond_with(ok(json!({"alert_contact": {"id": 9}})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Updating with the same name and value
    let update = AlertContactUpdate {
        friendly_name: Some(String::from("Ops")),
        value: Some(String::from("ops@example.com")),
        ..AlertContactUpdate::new(9)
    };
    client.update_alert_contact(&update).await.unwrap();

    // THEN: Only the id was sent
    assert_eq!(
        bodies(&server, Operation::EditAlertContact).await,
        vec![format!("{}&id=9", body_prefix())]
    );
}

#[tokio::test]
async fn given_blank_name_update_when_sent_then_rejected_before_lookup() {
    let (server, client) = setup().await;
    post(Operation::GetAlertContacts)
        .respond_with(ok(json!({"alert_contacts": []})))
        .expect(0)
        .mount(&server)
        .await;

    let update = AlertContactUpdate {
        friendly_name: Some(String::new()),
        ..AlertContactUpdate::new(9)
    };
    let error = client.update_alert_contact(&update).await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::NoFriendlyName);
}

#[tokio::test]
async fn given_missing_contact_when_deleted_then_not_found_without_delete() {
    let (server, client) = setup().await;
    post(Operation::GetAlertContacts)
        .respond_with(ok(json!({"alert_contacts": [{"id": 10}]})))
        .mount(&server)
        .await;
    post(Operation::DeleteAlertContact)
        .respond_with(ok(json!({"alert_contact": {"id": 9}})))
        .expect(0)
        .mount(&server)
        .await;

    let error = client.delete_alert_contact(9).await.unwrap_err();

    assert_eq!(error.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn given_contacts_when_listed_then_flat_pagination_decoded() {
    let (server, client) = setup().await;
    post(Operation::GetAlertContacts)
        .and(body_string(body_prefix()))
        .respond_with(ok(json!({
            "offset": 0, "limit": 50, "total": 2,
            "alert_contacts": [
                {"id": "1", "friendly_name": "Ops", "type": 2, "status": 2, "value": "ops@example.com"},
                {"id": "2", "friendly_name": "Hook", "type": 5, "status": 2, "value": "https://hooks.example.com/"}
            ]
        })))
        .mount(&server)
        .await;

    let page = client.get_all_alert_contacts().await.unwrap();

    assert_eq!(page.alert_contacts.len(), 2);
    assert_eq!(
        page.alert_contacts[1].contact_type,
        Some(AlertContactType::WebHook)
    );
    assert_eq!(page.pagination.and_then(|p| p.total), Some(2));
}
