/*
[INPUT]:  Request DTOs and decoded reply mappings
[OUTPUT]: Test results for payload building, validation and typed views
[POS]:    Integration tests - public type surface
[UPDATE]: When request or response types change
*/

use listmonk_adapter::{
    ListResponse, ListRequest, RequestDto, SubscriberRequest, SubscriberResponse,
    SubscriberStatus, TransactionalRequest,
};
use rstest::rstest;
use serde_json::{Map, json};

#[test]
fn test_subscriber_payload_includes_only_set_fields() {
    let request = SubscriberRequest::new("jo@example.com")
        .name("Jo")
        .status(SubscriberStatus::Disabled)
        .lists([3, 4]);

    assert_eq!(
        serde_json::to_value(request.to_payload()).unwrap(),
        json!({ "email": "jo@example.com", "name": "Jo", "status": "disabled", "lists": [3, 4] })
    );
}

#[test]
fn test_subscriber_payload_keeps_attribs() {
    let mut attribs = Map::new();
    attribs.insert("plan".to_string(), json!("pro"));
    let payload = SubscriberRequest::new("jo@example.com")
        .name("Jo")
        .lists([1])
        .attribs(attribs)
        .to_payload();

    assert_eq!(payload["attribs"], json!({ "plan": "pro" }));
    assert!(!payload.contains_key("preconfirm_subscriptions"));
}

#[test]
fn test_valid_subscriber_passes() {
    let request = SubscriberRequest::new("jo@example.com").name("Jo").lists([1]);
    assert!(request.validate().is_ok());
}

#[rstest]
#[case(SubscriberRequest::new("").name("Jo").lists([1]), "email")]
#[case(SubscriberRequest::new("jo@").name("Jo").lists([1]), "email")]
#[case(SubscriberRequest::new("jo@example.com").lists([1]), "name")]
#[case(SubscriberRequest::new("jo@example.com").name("Jo"), "lists")]
fn test_invalid_subscriber_reports_field(#[case] request: SubscriberRequest, #[case] field: &str) {
    let errors = request.validate().unwrap_err();
    assert_eq!(errors.fields(), vec![field]);
    assert!(!errors.messages(field).is_empty());
}

#[test]
fn test_list_name_length_is_bounded() {
    let errors = ListRequest::new("x".repeat(101)).validate().unwrap_err();
    assert!(errors.has("name"));
    assert!(ListRequest::new("x".repeat(100)).validate().is_ok());
}

#[test]
fn test_transactional_extra_overrides_body_keys() {
    let payload = TransactionalRequest::new("jo@example.com", "Hi", "Body")
        .extra("messenger", "postback")
        .extra("headers", json!([{ "X-Tag": "welcome" }]))
        .to_payload();

    assert_eq!(payload["messenger"], "postback");
    assert_eq!(payload["headers"][0]["X-Tag"], "welcome");
    assert_eq!(payload["template_id"], 0);
}

#[test]
fn test_subscriber_view_reads_fields_verbatim() {
    let data = json!({
        "id": 9,
        "uuid": "6f0c2d0e-3a4b-4b8e-9f4d-2f1d1c0b9a88",
        "email": "jo@example.com",
        "name": "Jo",
        "status": "blocklisted",
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-02T10:00:00Z"
    });
    let subscriber = SubscriberResponse::from_value(data);

    assert_eq!(subscriber.id().unwrap(), 9);
    assert_eq!(
        subscriber.uuid().unwrap().to_string(),
        "6f0c2d0e-3a4b-4b8e-9f4d-2f1d1c0b9a88"
    );
    assert_eq!(subscriber.status().unwrap(), "blocklisted");
    assert_eq!(subscriber.created_at().unwrap(), "2024-03-01T10:00:00Z");
    assert!(subscriber.lists().is_empty());
    assert!(subscriber.attributes().is_empty());
}

#[test]
fn test_required_accessor_on_missing_key_is_error() {
    let subscriber = SubscriberResponse::from_value(json!({ "id": 1 }));
    let err = subscriber.email().unwrap_err();
    assert!(err.to_string().contains("email"));
}

#[test]
fn test_list_view_defaults() {
    let list = ListResponse::from_value(json!({ "id": 2, "name": "News", "tags": " a , b , c " }));

    assert_eq!(list.subscriber_count(), 0);
    assert_eq!(list.optin(), "single");
    assert_eq!(list.tags(), vec!["a", "b", "c"]);
}
