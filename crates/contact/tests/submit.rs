use serde_json::json;
use vibedoctor_contact::{
    ContactFormValues, Field, INVALID_FIELDS_MESSAGE, Outcome, REJECTED_MESSAGE, SENT_MESSAGE,
    TRANSPORT_FAILED_MESSAGE, submit_contact,
};

mod helpers;

use helpers::{Reply, StubEmailApi, form, valid_form};

#[tokio::test]
async fn test_valid_submission_is_sent() {
    let api = StubEmailApi::ok(json!({"message": "Message sent successfully."}));

    let submission = submit_contact(&api, &valid_form()).await;

    assert_eq!(api.calls(), 1);
    assert_eq!(submission.outcome, Outcome::Accepted);
    assert_eq!(submission.status, 200);
    assert!(submission.result.success);
    assert_eq!(submission.result.message, "Message sent successfully.");
    assert!(submission.result.values.is_none());
    assert!(submission.result.field_errors.is_none());

    let request = api.last_request().unwrap();
    assert_eq!(request.sender_email, "bob@example.com");
    assert_eq!(request.sender_name, None);
    assert_eq!(request.subject, "Hi");
    assert_eq!(request.message, "Hello there");
}

#[tokio::test]
async fn test_invalid_submission_never_reaches_the_api() {
    let api = StubEmailApi::ok(json!({}));

    let submission = submit_contact(
        &api,
        &form(&[
            ("senderEmail", "not-an-email"),
            ("subject", ""),
            ("message", ""),
        ]),
    )
    .await;

    assert_eq!(api.calls(), 0);
    assert_eq!(submission.outcome, Outcome::Rejected);
    assert_eq!(submission.status, 400);
    assert!(!submission.result.success);
    assert_eq!(submission.result.message, INVALID_FIELDS_MESSAGE);

    let errors = submission.result.field_errors.unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors[&Field::SenderEmail],
        "Please enter a valid email address."
    );
    assert_eq!(errors[&Field::Subject], "Subject is required.");
    assert_eq!(errors[&Field::Message], "Message is required.");

    assert_eq!(
        submission.result.values,
        Some(ContactFormValues {
            sender_name: String::new(),
            sender_email: "not-an-email".to_owned(),
            subject: String::new(),
            message: String::new(),
        })
    );
}

#[tokio::test]
async fn test_echoed_values_are_trimmed() {
    let api = StubEmailApi::ok(json!({}));

    let submission = submit_contact(
        &api,
        &form(&[
            ("senderName", "  Bob  "),
            ("senderEmail", " bob@example.com "),
            ("subject", "   "),
            ("message", " Hello "),
        ]),
    )
    .await;

    let values = submission.result.values.unwrap();
    assert_eq!(values.sender_name, "Bob");
    assert_eq!(values.sender_email, "bob@example.com");
    assert_eq!(values.subject, "");
    assert_eq!(values.message, "Hello");
}

#[tokio::test]
async fn test_remote_rejection_uses_upstream_error() {
    let api = StubEmailApi::new(Reply::Status(502, Some(json!({"error": "upstream down"}))));

    let submission = submit_contact(&api, &valid_form()).await;

    assert_eq!(api.calls(), 1);
    assert_eq!(submission.outcome, Outcome::RemoteRejected);
    assert_eq!(submission.status, 502);
    assert!(!submission.result.success);
    assert_eq!(submission.result.message, "upstream down");
    assert!(submission.result.field_errors.is_none());
    assert_eq!(
        submission.result.values.unwrap().sender_email,
        "bob@example.com"
    );
}

#[tokio::test]
async fn test_remote_rejection_prefers_upstream_message() {
    let api = StubEmailApi::new(Reply::Status(
        422,
        Some(json!({"message": "Sender is blocked", "error": "blocked"})),
    ));

    let submission = submit_contact(&api, &valid_form()).await;

    assert_eq!(submission.status, 422);
    assert_eq!(submission.result.message, "Sender is blocked");
}

#[tokio::test]
async fn test_remote_rejection_without_payload_uses_fallback() {
    let api = StubEmailApi::new(Reply::Status(503, None));

    let submission = submit_contact(&api, &valid_form()).await;

    assert_eq!(submission.status, 503);
    assert_eq!(submission.result.message, REJECTED_MESSAGE);
    assert!(submission.result.values.is_some());
}

#[tokio::test]
async fn test_transport_failure() {
    let api = StubEmailApi::new(Reply::Unreachable);

    let submission = submit_contact(&api, &valid_form()).await;

    assert_eq!(api.calls(), 1);
    assert_eq!(submission.outcome, Outcome::TransportFailed);
    assert_eq!(submission.status, 500);
    assert!(!submission.result.success);
    assert_eq!(submission.result.message, TRANSPORT_FAILED_MESSAGE);
    assert!(submission.result.field_errors.is_none());
    assert!(submission.result.values.is_some());
}

#[tokio::test]
async fn test_success_without_payload_uses_fallback() {
    let api = StubEmailApi::new(Reply::Status(200, None));

    let submission = submit_contact(&api, &valid_form()).await;

    assert!(submission.result.success);
    assert_eq!(submission.result.message, SENT_MESSAGE);
    assert!(submission.result.values.is_none());
}

#[tokio::test]
async fn test_sender_name_is_forwarded() {
    let api = StubEmailApi::ok(json!({}));
    let mut input = valid_form();
    input.insert("senderName".to_owned(), " Bob ".to_owned());

    submit_contact(&api, &input).await;

    assert_eq!(api.last_request().unwrap().sender_name.as_deref(), Some("Bob"));
}

#[tokio::test]
async fn test_values_present_only_on_failure() {
    let replies = [
        Reply::Status(200, Some(json!({"message": "ok"}))),
        Reply::Status(400, Some(json!({"error": "bad"}))),
        Reply::Unreachable,
    ];

    for reply in replies {
        let api = StubEmailApi::new(reply);
        let submission = submit_contact(&api, &valid_form()).await;

        assert_eq!(
            submission.result.values.is_some(),
            !submission.result.success
        );
        assert!(submission.result.field_errors.is_none());
    }
}
