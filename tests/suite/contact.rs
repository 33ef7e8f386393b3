//! Contact submission against a mocked backend: the full
//! `idle -> sending -> {sent, failed}` cycle.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use vitrine_types::SubmitStatus;

use crate::common::{
    app_for, app_with_unreachable_backend, fill_contact_form, mount_contact, start_backend_mock,
    wait_for,
};

#[tokio::test]
async fn accepted_submission_runs_idle_sending_sent() {
    let server = start_backend_mock().await;
    mount_contact(&server, true).await;

    let mut app = app_for(&server);
    fill_contact_form(&mut app);
    assert_eq!(app.contact.status, SubmitStatus::Idle);

    app.submit_contact();
    assert_eq!(app.contact.status, SubmitStatus::Sending);

    wait_for(&mut app, |app| !app.contact.status.in_flight()).await;
    assert_eq!(app.contact.status, SubmitStatus::Sent);
}

#[tokio::test]
async fn submission_posts_the_trimmed_json_payload() {
    let server = start_backend_mock().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hello from the tests"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    fill_contact_form(&mut app);
    // Trailing whitespace is trimmed out of the payload.
    app.contact.form.name.insert_str("  ");

    app.submit_contact();
    wait_for(&mut app, |app| !app.contact.status.in_flight()).await;
    assert_eq!(app.contact.status, SubmitStatus::Sent);
}

#[tokio::test]
async fn rejected_submission_fails() {
    let server = start_backend_mock().await;
    mount_contact(&server, false).await;

    let mut app = app_for(&server);
    fill_contact_form(&mut app);
    app.submit_contact();
    wait_for(&mut app, |app| !app.contact.status.in_flight()).await;
    assert_eq!(app.contact.status, SubmitStatus::Failed);
}

#[tokio::test]
async fn network_failure_fails() {
    let mut app = app_with_unreachable_backend();
    fill_contact_form(&mut app);
    app.submit_contact();
    wait_for(&mut app, |app| !app.contact.status.in_flight()).await;
    assert_eq!(app.contact.status, SubmitStatus::Failed);
}

#[tokio::test]
async fn resubmission_restarts_the_cycle() {
    let server = start_backend_mock().await;
    mount_contact(&server, false).await;

    let mut app = app_for(&server);
    fill_contact_form(&mut app);
    app.submit_contact();
    wait_for(&mut app, |app| !app.contact.status.in_flight()).await;
    assert_eq!(app.contact.status, SubmitStatus::Failed);

    // The backend recovers; a new submission starts over from Sending.
    server.reset().await;
    mount_contact(&server, true).await;

    app.submit_contact();
    assert_eq!(app.contact.status, SubmitStatus::Sending);
    wait_for(&mut app, |app| !app.contact.status.in_flight()).await;
    assert_eq!(app.contact.status, SubmitStatus::Sent);
}

#[tokio::test]
async fn blank_form_is_refused_without_a_request() {
    let server = start_backend_mock().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.submit_contact();
    assert_eq!(app.contact.status, SubmitStatus::Idle);
    let notice = app.view.notice.as_ref().expect("missing-field notice");
    assert_eq!(notice.text, "Name is required");
}
