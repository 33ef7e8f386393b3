//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_engine::{App, BackendConfig, VitrineConfig};

/// Start a mock server that simulates the portfolio backend.
pub async fn start_backend_mock() -> MockServer {
    MockServer::start().await
}

/// Build an app wired to the given mock backend.
pub fn app_for(server: &MockServer) -> App {
    let config = VitrineConfig {
        backend: Some(BackendConfig {
            url: Some(server.uri()),
        }),
        ..VitrineConfig::default()
    };
    App::new(Some(&config))
}

/// Build an app pointed at an address nothing listens on.
pub fn app_with_unreachable_backend() -> App {
    let config = VitrineConfig {
        backend: Some(BackendConfig {
            url: Some("http://127.0.0.1:9".to_string()),
        }),
        ..VitrineConfig::default()
    };
    App::new(Some(&config))
}

/// Mount `{ items: [...] }` on GET `/api/projects`.
pub async fn mount_projects(server: &MockServer, items: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": items })),
        )
        .mount(server)
        .await;
}

/// Mount a non-JSON body on GET `/api/projects`.
pub async fn mount_projects_garbage(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(server)
        .await;
}

/// Mount an error status on GET `/api/projects`.
pub async fn mount_projects_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mount `{ ok: <ok> }` on POST `/api/contact`.
pub async fn mount_contact(server: &MockServer, ok: bool) {
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": ok })))
        .mount(server)
        .await;
}

/// Fill the contact form with a valid payload.
pub fn fill_contact_form(app: &mut App) {
    app.contact.form.name.insert_str("Ada");
    app.contact.form.email.insert_str("ada@example.com");
    app.contact.form.message.insert_str("hello from the tests");
}

/// Poll the app until the predicate holds or the deadline passes.
pub async fn wait_for(app: &mut App, mut done: impl FnMut(&App) -> bool) {
    for _ in 0..200 {
        app.process_events();
        if done(app) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached within 2s");
}
