//! Feed loading against a mocked backend: the full
//! `loading -> {ready, failed}` cycle through `App::start` and
//! `App::process_events`.

use vitrine_types::FeedPhase;

use crate::common::{
    app_for, app_with_unreachable_backend, mount_projects, mount_projects_garbage,
    mount_projects_status, start_backend_mock, wait_for,
};

#[tokio::test]
async fn well_formed_feed_reaches_ready_in_backend_order() {
    let server = start_backend_mock().await;
    mount_projects(
        &server,
        serde_json::json!([
            {"_id": "1", "title": "First", "tags": ["a", "b", "c", "d"]},
            {"_id": "2", "title": "Second", "subtitle": "with subtitle"},
            {"_id": "3", "title": "Third", "demo_url": "https://example.com/3"}
        ]),
    )
    .await;

    let mut app = app_for(&server);
    assert!(app.feed.phase.is_loading());
    app.start();
    wait_for(&mut app, |app| !app.feed.phase.is_loading()).await;

    let titles: Vec<&str> = app
        .feed
        .phase
        .projects()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    // Full tag list survives in the model even though only 3 are displayed.
    assert_eq!(app.feed.phase.projects()[0].tags.len(), 4);
}

#[tokio::test]
async fn empty_items_is_ready_not_failed() {
    let server = start_backend_mock().await;
    mount_projects(&server, serde_json::json!([])).await;

    let mut app = app_for(&server);
    app.start();
    wait_for(&mut app, |app| !app.feed.phase.is_loading()).await;

    assert_eq!(app.feed.phase, FeedPhase::Ready(Vec::new()));
    assert!(app.selected_project().is_none());
}

#[tokio::test]
async fn malformed_body_fails_with_empty_gallery() {
    let server = start_backend_mock().await;
    mount_projects_garbage(&server).await;

    let mut app = app_for(&server);
    app.start();
    wait_for(&mut app, |app| !app.feed.phase.is_loading()).await;

    assert!(app.feed.phase.is_failed());
    assert!(app.feed.phase.projects().is_empty());
}

#[tokio::test]
async fn error_status_fails() {
    let server = start_backend_mock().await;
    mount_projects_status(&server, 500).await;

    let mut app = app_for(&server);
    app.start();
    wait_for(&mut app, |app| !app.feed.phase.is_loading()).await;

    assert!(app.feed.phase.is_failed());
}

#[tokio::test]
async fn unreachable_backend_fails() {
    let mut app = app_with_unreachable_backend();
    app.start();
    wait_for(&mut app, |app| !app.feed.phase.is_loading()).await;

    assert!(app.feed.phase.is_failed());
}
