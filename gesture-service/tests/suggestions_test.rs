mod common;

use common::{FailingStore, TestApp};
use serde_json::json;
use std::sync::Arc;

fn fallback() -> serde_json::Value {
    json!([
        {"title": "Wave to silence notifications", "category": "Focus"},
        {"title": "Pinch to zoom in any app", "category": "Navigation"},
        {"title": "Say \"open notes\" to start typing", "category": "Voice"}
    ])
}

#[tokio::test]
async fn empty_store_returns_static_fallback() {
    let (app, _store) = TestApp::spawn().await;

    let response = app.get("/suggestions").await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["suggestions"], fallback());
}

#[tokio::test]
async fn storage_failure_still_returns_fallback() {
    let store = Arc::new(FailingStore::default());
    let app = TestApp::spawn_with(store.clone()).await;

    let response = app.get("/suggestions").await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["suggestions"], fallback());
    assert!(store.calls() >= 1);
}

#[tokio::test]
async fn recent_records_drive_suggestions() {
    let (app, _store) = TestApp::spawn().await;

    app.post_json(
        "/gestures",
        json!({"name": "Wave", "intent": "mute", "app": "Zoom"}),
    )
    .await;
    app.post_json("/voices", json!({"phrase": "open notes", "intent": "open_notes"}))
        .await;

    let body = app.get_json("/suggestions").await;
    assert_eq!(
        body["suggestions"],
        json!([
            {"title": "Use 'Wave' to trigger mute", "category": "Zoom"},
            {"title": "Say 'open notes' to open_notes", "category": "Custom"}
        ])
    );
}

#[tokio::test]
async fn many_records_yield_exactly_six_dynamic_items() {
    let (app, _store) = TestApp::spawn().await;

    for i in 0..4 {
        app.post_json(
            "/gestures",
            json!({"name": format!("g{}", i), "intent": "act"}),
        )
        .await;
        app.post_json(
            "/voices",
            json!({"phrase": format!("v{}", i), "intent": "act"}),
        )
        .await;
    }

    let body = app.get_json("/suggestions").await;
    let titles: Vec<&str> = body["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();

    assert_eq!(
        titles,
        vec![
            "Use 'g3' to trigger act",
            "Use 'g2' to trigger act",
            "Use 'g1' to trigger act",
            "Say 'v3' to act",
            "Say 'v2' to act",
            "Say 'v1' to act",
        ]
    );
}
