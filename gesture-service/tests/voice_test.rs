mod common;

use common::{FailingStore, TestApp};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn create_voice_command_defaults_language() {
    let (app, store) = TestApp::spawn().await;

    let response = app
        .post_json("/voices", json!({"phrase": "open notes", "intent": "open_notes"}))
        .await;
    assert_eq!(response.status(), 201);
    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created["ok"], true);
    assert_eq!(store.count("voicecommand").await, 1);

    let listed = app.get_json("/voices").await;
    let command = &listed[0];
    assert_eq!(command["id"], created["id"]);
    assert_eq!(command["phrase"], "open notes");
    assert_eq!(command["language"], "en");
    assert_eq!(command["app"], serde_json::Value::Null);
    assert_eq!(command["context"], json!({}));
}

#[tokio::test]
async fn context_is_opaque() {
    let (app, _store) = TestApp::spawn().await;
    let context = json!({"room": "office", "volume": 3, "tags": ["quiet"]});

    app.post_json(
        "/voices",
        json!({"phrase": "lights off", "intent": "lights_off", "language": "de", "context": context}),
    )
    .await;

    let listed = app.get_json("/voices").await;
    assert_eq!(listed[0]["context"], context);
    assert_eq!(listed[0]["language"], "de");
}

#[tokio::test]
async fn empty_phrase_is_rejected() {
    let (app, store) = TestApp::spawn().await;

    let response = app
        .post_json("/voices", json!({"phrase": "", "intent": "open_notes"}))
        .await;

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["fields"]["phrase"].is_array());
    assert_eq!(store.count("voicecommand").await, 0);
}

#[tokio::test]
async fn voices_and_gestures_are_separate_collections() {
    let (app, _store) = TestApp::spawn().await;

    app.post_json("/gestures", json!({"name": "Wave", "intent": "mute"}))
        .await;

    assert_eq!(app.get_json("/voices").await, json!([]));
}

#[tokio::test]
async fn list_limit_applies() {
    let (app, _store) = TestApp::spawn().await;
    for i in 0..4 {
        app.post_json(
            "/voices",
            json!({"phrase": format!("phrase {}", i), "intent": "noop"}),
        )
        .await;
    }

    let listed = app.get_json("/voices?limit=2").await;
    let phrases: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["phrase"].as_str().unwrap())
        .collect();
    assert_eq!(phrases, vec!["phrase 3", "phrase 2"]);
}

#[tokio::test]
async fn storage_failure_surfaces_as_server_error() {
    let app = TestApp::spawn_with(Arc::new(FailingStore::default())).await;

    let response = app
        .post_json("/voices", json!({"phrase": "open notes", "intent": "open_notes"}))
        .await;
    assert_eq!(response.status(), 500);

    let response = app.get("/voices?limit=5").await;
    assert_eq!(response.status(), 500);
}
