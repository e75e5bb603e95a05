// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Static route tests: corpus documents, stylesheet and health check

use axum::{
    body::{to_bytes, Body},
    extract::connect_info::MockConnectInfo,
    http::{header, Request, StatusCode},
    Router,
};
use docsearch_node::{create_app, AppConfig, AppState};
use std::fs;
use std::net::SocketAddr;
use tempfile::TempDir;
use tower::util::ServiceExt;

const INSIDE: ([u8; 4], u16) = ([127, 0, 0, 1], 40000);
const OUTSIDE: ([u8; 4], u16) = ([198, 51, 100, 7], 40000);

fn setup_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("docs/sub")).unwrap();
    fs::write(dir.path().join("docs/sub/y.html"), "<p>beta gamma</p>").unwrap();
    dir
}

fn app(corpus: &TempDir, protect_static: bool, caller: ([u8; 4], u16)) -> Router {
    let config = AppConfig {
        ip_ranges: vec!["127.0.0.0/8".to_string()],
        directory: corpus.path().to_path_buf(),
        protect_static,
        ..Default::default()
    };
    create_app(AppState::new(config).unwrap()).layer(MockConnectInfo(SocketAddr::from(caller)))
}

async fn fetch(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_static_document_served() {
    let corpus = setup_corpus();
    let (status, _, body) = fetch(app(&corpus, true, INSIDE), "/static/docs/sub/y.html").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<p>beta gamma</p>");
}

#[tokio::test]
async fn test_static_missing_document() {
    let corpus = setup_corpus();
    let (status, _, _) = fetch(app(&corpus, true, INSIDE), "/static/docs/none.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_protected_static_rejects_outside_caller() {
    let corpus = setup_corpus();
    let (status, _, _) = fetch(app(&corpus, true, OUTSIDE), "/static/docs/sub/y.html").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unprotected_static_open_to_everyone() {
    let corpus = setup_corpus();
    let (status, _, _) = fetch(app(&corpus, false, OUTSIDE), "/static/docs/sub/y.html").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = fetch(app(&corpus, false, OUTSIDE), "/?q=beta").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_stylesheet_served() {
    let corpus = setup_corpus();
    let (status, content_type, body) = fetch(app(&corpus, true, OUTSIDE), "/style.css").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/css"));
    assert!(body.contains("a:hover"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let corpus = setup_corpus();
    let (status, _, body) = fetch(app(&corpus, true, INSIDE), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
