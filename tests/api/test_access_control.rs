// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Access control tests
//!
//! Callers outside every configured range get 403 regardless of query,
//! before any scanning happens.

use axum::{
    body::{to_bytes, Body},
    extract::connect_info::MockConnectInfo,
    http::{Request, StatusCode},
    Router,
};
use docsearch_node::{create_app, AppConfig, AppState};
use std::fs;
use std::net::SocketAddr;
use tempfile::TempDir;
use tower::util::ServiceExt;

fn setup_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.html"), "<p>beta</p>").unwrap();
    dir
}

fn app_for(corpus: &TempDir, ranges: &[&str], caller: SocketAddr) -> Router {
    let config = AppConfig {
        ip_ranges: ranges.iter().map(|r| r.to_string()).collect(),
        directory: corpus.path().to_path_buf(),
        ..Default::default()
    };
    create_app(AppState::new(config).unwrap()).layer(MockConnectInfo(caller))
}

async fn status_and_body(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_outside_caller_forbidden_with_query() {
    let corpus = setup_corpus();
    let caller = SocketAddr::from(([203, 0, 113, 9], 40000));
    let app = app_for(&corpus, &["10.0.0.0/8"], caller);

    let (status, body) = status_and_body(app, "/?q=beta").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, "Forbidden");
}

#[tokio::test]
async fn test_outside_caller_forbidden_without_query() {
    let corpus = setup_corpus();
    let caller = SocketAddr::from(([203, 0, 113, 9], 40000));
    let app = app_for(&corpus, &["10.0.0.0/8"], caller);

    let (status, _) = status_and_body(app, "/").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_forbidden_even_when_corpus_broken() {
    let corpus = setup_corpus();
    let caller = SocketAddr::from(([203, 0, 113, 9], 40000));
    let config = AppConfig {
        ip_ranges: vec!["10.0.0.0/8".to_string()],
        directory: corpus.path().join("missing"),
        ..Default::default()
    };
    let app = create_app(AppState::new(config).unwrap()).layer(MockConnectInfo(caller));

    let (status, _) = status_and_body(app, "/?q=beta").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_empty_allowlist_rejects_everyone() {
    let corpus = setup_corpus();
    let caller = SocketAddr::from(([127, 0, 0, 1], 40000));
    let app = app_for(&corpus, &[], caller);

    let (status, _) = status_and_body(app, "/?q=beta").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_second_range_admits_caller() {
    let corpus = setup_corpus();
    let caller = SocketAddr::from(([192, 168, 5, 20], 40000));
    let app = app_for(&corpus, &["10.0.0.0/8", "192.168.0.0/16"], caller);

    let (status, _) = status_and_body(app, "/?q=beta").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_ipv6_caller() {
    let corpus = setup_corpus();
    let caller: SocketAddr = "[::1]:40000".parse().unwrap();

    let (status, _) = status_and_body(app_for(&corpus, &["::1/128"], caller), "/?q=beta").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        status_and_body(app_for(&corpus, &["127.0.0.0/8"], caller), "/?q=beta").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_mapped_ipv4_caller_matches_ipv4_range() {
    let corpus = setup_corpus();
    let caller: SocketAddr = "[::ffff:127.0.0.1]:40000".parse().unwrap();
    let app = app_for(&corpus, &["127.0.0.0/8"], caller);

    let (status, _) = status_and_body(app, "/?q=beta").await;
    assert_eq!(status, StatusCode::OK);
}

#[test]
fn test_malformed_range_rejected_at_startup() {
    let corpus = setup_corpus();
    let config = AppConfig {
        ip_ranges: vec!["10.0.0.0/8".to_string(), "bogus".to_string()],
        directory: corpus.path().to_path_buf(),
        ..Default::default()
    };
    assert!(AppState::new(config).is_err());
}
