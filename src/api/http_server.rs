// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use super::assets::{load_asset, DEFAULT_STYLESHEET};
use super::errors::ApiError;
use super::search::{response::STATIC_MOUNT, search_handler};
use crate::access::AccessGuard;
use crate::config::{AppConfig, ConfigError};
use crate::search::SearchService;

/// Shared, read-only request context
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub guard: Arc<AccessGuard>,
    pub search_service: Arc<SearchService>,
}

impl AppState {
    /// Build the state from a configuration, parsing the allowlist
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let guard = config.access_guard()?;
        let search_service = SearchService::new(config.directory.clone());
        Ok(Self {
            config: Arc::new(config),
            guard: Arc::new(guard),
            search_service: Arc::new(search_service),
        })
    }
}

/// Build the router
///
/// Search (and `/static/` when `protect_static` is set) sits behind the
/// allowlist; the stylesheet and health check are open.
pub fn create_app(state: AppState) -> Router {
    let static_path = format!("/{}", STATIC_MOUNT);
    let static_files = ServeDir::new(&state.config.directory);

    let mut guarded = Router::new().route("/", get(search_handler));
    let mut open = Router::new()
        .route("/style.css", get(style_handler))
        .route("/health", get(health_handler));

    if state.config.protect_static {
        guarded = guarded.nest_service(&static_path, static_files);
    } else {
        open = open.nest_service(&static_path, static_files);
    }

    let guarded = guarded.route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_allowed_source,
    ));

    Router::new()
        .merge(guarded)
        .merge(open)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let directory = config.directory.clone();
    let state = AppState::new(config)?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Search server listening on {}, serving {}",
        listener.local_addr()?,
        directory.display()
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Search server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

async fn require_allowed_source(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    match state.guard.check(&addr.ip()) {
        Ok(()) => next.run(request).await,
        Err(e) => ApiError::from(e).into_response(),
    }
}

async fn style_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let css = load_asset(state.config.stylesheet.as_deref(), DEFAULT_STYLESHEET).await?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::version::get_version_info(),
    }))
}
