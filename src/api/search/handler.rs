// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search page handler

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, info};

use super::request::SearchParams;
use super::response::render_results_page;
use crate::api::assets::{load_asset, DEFAULT_SEARCH_PAGE};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// GET / - Search the corpus
///
/// The caller's address has already been checked by the access middleware.
///
/// # Query
/// - `q`: Search text, matched case-insensitively against document text
///
/// # Response
/// - 200 with the search form when `q` is absent or empty
/// - 200 with the nested result listing
///
/// # Errors
/// - 403 Forbidden: caller outside the allowlist
/// - 404 Not Found: no document matches
/// - 500 Internal Server Error: the corpus could not be scanned
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let Some(query) = params.query() else {
        debug!("No query, serving search form");
        let page = load_asset(state.config.search_page.as_deref(), DEFAULT_SEARCH_PAGE).await?;
        return Ok(Html(page).into_response());
    };

    let results = state.search_service.search(query).await?;
    if results.is_empty() {
        info!("No results for '{}'", query);
        return Err(ApiError::NoResults(query.to_string()));
    }

    info!(
        "Serving {} results for '{}' ({} documents scanned in {}ms)",
        results.outcome.matches.len(),
        query,
        results.outcome.scanned,
        results.outcome.elapsed_ms
    );
    Ok(Html(render_results_page(query, &results)).into_response())
}
