// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::net::IpAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

use crate::access::AccessError;
use crate::search::SearchError;

/// Request-scoped failures and their HTTP mapping
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Forbidden access for {0}")]
    Forbidden(IpAddr),

    #[error("No results found for '{0}'")]
    NoResults(String),

    #[error("Search failed: {0}")]
    SearchFailed(#[from] SearchError),

    #[error("Failed to load {}: {source}", .path.display())]
    AssetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NoResults(_) => StatusCode::NOT_FOUND,
            ApiError::SearchFailed(_)
            | ApiError::AssetUnavailable { .. }
            | ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the caller; internal details stay in the log
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Forbidden(_) => "Forbidden",
            ApiError::NoResults(_) => "No results found",
            ApiError::SearchFailed(_) => "Error searching files",
            ApiError::AssetUnavailable { .. } => "Error loading page",
            ApiError::InternalError(_) => "Internal server error",
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Forbidden { addr } => ApiError::Forbidden(addr),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.public_message(),
        )
            .into_response()
    }
}
