// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search form and stylesheet
//!
//! Both can be replaced by files named in the configuration; otherwise the
//! built-in copies are served.

use std::path::Path;

use super::errors::ApiError;

pub const DEFAULT_SEARCH_PAGE: &str = include_str!("../../assets/search.html");
pub const DEFAULT_STYLESHEET: &str = include_str!("../../assets/style.css");

/// Read a configured override, or fall back to the built-in content
pub async fn load_asset(path: Option<&Path>, builtin: &'static str) -> Result<String, ApiError> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ApiError::AssetUnavailable {
                path: path.to_path_buf(),
                source,
            }),
        None => Ok(builtin.to_string()),
    }
}
