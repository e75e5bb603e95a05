// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search query parameters

use serde::{Deserialize, Serialize};

/// Query string of `GET /`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Search text; absent or empty means no search yet
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchParams {
    /// The query to run, or `None` when the form should be shown
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}
