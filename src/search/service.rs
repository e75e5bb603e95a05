// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search service orchestration
//!
//! Runs the blocking corpus scan off the async runtime and folds the
//! matches into a [`ResultTree`].

use std::path::PathBuf;
use tracing::{debug, error};

use super::engine::FileSearchEngine;
use super::tree::ResultTree;
use super::types::{SearchError, SearchOutcome};

/// Matches of one query, flat and as a tree
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub outcome: SearchOutcome,
    pub tree: ResultTree,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.outcome.is_empty()
    }
}

/// Entry point used by request handlers
#[derive(Debug, Clone)]
pub struct SearchService {
    engine: FileSearchEngine,
}

impl SearchService {
    /// Create a service over the given corpus root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            engine: FileSearchEngine::new(root),
        }
    }

    /// Scan the corpus and build the result tree.
    ///
    /// Concurrent calls scan independently; the corpus is only read.
    pub async fn search(&self, query: &str) -> Result<SearchResults, SearchError> {
        let engine = self.engine.clone();
        let query = query.to_string();
        debug!("Scanning {} for '{}'", engine.root().display(), query);

        let outcome = tokio::task::spawn_blocking(move || engine.search(&query))
            .await
            .map_err(|e| {
                error!("Search task failed: {}", e);
                SearchError::TaskFailed(e.to_string())
            })??;

        let tree = ResultTree::from_paths(&outcome.matches);
        Ok(SearchResults { outcome, tree })
    }
}
