// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for corpus search

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Outcome of scanning the corpus for one query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// The query as received
    pub query: String,
    /// Corpus-relative, `/`-separated paths of matching documents, in scan order
    pub matches: Vec<String>,
    /// Number of candidate documents examined
    pub scanned: usize,
    /// Candidates that were not valid UTF-8 and were decoded with replacements
    pub lossy: usize,
    /// Wall time of the scan in milliseconds
    pub elapsed_ms: u64,
}

impl SearchOutcome {
    /// True when no document matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Errors that abort a search request
#[derive(Debug, Error)]
pub enum SearchError {
    /// Query was empty; callers should show the search form instead
    #[error("Empty query")]
    EmptyQuery,

    /// Corpus root is missing or not a directory
    #[error("Corpus root {} is not a directory", .path.display())]
    RootUnavailable {
        /// Configured root
        path: PathBuf,
    },

    /// Directory enumeration failed
    #[error("Failed to traverse corpus: {0}")]
    Traverse(#[from] walkdir::Error),

    /// A candidate document could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Document that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The blocking scan task panicked or was cancelled
    #[error("Search task failed: {0}")]
    TaskFailed(String),
}
