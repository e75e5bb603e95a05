// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Corpus scanning
//!
//! Every query walks the corpus root, extracts the text of each `*.html`
//! document and keeps the ones containing the query, ignoring case.
//! Nothing is cached between queries.
//!
//! Failure policy: an enumeration or read error aborts the whole query.
//! Documents that are not valid UTF-8 are decoded with replacement
//! characters and still searched.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::extractor::{extract_text, is_lossy};
use super::types::{SearchError, SearchOutcome};

/// File name suffix selecting candidate documents (the `*.html` glob)
pub const CANDIDATE_SUFFIX: &str = ".html";

/// Case-insensitive substring search over a directory of HTML documents
#[derive(Debug, Clone)]
pub struct FileSearchEngine {
    root: PathBuf,
}

impl FileSearchEngine {
    /// Create an engine rooted at the corpus directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Corpus root this engine scans
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List candidate documents beneath the root, sorted by name per directory
    ///
    /// Symlinked files are included. Symlinked directories are not descended.
    pub fn candidates(&self) -> Result<Vec<PathBuf>, SearchError> {
        if !self.root.is_dir() {
            return Err(SearchError::RootUnavailable {
                path: self.root.clone(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if entry.path().is_file() && is_candidate(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Scan the corpus for `query`
    ///
    /// # Arguments
    /// * `query` - Substring to look for; must not be empty
    ///
    /// # Returns
    /// Matching corpus-relative paths in enumeration order, with scan statistics
    pub fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let start = Instant::now();
        let needle = query.to_lowercase();
        let candidates = self.candidates()?;

        let mut matches = Vec::new();
        let mut lossy = 0;
        for path in &candidates {
            let bytes = fs::read(path).map_err(|source| SearchError::Read {
                path: path.clone(),
                source,
            })?;

            if is_lossy(&bytes) {
                warn!("{} is not valid UTF-8, decoding with replacements", path.display());
                lossy += 1;
            }
            let text = extract_text(&bytes);

            if text.to_lowercase().contains(&needle) {
                debug!("Match in {}", path.display());
                matches.push(self.relative_path(path));
            }
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            "Search complete: {} of {} documents match '{}' in {}ms ({} not UTF-8)",
            matches.len(),
            candidates.len(),
            query,
            elapsed_ms,
            lossy
        );

        Ok(SearchOutcome {
            query: query.to_string(),
            matches,
            scanned: candidates.len(),
            lossy,
            elapsed_ms,
        })
    }

    /// Corpus-relative path of `path` with `/` separators
    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Whether a file name matches the `*.html` glob
pub fn is_candidate(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(CANDIDATE_SUFFIX))
        .unwrap_or(false)
}
