// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Corpus search module
//!
//! Provides full-text search over a directory of HTML documents:
//! - Text extraction with a permissive HTML parser
//! - Case-insensitive substring matching, re-scanning the corpus per query
//! - Folding of matched paths into a tree for nested result listings

pub mod engine;
pub mod extractor;
pub mod service;
pub mod tree;
pub mod types;

// Re-export commonly used types
pub use engine::FileSearchEngine;
pub use extractor::{extract_text, extract_text_from_str, is_lossy};
pub use service::{SearchResults, SearchService};
pub use tree::{NodeId, NodeKind, PathTreeNode, ResultTree};
pub use types::{SearchError, SearchOutcome};
