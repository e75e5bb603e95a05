// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML text extraction
//!
//! Parses a document with a browser-grade parser and returns every text
//! node in document order, with tags and comments dropped.

use scraper::Html;

/// Extract the text content of raw HTML bytes
///
/// Byte sequences that are not valid UTF-8 become U+FFFD and parsing
/// continues, so legacy-encoded pages stay searchable for ASCII queries.
///
/// # Arguments
/// * `bytes` - Raw document content
///
/// # Returns
/// Concatenated text nodes
pub fn extract_text(bytes: &[u8]) -> String {
    extract_text_from_str(&String::from_utf8_lossy(bytes))
}

/// Whether `bytes` needed replacement characters to decode
pub fn is_lossy(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_err()
}

/// Extract the text content of an HTML string
///
/// Text nodes are visited depth-first, pre-order, left to right and joined
/// verbatim. No whitespace normalisation is applied.
pub fn extract_text_from_str(html: &str) -> String {
    let document = Html::parse_document(html);
    let text: String = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .collect();
    text
}
