// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Result page rendering

use crate::search::SearchResults;
use crate::utils::escape_html;

/// Path prefix under which corpus documents are served
pub const STATIC_MOUNT: &str = "static";

/// Render the HTML page listing the matches of `query` as a nested tree
pub fn render_results_page(query: &str, results: &SearchResults) -> String {
    let query = escape_html(query);
    let count = results.outcome.matches.len();
    let noun = if count == 1 { "document" } else { "documents" };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Search results</title>
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <h1>Search results</h1>
  <form action="/" method="get">
    <input type="text" name="q" value="{query}">
    <button type="submit">Search</button>
  </form>
  <p class="summary">{count} {noun} matching &quot;{query}&quot;</p>
  <ul>{items}</ul>
</body>
</html>
"#,
        query = query,
        count = count,
        noun = noun,
        items = results.tree.render_items(STATIC_MOUNT),
    )
}
