// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Small helpers for building HTML output

use url::Url;

// Only the path of this URL is ever emitted.
const LINK_BASE: &str = "http://localhost/";

/// Escape text for use in HTML element content or quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Absolute link path `/<mount>/<segments...>` with every segment percent-encoded
pub fn static_link<S: AsRef<str>>(mount: &str, segments: &[S]) -> String {
    let Ok(mut url) = Url::parse(LINK_BASE) else {
        return fallback_link(mount, segments);
    };
    match url.path_segments_mut() {
        Ok(mut path) => {
            path.clear().push(mount).extend(segments.iter().map(|s| s.as_ref()));
        }
        Err(()) => return fallback_link(mount, segments),
    }
    url.path().to_string()
}

fn fallback_link<S: AsRef<str>>(mount: &str, segments: &[S]) -> String {
    let joined: Vec<&str> = segments.iter().map(|s| s.as_ref()).collect();
    format!("/{}/{}", mount, joined.join("/"))
}
