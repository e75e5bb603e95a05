// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the search node

/// Semantic version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name reported in startup logs
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "cidr-allowlist",
    "html-text-search",
    "result-tree",
    "static-documents",
];

/// Get version string for logging
pub fn get_version_string() -> String {
    format!("{} v{} ({})", NAME, VERSION, FEATURES.join(", "))
}

/// Version info for the health endpoint
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "name": NAME,
        "version": VERSION,
        "features": FEATURES,
    })
}
