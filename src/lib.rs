// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod access;
pub mod api;
pub mod cli;
pub mod config;
pub mod search;
pub mod utils;
pub mod version;

pub use access::{is_address_allowed, AccessError, AccessGuard};
pub use api::{create_app, start_server, AppState};
pub use config::{AppConfig, ConfigError};
pub use search::{
    extract_text, FileSearchEngine, ResultTree, SearchError, SearchOutcome, SearchService,
};
