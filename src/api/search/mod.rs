// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search page endpoint
//!
//! Serves `GET /`: the search form when no query is given, otherwise the
//! matching documents as a nested, linked listing.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::search_handler;
pub use request::SearchParams;
pub use response::render_results_page;
