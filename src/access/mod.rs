// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Source-address access control
//!
//! Requests are admitted only when the caller's IP address falls inside at
//! least one configured CIDR range. Ranges are parsed once at startup; a
//! malformed range is a configuration error, not a per-request failure.

pub mod guard;

pub use guard::{is_address_allowed, AccessError, AccessGuard};
