// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! CIDR allowlist evaluation

use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced by the access guard
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// A configured range is not valid CIDR notation
    #[error("Invalid address range '{range}': {reason}")]
    InvalidRange {
        /// The offending range as written in the configuration
        range: String,
        /// Parser message
        reason: String,
    },

    /// The caller is outside every allowed range
    #[error("Forbidden access for {addr}")]
    Forbidden {
        /// Source address of the rejected caller
        addr: IpAddr,
    },
}

/// Allowlist of networks built from validated configuration
#[derive(Debug, Clone, Default)]
pub struct AccessGuard {
    networks: Vec<IpNetwork>,
}

impl AccessGuard {
    /// Parse every range, failing on the first malformed one
    pub fn new<S: AsRef<str>>(ranges: &[S]) -> Result<Self, AccessError> {
        let networks = ranges
            .iter()
            .map(|r| parse_range(r.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Access guard loaded with {} ranges", networks.len());
        Ok(Self { networks })
    }

    /// Number of configured networks
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// True when no network is configured (every caller is rejected)
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Whether `addr` lies in at least one configured network
    pub fn is_allowed(&self, addr: &IpAddr) -> bool {
        let addr = addr.to_canonical();
        self.networks.iter().any(|net| net.contains(addr))
    }

    /// Admit or reject a caller, logging rejections
    pub fn check(&self, addr: &IpAddr) -> Result<(), AccessError> {
        if self.is_allowed(addr) {
            return Ok(());
        }
        warn!("Forbidden access for: {}", addr);
        Err(AccessError::Forbidden { addr: *addr })
    }
}

fn parse_range(range: &str) -> Result<IpNetwork, AccessError> {
    IpNetwork::from_str(range.trim()).map_err(|e| AccessError::InvalidRange {
        range: range.to_string(),
        reason: e.to_string(),
    })
}

/// Evaluate an address string against raw range strings.
///
/// Malformed ranges and malformed addresses never match, so this never
/// fails; an empty range list rejects everything.
pub fn is_address_allowed<S: AsRef<str>>(addr: &str, ranges: &[S]) -> bool {
    let Ok(addr) = IpAddr::from_str(addr.trim()) else {
        return false;
    };
    let addr = addr.to_canonical();
    ranges
        .iter()
        .filter_map(|r| parse_range(r.as_ref()).ok())
        .any(|net| net.contains(addr))
}
