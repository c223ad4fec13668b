//! # Address Range Model
//!
//! Parses and expands the target input for a sweep: a CIDR block such as
//! `192.168.1.0/24`.
//!
//! Expansion follows standard subnetting rules: the network and broadcast
//! addresses are skipped whenever the prefix leaves at least two host bits.
//! A /31 or /32 has no such split, so every address in the block is treated
//! as a host address. That policy is deliberate; a /32 sweep probes exactly
//! the one address it names instead of silently probing nothing.

use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use ipnetwork::Ipv4Network;
use thiserror::Error;

/// Rejection reasons for a textual network specification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid network specification '{0}': expected <address>/<prefix>, e.g. 192.168.1.0/24")]
    Malformed(String),
    #[error("invalid address in '{spec}': {reason}")]
    Address { spec: String, reason: String },
    #[error("invalid prefix length in '{spec}': {reason}")]
    Prefix { spec: String, reason: String },
}

/// A contiguous IPv4 block defined by a network prefix.
///
/// The address part is masked down to the network address on construction,
/// so `10.0.0.5/24` and `10.0.0.0/24` describe the same range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    network: Ipv4Network,
}

impl AddressRange {
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, RangeError> {
        let spec = format!("{addr}/{prefix}");
        let network = Ipv4Network::new(addr, prefix).map_err(|e| RangeError::Prefix {
            spec,
            reason: e.to_string(),
        })?;
        Ok(Self { network })
    }

    pub fn network_addr(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn broadcast_addr(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    /// Number of host addresses [`hosts`](Self::hosts) will yield.
    pub fn host_count(&self) -> u64 {
        let host_bits = 32 - u32::from(self.prefix());
        let block: u64 = 1 << host_bits;
        if host_bits >= 2 { block - 2 } else { block }
    }

    /// Lazy, restartable iterator over the host addresses of the block,
    /// in strictly ascending numeric order.
    pub fn hosts(&self) -> impl Iterator<Item = IpAddr> + use<> {
        let net: u32 = self.network.network().into();
        let bcast: u32 = self.network.broadcast().into();

        // With >= 2 host bits, strip the network and broadcast addresses.
        let (start, end) = if bcast - net >= 3 {
            (net + 1, bcast - 1)
        } else {
            (net, bcast)
        };

        (start..=end).map(|ip| IpAddr::V4(Ipv4Addr::from(ip)))
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.network.network(), self.network.prefix())
    }
}

impl FromStr for AddressRange {
    type Err = RangeError;

    /// Parses CIDR notation like `192.168.1.0/24`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            return Err(RangeError::Malformed(s.to_string()));
        };

        let addr = ip_str.parse::<Ipv4Addr>().map_err(|e| RangeError::Address {
            spec: s.to_string(),
            reason: e.to_string(),
        })?;

        let prefix = prefix_str.parse::<u8>().map_err(|e| RangeError::Prefix {
            spec: s.to_string(),
            reason: e.to_string(),
        })?;

        let range = Self::new(addr, prefix)?;
        crate::info!("{} expands to {} host addresses", range, range.host_count());

        Ok(range)
    }
}
