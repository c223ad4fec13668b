//! The liveness-probe **capability**.
//!
//! A probe answers one question: does the host at a given address respond
//! within a timeout? The sweeper depends only on the [`Pinger`] trait, so the
//! production `ping`-subprocess implementation can be swapped for a fake in
//! tests without touching the dispatch logic.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;

pub mod system;

/// Verdict of a single liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Up,
    Down,
}

/// The resolved state of one probed address.
///
/// Produced exactly once per submitted address. `latency` is only measured
/// for hosts that answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    pub addr: IpAddr,
    pub outcome: ProbeOutcome,
    pub latency: Option<Duration>,
}

impl ProbeResult {
    pub fn is_up(&self) -> bool {
        self.outcome == ProbeOutcome::Up
    }
}

/// Determines whether a host responds within `timeout`.
///
/// Implementations must never panic on unreachable hosts or permission
/// problems; any failure to probe is reported as [`ProbeOutcome::Down`].
#[async_trait]
pub trait Pinger: Send + Sync {
    async fn probe(&self, addr: IpAddr, timeout: Duration) -> ProbeOutcome;
}
