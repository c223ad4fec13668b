//! Fake probe implementations so sweeps can run without network access.

use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_core::probe::{Pinger, ProbeOutcome};

/// Deterministic probe: a host is up iff its address is in the set.
pub struct MapPinger {
    up: HashSet<IpAddr>,
}

impl MapPinger {
    pub fn new(up: impl IntoIterator<Item = IpAddr>) -> Self {
        Self {
            up: up.into_iter().collect(),
        }
    }
}

#[async_trait]
impl Pinger for MapPinger {
    async fn probe(&self, addr: IpAddr, _timeout: Duration) -> ProbeOutcome {
        if self.up.contains(&addr) {
            ProbeOutcome::Up
        } else {
            ProbeOutcome::Down
        }
    }
}

/// Records every probed address; everything is down.
pub struct RecordingPinger {
    pub seen: Mutex<Vec<IpAddr>>,
}

impl RecordingPinger {
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Pinger for RecordingPinger {
    async fn probe(&self, addr: IpAddr, _timeout: Duration) -> ProbeOutcome {
        self.seen.lock().unwrap().push(addr);
        ProbeOutcome::Down
    }
}

/// Holds each probe open for a fixed duration and tracks how many run at
/// once, so tests can observe the concurrency ceiling.
pub struct GatedPinger {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    hold: Duration,
}

impl GatedPinger {
    pub fn new(hold: Duration) -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            hold,
        }
    }

    pub fn max_observed(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pinger for GatedPinger {
    async fn probe(&self, _addr: IpAddr, _timeout: Duration) -> ProbeOutcome {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.hold).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        ProbeOutcome::Up
    }
}

/// Never answers within any sane timeout.
pub struct StalledPinger;

#[async_trait]
impl Pinger for StalledPinger {
    async fn probe(&self, _addr: IpAddr, _timeout: Duration) -> ProbeOutcome {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        ProbeOutcome::Up
    }
}
