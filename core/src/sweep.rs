//! Bounded concurrent host-liveness sweeping.
//!
//! One sweep fans a probe out to every address of a range with at most
//! `workers` probes in flight, then aggregates the results into a
//! [`SweepReport`]. Workers hand each [`ProbeResult`] to a single consumer
//! over a channel in completion order, so a fast answer is reported
//! immediately even when an earlier-submitted probe is still hanging.
//!
//! Probe failures of any kind (timeout, unreachable, missing `ping` binary,
//! permission errors) resolve that one address as `Down` and never abort the
//! sweep. The final up-list is sorted by address, which makes the report
//! deterministic for a deterministic network regardless of worker count or
//! completion order.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::{Semaphore, mpsc};
use tracing::debug;

use crate::probe::{Pinger, ProbeOutcome, ProbeResult};
use sweepr_common::config::Config;

/// Fatal sweep-setup failures. Per-probe failures are not errors; they
/// resolve the address as `Down`.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("cannot allocate worker pool: {0}")]
    PoolExhausted(String),
}

/// Invoked by the aggregating consumer for every result, as it arrives.
pub type ResultCallback = Box<dyn Fn(&ProbeResult) + Send + Sync>;

/// Aggregate outcome of one complete sweep. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of addresses actually submitted for probing. Smaller than the
    /// range when the sweep was cancelled part-way through.
    pub total: u64,
    /// Responding addresses, ascending.
    pub up: Vec<IpAddr>,
    /// Wall-clock duration of the whole sweep.
    pub elapsed: Duration,
}

pub struct Sweeper {
    pinger: Arc<dyn Pinger>,
}

impl Sweeper {
    pub fn new(pinger: Arc<dyn Pinger>) -> Self {
        Self { pinger }
    }

    /// Probes every address yielded by `addrs` and returns the aggregated
    /// report once all submitted probes have resolved.
    ///
    /// Raising `cancel` stops the submission of new probes; probes already
    /// in flight still resolve (or time out) and are counted. Every
    /// submitted address yields exactly one result.
    pub async fn sweep(
        &self,
        addrs: impl Iterator<Item = IpAddr> + Send + 'static,
        cfg: &Config,
        cancel: Arc<AtomicBool>,
        on_result: Option<ResultCallback>,
    ) -> Result<SweepReport, SweepError> {
        if cfg.workers == 0 {
            return Err(SweepError::PoolExhausted(
                "worker count must be at least 1".to_string(),
            ));
        }

        let started = Instant::now();
        let pool = Arc::new(Semaphore::new(cfg.workers));
        let (tx, mut rx) = mpsc::unbounded_channel::<ProbeResult>();

        let submitted = Arc::new(AtomicU64::new(0));
        let probe_timeout = cfg.probe_timeout;
        let pinger = self.pinger.clone();
        let submitted_ref = submitted.clone();

        // Submission runs concurrently with aggregation below, so results
        // drain while later addresses are still queueing for a permit.
        let submitter = tokio::spawn(async move {
            for addr in addrs {
                if cancel.load(Ordering::Relaxed) {
                    debug!("cancellation raised, no further probes submitted");
                    break;
                }

                // Acquire before spawning: never more than `workers` tasks alive.
                let Ok(permit) = pool.clone().acquire_owned().await else {
                    break;
                };

                // The wait for a permit may outlast a cancellation.
                if cancel.load(Ordering::Relaxed) {
                    debug!("cancellation raised while waiting for a worker");
                    break;
                }

                submitted_ref.fetch_add(1, Ordering::Relaxed);
                let pinger = pinger.clone();
                let tx = tx.clone();

                tokio::spawn(async move {
                    let _permit = permit;
                    let probe_started = Instant::now();

                    let outcome =
                        match tokio::time::timeout(probe_timeout, pinger.probe(addr, probe_timeout))
                            .await
                        {
                            Ok(outcome) => outcome,
                            Err(_elapsed) => ProbeOutcome::Down,
                        };

                    let latency =
                        (outcome == ProbeOutcome::Up).then(|| probe_started.elapsed());

                    // The receiver outlives every worker; a send can only
                    // fail if the sweep itself is being torn down.
                    let _ = tx.send(ProbeResult {
                        addr,
                        outcome,
                        latency,
                    });
                });
            }
        });

        let mut up: Vec<IpAddr> = Vec::new();
        let mut resolved: u64 = 0;

        // Single aggregating consumer; the channel closes once the submitter
        // and every worker have dropped their senders.
        while let Some(result) = rx.recv().await {
            resolved += 1;
            if let Some(callback) = on_result.as_ref() {
                callback(&result);
            }
            if result.is_up() {
                up.push(result.addr);
            }
        }

        let _ = submitter.await;
        let total = submitted.load(Ordering::Relaxed);
        debug_assert_eq!(resolved, total, "every submitted probe must resolve");

        up.sort_unstable();

        Ok(SweepReport {
            total,
            up,
            elapsed: started.elapsed(),
        })
    }
}
