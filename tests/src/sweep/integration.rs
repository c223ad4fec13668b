//! End-to-end sweeps driven through injected fake probes.

use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sweepr_common::config::Config;
use sweepr_common::network::range::AddressRange;
use sweepr_core::probe::Pinger;
use sweepr_core::sweep::{SweepError, SweepReport, Sweeper};

use super::fake::{GatedPinger, MapPinger, RecordingPinger, StalledPinger};

fn config(workers: usize, timeout_ms: u64) -> Config {
    Config {
        workers,
        probe_timeout: Duration::from_millis(timeout_ms),
        quiet: true,
    }
}

fn addr(s: &str) -> IpAddr {
    s.parse().unwrap()
}

async fn run(
    pinger: Arc<dyn Pinger>,
    spec: &str,
    cfg: &Config,
) -> Result<SweepReport, SweepError> {
    let range: AddressRange = spec.parse().unwrap();
    Sweeper::new(pinger)
        .sweep(range.hosts(), cfg, Arc::new(AtomicBool::new(false)), None)
        .await
}

#[tokio::test]
async fn up_list_is_identical_across_worker_counts() {
    let up = [addr("192.168.1.3"), addr("192.168.1.11"), addr("192.168.1.7")];

    let mut reports = Vec::new();
    for workers in [1, 10, 50] {
        let pinger = Arc::new(MapPinger::new(up));
        let report = run(pinger, "192.168.1.0/28", &config(workers, 100))
            .await
            .unwrap();
        reports.push(report);
    }

    let expected = vec![addr("192.168.1.3"), addr("192.168.1.7"), addr("192.168.1.11")];
    for report in &reports {
        assert_eq!(report.total, 14);
        assert_eq!(report.up, expected, "up-list must be sorted and stable");
    }
}

#[tokio::test]
async fn every_host_is_probed_exactly_once() {
    let pinger = Arc::new(RecordingPinger::new());
    let report = run(pinger.clone(), "10.0.0.0/28", &config(5, 100))
        .await
        .unwrap();

    let range: AddressRange = "10.0.0.0/28".parse().unwrap();
    let expected: Vec<IpAddr> = range.hosts().collect();

    let mut seen = pinger.seen.lock().unwrap().clone();
    seen.sort_unstable();

    assert_eq!(seen, expected, "no drops and no duplicate probes");
    assert_eq!(report.total, expected.len() as u64);
    assert!(report.up.is_empty());
}

#[tokio::test]
async fn in_flight_probes_never_exceed_the_worker_ceiling() {
    let pinger = Arc::new(GatedPinger::new(Duration::from_millis(50)));
    let report = run(pinger.clone(), "10.0.0.0/27", &config(10, 5_000))
        .await
        .unwrap();

    assert_eq!(report.total, 30);
    assert!(
        pinger.max_observed() <= 10,
        "observed {} concurrent probes with a ceiling of 10",
        pinger.max_observed()
    );
}

#[tokio::test]
async fn slash_30_scenario_reports_the_single_responder() {
    let pinger = Arc::new(MapPinger::new([addr("192.168.1.1")]));
    let report = run(pinger, "192.168.1.0/30", &config(10, 100))
        .await
        .unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.up, vec![addr("192.168.1.1")]);
}

#[tokio::test]
async fn probes_that_overrun_the_timeout_resolve_down() {
    let report = run(Arc::new(StalledPinger), "192.168.1.0/30", &config(2, 50))
        .await
        .unwrap();

    assert_eq!(report.total, 2, "a timed-out sweep still completes");
    assert!(report.up.is_empty());
}

#[tokio::test]
async fn repeated_sweeps_against_a_fixed_network_are_idempotent() {
    let up = [addr("172.16.0.5"), addr("172.16.0.9")];
    let cfg = config(10, 100);

    let first = run(Arc::new(MapPinger::new(up)), "172.16.0.0/28", &cfg)
        .await
        .unwrap();
    let second = run(Arc::new(MapPinger::new(up)), "172.16.0.0/28", &cfg)
        .await
        .unwrap();

    assert_eq!(first.up, second.up);
    assert_eq!(first.total, second.total);
}

#[tokio::test]
async fn zero_workers_is_a_fatal_pool_error() {
    let result = run(Arc::new(StalledPinger), "10.0.0.0/30", &config(0, 100)).await;
    assert!(matches!(result, Err(SweepError::PoolExhausted(_))));
}

#[tokio::test]
async fn pre_raised_cancellation_submits_nothing() {
    let pinger = Arc::new(RecordingPinger::new());
    let range: AddressRange = "10.0.0.0/24".parse().unwrap();
    let cancel = Arc::new(AtomicBool::new(true));

    let report = Sweeper::new(pinger.clone())
        .sweep(range.hosts(), &config(10, 100), cancel, None)
        .await
        .unwrap();

    assert_eq!(report.total, 0);
    assert!(report.up.is_empty());
    assert!(pinger.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn mid_sweep_cancellation_lets_in_flight_probes_resolve() {
    let pinger = Arc::new(GatedPinger::new(Duration::from_millis(200)));
    let range: AddressRange = "10.0.0.0/28".parse().unwrap();
    let cancel = Arc::new(AtomicBool::new(false));

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel.store(true, Ordering::Relaxed);
        });
    }

    let report = Sweeper::new(pinger)
        .sweep(range.hosts(), &config(2, 5_000), cancel, None)
        .await
        .unwrap();

    assert!(report.total < 14, "cancellation must stop new submissions");
    assert_eq!(
        report.up.len() as u64,
        report.total,
        "every submitted probe still resolves"
    );
}

#[tokio::test]
async fn callback_fires_once_per_resolved_address() {
    let fired = Arc::new(AtomicU64::new(0));
    let counter = fired.clone();

    let range: AddressRange = "192.168.0.0/28".parse().unwrap();
    let report = Sweeper::new(Arc::new(MapPinger::new([addr("192.168.0.4")])))
        .sweep(
            range.hosts(),
            &config(10, 100),
            Arc::new(AtomicBool::new(false)),
            Some(Box::new(move |_result| {
                counter.fetch_add(1, Ordering::Relaxed);
            })),
        )
        .await
        .unwrap();

    assert_eq!(fired.load(Ordering::Relaxed), report.total);
    assert_eq!(report.up, vec![addr("192.168.0.4")]);
}

#[test]
fn invalid_specification_fails_before_any_probing() {
    assert!("not-a-subnet".parse::<AddressRange>().is_err());
    assert!("10.0.0.0/33".parse::<AddressRange>().is_err());
}

// This crate deliberately has no `tracing` dependency of its own; the
// logging macros must expand against the re-export in `sweepr-common`.
#[test]
fn logging_macros_expand_without_a_direct_tracing_dependency() {
    sweepr_common::info!("sweep starting");
    sweepr_common::success!("sweep finished");
    sweepr_common::warn!("probe slow");
    sweepr_common::error!("probe failed");
}
