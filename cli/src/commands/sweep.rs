use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use sweepr_common::config::Config;
use sweepr_common::network::range::AddressRange;
use sweepr_common::{info, warn};
use sweepr_core::probe::system::SystemPinger;
use sweepr_core::sweep::{ResultCallback, Sweeper};

use crate::terminal::print;

pub async fn sweep(
    target: Option<AddressRange>,
    workers: usize,
    timeout_secs: u64,
    quiet: bool,
) -> anyhow::Result<()> {
    let range = match target {
        Some(range) => range,
        None => prompt_for_target()?,
    };

    let cfg = Config {
        workers,
        probe_timeout: Duration::from_secs(timeout_secs),
        quiet,
    };

    info!(
        "Sweeping {} ({} host addresses, {} workers)",
        range,
        range.host_count(),
        cfg.workers
    );

    let cancel = Arc::new(AtomicBool::new(false));
    spawn_interrupt_watcher(cancel.clone());

    let bar = print::sweep_bar(range.host_count());
    let on_result: ResultCallback = {
        let bar = bar.clone();
        Box::new(move |result| {
            bar.inc(1);
            if result.is_up() && !quiet {
                print::up_line(&bar, &result.addr, result.latency);
            }
        })
    };

    let sweeper = Sweeper::new(Arc::new(SystemPinger));
    let report = sweeper
        .sweep(range.hosts(), &cfg, cancel, Some(on_result))
        .await?;

    bar.finish_and_clear();
    print::summary(&report);

    Ok(())
}

/// Mirrors the classic interactive flow: no argument, ask on stdin.
fn prompt_for_target() -> anyhow::Result<AddressRange> {
    print!("Enter subnet to sweep (e.g., 192.168.1.0/24): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim().parse::<AddressRange>()?)
}

/// Ctrl-C stops submitting new probes; in-flight ones resolve or time out.
fn spawn_interrupt_watcher(cancel: Arc<AtomicBool>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, waiting for in-flight probes to settle");
            cancel.store(true, Ordering::Relaxed);
        }
    });
}
