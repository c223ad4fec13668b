//! Probes hosts by shelling out to the operating system's `ping` utility.
//!
//! One echo request per probe, with the per-probe timeout handed down to the
//! utility so it gives up on its own. Flag spelling differs per platform.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::trace;

use super::{Pinger, ProbeOutcome};

pub struct SystemPinger;

#[async_trait]
impl Pinger for SystemPinger {
    async fn probe(&self, addr: IpAddr, timeout: Duration) -> ProbeOutcome {
        let output = Command::new("ping")
            .args(ping_args(addr, timeout))
            .output()
            .await;

        match output {
            Ok(out) if out.status.success() => ProbeOutcome::Up,
            Ok(_) => ProbeOutcome::Down,
            Err(e) => {
                trace!("ping invocation for {addr} failed: {e}");
                ProbeOutcome::Down
            }
        }
    }
}

#[cfg(windows)]
fn ping_args(addr: IpAddr, timeout: Duration) -> Vec<String> {
    vec![
        "-n".into(),
        "1".into(),
        "-w".into(),
        timeout.as_millis().to_string(),
        addr.to_string(),
    ]
}

// macOS ping reads -W in milliseconds, BSD-style.
#[cfg(target_os = "macos")]
fn ping_args(addr: IpAddr, timeout: Duration) -> Vec<String> {
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        timeout.as_millis().to_string(),
        addr.to_string(),
    ]
}

#[cfg(not(any(windows, target_os = "macos")))]
fn ping_args(addr: IpAddr, timeout: Duration) -> Vec<String> {
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        timeout.as_secs().max(1).to_string(),
        addr.to_string(),
    ]
}
