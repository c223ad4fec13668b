use std::time::Duration;

/// Default ceiling on concurrently in-flight probes.
pub const DEFAULT_WORKERS: usize = 50;

/// Default per-probe timeout.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Runtime knobs for one sweep invocation.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Maximum number of probes in flight at once.
    pub workers: usize,
    /// How long a single probe may run before it counts as `Down`.
    pub probe_timeout: Duration,
    /// Suppresses the per-host "UP" lines, leaving only the summary.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            quiet: false,
        }
    }
}
