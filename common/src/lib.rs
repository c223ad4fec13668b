pub mod config;
pub mod logging;
pub mod network;

// The logging macros expand to `$crate::tracing::...`, so dependents do not
// need their own `tracing` dependency.
pub use tracing;
