//! Thin wrappers around [`tracing`] so the rest of the workspace logs
//! through one set of macros.
//!
//! The bodies expand against the re-export at the crate root, which keeps
//! the macros usable from crates that do not depend on `tracing` themselves.
//! `success!` is an `info`-level event with a dedicated target so the CLI
//! formatter can give it its own symbol.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "sweepr::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
