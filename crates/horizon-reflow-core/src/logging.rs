//! Logging facilities for Horizon Reflow.
//!
//! Horizon Reflow uses the `tracing` crate for instrumentation. No subscriber
//! is installed by the library; to see logs, install one in the host:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_reflow=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_reflow_core::signal";
    /// Deferred task queue target.
    pub const DEFERRED: &str = "horizon_reflow_core::deferred";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_reflow::config";
    /// Snapshot backup/restore target.
    pub const SNAPSHOT: &str = "horizon_reflow::snapshot";
    /// Packing and track generation target.
    pub const REFLOW: &str = "horizon_reflow::reflow";
    /// Visibility rules target.
    pub const VISIBILITY: &str = "horizon_reflow::visibility";
    /// Controller state machine target.
    pub const CONTROLLER: &str = "horizon_reflow::controller";
    /// Host bus target.
    pub const HOST: &str = "horizon_reflow::host";
}

/// Span names used for performance tracing.
pub mod span_names {
    /// A full form reflow.
    pub const REFLOW: &str = "reflow";
    /// A restore of the original layout.
    pub const RESTORE: &str = "restore";
    /// A vertical layout transform.
    pub const VERTICAL: &str = "vertical_transform";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_reflow::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
