//! Tracing integration for outcome-rail.
//!
//! The combinators never log on their own. These adapters let a caller emit
//! `tracing` events at chosen points of a chain without changing its result.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::types::Outcome;

/// Extension trait that reports an [`Outcome`]'s track to `tracing`.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::{traits::OutcomeTraceExt, Outcome};
///
/// let saved = save_layout(&layout)
///     .trace_success("save_layout")
///     .trace_failure("save_layout");
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Emits a `WARN` event with the failure message, if failed.
    fn trace_failure(self, operation: &str) -> Self;

    /// Emits a `DEBUG` event, if succeeded.
    fn trace_success(self, operation: &str) -> Self;
}

impl<T> OutcomeTraceExt for Outcome<T> {
    fn trace_failure(self, operation: &str) -> Self {
        self.on_fail(|message| {
            tracing::warn!(operation, error = message, "outcome failed");
        })
    }

    fn trace_success(self, operation: &str) -> Self {
        if self.is_success() {
            tracing::debug!(operation, "outcome succeeded");
        }
        self
    }
}
