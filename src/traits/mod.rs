//! Extension traits that move values onto the railway and back out.
//!
//! - [`IntoSuccess`]: lifts any value into a success
//! - [`ResultOutcomeExt`]: adapts `Result`-returning APIs into [`Outcome`](crate::Outcome)
//! - `OutcomeTraceExt`: emits `tracing` events along a chain (requires the `tracing` feature)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoSuccess, ResultOutcomeExt};
//!
//! let lifted = 42.into_success();
//! assert!(lifted.is_success());
//!
//! let parsed = "x".parse::<u8>().outcome_or("expected a number");
//! assert_eq!(parsed.error(), Some("expected a number"));
//! ```

pub mod into_outcome;
#[cfg(feature = "tracing")]
pub mod trace;

pub use into_outcome::{IntoSuccess, ResultOutcomeExt};
#[cfg(feature = "tracing")]
pub use trace::OutcomeTraceExt;
