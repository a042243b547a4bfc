//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load(path: &str) -> Outcome<String> {
//!     std::fs::read_to_string(path).into_outcome()
//! }
//!
//! assert!(load("does-not-exist.txt").is_failure());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`outcome!`], [`fail!`], [`try_outcome!`]
//! - **Types**: [`Outcome`], [`OutcomeError`], [`Message`], [`Unit`]
//! - **Traits**: [`IntoSuccess`], [`ResultOutcomeExt`]

// Macros
pub use crate::{fail, outcome, try_outcome};

// Core types
pub use crate::types::{Message, Outcome, OutcomeError, Unit};

// Traits
pub use crate::traits::{IntoSuccess, ResultOutcomeExt};

#[cfg(feature = "tracing")]
pub use crate::traits::OutcomeTraceExt;
