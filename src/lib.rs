//! Railway-oriented error handling built around a single [`Outcome`] type.
//!
//! An [`Outcome<T>`] is either a success carrying a payload or a failure
//! carrying a human-readable message. Fallible steps are chained with
//! combinators; the first failure short-circuits the rest of the chain and
//! its message reaches the caller.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Steps
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let port = Outcome::succeed(" 8080 ")
//!     .map(str::trim)
//!     .bind(|s| Outcome::from(s.parse::<u16>()))
//!     .refine_failure("Reading port");
//!
//! assert_eq!(port, Outcome::succeed(8080));
//! ```
//!
//! ## Containing Panics
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let out = Outcome::<Vec<u8>>::of_or(|| panic!("index out of range"), "no data");
//! assert_eq!(out.error(), Some("no data"));
//! ```
//!
//! ## Short-Circuiting
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let mut calls = 0;
//! let out = Outcome::<i32>::fail("offline")
//!     .map(|n| { calls += 1; n + 1 })
//!     .replace_error(|m| format!("sync: {m}"));
//!
//! assert_eq!(out.error(), Some("sync: offline"));
//! assert_eq!(calls, 0);
//! ```

/// Panic capture shared by the boundary combinators
pub mod fault;
/// Collecting and splitting sequences of outcomes
pub mod convert;
/// Shorthand macros for building and unwrapping outcomes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for entering and observing the railway
pub mod traits;
/// The Outcome type, its combinators and its error companion
pub mod types;

/// Image persistence built on the railway (requires `persist` feature)
#[cfg(feature = "persist")]
pub mod persist;

pub use traits::*;
pub use types::{Message, Outcome, OutcomeError, Unit};
