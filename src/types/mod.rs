//! The [`Outcome`] type and its error companion.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let parsed = Outcome::of(|| "42".parse::<u32>().unwrap())
//!     .map(|n| n * 2)
//!     .refine_failure("reading answer");
//!
//! assert_eq!(parsed.value_or_panic(), 84);
//! ```
use std::borrow::Cow;

pub mod outcome;
pub mod outcome_error;
pub mod outcome_ops;

pub use outcome::*;
pub use outcome_error::*;

/// Failure message carried by [`Outcome::Failure`].
///
/// String literals are stored borrowed, so `Outcome::fail("...")` never allocates.
pub type Message = Cow<'static, str>;

/// Payload of outcomes that represent a side effect with no meaningful value.
pub type Unit = ();
