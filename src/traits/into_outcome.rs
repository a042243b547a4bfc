//! Conversions into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultOutcomeExt;
//!
//! let contents = std::fs::read_to_string("missing.toml").into_outcome();
//! assert!(contents.is_failure());
//! ```

use core::fmt::Display;

use crate::types::{Message, Outcome};

/// Lifts a plain value onto the success track.
///
/// # Examples
///
/// ```
/// use outcome_rail::{traits::IntoSuccess, Outcome};
///
/// assert_eq!("ready".into_success(), Outcome::succeed("ready"));
/// ```
pub trait IntoSuccess: Sized {
    /// Wraps `self` with [`Outcome::succeed`].
    fn into_success(self) -> Outcome<Self>;
}

impl<T> IntoSuccess for T {
    #[inline]
    fn into_success(self) -> Outcome<Self> {
        Outcome::Success(self)
    }
}

/// Adapts a `Result` whose error renders as text into an [`Outcome`].
///
/// The error's [`Display`] output becomes the failure message.
pub trait ResultOutcomeExt<T, E> {
    /// Converts `Err(e)` into `Failure(e.to_string())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultOutcomeExt;
    ///
    /// let out = "300".parse::<u8>().into_outcome();
    /// assert_eq!(out.error(), Some("number too large to fit in target type"));
    /// ```
    fn into_outcome(self) -> Outcome<T>;

    /// Converts `Err(_)` into a failure carrying `message` instead.
    fn outcome_or<M>(self, message: M) -> Outcome<T>
    where
        M: Into<Message>;
}

impl<T, E> ResultOutcomeExt<T, E> for Result<T, E>
where
    E: Display,
{
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from(self)
    }

    #[inline]
    fn outcome_or<M>(self, message: M) -> Outcome<T>
    where
        M: Into<Message>,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(_) => Outcome::Failure(message.into()),
        }
    }
}
