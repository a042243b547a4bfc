//! Message-only error type bridging [`Outcome`] and `Result`.
//!
//! The algebra itself never needs this type; it exists so callers can leave
//! the railway with `?` inside functions that return `Result`.

use core::fmt::{self, Display};

use crate::types::{Message, Outcome};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The failure side of an [`Outcome`], as a standalone [`std::error::Error`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeError};
///
/// fn port() -> Result<u16, OutcomeError> {
///     let port = Outcome::<u16>::fail("no port configured").into_result()?;
///     Ok(port)
/// }
///
/// assert_eq!(port().unwrap_err().message(), "no port configured");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutcomeError {
    message: Message,
}

impl OutcomeError {
    /// Creates an error with the given message.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Message>,
    {
        Self { message: message.into() }
    }

    /// Returns the failure text.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning the failure text.
    #[must_use]
    #[inline]
    pub fn into_message(self) -> Message {
        self.message
    }
}

impl Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for OutcomeError {}

impl<T> From<OutcomeError> for Outcome<T> {
    #[inline]
    fn from(error: OutcomeError) -> Self {
        Self::Failure(error.message)
    }
}

impl<T> Outcome<T> {
    /// Leaves the railway, converting into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::succeed(3).into_result(), Ok(3));
    /// assert!(Outcome::<i32>::fail("nope").into_result().is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(OutcomeError { message }),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, OutcomeError> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
