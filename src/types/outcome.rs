use core::fmt::{self, Display};

use crate::fault;
use crate::types::Message;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Railway-oriented container: either a payload or a failure message.
///
/// An `Outcome` is built once, by a constructor, by [`Outcome::of`], or by a
/// combinator, and is never mutated afterwards. Combinators consume the
/// antecedent and hand back a new `Outcome`.
///
/// Once a chain is on the failure track every value-producing combinator
/// skips its continuation; only the message-aware combinators
/// ([`on_fail`](Outcome::on_fail), [`replace_error`](Outcome::replace_error),
/// [`refine_error`](Outcome::refine_error)) touch it.
///
/// # Type Parameters
///
/// * `T` - The payload type
///
/// # Variants
///
/// * `Success(T)` - The computation produced a value
/// * `Failure(Message)` - The computation failed with the given text
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::succeed(42);
/// assert!(ok.is_success());
///
/// let failed = Outcome::<i32>::fail("disk full");
/// assert_eq!(failed.error(), Some("disk full"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome<T> {
    Success(T),
    Failure(Message),
}

impl<T> Outcome<T> {
    /// Wraps `value` as a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::succeed("ready").value_or_panic(), "ready");
    /// ```
    #[inline]
    pub fn succeed(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps `message` as a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::<u8>::fail(format!("port {} busy", 80));
    /// assert_eq!(out.error(), Some("port 80 busy"));
    /// ```
    #[inline]
    pub fn fail<M>(message: M) -> Self
    where
        M: Into<Message>,
    {
        Self::Failure(message.into())
    }

    /// Runs `computation`, turning a panic into a failure.
    ///
    /// This is the boundary where code that may panic is adapted into the
    /// algebra. The failure carries the panic's own message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::of(|| 42), Outcome::succeed(42));
    ///
    /// let failed = Outcome::<i32>::of(|| panic!("boom"));
    /// assert_eq!(failed.error(), Some("boom"));
    /// ```
    #[inline]
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        fault::capture(computation)
    }

    /// Like [`of`](Outcome::of), but a panic becomes a failure carrying
    /// `message` instead of the panic's text.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed = Outcome::<i32>::of_or(|| panic!("boom"), "custom");
    /// assert_eq!(failed.error(), Some("custom"));
    /// ```
    #[inline]
    pub fn of_or<F, M>(computation: F, message: M) -> Self
    where
        F: FnOnce() -> T,
        M: Into<Message>,
    {
        match fault::capture(computation) {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => Self::Failure(message.into()),
        }
    }

    /// Returns `true` if the outcome is on the success track.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is on the failure track.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the payload, panicking if the outcome is a failure.
    ///
    /// Reaching the panic is a programming error: the caller dereferenced an
    /// outcome without checking [`is_success`](Outcome::is_success) first.
    ///
    /// # Panics
    ///
    /// Panics with `No value. Only Error {message}` on a failure.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// Outcome::<u8>::fail("nothing here").value_or_panic();
    /// ```
    #[track_caller]
    #[inline]
    pub fn value_or_panic(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(message) => panic!("No value. Only Error {message}"),
        }
    }

    /// Borrows the payload, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure message, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message.as_ref()),
        }
    }

    /// Consumes the outcome, returning the payload, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the failure message, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<Message> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Converts `&Outcome<T>` into `Outcome<&T>`, cloning the message if failed.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(message) => Outcome::Failure(message.clone()),
        }
    }
}

impl<T: Display> Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => Display::fmt(value, f),
            Self::Failure(message) => write!(f, "error: {message}"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Display,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Message::Owned(error.to_string())),
        }
    }
}
