//! Chaining combinators for [`Outcome`].
//!
//! Continuations run inline, strictly in chain order, and at most once per
//! combinator call. Only a success antecedent ever reaches a value
//! continuation.
//!
//! | Combinator | On failure | On success |
//! |------------|------------|------------|
//! | [`map`](Outcome::map) | propagates | runs `f`, a panic becomes a failure |
//! | [`bind`](Outcome::bind) | propagates | returns `f`'s outcome, panics escape |
//! | [`tap_ok`](Outcome::tap_ok) | propagates | runs `f`, keeps the antecedent unless `f` fails |
//! | [`inspect_ok`](Outcome::inspect_ok) | propagates | runs `f`, keeps the antecedent |
//! | [`on_fail`](Outcome::on_fail) | observes the message | unchanged |
//! | [`replace_error`](Outcome::replace_error) | rewrites the message | unchanged |
//! | [`refine_error`](Outcome::refine_error) | prefixes the message | becomes a failure |
//! | [`refine_failure`](Outcome::refine_failure) | prefixes the message | unchanged |

use crate::fault;
use crate::types::{Message, Outcome, Unit};

impl<T> Outcome<T> {
    /// Transforms the payload with a plain function.
    ///
    /// A panic raised by `f` is contained and becomes a failure carrying the
    /// panic's message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let len = Outcome::succeed("railway").map(str::len);
    /// assert_eq!(len, Outcome::succeed(7));
    ///
    /// let failed = Outcome::succeed(0).map(|d: i32| 10 / d);
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => fault::capture(move || f(value)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Chains a step that itself produces an [`Outcome`].
    ///
    /// The continuation's outcome is returned as-is. Unlike
    /// [`map`](Outcome::map), a panic inside `f` is not contained: fallible
    /// steps are expected to report failure through their own outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse(input: &str) -> Outcome<u16> {
    ///     input.parse::<u16>().into()
    /// }
    ///
    /// assert_eq!(Outcome::succeed("8080").bind(parse), Outcome::succeed(8080));
    /// assert!(Outcome::succeed("http").bind(parse).is_failure());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Alias for [`bind`](Outcome::bind).
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.bind(f)
    }

    /// Runs a fallible side effect on the payload.
    ///
    /// If the effect fails (or panics), its message replaces the antecedent.
    /// Otherwise the antecedent passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Unit};
    ///
    /// fn reject_empty(name: &String) -> Outcome<Unit> {
    ///     if name.is_empty() { Outcome::fail("empty name") } else { Outcome::succeed(()) }
    /// }
    ///
    /// assert_eq!(
    ///     Outcome::succeed("ada".to_string()).tap_ok(reject_empty),
    ///     Outcome::succeed("ada".to_string())
    /// );
    /// assert_eq!(
    ///     Outcome::succeed(String::new()).tap_ok(reject_empty).error(),
    ///     Some("empty name")
    /// );
    /// ```
    #[inline]
    pub fn tap_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<Unit>,
    {
        let value = match self {
            Self::Success(value) => value,
            failure => return failure,
        };

        match fault::capture(|| f(&value)) {
            Outcome::Success(Outcome::Success(())) => Self::Success(value),
            Outcome::Success(Outcome::Failure(message)) | Outcome::Failure(message) => {
                Self::Failure(message)
            },
        }
    }

    /// Runs an infallible side effect on the payload.
    ///
    /// The antecedent passes through unchanged unless the effect panics, in
    /// which case the panic's message becomes the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let out = Outcome::succeed(3).inspect_ok(|n| seen.push(*n));
    ///
    /// assert_eq!(out, Outcome::succeed(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn inspect_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        let value = match self {
            Self::Success(value) => value,
            failure => return failure,
        };

        match fault::capture(|| f(&value)) {
            Outcome::Success(()) => Self::Success(value),
            Outcome::Failure(message) => Self::Failure(message),
        }
    }

    /// Observes the failure message without leaving the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let out = Outcome::<u8>::fail("timeout").on_fail(|m| log.push(m.to_string()));
    ///
    /// assert_eq!(out.error(), Some("timeout"));
    /// assert_eq!(log, vec!["timeout".to_string()]);
    /// ```
    #[inline]
    pub fn on_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&str),
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(message) => {
                f(&message);
                Self::Failure(message)
            },
        }
    }

    /// Rewrites the failure message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::<u8>::fail("eof").replace_error(|m| m.to_uppercase());
    /// assert_eq!(out.error(), Some("EOF"));
    /// ```
    #[inline]
    pub fn replace_error<F, M>(self, f: F) -> Self
    where
        F: FnOnce(&str) -> M,
        M: Into<Message>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(message) => Self::Failure(f(&message).into()),
        }
    }

    /// Prefixes the failure message as `"{prefix}. {message}"`.
    ///
    /// Applied to a success this yields `Failure("{prefix}. ")`: the payload
    /// is dropped and the missing message renders empty. Long-standing callers
    /// depend on that, so it is kept. Use
    /// [`refine_failure`](Outcome::refine_failure) to leave successes alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::<u8>::fail("no such file").refine_error("Loading fonts");
    /// assert_eq!(out.error(), Some("Loading fonts. no such file"));
    ///
    /// let flipped = Outcome::succeed(1).refine_error("Loading fonts");
    /// assert_eq!(flipped.error(), Some("Loading fonts. "));
    /// ```
    #[inline]
    pub fn refine_error(self, prefix: &str) -> Self {
        let message = self.into_error().unwrap_or_default();
        Self::Failure(Message::Owned(format!("{prefix}. {message}")))
    }

    /// Prefixes the failure message as `"{prefix}. {message}"`, leaving a
    /// success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::succeed(1).refine_failure("Loading fonts"), Outcome::succeed(1));
    /// ```
    #[inline]
    pub fn refine_failure(self, prefix: &str) -> Self {
        self.replace_error(|message| format!("{prefix}. {message}"))
    }
}
