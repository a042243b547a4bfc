//! Shorthand macros for building and unwrapping [`Outcome`](crate::Outcome)s.
//!
//! - [`macro@crate::outcome`] - Runs an expression under the panic boundary,
//!   like [`Outcome::of`](crate::Outcome::of).
//! - [`macro@crate::fail`] - Builds a failure from `format!` arguments.
//! - [`macro@crate::try_outcome`] - Unwraps a success or returns the failure
//!   from the enclosing function, the railway counterpart of `?`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{fail, outcome, try_outcome, Outcome};
//!
//! fn halve(n: u32) -> Outcome<u32> {
//!     if n % 2 == 1 {
//!         return fail!("{} is odd", n);
//!     }
//!     Outcome::succeed(n / 2)
//! }
//!
//! fn quarter(n: u32) -> Outcome<u32> {
//!     let half = try_outcome!(halve(n));
//!     halve(half)
//! }
//!
//! assert_eq!(quarter(8), Outcome::succeed(2));
//! assert_eq!(quarter(6).error(), Some("3 is odd"));
//! assert_eq!(outcome!(7 * 6), Outcome::succeed(42));
//! ```

/// Evaluates an expression inside the panic boundary.
///
/// # Syntax
///
/// - `outcome!(expr)` - A panic becomes a failure with the panic's message
/// - `outcome!(expr, message)` - A panic becomes a failure with `message`
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome;
///
/// let items: Vec<u8> = Vec::new();
/// let first = outcome!(items[0], "list is empty");
/// assert_eq!(first.error(), Some("list is empty"));
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::of(|| $expr)
    };
    ($expr:expr, $message:expr $(,)?) => {
        $crate::Outcome::of_or(|| $expr, $message)
    };
}

/// Creates a failure whose message is built with `format!`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let out: Outcome<()> = fail!("retry {} of {}", 3, 5);
/// assert_eq!(out.error(), Some("retry 3 of 5"));
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::fail(::std::format!($($arg)*))
    };
}

/// Unwraps a success, or returns the failure from the enclosing function.
///
/// The enclosing function must return an [`Outcome`](crate::Outcome); the
/// payload type may differ.
///
/// # Examples
///
/// ```
/// use outcome_rail::{try_outcome, Outcome};
///
/// fn describe(port: Outcome<u16>) -> Outcome<String> {
///     let port = try_outcome!(port);
///     Outcome::succeed(format!("listening on {port}"))
/// }
///
/// assert_eq!(describe(Outcome::fail("busy")).error(), Some("busy"));
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(message) => return $crate::Outcome::Failure(message),
        }
    };
}
