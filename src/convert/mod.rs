//! Collection helpers between iterators of outcomes and outcomes of collections.
//!
//! Collecting stops at the first failure, so no continuation after it runs
//! and the failure's message is carried unchanged.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let all: Outcome<Vec<u8>> = ["1", "2", "3"]
//!     .iter()
//!     .map(|s| Outcome::from(s.parse::<u8>()))
//!     .collect();
//! assert_eq!(all, Outcome::succeed(vec![1, 2, 3]));
//! ```

use crate::types::{Message, Outcome};

impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        let mut failure: Option<Message> = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(message) => {
                    failure = Some(message);
                    None
                },
            })
            .collect();

        match failure {
            Some(message) => Outcome::Failure(message),
            None => Outcome::Success(collected),
        }
    }
}

/// Converts a slice of outcomes into the list of their failure messages.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert::failure_messages, Outcome};
///
/// let outcomes = [Outcome::succeed(1), Outcome::fail("a"), Outcome::fail("b")];
/// assert_eq!(failure_messages(&outcomes), vec!["a", "b"]);
/// ```
pub fn failure_messages<T>(outcomes: &[Outcome<T>]) -> Vec<&str> {
    outcomes.iter().filter_map(Outcome::error).collect()
}

/// Splits outcomes into payloads and failure messages, preserving order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert::partition_outcomes, Outcome};
///
/// let (values, errors) =
///     partition_outcomes(vec![Outcome::succeed(1), Outcome::fail("x"), Outcome::succeed(3)]);
/// assert_eq!(values, vec![1, 3]);
/// assert_eq!(errors, vec!["x"]);
/// ```
pub fn partition_outcomes<T, I>(outcomes: I) -> (Vec<T>, Vec<Message>)
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(message) => errors.push(message),
        }
    }
    (values, errors)
}
