//! The panic-to-[`Outcome`] boundary.
//!
//! Every combinator that runs caller code under a catch boundary
//! ([`Outcome::of`], [`Outcome::map`], [`Outcome::tap_ok`],
//! [`Outcome::inspect_ok`]) goes through one shared helper, so the
//! catch-and-convert policy lives in exactly one place.
//!
//! A contained fault is silent. The first capture installs a process-wide
//! panic hook that chains to whatever hook was set before it and suppresses
//! the report only while the panicking thread is inside the boundary. Panics
//! raised elsewhere, such as [`Outcome::value_or_panic`] on a failure, still
//! reach the previous hook. A hook set with [`std::panic::set_hook`] after the
//! first capture replaces this one.
//!
//! [`panic_message`] is public for callers that run their own
//! [`catch_unwind`](std::panic::catch_unwind) and want the same message
//! extraction.
//!
//! Capturing relies on unwinding. Under `panic = "abort"` a fault still
//! terminates the process.

use core::any::Any;
use core::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use crate::types::{Message, Outcome};

/// Message used when a panic payload is neither `&'static str` nor `String`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fault::NON_TEXT_PAYLOAD, Outcome};
///
/// let out = Outcome::<u8>::of(|| std::panic::panic_any(17_u32));
/// assert_eq!(out.error(), Some(NON_TEXT_PAYLOAD));
/// ```
pub const NON_TEXT_PAYLOAD: &str = "panicked with a non-text payload";

static QUIET_HOOK: Once = Once::new();

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
}

fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CAPTURING.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Runs `f`, converting a panic into a failure carrying the panic's message.
///
/// The closure is asserted unwind-safe: an [`Outcome`] produced after a fault
/// never exposes the partially-updated state the closure may have touched.
#[inline]
pub(crate) fn capture<R, F>(f: F) -> Outcome<R>
where
    F: FnOnce() -> R,
{
    install_quiet_hook();

    // Restored rather than cleared, so nested captures stay quiet.
    let outer = CAPTURING.with(|flag| flag.replace(true));
    let caught = panic::catch_unwind(AssertUnwindSafe(f));
    CAPTURING.with(|flag| flag.set(outer));

    match caught {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(panic_message(payload)),
    }
}

/// Extracts the human-readable text from a panic payload.
///
/// `panic!("literal")` carries a `&'static str`, formatted panics carry a
/// `String`. Anything else maps to [`NON_TEXT_PAYLOAD`].
///
/// # Examples
///
/// ```
/// use outcome_rail::fault::panic_message;
///
/// let payload = std::panic::catch_unwind(|| panic!("code {}", 7)).unwrap_err();
/// assert_eq!(panic_message(payload), "code 7");
/// ```
pub fn panic_message(payload: Box<dyn Any + Send>) -> Message {
    match payload.downcast::<&'static str>() {
        Ok(text) => Message::Borrowed(*text),
        Err(payload) => match payload.downcast::<String>() {
            Ok(text) => Message::Owned(*text),
            Err(_) => Message::Borrowed(NON_TEXT_PAYLOAD),
        },
    }
}
