use std::cell::Cell;

use outcome_rail::{Outcome, Unit};

#[test]
fn map_transforms_success_payload() {
    let out = Outcome::succeed(21).map(|n| n * 2);
    assert_eq!(out, Outcome::succeed(42));
}

#[test]
fn map_skips_continuation_on_failure() {
    let called = Cell::new(false);
    let out = Outcome::<i32>::fail("nope").map(|n| {
        called.set(true);
        n.to_string()
    });

    assert_eq!(out.error(), Some("nope"));
    assert!(!called.get());
}

#[test]
fn map_contains_panics() {
    let out = Outcome::succeed(Vec::<u8>::new()).map(|items| items[3]);
    assert!(out.is_failure());
    assert!(out.error().unwrap().contains("index out of bounds"));
}

#[test]
fn bind_returns_continuation_outcome_directly() {
    let ok = Outcome::succeed("8").bind(|s| Outcome::from(s.parse::<u8>()));
    assert_eq!(ok, Outcome::succeed(8));

    let failed = Outcome::succeed(1).bind(|_| Outcome::<u8>::fail("inner"));
    assert_eq!(failed.error(), Some("inner"));
}

#[test]
fn bind_skips_continuation_on_failure() {
    let called = Cell::new(false);
    let out = Outcome::<i32>::fail("outer").bind(|n| {
        called.set(true);
        Outcome::succeed(n)
    });

    assert_eq!(out.error(), Some("outer"));
    assert!(!called.get());
}

#[test]
fn and_then_matches_bind() {
    let step = |n: i32| Outcome::succeed(n + 1);
    assert_eq!(Outcome::succeed(1).and_then(step), Outcome::succeed(1).bind(step));
}

// bind is deliberately not a catch boundary: a panicking continuation escapes.
#[test]
fn bind_does_not_contain_continuation_panics() {
    let escaped = std::panic::catch_unwind(|| {
        Outcome::succeed(1).bind(|_| -> Outcome<i32> { panic!("escaped") })
    });
    assert!(escaped.is_err());
}

#[test]
fn tap_ok_keeps_antecedent_when_effect_succeeds() {
    let calls = Cell::new(0);
    let out = Outcome::succeed("layout".to_string()).tap_ok(|_| {
        calls.set(calls.get() + 1);
        Outcome::succeed(())
    });

    assert_eq!(out, Outcome::succeed("layout".to_string()));
    assert_eq!(calls.get(), 1);
}

#[test]
fn tap_ok_takes_effect_failure_message() {
    let calls = Cell::new(0);
    let out = Outcome::succeed(5).tap_ok(|_| -> Outcome<Unit> {
        calls.set(calls.get() + 1);
        Outcome::fail("write refused")
    });

    assert_eq!(out.error(), Some("write refused"));
    assert_eq!(calls.get(), 1, "effect must run exactly once");
}

#[test]
fn tap_ok_contains_effect_panics() {
    let out = Outcome::succeed(5).tap_ok(|_| -> Outcome<Unit> { panic!("device lost") });
    assert_eq!(out.error(), Some("device lost"));
}

#[test]
fn tap_ok_skips_effect_on_failure() {
    let called = Cell::new(false);
    let out = Outcome::<i32>::fail("earlier").tap_ok(|_| {
        called.set(true);
        Outcome::succeed(())
    });

    assert_eq!(out.error(), Some("earlier"));
    assert!(!called.get());
}

#[test]
fn inspect_ok_runs_effect_and_keeps_antecedent() {
    let seen = Cell::new(0);
    let out = Outcome::succeed(9).inspect_ok(|n| seen.set(*n));

    assert_eq!(out, Outcome::succeed(9));
    assert_eq!(seen.get(), 9);
}

#[test]
fn inspect_ok_contains_effect_panics() {
    let out = Outcome::succeed(9).inspect_ok(|_| panic!("printer jammed"));
    assert_eq!(out.error(), Some("printer jammed"));
}

#[test]
fn inspect_ok_skips_effect_on_failure() {
    let called = Cell::new(false);
    let out = Outcome::<i32>::fail("earlier").inspect_ok(|_| called.set(true));

    assert_eq!(out.error(), Some("earlier"));
    assert!(!called.get());
}

#[test]
fn on_fail_observes_message_and_stays_failed() {
    let mut seen = Vec::new();
    let out = Outcome::<i32>::fail("timeout").on_fail(|m| seen.push(m.to_string()));

    assert_eq!(out.error(), Some("timeout"));
    assert_eq!(seen, vec!["timeout".to_string()]);
}

#[test]
fn on_fail_ignores_success() {
    let called = Cell::new(false);
    let out = Outcome::succeed(3).on_fail(|_| called.set(true));

    assert_eq!(out, Outcome::succeed(3));
    assert!(!called.get());
}

#[test]
fn replace_error_rewrites_failure_message() {
    let out = Outcome::<i32>::fail("eof").replace_error(|m| format!("reading header: {m}"));
    assert_eq!(out.error(), Some("reading header: eof"));
}

#[test]
fn replace_error_ignores_success() {
    let out = Outcome::succeed(3).replace_error(|_| "unused");
    assert_eq!(out, Outcome::succeed(3));
}

#[test]
fn refine_error_prefixes_failure_message() {
    let out = Outcome::<i32>::fail("no such file").refine_error("Loading fonts");
    assert_eq!(out.error(), Some("Loading fonts. no such file"));
}

// Kept for compatibility: refine_error turns a success into a failure with an
// empty original message.
#[test]
fn refine_error_turns_success_into_failure_for_compatibility() {
    let out = Outcome::succeed(3).refine_error("Loading fonts");
    assert_eq!(out.error(), Some("Loading fonts. "));
}

#[test]
fn refine_failure_prefixes_failure_and_ignores_success() {
    let failed = Outcome::<i32>::fail("no such file").refine_failure("Loading fonts");
    assert_eq!(failed.error(), Some("Loading fonts. no such file"));

    assert_eq!(Outcome::succeed(3).refine_failure("Loading fonts"), Outcome::succeed(3));
}

#[test]
fn continuations_run_in_chain_order() {
    let mut order = Vec::new();
    let out = Outcome::succeed(1)
        .inspect_ok(|_| order.push("inspect"))
        .map(|n| n + 1)
        .tap_ok(|_| {
            order.push("tap");
            Outcome::succeed(())
        });

    assert_eq!(out, Outcome::succeed(2));
    assert_eq!(order, vec!["inspect", "tap"]);
}

#[test]
fn failure_short_circuits_long_chain() {
    let calls = Cell::new(0);
    let bump = || calls.set(calls.get() + 1);

    let out = Outcome::<i32>::fail("root cause")
        .map(|n| {
            bump();
            n + 1
        })
        .bind(|n| {
            bump();
            Outcome::succeed(n * 2)
        })
        .tap_ok(|_| {
            bump();
            Outcome::succeed(())
        })
        .inspect_ok(|_| bump())
        .refine_failure("Rendering cloud");

    assert_eq!(out.error(), Some("Rendering cloud. root cause"));
    assert_eq!(calls.get(), 0);
}
