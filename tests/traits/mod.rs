use outcome_rail::traits::{IntoSuccess, ResultOutcomeExt};
use outcome_rail::Outcome;


#[test]
fn into_success_lifts_any_value() {
    assert_eq!(42.into_success(), Outcome::succeed(42));
    assert_eq!("text".into_success(), Outcome::succeed("text"));
}

#[test]
fn result_into_outcome_uses_error_display() {
    let ok: Result<i32, String> = Ok(3);
    assert_eq!(ok.into_outcome(), Outcome::succeed(3));

    let err = std::fs::read_to_string("definitely/not/here.txt").into_outcome();
    let message = err.error().expect("missing file must fail");
    assert!(!message.is_empty());
}

#[test]
fn outcome_or_overrides_error_text() {
    let err: Result<i32, &str> = Err("raw");
    assert_eq!(err.outcome_or("friendly").error(), Some("friendly"));

    let ok: Result<i32, &str> = Ok(1);
    assert_eq!(ok.outcome_or("friendly"), Outcome::succeed(1));
}
