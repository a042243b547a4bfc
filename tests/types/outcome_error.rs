use std::error::Error;

use outcome_rail::{Outcome, OutcomeError};

fn load_port(raw: Outcome<u16>) -> Result<u16, OutcomeError> {
    let port = raw.into_result()?;
    Ok(port + 1)
}

#[test]
fn into_result_bridges_to_question_mark() {
    assert_eq!(load_port(Outcome::succeed(8079)), Ok(8080));

    let err = load_port(Outcome::fail("port missing")).unwrap_err();
    assert_eq!(err.message(), "port missing");
}

#[test]
fn outcome_error_is_a_std_error_without_source() {
    let err = OutcomeError::new("bad header");
    assert_eq!(err.to_string(), "bad header");
    assert!(err.source().is_none());

    let boxed: Box<dyn Error + Send + Sync> = Box::new(err);
    assert_eq!(boxed.to_string(), "bad header");
}

#[test]
fn outcome_error_converts_back_into_failure() {
    let out: Outcome<u8> = OutcomeError::new("late").into();
    assert_eq!(out.error(), Some("late"));

    let result: Result<u8, OutcomeError> = Outcome::succeed(2).into();
    assert_eq!(result, Ok(2));
}

#[test]
fn into_message_returns_text() {
    assert_eq!(OutcomeError::new(String::from("owned")).into_message(), "owned");
}
