use outcome_rail::{fail, outcome, try_outcome, Outcome};

fn checked_div(a: i32, b: i32) -> Outcome<i32> {
    if b == 0 {
        return fail!("cannot divide {} by zero", a);
    }
    Outcome::succeed(a / b)
}

fn ratio_sum(a: i32, b: i32, c: i32) -> Outcome<i32> {
    let first = try_outcome!(checked_div(a, b));
    let second = try_outcome!(checked_div(a, c));
    Outcome::succeed(first + second)
}

#[test]
fn fail_formats_message() {
    assert_eq!(checked_div(4, 0).error(), Some("cannot divide 4 by zero"));
}

#[test]
fn try_outcome_unwraps_success() {
    assert_eq!(ratio_sum(12, 3, 4), Outcome::succeed(7));
}

#[test]
fn try_outcome_returns_first_failure() {
    assert_eq!(ratio_sum(12, 0, 0).error(), Some("cannot divide 12 by zero"));
}

#[test]
fn outcome_macro_captures_panics() {
    let empty: Vec<u8> = Vec::new();
    assert_eq!(outcome!(1 + 1), Outcome::succeed(2));
    assert!(outcome!(empty[0]).is_failure());
    assert_eq!(outcome!(empty[0], "empty input").error(), Some("empty input"));
}
