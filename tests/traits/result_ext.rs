use std::cell::Cell;

use rop_rail::traits::ResultExt;
use rop_rail::Outcome;

#[test]
fn into_outcome_keeps_the_track() {
    assert_eq!(Ok::<i32, &str>(1).into_outcome(), Outcome::success(1));
    assert_eq!(Err::<i32, &str>("bad").into_outcome(), Outcome::failure("bad"));
}

#[test]
fn ensure_on_ok_checks_the_value() {
    let checked = Ok::<i32, &str>(200).ensure(|n| *n < 100, "too big");
    assert_eq!(*checked.error(), "too big");
}

#[test]
fn ensure_on_err_skips_the_predicate() {
    let calls = Cell::new(0);
    let checked = Err::<i32, &str>("io").ensure(
        |_| {
            calls.set(calls.get() + 1);
            false
        },
        "unused",
    );

    assert_eq!(*checked.error(), "io");
    assert_eq!(calls.get(), 0);
}

#[test]
fn parsed_input_joins_the_rail() {
    let port = "8080"
        .parse::<u16>()
        .map_err(|e| e.to_string())
        .ensure(|p| *p >= 1024, "privileged".to_string())
        .map(|p| Outcome::success(format!("0.0.0.0:{p}")));

    assert_eq!(port.value(), "0.0.0.0:8080");
}
