use rop_rail::traits::{ErrorCategory, WithError};
use rop_rail::Outcome;

fn checked_len<C: ErrorCategory<&'static str>>(input: &str) -> C::ErrorFunctor<usize> {
    if input.is_empty() {
        C::handle_error("empty")
    } else {
        C::lift(input.len())
    }
}

#[test]
fn outcome_category_lifts_and_handles() {
    let lifted: Outcome<i32, String> = <Outcome<(), String>>::lift(42);
    assert_eq!(lifted, Outcome::success(42));

    let handled: Outcome<i32, String> = <Outcome<(), String>>::handle_error("bad".to_string());
    assert_eq!(handled, Outcome::failure("bad".to_string()));
}

#[test]
fn generic_code_builds_either_container() {
    assert_eq!(checked_len::<Result<(), &'static str>>("abc"), Ok(3));
    assert_eq!(checked_len::<Outcome<(), &'static str>>(""), Outcome::failure("empty"));
    assert_eq!(checked_len::<Outcome<(), &'static str>>("ab").to_result(), Ok(2));
}
