use rop_rail::domain::{errors, Email, Limits, User};
use rop_rail::ErrorKind;
use uuid::Uuid;

fn email() -> Email {
    Email::create("user@email.com").into_value().expect("fixture email is valid")
}

#[test]
fn valid_user_renders_id_name_and_address() {
    let user = User::create("Mohamed Ehab", email());
    assert!(user.is_success());

    let user = user.value();
    let rendered = user.to_string();
    assert!(rendered.contains("Mohamed Ehab"));
    assert!(rendered.contains("user@email.com"));

    let id = rendered
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .map(|(id, _)| id)
        .expect("rendered user starts with a bracketed id");
    assert_eq!(Uuid::parse_str(id).ok(), Some(user.id()));
    assert_eq!(rendered, format!("[{}] Mohamed Ehab user@email.com", user.id()));
}

#[test]
fn each_user_gets_a_fresh_id() {
    let a = User::create("Ada", email()).into_value().unwrap();
    let b = User::create("Ada", email()).into_value().unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn empty_name_is_rejected() {
    let user = User::create("", email());
    assert_eq!(user.error().message(), "User name can not be empty");
    assert_eq!(user.error().kind(), ErrorKind::EmptyValue);
}

#[test]
fn whitespace_name_is_rejected_as_empty() {
    let user = User::create("   ", email());
    assert_eq!(user.error().message(), errors::user::EMPTY);
}

#[test]
fn name_of_twenty_characters_is_accepted() {
    let name = "a".repeat(20);
    let user = User::create(name.clone(), email());
    assert_eq!(user.value().name(), name);
}

#[test]
fn name_of_twenty_one_characters_is_rejected() {
    let user = User::create("a".repeat(21), email());
    assert_eq!(
        user.error().message(),
        "User name must be less than or equal to 20 characters."
    );
    assert_eq!(user.error().kind(), ErrorKind::TooLong);
}

#[test]
fn invalid_email_format_is_rejected() {
    let email = Email::create("not-an-email");
    assert_eq!(email.error().message(), "Invalid email format.");
    assert_eq!(email.error().kind(), ErrorKind::InvalidFormat);
}

#[test]
fn blank_email_is_rejected_before_format() {
    let email = Email::create(" ");
    assert_eq!(email.error().message(), "Email address can not be empty.");
}

#[test]
fn email_longer_than_one_hundred_characters_is_rejected() {
    let domain = "@email.com";
    let address = format!("{}{domain}", "a".repeat(101 - domain.len()));
    assert_eq!(address.chars().count(), 101);

    let email = Email::create(address);
    assert_eq!(email.error().message(), "Email address is too long.");
    assert_eq!(email.error().kind(), ErrorKind::TooLong);
}

#[test]
fn email_of_exactly_one_hundred_characters_is_accepted() {
    let domain = "@email.com";
    let address = format!("{}{domain}", "a".repeat(100 - domain.len()));

    let email = Email::create(address.clone());
    assert_eq!(email.value().address(), address);
    assert_eq!(email.value().to_string(), address);
}

#[test]
fn too_long_wins_over_invalid_format() {
    let email = Email::create("x".repeat(150));
    assert_eq!(email.error().message(), errors::email::TOO_LONG);
}

#[test]
fn register_short_circuits_on_the_email() {
    let user = User::register("", "not-an-email");
    assert_eq!(user.error().message(), errors::email::INVALID_FORMAT);

    let user = User::register("", "user@email.com");
    assert_eq!(user.error().message(), errors::user::EMPTY);
}

#[test]
fn custom_limits_drive_checks_and_messages() {
    let limits = Limits { user_name_max_chars: 3, email_max_chars: 8 };

    let email = Email::create_with(&limits, "ab@cd.ef");
    assert!(email.is_success());
    assert!(Email::create_with(&limits, "abc@cd.ef").is_failure());

    let user = User::create_with(&limits, "Abcd", email.into_value().unwrap());
    assert_eq!(
        user.error().message(),
        "User name must be less than or equal to 3 characters."
    );
}

#[test]
fn default_limits_match_the_catalogue() {
    let limits = Limits::default();
    assert_eq!(limits.user_name_max_chars, 20);
    assert_eq!(limits.email_max_chars, 100);
    assert_eq!(errors::user::too_long(20).message(), errors::user::TOO_LONG);
}
