use std::borrow::Cow;

#[cfg(feature = "std")]
use rop_rail::validation::rules::{has_email_shape, EMAIL_SHAPE_PATTERN};
use rop_rail::validation::rules::{char_len, is_blank, max_chars, not_blank};
use rop_rail::{Outcome, RailError};

#[test]
fn whitespace_only_counts_as_blank() {
    assert!(is_blank(""));
    assert!(is_blank("   "));
    assert!(is_blank("\t\n"));
    assert!(is_blank("\u{3000}"));
    assert!(!is_blank(" a "));
    assert!(not_blank("a"));
}

#[test]
fn rules_accept_any_string_like_payload() {
    let owned = String::from("x");
    let cow: Cow<'_, str> = Cow::Borrowed(" ");
    assert!(not_blank(&owned));
    assert!(is_blank(&cow));
}

#[test]
fn length_bound_is_inclusive() {
    let rule = max_chars::<str>(5);
    assert!(rule("12345"));
    assert!(!rule("123456"));
    assert!(rule(""));
}

#[test]
fn length_counts_characters_not_bytes() {
    assert_eq!(char_len("héllo"), 5);
    assert!(max_chars::<str>(5)("héllo"));
}

#[cfg(feature = "std")]
#[test]
fn email_shape_accepts_minimal_addresses() {
    for ok in ["user@email.com", "a@b.c", "first.last@sub.domain.org", "x+tag@d.io", "a@.b.c"] {
        assert!(has_email_shape(ok), "{ok} should pass");
    }
}

#[cfg(feature = "std")]
#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in [
        "",
        "not-an-email",
        "@email.com",
        "user@",
        "user@.com",
        "user@com.",
        "user@localhost",
        "user@@email.com",
        "us@er@email.com",
        "user @email.com",
        "user@email.com\n",
    ] {
        assert!(!has_email_shape(bad), "{bad:?} should fail");
    }
}

#[cfg(feature = "std")]
#[test]
fn email_shape_uses_the_minimal_pattern() {
    assert_eq!(EMAIL_SHAPE_PATTERN, r"^[^@\s]+@[^@\s]+\.[^@\s]+$");
}

#[cfg(feature = "std")]
#[test]
fn email_shape_treats_unicode_whitespace_as_whitespace() {
    assert!(!has_email_shape("user\u{3000}@email.com"));
    assert!(!has_email_shape("user@email.com\u{a0}"));
    assert!(has_email_shape("müller@exämple.de"));
}

#[test]
fn rules_plug_into_ensure() {
    let checked = Outcome::<String, RailError>::create("  ".to_string())
        .ensure(not_blank, RailError::empty("blank"))
        .ensure(max_chars(1), RailError::too_long("long"));

    assert_eq!(checked.error().message(), "blank");
}
