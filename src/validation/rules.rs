//! String rules shaped to plug straight into [`Outcome::ensure`](crate::Outcome::ensure).
//!
//! Every rule is generic over `AsRef<str>`, so the same function can check a
//! `String`, a `&str`, or a `Cow<str>` payload without an adapter closure.

/// Returns `true` if the value is empty or consists only of whitespace.
///
/// Whitespace follows Unicode `White_Space`, matching [`char::is_whitespace`].
#[must_use]
#[inline]
pub fn is_blank<S: AsRef<str> + ?Sized>(value: &S) -> bool {
    value.as_ref().trim().is_empty()
}

/// Negation of [`is_blank`].
///
/// # Examples
///
/// ```
/// use rop_rail::validation::rules::not_blank;
/// use rop_rail::Outcome;
///
/// let name = Outcome::<String, &str>::create("   ".to_string()).ensure(not_blank, "blank");
/// assert_eq!(*name.error(), "blank");
/// ```
#[must_use]
#[inline]
pub fn not_blank<S: AsRef<str> + ?Sized>(value: &S) -> bool {
    !is_blank(value)
}

/// Number of Unicode scalar values in the value.
#[must_use]
#[inline]
pub fn char_len<S: AsRef<str> + ?Sized>(value: &S) -> usize {
    value.as_ref().chars().count()
}

/// Builds a rule accepting values of at most `max` characters.
///
/// The bound is inclusive: a value of exactly `max` characters passes.
///
/// # Examples
///
/// ```
/// use rop_rail::validation::rules::max_chars;
///
/// let rule = max_chars::<str>(3);
/// assert!(rule("abc"));
/// assert!(!rule("abcd"));
/// ```
#[must_use]
pub fn max_chars<S: AsRef<str> + ?Sized>(max: usize) -> impl Fn(&S) -> bool {
    move |value| char_len(value) <= max
}

/// Pattern behind [`has_email_shape`].
#[cfg(feature = "std")]
pub const EMAIL_SHAPE_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

#[cfg(feature = "std")]
static EMAIL_SHAPE: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
    regex::Regex::new(EMAIL_SHAPE_PATTERN).expect("email shape pattern compiles")
});

/// Minimal `local@domain.tld` shape check.
///
/// Matches [`EMAIL_SHAPE_PATTERN`]: one or more characters that are neither
/// `@` nor whitespace, an `@`, then a domain of the same characters containing
/// a `.` with at least one character on each side. It does not attempt RFC 5322.
///
/// # Examples
///
/// ```
/// use rop_rail::validation::rules::has_email_shape;
///
/// assert!(has_email_shape("user@email.com"));
/// assert!(has_email_shape("a@b.c.d"));
/// assert!(!has_email_shape("not-an-email"));
/// assert!(!has_email_shape("two@@signs.com"));
/// assert!(!has_email_shape("user@localhost"));
/// assert!(!has_email_shape("spaced user@email.com"));
/// ```
#[cfg(feature = "std")]
#[must_use]
pub fn has_email_shape<S: AsRef<str> + ?Sized>(value: &S) -> bool {
    EMAIL_SHAPE.is_match(value.as_ref())
}
