use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{errors, Email, Limits};
use crate::types::{Outcome, RailOutcome};
use crate::validation::rules;

/// Registered user with a validated name and email.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    name: String,
    email: Email,
}

impl User {
    /// Validates `name` against the default [`Limits`] and assigns a fresh id.
    ///
    /// Checks run in order and the first violation wins: not blank, at most
    /// 20 characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::domain::{Email, User};
    ///
    /// let email = Email::create("user@email.com").into_value().unwrap();
    ///
    /// let user = User::create("Mohamed Ehab", email.clone());
    /// assert_eq!(user.value().name(), "Mohamed Ehab");
    ///
    /// let nameless = User::create("", email);
    /// assert_eq!(nameless.error().message(), "User name can not be empty");
    /// ```
    pub fn create(name: impl Into<String>, email: Email) -> RailOutcome<Self> {
        Self::create_with(&Limits::default(), name, email)
    }

    /// Validates `name` against explicit limits.
    pub fn create_with(limits: &Limits, name: impl Into<String>, email: Email) -> RailOutcome<Self> {
        let max_chars = limits.user_name_max_chars;

        let outcome = Outcome::create((name.into(), email))
            .ensure(|(name, _)| rules::not_blank(name), errors::user::empty())
            .ensure_with(
                |(name, _)| rules::char_len(name) <= max_chars,
                |_| errors::user::too_long(max_chars),
            )
            .map(|(name, email)| Outcome::success(Self { id: Uuid::new_v4(), name, email }));

        #[cfg(feature = "tracing")]
        let outcome = {
            use crate::tracing_ext::TraceOutcomeExt;
            outcome.trace_failure("user.create").trace_success("user.create")
        };

        outcome
    }

    /// Validates the address first, then the name.
    ///
    /// An invalid address short-circuits: the name is never checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::domain::User;
    ///
    /// let user = User::register("", "broken");
    /// assert_eq!(user.error().message(), "Invalid email format.");
    /// ```
    pub fn register(name: impl Into<String>, address: impl Into<String>) -> RailOutcome<Self> {
        Self::register_with(&Limits::default(), name, address)
    }

    /// [`User::register`] with explicit limits.
    pub fn register_with(
        limits: &Limits,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> RailOutcome<Self> {
        Email::create_with(limits, address).map(|email| Self::create_with(limits, name, email))
    }

    #[must_use]
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.id, self.name, self.email.address())
    }
}
