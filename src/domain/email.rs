use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::domain::{errors, Limits};
use crate::types::{Outcome, RailOutcome};
use crate::validation::rules;

/// Email address that passed the blank, length, and shape checks.
///
/// Only constructible through [`Email::create`] or [`Email::create_with`].
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    address: String,
}

impl Email {
    /// Validates `address` against the default [`Limits`].
    ///
    /// Checks run in order and the first violation wins:
    /// not blank, at most 100 characters, `local@domain.tld` shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::domain::Email;
    ///
    /// let email = Email::create("user@email.com");
    /// assert_eq!(email.value().address(), "user@email.com");
    ///
    /// let bad = Email::create("not-an-email");
    /// assert_eq!(bad.error().message(), "Invalid email format.");
    /// ```
    pub fn create(address: impl Into<String>) -> RailOutcome<Self> {
        Self::create_with(&Limits::default(), address)
    }

    /// Validates `address` against explicit limits.
    pub fn create_with(limits: &Limits, address: impl Into<String>) -> RailOutcome<Self> {
        let outcome = Outcome::create(address.into())
            .ensure(rules::not_blank, errors::email::empty())
            .ensure(rules::max_chars(limits.email_max_chars), errors::email::too_long())
            .ensure(rules::has_email_shape, errors::email::invalid_format())
            .map(|address| Outcome::success(Self { address }));

        #[cfg(feature = "tracing")]
        let outcome = {
            use crate::tracing_ext::TraceOutcomeExt;
            outcome.trace_failure("email.create")
        };

        outcome
    }

    #[must_use]
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.address
    }
}
