//! Structured error value for validation failures.
//!
//! A [`RailError`] pairs a machine-checkable [`ErrorKind`] with a
//! human-readable message. Catalogue messages are `&'static str` and are
//! stored without allocating; formatted messages own their text.

use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of rule violations a validation step can report.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// The value was empty or contained only whitespace.
    EmptyValue,
    /// The value exceeded its length limit.
    TooLong,
    /// The value did not have the expected shape.
    InvalidFormat,
}

impl ErrorKind {
    /// Stable snake_case code, suitable for logs and API payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::TooLong.code(), "too_long");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyValue => "empty_value",
            Self::TooLong => "too_long",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error carried on the failure track of a validation pipeline.
///
/// `Display` prints only the message, so a failed pipeline can be shown to a
/// user as is. The kind stays available through [`RailError::kind`].
///
/// # Examples
///
/// ```
/// use rop_rail::{ErrorKind, RailError};
///
/// let err = RailError::new(ErrorKind::EmptyValue, "name is required");
/// assert_eq!(err.kind(), ErrorKind::EmptyValue);
/// assert_eq!(err.to_string(), "name is required");
///
/// let owned = RailError::new(ErrorKind::TooLong, format!("at most {} chars", 8));
/// assert_eq!(owned.message(), "at most 8 chars");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RailError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl RailError {
    /// Creates an error of the given kind.
    #[inline]
    pub fn new<M>(kind: ErrorKind, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { kind, message: message.into() }
    }

    /// Shorthand for [`ErrorKind::EmptyValue`].
    #[inline]
    pub fn empty<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::new(ErrorKind::EmptyValue, message)
    }

    /// Shorthand for [`ErrorKind::TooLong`].
    #[inline]
    pub fn too_long<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::new(ErrorKind::TooLong, message)
    }

    /// Shorthand for [`ErrorKind::InvalidFormat`].
    #[inline]
    pub fn invalid_format<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::new(ErrorKind::InvalidFormat, message)
    }

    #[must_use]
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message.into_owned()
    }
}

impl Display for RailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for RailError {}
