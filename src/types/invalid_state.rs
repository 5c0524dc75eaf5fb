use core::fmt::{self, Display};

/// Contract violation raised when a track is read from the wrong side.
///
/// Reading the payload of a failure, or the error of a success, is a
/// programmer error rather than a domain failure.
/// [`Outcome::value`](crate::Outcome::value) and
/// [`Outcome::error`](crate::Outcome::error) panic with this message;
/// [`Outcome::try_value`](crate::Outcome::try_value) and
/// [`Outcome::try_error`](crate::Outcome::try_error) return it instead.
///
/// # Examples
///
/// ```
/// use rop_rail::{InvalidStateError, Outcome};
///
/// let ok = Outcome::<i32, &str>::success(1);
/// let err = ok.try_error().unwrap_err();
///
/// assert_eq!(err, InvalidStateError::ErrorOfSuccess);
/// assert!(err.to_string().contains("successful"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidStateError {
    /// The payload was requested from a failed outcome.
    ValueOfFailure,
    /// The error was requested from a successful outcome.
    ErrorOfSuccess,
}

impl InvalidStateError {
    /// Name of the accessor that was misused.
    #[must_use]
    pub const fn accessor(&self) -> &'static str {
        match self {
            Self::ValueOfFailure => "value",
            Self::ErrorOfSuccess => "error",
        }
    }
}

impl Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOfFailure => {
                f.write_str("invalid state: `value` read from a failed outcome")
            },
            Self::ErrorOfSuccess => {
                f.write_str("invalid state: `error` read from a successful outcome")
            },
        }
    }
}

impl core::error::Error for InvalidStateError {}
