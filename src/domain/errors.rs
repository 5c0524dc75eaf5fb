//! Message catalogue for the demonstration domain.
//!
//! Messages are kept as constants so callers and tests can match on the exact
//! text; the constructor functions attach the matching [`ErrorKind`](crate::ErrorKind).

use crate::types::RailError;

pub mod email {
    use super::RailError;

    pub const EMPTY: &str = "Email address can not be empty.";
    pub const TOO_LONG: &str = "Email address is too long.";
    pub const INVALID_FORMAT: &str = "Invalid email format.";

    #[inline]
    pub fn empty() -> RailError {
        RailError::empty(EMPTY)
    }

    #[inline]
    pub fn too_long() -> RailError {
        RailError::too_long(TOO_LONG)
    }

    #[inline]
    pub fn invalid_format() -> RailError {
        RailError::invalid_format(INVALID_FORMAT)
    }
}

pub mod user {
    use super::RailError;
    use crate::domain::Limits;

    pub const EMPTY: &str = "User name can not be empty";
    pub const TOO_LONG: &str = "User name must be less than or equal to 20 characters.";

    #[inline]
    pub fn empty() -> RailError {
        RailError::empty(EMPTY)
    }

    /// Too-long error for the given limit.
    ///
    /// The default limit reuses [`TOO_LONG`] without allocating.
    pub fn too_long(max_chars: usize) -> RailError {
        if max_chars == Limits::DEFAULT_USER_NAME_MAX_CHARS {
            return RailError::too_long(TOO_LONG);
        }
        RailError::too_long(format!(
            "User name must be less than or equal to {max_chars} characters."
        ))
    }
}
