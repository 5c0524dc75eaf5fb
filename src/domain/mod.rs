//! Demonstration domain built on the rail.
//!
//! [`Email`] and [`User`] show how a constructor becomes a short pipeline of
//! `ensure` checks ending in a `map` that builds the value. Neither type can
//! be constructed in an invalid state.
//!
//! # Examples
//!
//! ```
//! use rop_rail::domain::User;
//!
//! let rendered = User::register("Mohamed Ehab", "user@email.com")
//!     .fold(|user| user.to_string(), |err| err.to_string());
//!
//! assert!(rendered.ends_with("Mohamed Ehab user@email.com"));
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod email;
pub mod errors;
pub mod user;

pub use email::Email;
pub use user::User;

/// Length limits applied by the domain constructors.
///
/// Both bounds are inclusive and count characters, not bytes.
///
/// # Examples
///
/// ```
/// use rop_rail::domain::{Limits, User};
///
/// let strict = Limits { user_name_max_chars: 4, ..Limits::default() };
/// let user = User::register_with(&strict, "Mohamed", "user@email.com");
///
/// assert_eq!(
///     user.error().message(),
///     "User name must be less than or equal to 4 characters."
/// );
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub user_name_max_chars: usize,
    pub email_max_chars: usize,
}

impl Limits {
    pub const DEFAULT_USER_NAME_MAX_CHARS: usize = 20;
    pub const DEFAULT_EMAIL_MAX_CHARS: usize = 100;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            user_name_max_chars: Self::DEFAULT_USER_NAME_MAX_CHARS,
            email_max_chars: Self::DEFAULT_EMAIL_MAX_CHARS,
        }
    }
}
