//! Core types of the rail.
//!
//! # Examples
//!
//! ```
//! use rop_rail::{ErrorKind, Outcome, RailError};
//!
//! let name: Outcome<&str, RailError> = Outcome::create("")
//!     .ensure(|n| !n.is_empty(), RailError::empty("name is required"));
//!
//! assert_eq!(name.error().kind(), ErrorKind::EmptyValue);
//! ```
pub(crate) mod alloc_type;
pub mod invalid_state;
pub mod outcome;
pub mod rail_error;

pub use invalid_state::*;
pub use outcome::*;
pub use rail_error::*;

/// Outcome whose failure track carries a [`RailError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type RailOutcome<T> = Outcome<T, RailError>;
