//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rop_rail::prelude::*;
//!
//! let checked: RailOutcome<&str> = Outcome::create("value")
//!     .ensure(not_blank, RailError::empty("value is required"));
//! assert!(checked.is_success());
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`RailOutcome`], [`RailError`], [`ErrorKind`]
//! - **Traits**: [`ResultExt`]
//! - **Rules**: [`not_blank`], [`max_chars`], `has_email_shape` (requires `std`)

pub use crate::traits::ResultExt;
pub use crate::types::{ErrorKind, Outcome, RailError, RailOutcome};
#[cfg(feature = "std")]
pub use crate::validation::rules::has_email_shape;
pub use crate::validation::rules::{max_chars, not_blank};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceOutcomeExt;
