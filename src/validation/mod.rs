//! Reusable validation rules.
//!
//! Rules are plain predicates over a borrowed payload. They carry no error of
//! their own; the pipeline attaches one at the `ensure` call site, which keeps
//! the same rule reusable under different messages.
//!
//! # Examples
//!
//! ```
//! use rop_rail::validation::rules::{max_chars, not_blank};
//! use rop_rail::{Outcome, RailError};
//!
//! let title = Outcome::<&str, RailError>::create("Release notes")
//!     .ensure(not_blank, RailError::empty("title is required"))
//!     .ensure(max_chars(40), RailError::too_long("title is too long"));
//!
//! assert_eq!(*title.value(), "Release notes");
//! ```
pub mod rules;

pub use rules::{char_len, is_blank, max_chars, not_blank};
#[cfg(feature = "std")]
pub use rules::{has_email_shape, EMAIL_SHAPE_PATTERN};
