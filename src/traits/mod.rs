//! Traits that connect [`Outcome`](crate::Outcome) with the rest of the error-handling world.
//!
//! - [`ErrorCategory`]: Categorical abstraction for lifting values and handling errors
//! - [`ResultExt`]: Moves a standard `Result` onto the rail
//! - [`WithError`]: Abstraction for types that carry remappable error variants
//!
//! # Examples
//!
//! ```
//! use rop_rail::traits::{ErrorCategory, ResultExt};
//! use rop_rail::Outcome;
//!
//! let lifted: Outcome<i32, String> = <Outcome<(), String>>::lift(42);
//! assert_eq!(lifted, Ok::<_, String>(42).into_outcome());
//! ```

pub mod error_category;
pub mod result_ext;
pub mod with_error;

pub use error_category::ErrorCategory;
pub use result_ext::ResultExt;
pub use with_error::WithError;
