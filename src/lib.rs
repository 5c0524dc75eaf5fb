//! Railway oriented validation pipelines.
//!
//! A fallible computation is modelled as two tracks. [`Outcome`] is either on
//! the success track or on the failure track; [`ensure`](Outcome::ensure) and
//! [`map`](Outcome::map) only run while the value is still on the success
//! track, so the first failing step decides the error and every later step is
//! skipped.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `rop_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining checks
//!
//! ```
//! use rop_rail::{Outcome, RailError};
//! use rop_rail::validation::rules::{max_chars, not_blank};
//!
//! fn username(raw: &str) -> Outcome<String, RailError> {
//!     Outcome::create(raw.to_string())
//!         .ensure(not_blank, RailError::empty("username is required"))
//!         .ensure(max_chars(12), RailError::too_long("username is too long"))
//! }
//!
//! assert!(username("rail_fan").is_success());
//! assert_eq!(username(" ").error().message(), "username is required");
//! ```
//!
//! ## Building a value at the end of the rail
//!
//! ```
//! use rop_rail::Outcome;
//!
//! struct Percent(u8);
//!
//! let pct = Outcome::<u8, &str>::create(42)
//!     .ensure(|n| *n <= 100, "over 100")
//!     .map(|n| Outcome::success(Percent(n)));
//!
//! assert_eq!(pct.value().0, 42);
//! ```
//!
//! ## Leaving the rail with `?`
//!
//! ```
//! use rop_rail::Outcome;
//!
//! fn half(n: u32) -> Result<u32, &'static str> {
//!     let even = Outcome::create(n).ensure(|n| n % 2 == 0, "odd").into_result()?;
//!     Ok(even / 2)
//! }
//!
//! assert_eq!(half(8), Ok(4));
//! assert_eq!(half(7), Err("odd"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits connecting `Outcome` with `Result` and generic error-handling code
pub mod traits;
/// Outcome and error types
pub mod types;
/// Reusable validation rules
pub mod validation;

/// Demonstration `Email` and `User` types (requires `domain` feature)
#[cfg(feature = "domain")]
pub mod domain;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{ErrorKind, InvalidStateError, Outcome, RailError, RailOutcome};
