//! Extension trait for moving standard `Result` values onto the rail.
//!
//! # Examples
//!
//! ```
//! use rop_rail::traits::ResultExt;
//!
//! let parsed = "42"
//!     .parse::<u8>()
//!     .map_err(|e| e.to_string())
//!     .ensure(|n| *n < 100, "out of range".to_string());
//!
//! assert_eq!(*parsed.value(), 42);
//! ```

use crate::types::Outcome;

/// Extension methods for `Result` that return an [`Outcome`].
///
/// Useful when a pipeline starts from a std API that already reports
/// failures as `Result`.
pub trait ResultExt<T, E> {
    /// Converts into an [`Outcome`] on the same track.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts into an [`Outcome`] and applies [`Outcome::ensure`].
    ///
    /// An `Err` short-circuits; `predicate` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::traits::ResultExt;
    ///
    /// let result: Result<i32, &str> = Err("io failed");
    /// let checked = result.ensure(|_| unreachable!(), "never used");
    /// assert_eq!(*checked.error(), "io failed");
    /// ```
    fn ensure<P>(self, predicate: P, error: E) -> Outcome<T, E>
    where
        P: FnOnce(&T) -> bool;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }

    #[inline]
    fn ensure<P>(self, predicate: P, error: E) -> Outcome<T, E>
    where
        P: FnOnce(&T) -> bool,
    {
        self.into_outcome().ensure(predicate, error)
    }
}
