use crate::types::invalid_state::InvalidStateError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-track result of a fallible pipeline step.
///
/// `Outcome<T, E>` is either on the success track carrying a `T`, or on the
/// failure track carrying an `E`. Combinators such as [`ensure`](Outcome::ensure)
/// and [`map`](Outcome::map) run only on the success track; once a step fails,
/// every later step passes the first error through untouched.
///
/// All combinators consume `self` and return a new `Outcome`; nothing is
/// mutated in place.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The error type
///
/// # Variants
///
/// * `Success(T)` - Contains the payload that passed every step so far
/// * `Failure(E)` - Contains the error of the first step that failed
///
/// # Examples
///
/// ```
/// use rop_rail::Outcome;
///
/// let port: Outcome<u16, &str> = Outcome::create(8080)
///     .ensure(|p| *p >= 1024, "privileged port")
///     .ensure(|p| *p != 9000, "reserved port");
///
/// assert!(port.is_success());
/// assert_eq!(*port.value(), 8080);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    /// Payload still on the success track.
    Success(T),
    /// Error that switched the pipeline to the failure track.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Starts a pipeline from a value that needs no validation of its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// let start = Outcome::<_, &str>::create("input");
    /// assert!(start.is_success());
    /// ```
    #[inline]
    pub fn create(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a value on the success track.
    ///
    /// Identical to [`create`](Outcome::create); reads better inside a
    /// [`map`](Outcome::map) continuation that itself cannot fail.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error on the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// let failed = Outcome::<i32, _>::failure("boom");
    /// assert!(failed.is_failure());
    /// assert_eq!(*failed.error(), "boom");
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome is on the success track.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is on the failure track.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidStateError::ValueOfFailure`] if the outcome is a
    /// failure. Use [`try_value`](Outcome::try_value) to check without panicking.
    ///
    /// ```should_panic
    /// use rop_rail::Outcome;
    ///
    /// let failed = Outcome::<i32, &str>::failure("boom");
    /// let _ = failed.value();
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidStateError::ErrorOfSuccess`] if the outcome is a success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the success payload, or [`InvalidStateError`] on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::{InvalidStateError, Outcome};
    ///
    /// let failed = Outcome::<i32, &str>::failure("boom");
    /// assert_eq!(failed.try_value(), Err(InvalidStateError::ValueOfFailure));
    /// ```
    #[inline]
    pub fn try_value(&self) -> Result<&T, InvalidStateError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(InvalidStateError::ValueOfFailure),
        }
    }

    /// Returns the failure payload, or [`InvalidStateError`] on a success.
    #[inline]
    pub fn try_error(&self) -> Result<&E, InvalidStateError> {
        match self {
            Self::Success(_) => Err(InvalidStateError::ErrorOfSuccess),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Keeps the outcome on the success track only if `predicate` holds.
    ///
    /// A failure is returned unchanged and `predicate` is never called. On a
    /// success, `predicate` is evaluated once against the payload: `true` keeps
    /// the same success, `false` switches to `Failure(error)`.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Side-effect free check over the payload
    /// * `error` - Error to report when the check fails
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// let checked = Outcome::<i32, &str>::create(7)
    ///     .ensure(|n| *n > 0, "must be positive")
    ///     .ensure(|n| n % 2 == 0, "must be even")
    ///     .ensure(|n| *n < 5, "must be small");
    ///
    /// assert_eq!(*checked.error(), "must be even");
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error)
                }
            },
            Self::Failure(first) => Self::Failure(first),
        }
    }

    /// Like [`ensure`](Outcome::ensure), but builds the error only when the check fails.
    ///
    /// `make_error` sees the rejected payload, which lets the message mention it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// let checked = Outcome::<u32, String>::create(70_000)
    ///     .ensure_with(|n| *n <= 65_535, |n| format!("{n} is not a port"));
    ///
    /// assert_eq!(checked.error(), "70000 is not a port");
    /// ```
    #[inline]
    pub fn ensure_with<P, F>(self, predicate: P, make_error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(make_error(&value))
                }
            },
            Self::Failure(first) => Self::Failure(first),
        }
    }

    /// Feeds the success payload into the next fallible step.
    ///
    /// On a failure the same error is carried over to `Outcome<U, E>` and
    /// `transform` is never called. On a success the outcome of `transform` is
    /// returned as is, so a step that fails inside `transform` switches the
    /// pipeline to the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// fn parse(raw: &str) -> Outcome<i32, String> {
    ///     match raw.parse::<i32>() {
    ///         Ok(n) => Outcome::success(n),
    ///         Err(e) => Outcome::failure(e.to_string()),
    ///     }
    /// }
    ///
    /// let parsed = Outcome::<&str, String>::create("42").map(parse);
    /// assert_eq!(*parsed.value(), 42);
    ///
    /// let broken = Outcome::<&str, String>::create("x").map(parse);
    /// assert!(broken.is_failure());
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the success payload with an infallible function.
    #[inline]
    pub fn map_value<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error while leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// let failed = Outcome::<(), u16>::failure(404).map_error(|code| format!("HTTP {code}"));
    /// assert_eq!(failed.error(), "HTTP 404");
    /// ```
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Switches back to the success track by handling the error.
    ///
    /// `recovery` is called only on a failure; a success passes through.
    #[inline]
    pub fn or_else<G, F>(self, recovery: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    /// Calls `f` with the payload if the outcome is a success.
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the error if the outcome is a failure.
    #[inline]
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Consumes the outcome, running exactly one of the two handlers.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// let rendered = Outcome::<i32, &str>::failure("nope")
    ///     .fold(|n| n.to_string(), |e| format!("error: {e}"));
    /// assert_eq!(rendered, "error: nope");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Borrows both tracks.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Extracts the payload, if the outcome is a success.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, if the outcome is a failure.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result` so `?` can take over at the boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::Outcome;
    ///
    /// fn checked(n: i32) -> Result<i32, &'static str> {
    ///     let n = Outcome::create(n).ensure(|n| *n != 0, "zero").into_result()?;
    ///     Ok(100 / n)
    /// }
    ///
    /// assert_eq!(checked(4), Ok(25));
    /// assert_eq!(checked(0), Err("zero"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collects payloads until the first failure, which becomes the result.
///
/// Iteration stops at the first failure; later items are not pulled.
///
/// # Examples
///
/// ```
/// use rop_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.value(), &vec![1, 2]);
///
/// let first_bad: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(*first_bad.error(), "a");
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter().map(Outcome::into_result).collect::<Result<C, E>>().into()
    }
}
