use crate::types::Outcome;

/// Abstraction over two-track types whose error side can be remapped.
///
/// Implemented for both `Result` and [`Outcome`], so helpers that only care
/// about the error side can accept either.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// Inside `impl WithError<E> for Outcome<T, E>`, `Self::Success` is ambiguous
/// between this associated type and the [`Outcome::Success`] variant; spell
/// the concrete type (`T`) or `<Self as WithError<E>>::Success` there.
///
/// # Examples
///
/// ```
/// use rop_rail::traits::WithError;
/// use rop_rail::Outcome;
///
/// let outcome: Outcome<i32, u16> = Outcome::failure(404);
/// let mapped = outcome.fmap_error(|code| format!("HTTP {}", code));
/// assert_eq!(mapped, Outcome::failure("HTTP 404".to_string()));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps the error value using `f`, producing a new container with error type `G`.
    ///
    /// This operation leaves the success case untouched and only transforms the error.
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G;

    /// Converts the container into a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop_rail::traits::WithError;
    /// use rop_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::success(42);
    /// assert_eq!(outcome.to_result(), Ok(42));
    /// ```
    fn to_result(self) -> Result<Self::Success, E>;
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_result(self) -> Result<T, E> {
        self
    }
}

impl<T, E> WithError<E> for Outcome<T, E> {
    type Success = T;
    type ErrorOutput<G> = Outcome<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_error(f)
    }

    #[inline]
    fn to_result(self) -> Result<T, E> {
        self.into_result()
    }
}
