use crate::traits::WithError;
use crate::types::Outcome;

/// Lifts plain values and errors into a two-track container.
///
/// The implementor acts as a tag (`Result<(), E>` or `Outcome<(), E>`) that
/// names which container family to build, so generic validation code can
/// produce either without knowing which one the caller wants.
///
/// # Examples
///
/// ```
/// use rop_rail::traits::ErrorCategory;
/// use rop_rail::Outcome;
///
/// fn non_zero<C: ErrorCategory<&'static str>>(n: i32) -> C::ErrorFunctor<i32> {
///     if n == 0 { C::handle_error("zero") } else { C::lift(n) }
/// }
///
/// assert_eq!(non_zero::<Result<(), &'static str>>(3), Ok(3));
/// assert_eq!(non_zero::<Outcome<(), &'static str>>(0), Outcome::failure("zero"));
/// ```
pub trait ErrorCategory<E> {
    type ErrorFunctor<T>: WithError<E>;

    fn lift<T>(value: T) -> Self::ErrorFunctor<T>;

    fn handle_error<T>(error: E) -> Self::ErrorFunctor<T>;
}

impl<E> ErrorCategory<E> for Result<(), E> {
    type ErrorFunctor<T> = Result<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Result<T, E> {
        Ok(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Result<T, E> {
        Err(error)
    }
}

impl<E> ErrorCategory<E> for Outcome<(), E> {
    type ErrorFunctor<T> = Outcome<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Outcome<T, E> {
        Outcome::create(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Outcome<T, E> {
        Outcome::failure(error)
    }
}
