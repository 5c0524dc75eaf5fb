//! Tracing integration for rail pipelines.
//!
//! Pipelines stay pure; these helpers only observe a track and emit an event,
//! returning the outcome unchanged.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! rop-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::{Debug, Display};

use crate::types::Outcome;

/// Extension trait that logs which pipeline step produced an outcome.
///
/// # Example
///
/// ```rust,ignore
/// use rop_rail::tracing_ext::TraceOutcomeExt;
///
/// let email = Email::create(raw).trace_failure("email.create");
/// ```
pub trait TraceOutcomeExt: Sized {
    /// Emits a `WARN` event carrying `step` and the error if the outcome failed.
    fn trace_failure(self, step: &'static str) -> Self;

    /// Emits a `DEBUG` event carrying `step` and the payload if the outcome succeeded.
    fn trace_success(self, step: &'static str) -> Self;
}

impl<T, E> TraceOutcomeExt for Outcome<T, E>
where
    T: Debug,
    E: Display,
{
    fn trace_failure(self, step: &'static str) -> Self {
        self.tap_error(|error| tracing::warn!(step, error = %error, "pipeline step failed"))
    }

    fn trace_success(self, step: &'static str) -> Self {
        self.tap(|value| tracing::debug!(step, value = ?value, "pipeline step succeeded"))
    }
}
