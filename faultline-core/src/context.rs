//! Adding context on the failure path of a `Result`

use crate::Failure;

/// Wrap the error of a `Result` in a context layer
///
/// Successful results pass through untouched; the closure form only runs on
/// the error path.
///
/// ```
/// use faultline_core::{Context, Failure, NOT_FOUND};
///
/// fn find() -> Result<u32, Failure> {
///     Err(Failure::sentinel(&NOT_FOUND))
/// }
///
/// let err = find().context("load profile").unwrap_err();
/// assert_eq!(err.message(), "load profile: not found");
/// assert!(err.is(&NOT_FOUND));
/// ```
pub trait Context<T> {
    /// Wrap the error with a fixed context string
    fn context<C>(self, context: C) -> Result<T, Failure>
    where
        C: Into<String>;

    /// Wrap the error with a lazily built context string
    fn with_context<C, F>(self, f: F) -> Result<T, Failure>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: Into<Failure>,
{
    fn context<C>(self, context: C) -> Result<T, Failure>
    where
        C: Into<String>,
    {
        self.map_err(|cause| Failure::wrap(context, cause))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, Failure>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|cause| Failure::wrap(f(), cause))
    }
}
