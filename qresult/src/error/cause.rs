//! Shared handle to the error wrapped by a failed outcome.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Underlying error carried by a failure.
///
/// The outcome keeps a shared reference; cloning an outcome or converting it
/// into an [`OutcomeError`](crate::OutcomeError) does not copy the error.
/// Any `std::error::Error` converts into a `Cause`:
///
/// ```rust
/// use qresult::Cause;
///
/// let cause = Cause::from(std::io::Error::other("timed out"));
/// assert_eq!(cause.to_string(), "timed out");
/// ```
#[derive(Clone)]
pub struct Cause(Arc<dyn Error + Send + Sync + 'static>);

impl Cause {
    /// Wraps an error.
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Wraps an already boxed error without re-boxing it.
    #[must_use]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }

    /// Borrows the wrapped error.
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Attempts to view the wrapped error as a concrete type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.0.downcast_ref::<E>()
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
