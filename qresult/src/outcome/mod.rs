//! Outcome families and the behaviour they share.
//!
//! [`QResult`] and [`CResult`] are immutable values holding either a success
//! payload or a failure. A failure carries a reason, a wrapped [`Cause`], or
//! both; the coded family adds a discrete code. Failures built without a
//! cause remember where they were constructed.
//!
//! Both families implement [`OutcomeBase`] so that generic code can inspect,
//! render or propagate any outcome without naming its concrete type.

mod coded;
mod plain;
mod render;

use std::borrow::Cow;

pub use coded::CResult;
pub use plain::QResult;
pub use render::RenderOptions;

use crate::error::{Cause, ConstructionError, OutcomeError};
use crate::location::CallerLocation;

/// Capabilities shared by every outcome, usable as a trait object.
pub trait OutcomeBase {
    /// Name of the outcome declaration.
    fn type_name(&self) -> &'static str;

    /// Returns `true` for a success: neither a reason nor a cause is present.
    fn is_ok(&self) -> bool;

    /// Returns `true` for a failure.
    fn is_not_ok(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` when the failure wraps a cause.
    fn has_cause(&self) -> bool {
        self.cause().is_some()
    }

    /// Failure reason, when one was given.
    fn reason(&self) -> Option<&str>;

    /// Wrapped cause, when one was given.
    fn cause(&self) -> Option<&Cause>;

    /// Construction site of a failure built without a cause.
    fn caller_location(&self) -> Option<&CallerLocation>;

    /// Name of the failure code. Always `None` for the two-parameter family
    /// and for successes.
    fn code_name(&self) -> Option<Cow<'_, str>>;

    /// Renders the outcome in its canonical diagnostic form.
    fn render(&self, options: RenderOptions) -> String;

    /// Converts a failure into an error suitable for `?` propagation.
    ///
    /// Returns `None` for a success.
    fn to_error(&self) -> Option<OutcomeError>;
}

/// Returns `true` when `outcome` represents a failure signal.
///
/// ```rust
/// use qresult::{OutcomeBase, QResult, is_failure_signal};
///
/// #[derive(QResult)]
/// #[qresult(Self, i64)]
/// struct Count;
///
/// let outcomes: Vec<Box<dyn OutcomeBase>> = vec![
///     Box::new(QResult::<Count>::ok(3)),
///     Box::new(QResult::<Count>::fail("no rows")?),
/// ];
/// let failures = outcomes.iter().filter(|o| is_failure_signal(o.as_ref())).count();
/// assert_eq!(failures, 1);
/// # Ok::<(), qresult::ConstructionError>(())
/// ```
#[must_use]
pub fn is_failure_signal(outcome: &dyn OutcomeBase) -> bool {
    outcome.is_not_ok()
}

/// Either arm of an outcome.
#[derive(Debug, Clone)]
pub(crate) enum Body<V, C> {
    Success(V),
    Failure(Failure<C>),
}

impl<V, C> Body<V, C> {
    pub(crate) const fn failure(&self) -> Option<&Failure<C>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

/// Validated failure fields.
#[derive(Debug, Clone)]
pub(crate) struct Failure<C> {
    pub(crate) code: C,
    pub(crate) reason: Option<String>,
    pub(crate) cause: Option<Cause>,
    pub(crate) caller: Option<CallerLocation>,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl<C> Failure<C> {
    /// Checks the reason and cause rules and attaches the caller location
    /// when no cause was given.
    pub(crate) fn new(
        code: C,
        reason: Option<String>,
        cause: Option<Cause>,
        caller: CallerLocation,
    ) -> Result<Self, ConstructionError> {
        match (reason.as_deref(), cause.is_some()) {
            (None, false) => return Err(ConstructionError::MissingReasonAndCause),
            (Some(text), false) if is_blank(text) => return Err(ConstructionError::BlankReason),
            (Some(text), true) if is_blank(text) => {
                return Err(ConstructionError::BlankReasonWithCause);
            }
            _ => {}
        }
        Ok(Self {
            code,
            reason,
            caller: cause.is_none().then_some(caller),
            cause,
        })
    }
}

#[cfg(test)]
mod tests;
