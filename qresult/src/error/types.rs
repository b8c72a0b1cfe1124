//! Construction misuse errors and the propagated form of a failed outcome.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use super::Cause;
use crate::location::CallerLocation;
use crate::outcome::{OutcomeBase, RenderOptions};

/// Misuse of a failure factory. No outcome is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstructionError {
    /// Neither a reason nor a cause was supplied.
    #[error("fail: a reason or a cause must be provided")]
    MissingReasonAndCause,

    /// The reason was blank and no cause was supplied.
    #[error("fail: reason must not be blank if a cause is not provided")]
    BlankReason,

    /// A cause was supplied together with a blank reason.
    #[error("fail: reason must not be blank if provided")]
    BlankReasonWithCause,

    /// The declaration's code type is not a closed enumeration.
    #[error("fail: code type {code_type} is not an enumerated type")]
    CodeNotEnumerated {
        /// Code type bound by the declaration.
        code_type: &'static str,
    },

    /// The code is not one of the enumeration's declared members.
    #[error("fail: code {code} is not a valid member of {code_type}")]
    CodeNotMember {
        /// Name of the rejected code.
        code: String,
        /// Code type bound by the declaration.
        code_type: &'static str,
    },
}

/// A failed outcome converted into an error for propagation.
///
/// Outcomes are inert data; a caller that wants to propagate a failure with
/// `?` converts it explicitly through [`OutcomeBase::to_error`] or the
/// families' `into_result`. The wrapped cause, if any, is exposed through
/// [`std::error::Error::source`].
#[derive(Debug, Clone)]
pub struct OutcomeError {
    outcome: &'static str,
    code: Option<String>,
    reason: Option<String>,
    cause: Option<Cause>,
    caller: Option<CallerLocation>,
    rendered: String,
}

impl OutcomeError {
    /// Captures a failed outcome. Returns `None` for a success.
    #[must_use]
    pub fn from_outcome(outcome: &dyn OutcomeBase) -> Option<Self> {
        outcome.is_not_ok().then(|| Self::capture(outcome))
    }

    pub(crate) fn capture(outcome: &dyn OutcomeBase) -> Self {
        Self {
            outcome: outcome.type_name(),
            code: outcome.code_name().map(std::borrow::Cow::into_owned),
            reason: outcome.reason().map(str::to_owned),
            cause: outcome.cause().cloned(),
            caller: outcome.caller_location().copied(),
            rendered: outcome.render(RenderOptions::default()),
        }
    }

    /// Name of the outcome declaration that failed.
    #[must_use]
    pub const fn outcome(&self) -> &'static str {
        self.outcome
    }

    /// Name of the discrete failure code, for coded outcomes.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Failure reason, when one was given.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Wrapped cause, when one was given.
    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Location of the failing call site, for failures without a cause.
    #[must_use]
    pub const fn caller_location(&self) -> Option<&CallerLocation> {
        self.caller.as_ref()
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl StdError for OutcomeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|cause| {
            let error: &(dyn StdError + 'static) = cause.as_error();
            error
        })
    }
}
