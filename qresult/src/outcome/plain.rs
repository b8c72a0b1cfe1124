//! The two-parameter outcome family.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::panic::Location;

use super::render::{Head, Rendering, Style};
use super::{Body, Failure, OutcomeBase, RenderOptions};
use crate::conformance::{self, ConformanceError};
use crate::declaration::{ResultDecl, register};
use crate::diagnostics::{self, Diagnostic};
use crate::error::{Cause, ConstructionError, OutcomeError};
use crate::location::CallerLocation;
use crate::value::Payload;

/// Success value or failure (reason and/or cause) bound by the declaration `D`.
///
/// ```rust
/// use qresult::{QResult, RenderOptions};
///
/// #[derive(QResult)]
/// #[qresult(Self, (String, i64))]
/// struct Address;
///
/// type AddressOutcome = QResult<Address>;
///
/// let found = AddressOutcome::ok(("123 Main St".to_owned(), 2));
/// assert_eq!(
///     found.render(RenderOptions::bare()),
///     "OK result: `('123 Main St', 2)`"
/// );
///
/// let missing = AddressOutcome::fail("unknown data")?;
/// assert!(missing.caller_location().is_some());
/// assert!(missing.ppstr(false).starts_with("FAIL reason: `unknown data` caller: "));
/// # Ok::<(), qresult::ConstructionError>(())
/// ```
pub struct QResult<D: ResultDecl> {
    body: Body<D::Value, ()>,
    declaration: PhantomData<fn() -> D>,
}

impl<D: ResultDecl> QResult<D> {
    const fn from_body(body: Body<D::Value, ()>) -> Self {
        Self {
            body,
            declaration: PhantomData,
        }
    }

    fn conform(value: &D::Value) -> Result<(), ConformanceError> {
        register::<D>();
        conformance::check(&value.to_value(), &D::shape())
    }

    /// Builds a success.
    ///
    /// The value is checked against the declared shape; a mismatch is
    /// delivered to the diagnostic reporter and the success is returned
    /// regardless. Use [`try_ok`](Self::try_ok) to act on the mismatch.
    #[must_use]
    pub fn ok(value: D::Value) -> Self {
        if let Err(error) = Self::conform(&value) {
            diagnostics::report(&Diagnostic::Conformance {
                outcome: D::NAME,
                error,
            });
        }
        Self::from_body(Body::Success(value))
    }

    /// Builds a success only if the value conforms to the declared shape.
    ///
    /// # Errors
    ///
    /// Returns the [`ConformanceError`] describing the first mismatch.
    pub fn try_ok(value: D::Value) -> Result<Self, ConformanceError> {
        Self::conform(&value)?;
        Ok(Self::from_body(Body::Success(value)))
    }

    /// Builds a failure with a reason, recording the caller's location.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::BlankReason`] for a blank reason.
    #[track_caller]
    pub fn fail(reason: impl Into<String>) -> Result<Self, ConstructionError> {
        Self::fail_at(Location::caller().into(), Some(reason.into()), None)
    }

    /// Builds a failure wrapping `cause`. No caller location is recorded.
    #[must_use]
    pub fn fail_with(cause: impl Into<Cause>) -> Self {
        register::<D>();
        Self::from_body(Body::Failure(Failure {
            code: (),
            reason: None,
            cause: Some(cause.into()),
            caller: None,
        }))
    }

    /// Builds a failure wrapping `cause` with an explanatory reason.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::BlankReasonWithCause`] for a blank reason.
    #[track_caller]
    pub fn fail_with_reason(
        cause: impl Into<Cause>,
        reason: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        Self::fail_at(
            Location::caller().into(),
            Some(reason.into()),
            Some(cause.into()),
        )
    }

    /// Builds a failure from optional parts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] when neither part is given or the
    /// reason is blank.
    #[track_caller]
    pub fn fail_parts(
        reason: Option<String>,
        cause: Option<Cause>,
    ) -> Result<Self, ConstructionError> {
        Self::fail_at(Location::caller().into(), reason, cause)
    }

    /// Builds a failure recording an explicit location, typically from
    /// [`here!`](crate::here).
    ///
    /// The location is kept only when no cause is given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] when neither part is given or the
    /// reason is blank.
    pub fn fail_at(
        location: CallerLocation,
        reason: Option<String>,
        cause: Option<Cause>,
    ) -> Result<Self, ConstructionError> {
        register::<D>();
        let failure = Failure::new((), reason, cause, location)?;
        Ok(Self::from_body(Body::Failure(failure)))
    }

    /// Success payload. `None` for a failure.
    #[must_use]
    pub const fn result(&self) -> Option<&D::Value> {
        match &self.body {
            Body::Success(value) => Some(value),
            Body::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the success payload if any.
    #[must_use]
    pub fn into_value(self) -> Option<D::Value> {
        match self.body {
            Body::Success(value) => Some(value),
            Body::Failure(_) => None,
        }
    }

    /// Returns `true` for a success.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.body, Body::Success(_))
    }

    /// Returns `true` for a failure.
    #[must_use]
    pub const fn is_not_ok(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` when the failure wraps a cause.
    #[must_use]
    pub fn has_cause(&self) -> bool {
        self.cause().is_some()
    }

    /// Failure reason, when one was given.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.body.failure().and_then(|failure| failure.reason.as_deref())
    }

    /// Wrapped cause, when one was given.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.body.failure().and_then(|failure| failure.cause.as_ref())
    }

    /// Construction site of a failure built without a cause.
    #[must_use]
    pub fn caller_location(&self) -> Option<&CallerLocation> {
        self.body.failure().and_then(|failure| failure.caller.as_ref())
    }

    /// Converts the outcome into a standard `Result` for `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns an [`OutcomeError`] describing the failure.
    pub fn into_result(self) -> Result<D::Value, OutcomeError> {
        match self.body {
            Body::Success(value) => Ok(value),
            Body::Failure(_) => Err(OutcomeError::capture(&self)),
        }
    }

    /// Renders the outcome.
    #[must_use]
    pub fn render(&self, options: RenderOptions) -> String {
        let failure = self.body.failure();
        let head = match &self.body {
            Body::Success(value) => Head::Ok(value.to_value()),
            Body::Failure(Failure {
                cause: Some(cause), ..
            }) => Head::Err(cause),
            Body::Failure(_) => Head::Fail,
        };
        Rendering {
            type_name: D::NAME,
            style: Style::Plain,
            head,
            code: None,
            reason: failure.and_then(|failure| failure.reason.as_deref()),
            caller: failure.and_then(|failure| failure.caller.as_ref()),
            options,
        }
        .to_string()
    }

    /// Renders the outcome with the caller location, optionally prefixed by
    /// the type name.
    #[must_use]
    pub fn ppstr(&self, include_type: bool) -> String {
        self.render(RenderOptions::default().with_type(include_type))
    }
}

impl<D: ResultDecl> OutcomeBase for QResult<D> {
    fn type_name(&self) -> &'static str {
        D::NAME
    }

    fn is_ok(&self) -> bool {
        Self::is_ok(self)
    }

    fn reason(&self) -> Option<&str> {
        Self::reason(self)
    }

    fn cause(&self) -> Option<&Cause> {
        Self::cause(self)
    }

    fn caller_location(&self) -> Option<&CallerLocation> {
        Self::caller_location(self)
    }

    fn code_name(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn render(&self, options: RenderOptions) -> String {
        Self::render(self, options)
    }

    fn to_error(&self) -> Option<OutcomeError> {
        OutcomeError::from_outcome(self)
    }
}

impl<D: ResultDecl> Clone for QResult<D>
where
    D::Value: Clone,
{
    fn clone(&self) -> Self {
        Self::from_body(self.body.clone())
    }
}

impl<D: ResultDecl> fmt::Display for QResult<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderOptions::default()))
    }
}

impl<D: ResultDecl> fmt::Debug for QResult<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QResult")
            .field("outcome", &D::NAME)
            .field("result", &self.result().map(Payload::to_value))
            .field("reason", &self.reason())
            .field("cause", &self.cause())
            .field("caller", &self.caller_location())
            .finish()
    }
}
