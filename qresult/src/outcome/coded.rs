//! The three-parameter outcome family.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::panic::Location;

use super::render::{Head, Rendering, Style};
use super::{Body, Failure, OutcomeBase, RenderOptions};
use crate::code::DiscreteCode;
use crate::conformance::{self, ConformanceError};
use crate::declaration::{CResultDecl, register};
use crate::diagnostics::{self, Diagnostic};
use crate::error::{Cause, ConstructionError, OutcomeError};
use crate::location::CallerLocation;
use crate::value::Payload;

/// Success value or coded failure bound by the declaration `D`.
///
/// Every failure carries a member of the declaration's code enumeration.
///
/// ```rust
/// use qresult::{CResult, DiscreteCode, RenderOptions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, DiscreteCode)]
/// #[code(rename_all = "SCREAMING_SNAKE_CASE")]
/// enum ECode {
///     Invalid,
///     Timeout,
/// }
///
/// #[derive(CResult)]
/// #[qresult(Self, ECode, i64)]
/// struct Count;
///
/// let timed_out = CResult::<Count>::fail_with(ECode::Timeout, std::io::Error::other("timed out"))?;
/// assert_eq!(timed_out.code(), Some(&ECode::Timeout));
/// assert_eq!(
///     timed_out.render(RenderOptions::bare()),
///     "ERR code: TIMEOUT, ex: timed out"
/// );
/// # Ok::<(), qresult::ConstructionError>(())
/// ```
pub struct CResult<D: CResultDecl> {
    body: Body<D::Value, D::Code>,
    declaration: PhantomData<fn() -> D>,
}

impl<D: CResultDecl> CResult<D> {
    const fn from_body(body: Body<D::Value, D::Code>) -> Self {
        Self {
            body,
            declaration: PhantomData,
        }
    }

    fn conform(value: &D::Value) -> Result<(), ConformanceError> {
        register::<D>();
        conformance::check(&value.to_value(), &D::shape())
    }

    fn check_code(code: &D::Code) -> Result<(), ConstructionError> {
        let code_type = <D::Code as DiscreteCode>::TYPE_NAME;
        let Some(members) = <D::Code as DiscreteCode>::members() else {
            return Err(ConstructionError::CodeNotEnumerated { code_type });
        };
        if members.contains(code) {
            Ok(())
        } else {
            Err(ConstructionError::CodeNotMember {
                code: code.name().into_owned(),
                code_type,
            })
        }
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

    /// Builds a coded failure with a reason, recording the caller's location.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] when the code is not a declared member
    /// of an enumerated code type, or the reason is blank.
    #[track_caller]
    pub fn fail(code: D::Code, reason: impl Into<String>) -> Result<Self, ConstructionError> {
        Self::fail_at(Location::caller().into(), code, Some(reason.into()), None)
    }

    /// Builds a coded failure wrapping `cause`. No caller location is recorded.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] when the code is not a declared member
    /// of an enumerated code type.
    #[track_caller]
    pub fn fail_with(code: D::Code, cause: impl Into<Cause>) -> Result<Self, ConstructionError> {
        Self::fail_at(Location::caller().into(), code, None, Some(cause.into()))
    }

    /// Builds a coded failure wrapping `cause` with an explanatory reason.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] for an invalid code or a blank reason.
    #[track_caller]
    pub fn fail_with_reason(
        code: D::Code,
        cause: impl Into<Cause>,
        reason: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        Self::fail_at(
            Location::caller().into(),
            code,
            Some(reason.into()),
            Some(cause.into()),
        )
    }

    /// Builds a coded failure from optional parts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] for an invalid code, when neither part
    /// is given, or when the reason is blank.
    #[track_caller]
    pub fn fail_parts(
        code: D::Code,
        reason: Option<String>,
        cause: Option<Cause>,
    ) -> Result<Self, ConstructionError> {
        Self::fail_at(Location::caller().into(), code, reason, cause)
    }

    /// Builds a coded failure recording an explicit location, typically from
    /// [`here!`](crate::here).
    ///
    /// The code is checked before the reason and cause. The location is kept
    /// only when no cause is given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] for an invalid code, when neither part
    /// is given, or when the reason is blank.
    pub fn fail_at(
        location: CallerLocation,
        code: D::Code,
        reason: Option<String>,
        cause: Option<Cause>,
    ) -> Result<Self, ConstructionError> {
        register::<D>();
        Self::check_code(&code)?;
        let failure = Failure::new(code, reason, cause, location)?;
        Ok(Self::from_body(Body::Failure(failure)))
    }

    /// Failure code. `None` for a success.
    #[must_use]
    pub fn code(&self) -> Option<&D::Code> {
        self.body.failure().map(|failure| &failure.code)
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
    /// Returns an [`OutcomeError`] carrying the failure's code name, reason
    /// and cause.
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
            style: Style::Coded,
            head,
            code: failure.map(|failure| failure.code.name()),
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

impl<D: CResultDecl> OutcomeBase for CResult<D> {
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
        self.code().map(DiscreteCode::name)
    }

    fn render(&self, options: RenderOptions) -> String {
        Self::render(self, options)
    }

    fn to_error(&self) -> Option<OutcomeError> {
        OutcomeError::from_outcome(self)
    }
}

impl<D: CResultDecl> Clone for CResult<D>
where
    D::Value: Clone,
{
    fn clone(&self) -> Self {
        Self::from_body(self.body.clone())
    }
}

impl<D: CResultDecl> fmt::Display for CResult<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderOptions::default()))
    }
}

impl<D: CResultDecl> fmt::Debug for CResult<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CResult")
            .field("outcome", &D::NAME)
            .field("code", &self.code())
            .field("result", &self.result().map(Payload::to_value))
            .field("reason", &self.reason())
            .field("cause", &self.cause())
            .field("caller", &self.caller_location())
            .finish()
    }
}
