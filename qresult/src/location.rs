//! Source positions attached to failures constructed without a cause.

use std::fmt;
use std::panic::Location;

use serde::Serialize;

/// Source position of the code that constructed a failure.
///
/// The `#[track_caller]` failure factories record the file and line of
/// their call site. [`here!`](crate::here) additionally records the name of
/// the enclosing routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallerLocation {
    file: &'static str,
    routine: Option<&'static str>,
    line: u32,
}

impl CallerLocation {
    /// Creates a location from its parts.
    #[must_use]
    pub const fn new(file: &'static str, routine: Option<&'static str>, line: u32) -> Self {
        Self {
            file,
            routine,
            line,
        }
    }

    /// Source file of the call site.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Enclosing routine, when known.
    #[must_use]
    pub const fn routine(&self) -> Option<&'static str> {
        self.routine
    }

    /// Line of the failing call site, not the line the routine is defined on.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for CallerLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), None, location.line())
    }
}

/// Renders `<file> <routine>():<line>`.
impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}():{}",
            self.file,
            self.routine.unwrap_or("<unknown>"),
            self.line
        )
    }
}

/// Extracts the enclosing routine from the type name of a probe function
/// declared inside it.
#[doc(hidden)]
#[must_use]
pub fn routine_from_probe(probe: &'static str) -> &'static str {
    let enclosing = probe.strip_suffix("::__qresult_probe").unwrap_or(probe);
    enclosing
        .rsplit("::")
        .find(|segment| !segment.starts_with('{'))
        .unwrap_or(enclosing)
}

/// Captures the current source position, including the enclosing routine.
///
/// ```rust
/// fn lookup() -> qresult::CallerLocation {
///     qresult::here!()
/// }
///
/// let location = lookup();
/// assert_eq!(location.routine(), Some("lookup"));
/// assert!(location.file().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::CallerLocation::new(
            ::core::file!(),
            ::core::option::Option::Some($crate::location::routine_from_probe({
                fn __qresult_probe() {}
                ::core::any::type_name_of_val(&__qresult_probe)
            })),
            ::core::line!(),
        )
    };
}

/// Builds a failure that records the enclosing routine as its caller.
///
/// `fail!(Outcome, reason)` builds a two-parameter failure and
/// `fail!(Outcome, code, reason)` a coded one. Both expand to the outcome's
/// `fail_at` with [`here!`](crate::here) and return its `Result`.
///
/// ```rust
/// use qresult::{QResult, fail};
///
/// #[derive(QResult)]
/// #[qresult(Self, String)]
/// struct Street;
///
/// fn lookup_street() -> Result<QResult<Street>, qresult::ConstructionError> {
///     fail!(QResult<Street>, "unknown data")
/// }
///
/// let missing = lookup_street()?;
/// let caller = missing.caller_location().map(|location| location.routine());
/// assert_eq!(caller, Some(Some("lookup_street")));
/// # Ok::<(), qresult::ConstructionError>(())
/// ```
#[macro_export]
macro_rules! fail {
    ($outcome:ty, $code:expr, $reason:expr $(,)?) => {
        <$outcome>::fail_at(
            $crate::here!(),
            $code,
            ::core::option::Option::Some(::core::convert::Into::<::std::string::String>::into(
                $reason,
            )),
            ::core::option::Option::None,
        )
    };
    ($outcome:ty, $reason:expr $(,)?) => {
        <$outcome>::fail_at(
            $crate::here!(),
            ::core::option::Option::Some(::core::convert::Into::<::std::string::String>::into(
                $reason,
            )),
            ::core::option::Option::None,
        )
    };
}
