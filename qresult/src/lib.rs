//! Outcome values that carry success or failure as data.
//!
//! The crate provides two outcome families:
//!
//! * [`QResult`] holds either a success value or a failure described by a
//!   reason and/or a wrapped cause;
//! * [`CResult`] adds a discrete failure code drawn from an enumerated type.
//!
//! Each concrete outcome is bound by a *declaration*: a marker type that
//! records the generic parameters (self reference, code enum, payload
//! shape). The companion `qresult_macros` crate derives declarations from a
//! `#[qresult(...)]` attribute.
//!
//! ```rust
//! use qresult::{CResult, DiscreteCode, RenderOptions};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, DiscreteCode)]
//! enum ECode {
//!     Invalid,
//!     Timeout,
//! }
//!
//! #[derive(qresult::CResult)]
//! #[qresult(Self, ECode, (String, i64))]
//! struct Lookup;
//!
//! type LookupOutcome = CResult<Lookup>;
//!
//! let failed = LookupOutcome::fail(ECode::Invalid, "invalid data")?;
//! assert!(failed.is_not_ok());
//! assert_eq!(
//!     failed.render(RenderOptions::bare()),
//!     "FAIL code: Invalid reason: invalid data"
//! );
//!
//! let found = LookupOutcome::ok(("123 Main St".to_owned(), 2));
//! assert_eq!(found.result(), Some(&("123 Main St".to_owned(), 2)));
//! # Ok::<(), qresult::ConstructionError>(())
//! ```

extern crate self as qresult;

pub use qresult_macros::{CResult, DiscreteCode, QResult};

mod code;
pub mod conformance;
pub mod declaration;
pub mod diagnostics;
mod error;
pub mod location;
pub mod outcome;
mod result_ext;
pub mod shape;
pub mod value;

pub use code::{DiscreteCode, Unbound};
pub use conformance::{ConformanceError, check};
pub use declaration::{
    CResultDecl, CodeInfo, DeclParam, Declaration, DeclarationIssue, DeclarationReport, Declared,
    Family, ResultDecl, register, validate,
};
pub use diagnostics::{
    Diagnostic, DiagnosticReporter, ReporterGuard, scoped_reporter, set_reporter,
};
pub use error::{Cause, ConstructionError, OutcomeError};
pub use location::CallerLocation;
pub use outcome::{CResult, OutcomeBase, QResult, RenderOptions, is_failure_signal};
pub use result_ext::{IntoCResultExt, IntoQResultExt};
pub use shape::{Shape, TypeTag};
pub use value::{Payload, Value};

/// Commonly used traits and types for declaring and consuming outcomes.
pub mod prelude {
    pub use crate::{
        CResult, CResultDecl, Cause, DiscreteCode, IntoCResultExt, IntoQResultExt, OutcomeBase,
        Payload, QResult, RenderOptions, ResultDecl, Value,
    };
}
