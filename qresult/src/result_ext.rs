//! Extensions for turning standard `Result`s into outcomes concisely.
//!
//! These helpers replace repetitive matches of the form
//! `match r { Ok(v) => Outcome::ok(v), Err(e) => Outcome::fail_with(e) }`
//! at call sites that wrap fallible library calls.
//!
//! - Use [`IntoQResultExt::into_qresult`] for the two-parameter family.
//! - Use [`IntoCResultExt::into_cresult`] for the three-parameter family,
//!   which additionally needs the code to attach to a failure.
//!
//! # Examples
//!
//! ```
//! use qresult::{IntoQResultExt, QResult};
//!
//! #[derive(QResult)]
//! #[qresult(Self, i64)]
//! struct Parsed;
//!
//! let outcome: QResult<Parsed> = "12".parse::<i64>().into_qresult();
//! assert_eq!(outcome.result(), Some(&12));
//!
//! let failed: QResult<Parsed> = "twelve".parse::<i64>().into_qresult();
//! assert!(failed.has_cause());
//! ```

use crate::declaration::{CResultDecl, ResultDecl};
use crate::error::{Cause, ConstructionError};
use crate::outcome::{CResult, QResult};

/// Maps `Result<T, E>` with an error convertible into a [`Cause`] onto a
/// [`QResult`].
pub trait IntoQResultExt<T> {
    /// Builds a success from `Ok` and a failure wrapping the error from `Err`.
    fn into_qresult<D>(self) -> QResult<D>
    where
        D: ResultDecl<Value = T>;
}

impl<T, E> IntoQResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    fn into_qresult<D>(self) -> QResult<D>
    where
        D: ResultDecl<Value = T>,
    {
        match self {
            Ok(value) => QResult::ok(value),
            Err(error) => QResult::fail_with(error),
        }
    }
}

/// Maps `Result<T, E>` onto a [`CResult`], attaching `code` to a failure.
pub trait IntoCResultExt<T> {
    /// Builds a success from `Ok` and a coded failure wrapping the error from
    /// `Err`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] when `self` is `Err` and `code` is not
    /// a declared member of the declaration's code type.
    fn into_cresult<D>(self, code: D::Code) -> Result<CResult<D>, ConstructionError>
    where
        D: CResultDecl<Value = T>;
}

impl<T, E> IntoCResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    fn into_cresult<D>(self, code: D::Code) -> Result<CResult<D>, ConstructionError>
    where
        D: CResultDecl<Value = T>,
    {
        match self {
            Ok(value) => Ok(CResult::ok(value)),
            Err(error) => CResult::fail_with(code, error),
        }
    }
}
