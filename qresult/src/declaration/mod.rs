//! Outcome declarations and their once-per-type validation.
//!
//! A declaration is a marker type that binds an outcome family's generic
//! parameters. It implements [`Declared`] plus either [`ResultDecl`] or
//! [`CResultDecl`], usually through `#[derive(QResult)]` or
//! `#[derive(CResult)]`. Alongside the associated types, the declaration
//! exposes a [`Declaration`] descriptor: the parameter list exactly as
//! written, which [`validate`] inspects for mistakes the type system lets
//! through (naming the wrong type as the self reference, binding a code type
//! that is not an enumeration, or getting the arity wrong).

mod registry;
mod types;
mod validate;

pub use registry::register;
pub use types::{CResultDecl, CodeInfo, DeclParam, Declaration, Declared, Family, ResultDecl};
pub use validate::{DeclarationIssue, DeclarationReport, validate};
