//! Test helpers shared across crates.
//!
//! Provides a scoped capture of soft diagnostics and text helpers for
//! behavioural suites.

pub mod diagnostics;
pub mod text;

pub use diagnostics::DiagnosticCapture;
