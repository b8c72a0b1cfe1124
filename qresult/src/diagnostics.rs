//! Structured soft diagnostics and the process-wide reporter that receives them.
//!
//! Malformed declarations and non-conforming success payloads are latent
//! programming errors that must not abort otherwise correct code paths. They
//! are delivered as [`Diagnostic`] events to the installed
//! [`DiagnosticReporter`], which by default logs them through `tracing` at
//! `WARN`. Applications can route them elsewhere, or treat them as fatal, by
//! installing their own reporter.

use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use serde::Serialize;

use crate::conformance::ConformanceError;
use crate::declaration::DeclarationIssue;

/// A soft diagnostic about an outcome declaration or payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Diagnostic {
    /// The declaration's generic parameters are malformed.
    Declaration {
        /// Declaration the issue was found in.
        outcome: &'static str,
        /// What is wrong with it.
        issue: DeclarationIssue,
    },
    /// A success payload does not conform to the declared shape.
    Conformance {
        /// Declaration whose `ok` factory received the payload.
        outcome: &'static str,
        /// How the payload deviates from the shape.
        error: ConformanceError,
    },
}

impl Diagnostic {
    /// Name of the outcome declaration the diagnostic concerns.
    #[must_use]
    pub const fn outcome(&self) -> &'static str {
        match self {
            Self::Declaration { outcome, .. } | Self::Conformance { outcome, .. } => *outcome,
        }
    }

    /// Serializes the diagnostic as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration { outcome, issue } => write!(f, "{outcome}: {issue}"),
            Self::Conformance { outcome, error } => write!(f, "{outcome}.ok: {error}"),
        }
    }
}

/// Receiver for soft diagnostics.
pub type DiagnosticReporter = Arc<dyn Fn(&Diagnostic) + Send + Sync>;

static REPORTER: LazyLock<RwLock<DiagnosticReporter>> =
    LazyLock::new(|| RwLock::new(default_reporter()));

#[must_use]
fn default_reporter() -> DiagnosticReporter {
    Arc::new(|diagnostic: &Diagnostic| match diagnostic {
        Diagnostic::Declaration { outcome, issue } => {
            tracing::warn!(
                outcome = %outcome,
                issue = %issue,
                "malformed outcome declaration"
            );
        }
        Diagnostic::Conformance { outcome, error } => {
            tracing::warn!(
                outcome = %outcome,
                error = %error,
                "success value does not conform to its declared shape"
            );
        }
    })
}

/// Replaces the process-wide reporter, returning the previous one.
pub fn set_reporter(reporter: DiagnosticReporter) -> DiagnosticReporter {
    std::mem::replace(&mut *REPORTER.write(), reporter)
}

/// Installs `reporter` until the returned guard is dropped.
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use qresult::{Diagnostic, scoped_reporter};
///
/// let seen = Arc::new(Mutex::new(Vec::<String>::new()));
/// let sink = Arc::clone(&seen);
/// let guard = scoped_reporter(Arc::new(move |d: &Diagnostic| {
///     sink.lock().unwrap().push(d.to_string());
/// }));
/// drop(guard);
/// ```
#[must_use = "the previous reporter is restored when the guard is dropped"]
pub fn scoped_reporter(reporter: DiagnosticReporter) -> ReporterGuard {
    ReporterGuard {
        previous: Some(set_reporter(reporter)),
    }
}

/// RAII guard restoring the previous reporter on drop.
pub struct ReporterGuard {
    previous: Option<DiagnosticReporter>,
}

impl fmt::Debug for ReporterGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterGuard")
            .field("previous", &"<reporter>")
            .finish()
    }
}

impl Drop for ReporterGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            set_reporter(previous);
        }
    }
}

/// Delivers a diagnostic to the installed reporter.
///
/// The reporter is cloned out of the slot before it runs so that it may
/// itself construct outcomes.
pub(crate) fn report(diagnostic: &Diagnostic) {
    let reporter = Arc::clone(&REPORTER.read());
    reporter(diagnostic);
}
