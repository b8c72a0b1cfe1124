//! Capturing soft diagnostics emitted while a test runs.
//!
//! The reporter is process-wide, so tests that install a capture should be
//! serialised (for example with `serial_test`).

use std::sync::Arc;

use parking_lot::Mutex;
use qresult::{Diagnostic, ReporterGuard, scoped_reporter};

/// Records every diagnostic delivered while it is alive.
///
/// # Examples
///
/// ```
/// use qresult_test_helpers::DiagnosticCapture;
///
/// let capture = DiagnosticCapture::install();
/// assert!(capture.is_empty());
/// ```
pub struct DiagnosticCapture {
    seen: Arc<Mutex<Vec<Diagnostic>>>,
    _guard: ReporterGuard,
}

impl DiagnosticCapture {
    /// Installs a capturing reporter until the returned value is dropped.
    #[must_use]
    pub fn install() -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let guard = scoped_reporter(Arc::new(move |diagnostic: &Diagnostic| {
            sink.lock().push(diagnostic.clone());
        }));
        Self {
            seen,
            _guard: guard,
        }
    }

    /// Every diagnostic captured so far.
    #[must_use]
    pub fn all(&self) -> Vec<Diagnostic> {
        self.seen.lock().clone()
    }

    /// Diagnostics concerning the outcome declaration named `outcome`.
    #[must_use]
    pub fn for_outcome(&self, outcome: &str) -> Vec<Diagnostic> {
        self.seen
            .lock()
            .iter()
            .filter(|diagnostic| diagnostic.outcome() == outcome)
            .cloned()
            .collect()
    }

    /// Rendered messages of the diagnostics concerning `outcome`.
    #[must_use]
    pub fn messages_for(&self, outcome: &str) -> Vec<String> {
        self.for_outcome(outcome)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Returns `true` when nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}
