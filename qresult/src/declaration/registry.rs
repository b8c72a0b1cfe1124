//! Process-wide registry of validated declarations.

use std::any::TypeId;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use super::types::Declared;
use super::validate::DeclarationReport;
use crate::diagnostics::{self, Diagnostic};

type Registry = HashMap<TypeId, Arc<DeclarationReport>>;

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(HashMap::new()));

/// Validates the declaration `D` once per process and returns its report.
///
/// The first call for a type runs [`validate`](super::validate) and delivers
/// every issue found to the installed diagnostic reporter; later calls return
/// the cached report without reporting again. Outcome factories call this
/// lazily, so an explicit call is only needed to surface issues early, for
/// example during application start-up.
///
/// ```rust
/// use qresult::{QResult, register};
///
/// #[derive(QResult)]
/// #[qresult(Self, String)]
/// struct Greeting;
///
/// let report = register::<Greeting>();
/// assert!(report.is_well_formed());
/// assert!(std::sync::Arc::ptr_eq(&report, &register::<Greeting>()));
/// ```
pub fn register<D: Declared>() -> Arc<DeclarationReport> {
    let id = TypeId::of::<D>();
    if let Some(cached) = REGISTRY.read().get(&id) {
        return Arc::clone(cached);
    }

    let report = {
        let mut registry = REGISTRY.write();
        match registry.entry(id) {
            Entry::Occupied(existing) => return Arc::clone(existing.get()),
            Entry::Vacant(slot) => {
                let created = Arc::new(DeclarationReport::new(&D::declaration()));
                slot.insert(Arc::clone(&created));
                created
            }
        }
    };

    tracing::debug!(
        outcome = D::NAME,
        issues = report.issues().len(),
        "registered outcome declaration"
    );
    for issue in report.issues() {
        diagnostics::report(&Diagnostic::Declaration {
            outcome: D::NAME,
            issue: issue.clone(),
        });
    }
    report
}
