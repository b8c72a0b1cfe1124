//! Error types produced while constructing and propagating outcomes.

mod cause;
mod types;

pub use cause::Cause;
pub use types::{ConstructionError, OutcomeError};
