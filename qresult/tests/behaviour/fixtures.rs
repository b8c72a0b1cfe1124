//! Shared fixtures and declarations for the behavioural scenarios.

use qresult::DiscreteCode;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, DiscreteCode)]
#[code(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ECode {
    Invalid,
    Unknown,
    Timeout,
}

#[derive(qresult::CResult)]
#[qresult(Self, ECode, (String, i64))]
pub struct Lookup;

#[derive(qresult::QResult)]
#[qresult(Self, (String, i64))]
pub struct Address;

#[derive(qresult::QResult)]
#[qresult(Self, Union<String, i64>)]
pub struct Token;

/// Scenario state shared between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct OutcomeContext {
    /// Full rendering of the last outcome built.
    pub rendered: Slot<String>,
    /// Message of the construction error, when building failed.
    pub error: Slot<String>,
    /// Diagnostics delivered while the last outcome was built.
    pub diagnostics: Slot<Vec<String>>,
}

/// Creates a clean outcome context for each scenario.
#[fixture]
pub fn outcome_context() -> OutcomeContext {
    OutcomeContext::default()
}
