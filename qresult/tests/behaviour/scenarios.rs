//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{OutcomeContext, outcome_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/outcome_rendering.feature",
    fixtures = [outcome_context: OutcomeContext]
);
