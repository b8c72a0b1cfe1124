//! Trybuild fixture verifying `crate = "..."` works with a dependency
//! renamed via `use ... as`.

use qresult as outcomes;
use outcomes::{CResult, QResult, RenderOptions};

/// Generated code must reach the code trait through the alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, outcomes::DiscreteCode)]
#[code(crate = "outcomes", rename_all = "SCREAMING_SNAKE_CASE")]
enum ECode {
    Invalid,
}

#[derive(outcomes::CResult)]
#[qresult(crate = "outcomes", Self, ECode, String)]
struct Lookup;

#[derive(outcomes::QResult)]
#[qresult(crate = "outcomes", Self, String)]
struct Greeting;

fn main() {
    let greeting = QResult::<Greeting>::ok("hello".to_owned());
    let _: Option<&String> = greeting.result();
    let failed: Result<CResult<Lookup>, outcomes::ConstructionError> =
        CResult::<Lookup>::fail(ECode::Invalid, "bad");
    if let Ok(outcome) = failed {
        let _: String = outcome.render(RenderOptions::bare());
    }
}
