//! Trybuild fixture: a coded failure built with another enumeration's code.

use qresult::{CResult, DiscreteCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, DiscreteCode)]
enum ECode {
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DiscreteCode)]
enum Severity {
    Invalid,
}

#[derive(qresult::CResult)]
#[qresult(Self, ECode, String)]
struct Lookup;

fn main() {
    let _ = CResult::<Lookup>::fail(Severity::Invalid, "wrong code type");
    let _ = ECode::Invalid;
}
