//! Trybuild fixture: a cause that does not implement `std::error::Error`.

use qresult::{CResult, DiscreteCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, DiscreteCode)]
enum ECode {
    Invalid,
}

#[derive(qresult::CResult)]
#[qresult(Self, ECode, String)]
struct Lookup;

fn main() {
    let _ = CResult::<Lookup>::fail_with(ECode::Invalid, 42_u8);
}
