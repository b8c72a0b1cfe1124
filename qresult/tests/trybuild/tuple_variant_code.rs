//! Trybuild fixture: `DiscreteCode` on an enumeration with a tuple variant.

use qresult::DiscreteCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, DiscreteCode)]
enum ECode {
    Invalid(u8),
}

fn main() {
    let _ = ECode::Invalid(1);
}
