//! Reasons a success payload fails to conform to its declared shape.

use serde::Serialize;
use thiserror::Error;

use crate::shape::{Shape, TypeTag};
use crate::value::Value;

/// A success payload that does not match its declared [`Shape`].
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ConformanceError {
    /// The payload was the "no value" marker.
    #[error("result must not be None")]
    NoValue,

    /// No union alternative accepted the payload.
    #[error("value {} must match one of {}", .value.repr(), Alternatives(.alternatives))]
    NoAlternative {
        /// Offending payload.
        value: Value,
        /// Every alternative that was attempted, in order.
        alternatives: Vec<Shape>,
    },

    /// A tuple shape received something other than a tuple.
    #[error("value {} must be a tuple", .value.repr())]
    NotATuple {
        /// Offending payload.
        value: Value,
    },

    /// A tuple had the wrong number of elements.
    #[error("tuple must have {expected} elements, got {found}")]
    TupleArity {
        /// Declared arity.
        expected: usize,
        /// Arity of the payload.
        found: usize,
    },

    /// A tuple element did not match its positional shape.
    #[error("tuple element {index} ({}) must match {shape}", .value.repr())]
    TupleElement {
        /// Zero-based position of the element.
        index: usize,
        /// Offending element.
        value: Value,
        /// Shape declared for the position.
        shape: Shape,
    },

    /// A list shape received something other than a list.
    #[error("value {} must be a list", .value.repr())]
    NotAList {
        /// Offending payload.
        value: Value,
    },

    /// A list element did not match the element shape.
    #[error("list element {index} ({}) must match {shape}", .value.repr())]
    ListElement {
        /// Zero-based position of the element.
        index: usize,
        /// Offending element.
        value: Value,
        /// Declared element shape.
        shape: Shape,
    },

    /// A payload was not an instance of the declared plain type.
    #[error("value {} of type {found} does not match expected {expected}", .value.repr())]
    TypeMismatch {
        /// Offending payload.
        value: Value,
        /// Runtime kind of the payload.
        found: &'static str,
        /// Declared type.
        expected: TypeTag,
    },
}

struct Alternatives<'a>(&'a [Shape]);

impl std::fmt::Display for Alternatives<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (index, shape) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{shape}")?;
        }
        f.write_str("]")
    }
}
