//! Recursive conformance checks of success payloads against declared shapes.
//!
//! The checker is shape-directed: unions try each alternative in declaration
//! order and stop at the first match, tuples check arity before elements,
//! lists check every element against the single element shape, and plain
//! types accept instances of the type or a subtype. [`Shape::Any`] accepts
//! everything. A top-level [`Value::None`] is always rejected because a
//! success must carry an actual payload.

use crate::shape::Shape;
use crate::value::Value;

mod error;

pub use error::ConformanceError;

/// Checks a success payload against its declared shape.
///
/// # Errors
///
/// Returns the first [`ConformanceError`] found, or
/// [`ConformanceError::NoValue`] when `value` is [`Value::None`].
///
/// # Examples
///
/// ```rust
/// use qresult::{Shape, TypeTag, Value, check};
///
/// let shape = Shape::tuple([Shape::of(TypeTag::Text), Shape::of(TypeTag::Int)]);
/// assert!(check(&Value::tuple([Value::from("a"), Value::Int(1)]), &shape).is_ok());
/// assert!(check(&Value::tuple([Value::from("a")]), &shape).is_err());
/// ```
pub fn check(value: &Value, shape: &Shape) -> Result<(), ConformanceError> {
    if value.is_none() {
        return Err(ConformanceError::NoValue);
    }
    conform(value, shape)
}

fn conform(value: &Value, shape: &Shape) -> Result<(), ConformanceError> {
    match shape {
        Shape::Any => Ok(()),
        Shape::Type(tag) => {
            if tag.accepts(value) {
                Ok(())
            } else {
                Err(ConformanceError::TypeMismatch {
                    value: value.clone(),
                    found: value.kind(),
                    expected: tag.clone(),
                })
            }
        }
        Shape::Union(alternatives) => {
            if alternatives
                .iter()
                .any(|alternative| conform(value, alternative).is_ok())
            {
                Ok(())
            } else {
                Err(ConformanceError::NoAlternative {
                    value: value.clone(),
                    alternatives: alternatives.clone(),
                })
            }
        }
        Shape::Tuple(elements) => conform_tuple(value, elements),
        Shape::List(element) => conform_list(value, element),
    }
}

fn conform_tuple(value: &Value, shapes: &[Shape]) -> Result<(), ConformanceError> {
    let Value::Tuple(items) = value else {
        return Err(ConformanceError::NotATuple {
            value: value.clone(),
        });
    };
    if items.len() != shapes.len() {
        return Err(ConformanceError::TupleArity {
            expected: shapes.len(),
            found: items.len(),
        });
    }
    for (index, (item, shape)) in items.iter().zip(shapes).enumerate() {
        if conform(item, shape).is_err() {
            return Err(ConformanceError::TupleElement {
                index,
                value: item.clone(),
                shape: shape.clone(),
            });
        }
    }
    Ok(())
}

fn conform_list(value: &Value, shape: &Shape) -> Result<(), ConformanceError> {
    let Value::List(items) = value else {
        return Err(ConformanceError::NotAList {
            value: value.clone(),
        });
    };
    for (index, item) in items.iter().enumerate() {
        if conform(item, shape).is_err() {
            return Err(ConformanceError::ListElement {
                index,
                value: item.clone(),
                shape: shape.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
