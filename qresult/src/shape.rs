//! Declarative descriptions of what a success payload must look like.

use std::fmt;

use serde::Serialize;

use crate::value::Value;

/// Plain type accepted by [`Shape::Type`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Boolean values.
    Bool,
    /// Whole numbers. Booleans are accepted as a subtype.
    Int,
    /// Binary floating point numbers.
    Float,
    /// Fixed-point decimal numbers.
    Decimal,
    /// Text.
    Text,
    /// The "no value" marker.
    NoneType,
    /// A payload type outside the built-in model, matched by name.
    Named(&'static str),
}

impl TypeTag {
    /// Returns `true` when `value` is an instance of this type or a subtype.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_) | Value::Bool(_))
            | (Self::Float, Value::Float(_))
            | (Self::Decimal, Value::Decimal(_))
            | (Self::Text, Value::Text(_))
            | (Self::NoneType, Value::None) => true,
            (Self::Named(expected), Value::Opaque { type_name, .. }) => expected == type_name,
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Text => "text",
            Self::NoneType => "none",
            Self::Named(name) => *name,
        };
        f.write_str(name)
    }
}

/// Shape descriptor a success value is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum Shape {
    /// No constraint.
    Any,
    /// Instance of a plain type.
    Type(TypeTag),
    /// Conforms to at least one alternative, tried in order.
    Union(Vec<Shape>),
    /// Tuple of exactly this arity, element-wise.
    Tuple(Vec<Shape>),
    /// Homogeneous list of the element shape.
    List(Box<Shape>),
}

impl Shape {
    /// Builds a union, flattening nested unions and collapsing a single
    /// alternative to itself.
    ///
    /// ```rust
    /// use qresult::{Shape, TypeTag};
    ///
    /// let text = Shape::Type(TypeTag::Text);
    /// let int = Shape::Type(TypeTag::Int);
    /// let nested = Shape::union([text.clone(), Shape::union([int.clone(), text.clone()])]);
    /// assert_eq!(nested, Shape::Union(vec![text.clone(), int, text.clone()]));
    /// assert_eq!(Shape::union([text.clone()]), text);
    /// ```
    #[must_use]
    pub fn union(alternatives: impl IntoIterator<Item = Self>) -> Self {
        let mut flat = Vec::new();
        for alternative in alternatives {
            match alternative {
                Self::Union(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1
            && let Some(only) = flat.pop()
        {
            return only;
        }
        Self::Union(flat)
    }

    /// Builds a fixed-arity tuple shape.
    #[must_use]
    pub fn tuple(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    /// Builds a homogeneous list shape.
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List(Box::new(element))
    }

    /// Builds `element | none`, the shape of an optional payload.
    #[must_use]
    pub fn optional(element: Self) -> Self {
        Self::union([element, Self::Type(TypeTag::NoneType)])
    }

    /// Shorthand for [`Shape::Type`].
    #[must_use]
    pub const fn of(tag: TypeTag) -> Self {
        Self::Type(tag)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Type(tag) => tag.fmt(f),
            Self::Union(alternatives) => {
                for (index, alternative) in alternatives.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" | ")?;
                    }
                    alternative.fmt(f)?;
                }
                Ok(())
            }
            Self::Tuple(elements) => {
                f.write_str("(")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    element.fmt(f)?;
                }
                if elements.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::List(element) => write!(f, "[{element}]"),
        }
    }
}
