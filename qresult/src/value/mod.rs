//! Dynamic model of success payloads.
//!
//! Statically typed payloads are lowered into a [`Value`] through the
//! [`Payload`] trait whenever they are checked against a [`Shape`] or
//! rendered. Payloads whose shape cannot be expressed as a Rust type (unions)
//! are carried as a `Value` directly.
//!
//! [`Shape`]: crate::Shape

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

mod payload;

pub use payload::Payload;

/// A success payload in dynamic form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// The "no value" marker.
    None,
    /// A boolean.
    Bool(bool),
    /// A whole number.
    Int(i128),
    /// A binary floating point number.
    Float(f64),
    /// A fixed-point decimal.
    Decimal(Decimal),
    /// Text.
    Text(String),
    /// A fixed-arity tuple.
    Tuple(Vec<Value>),
    /// A homogeneous sequence.
    List(Vec<Value>),
    /// A payload outside the built-in model.
    Opaque {
        /// Name matched by [`TypeTag::Named`](crate::TypeTag::Named).
        type_name: &'static str,
        /// Rendering of the payload.
        repr: String,
    },
}

impl Value {
    /// Builds a tuple value.
    #[must_use]
    pub fn tuple(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    /// Builds a list value.
    #[must_use]
    pub fn list(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::List(elements.into_iter().collect())
    }

    /// Builds an opaque value for a payload type outside the built-in model.
    #[must_use]
    pub fn opaque(type_name: &'static str, repr: impl Into<String>) -> Self {
        Self::Opaque {
            type_name,
            repr: repr.into(),
        }
    }

    /// Returns `true` for [`Value::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Name of the value's runtime kind, as reported in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::Text(_) => "text",
            Self::Tuple(_) => "tuple",
            Self::List(_) => "list",
            Self::Opaque { type_name, .. } => *type_name,
        }
    }

    /// Literal rendering in which nested and top-level text is quoted.
    #[must_use]
    pub const fn repr(&self) -> Repr<'_> {
        Repr(self)
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, quote_text: bool) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write_float(f, *value),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Text(text) if quote_text => write_quoted(f, text),
            Self::Text(text) => f.write_str(text),
            Self::Tuple(elements) => {
                f.write_str("(")?;
                write_elements(f, elements)?;
                if elements.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::List(elements) => {
                f.write_str("[")?;
                write_elements(f, elements)?;
                f.write_str("]")
            }
            Self::Opaque { repr, .. } => f.write_str(repr),
        }
    }
}

/// Renders top-level text unquoted and nested text quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, false)
    }
}

/// Display adapter returned by [`Value::repr`].
#[derive(Debug, Clone, Copy)]
pub struct Repr<'a>(&'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write(f, true)
    }
}

fn write_elements(f: &mut fmt::Formatter<'_>, elements: &[Value]) -> fmt::Result {
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        element.write(f, true)?;
    }
    Ok(())
}

/// Writes `value` the way outcome renderings expect floats: `nan`, `inf`,
/// positional between `1e-4` and `1e16`, otherwise `<mantissa>e<sign><exp>`
/// with at least two exponent digits.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value.is_sign_negative() { "-inf" } else { "inf" });
    }
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.write_str(&scientific);
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    if (-4..16).contains(&exponent) {
        let positional = value.to_string();
        f.write_str(&positional)?;
        return if positional.contains('.') {
            Ok(())
        } else {
            f.write_str(".0")
        };
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{quote}")?;
    for ch in text.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c if c.is_control() => write!(f, "\\x{:02x}", u32::from(c))?,
            c if c == quote => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(i128::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i128::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
