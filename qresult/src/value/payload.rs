//! Lowering of statically typed payloads into [`Value`] and [`Shape`].

use std::borrow::Cow;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::Value;
use crate::shape::{Shape, TypeTag};

/// A type that can be carried as the success payload of an outcome.
///
/// `to_value` lowers an instance into the dynamic model used for
/// conformance checks and rendering; `shape` describes every instance of the
/// type. Types outside the built-in model usually lower to
/// [`Value::Opaque`] and describe themselves with [`TypeTag::Named`].
///
/// ```rust
/// use qresult::{Payload, Shape, TypeTag, Value};
///
/// struct Parcel(u32);
///
/// impl Payload for Parcel {
///     fn to_value(&self) -> Value {
///         Value::opaque("Parcel", format!("Parcel({})", self.0))
///     }
///
///     fn shape() -> Shape {
///         Shape::of(TypeTag::Named("Parcel"))
///     }
/// }
///
/// assert_eq!(Parcel(7).to_value().to_string(), "Parcel(7)");
/// ```
pub trait Payload {
    /// Lowers the payload into its dynamic form.
    fn to_value(&self) -> Value;

    /// Shape every instance of this type conforms to.
    fn shape() -> Shape
    where
        Self: Sized;
}

impl Payload for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn shape() -> Shape {
        Shape::Any
    }
}

impl Payload for () {
    fn to_value(&self) -> Value {
        Value::None
    }

    fn shape() -> Shape {
        Shape::of(TypeTag::NoneType)
    }
}

impl Payload for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn shape() -> Shape {
        Shape::of(TypeTag::Bool)
    }
}

macro_rules! int_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Payload for $ty {
                fn to_value(&self) -> Value {
                    Value::Int(i128::from(*self))
                }

                fn shape() -> Shape {
                    Shape::of(TypeTag::Int)
                }
            }
        )*
    };
}

int_payload!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

macro_rules! pointer_sized_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Payload for $ty {
                fn to_value(&self) -> Value {
                    i128::try_from(*self).map_or_else(
                        |_| Value::opaque(stringify!($ty), self.to_string()),
                        Value::Int,
                    )
                }

                fn shape() -> Shape {
                    Shape::of(TypeTag::Int)
                }
            }
        )*
    };
}

pointer_sized_payload!(isize, usize);

impl Payload for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    fn shape() -> Shape {
        Shape::of(TypeTag::Float)
    }
}

impl Payload for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn shape() -> Shape {
        Shape::of(TypeTag::Float)
    }
}

impl Payload for Decimal {
    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }

    fn shape() -> Shape {
        Shape::of(TypeTag::Decimal)
    }
}

macro_rules! text_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Payload for $ty {
                fn to_value(&self) -> Value {
                    Value::Text(self.to_string())
                }

                fn shape() -> Shape {
                    Shape::of(TypeTag::Text)
                }
            }
        )*
    };
}

text_payload!(String, &'static str, char, Box<str>, Arc<str>, Cow<'static, str>);

impl<T: Payload> Payload for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::None, Payload::to_value)
    }

    fn shape() -> Shape {
        Shape::optional(T::shape())
    }
}

impl<T: Payload> Payload for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Payload::to_value).collect())
    }

    fn shape() -> Shape {
        Shape::list(T::shape())
    }
}

impl<T: Payload> Payload for Box<[T]> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Payload::to_value).collect())
    }

    fn shape() -> Shape {
        Shape::list(T::shape())
    }
}

impl<T: Payload, const N: usize> Payload for [T; N] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Payload::to_value).collect())
    }

    fn shape() -> Shape {
        Shape::list(T::shape())
    }
}

macro_rules! tuple_payload {
    ($(($($name:ident : $idx:tt),+))+) => {
        $(
            impl<$($name: Payload),+> Payload for ($($name,)+) {
                fn to_value(&self) -> Value {
                    Value::Tuple(vec![$(self.$idx.to_value()),+])
                }

                fn shape() -> Shape {
                    Shape::Tuple(vec![$($name::shape()),+])
                }
            }
        )+
    };
}

tuple_payload! {
    (A: 0)
    (A: 0, B: 1)
    (A: 0, B: 1, C: 2)
    (A: 0, B: 1, C: 2, D: 3)
    (A: 0, B: 1, C: 2, D: 3, E: 4)
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5)
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6)
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7)
}
