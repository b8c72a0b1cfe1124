//! Declaration traits and the static descriptor of a generic parameter list.

use std::any::TypeId;
use std::fmt;

use crate::code::DiscreteCode;
use crate::shape::Shape;
use crate::value::Payload;

/// Outcome family a declaration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Two parameters: self reference and value shape ([`QResult`](crate::QResult)).
    Plain,
    /// Three parameters: self reference, code enum and value shape
    /// ([`CResult`](crate::CResult)).
    Coded,
}

impl Family {
    /// Number of generic parameters the family expects.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Plain => 2,
            Self::Coded => 3,
        }
    }

    /// Zero-based position of the value shape parameter.
    #[must_use]
    pub const fn value_position(self) -> usize {
        self.arity() - 1
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "Result",
            Self::Coded => "CResult",
        })
    }
}

/// What a declaration knows about its code type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeInfo {
    /// Name of the code type.
    pub type_name: &'static str,
    /// Whether the type is a closed enumeration.
    pub enumerated: bool,
}

impl CodeInfo {
    /// Describes the code type `C`.
    #[must_use]
    pub fn of<C: DiscreteCode>() -> Self {
        Self {
            type_name: C::TYPE_NAME,
            enumerated: C::members().is_some(),
        }
    }
}

/// One entry of a declared generic parameter list.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclParam {
    /// `Self`.
    SelfType,
    /// A named type.
    Type {
        /// Type as written.
        name: &'static str,
        /// Identity of the type.
        id: TypeId,
    },
    /// A by-name forward reference, written as a string literal.
    ForwardRef(&'static str),
    /// A discrete code type.
    Code(CodeInfo),
    /// A value shape.
    Shape(Shape),
    /// A parameter that could not be interpreted at its position.
    Unresolved(&'static str),
}

impl DeclParam {
    /// Describes the named type `T`.
    #[must_use]
    pub fn of_type<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self::Type {
            name,
            id: TypeId::of::<T>(),
        }
    }

    /// Describes the code type `C`.
    #[must_use]
    pub fn code<C: DiscreteCode>() -> Self {
        Self::Code(CodeInfo::of::<C>())
    }
}

impl fmt::Display for DeclParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfType => f.write_str("Self"),
            Self::Type { name, .. } => f.write_str(name),
            Self::ForwardRef(name) => write!(f, "'{name}'"),
            Self::Code(info) => f.write_str(info.type_name),
            Self::Shape(shape) => shape.fmt(f),
            Self::Unresolved(text) => f.write_str(text),
        }
    }
}

/// Static descriptor of an outcome declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    type_name: &'static str,
    type_id: TypeId,
    family: Family,
    params: Option<Vec<DeclParam>>,
}

impl Declaration {
    /// Describes the declaration `D`.
    ///
    /// `params` is `None` when no generic parameter list was declared.
    #[must_use]
    pub fn new<D: Declared>(family: Family, params: Option<Vec<DeclParam>>) -> Self {
        Self {
            type_name: D::NAME,
            type_id: TypeId::of::<D>(),
            family,
            params,
        }
    }

    /// Name of the declaring type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Identity of the declaring type.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Family the declaration belongs to.
    #[must_use]
    pub const fn family(&self) -> Family {
        self.family
    }

    /// Declared generic parameters, if any.
    #[must_use]
    pub fn params(&self) -> Option<&[DeclParam]> {
        self.params.as_deref()
    }
}

/// Behaviour shared by every outcome declaration.
pub trait Declared: Sized + 'static {
    /// Name used in renderings and diagnostics.
    const NAME: &'static str;

    /// Shape success payloads are checked against.
    fn shape() -> Shape;

    /// Descriptor of the declared generic parameter list.
    fn declaration() -> Declaration;
}

/// Declaration of a two-parameter outcome, [`QResult`](crate::QResult).
///
/// ```rust
/// use qresult::{DeclParam, Declaration, Declared, Family, Payload, QResult, ResultDecl, Shape};
///
/// struct Greeting;
///
/// impl Declared for Greeting {
///     const NAME: &'static str = "Greeting";
///
///     fn shape() -> Shape {
///         <String as Payload>::shape()
///     }
///
///     fn declaration() -> Declaration {
///         Declaration::new::<Self>(
///             Family::Plain,
///             Some(vec![DeclParam::SelfType, DeclParam::Shape(Self::shape())]),
///         )
///     }
/// }
///
/// impl ResultDecl for Greeting {
///     type Value = String;
/// }
///
/// assert!(QResult::<Greeting>::ok("hello".to_owned()).is_ok());
/// ```
pub trait ResultDecl: Declared {
    /// Success payload type.
    type Value: Payload;
}

/// Declaration of a three-parameter outcome, [`CResult`](crate::CResult).
pub trait CResultDecl: Declared {
    /// Discrete failure code type.
    type Code: DiscreteCode;
    /// Success payload type.
    type Value: Payload;
}
