//! Validation of declared generic parameter lists.

use serde::Serialize;
use thiserror::Error;

use super::types::{DeclParam, Declaration, Family};

/// A problem found in a declaration's generic parameter list.
///
/// Issues are soft: they are reported as diagnostics and never prevent the
/// declaration from being used.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum DeclarationIssue {
    /// No generic parameter list was declared.
    #[error("does not specify generic parameters")]
    MissingParameters,

    /// The parameter list has the wrong length.
    #[error("must specify exactly {expected} generic parameters, got {found}")]
    ParameterCount {
        /// Arity of the family.
        expected: usize,
        /// Number of parameters declared.
        found: usize,
    },

    /// The first parameter names a different type.
    #[error("first generic parameter ({found}) must be the same as the declaring type ({expected})")]
    SelfReference {
        /// Parameter as written.
        found: String,
        /// Declaring type.
        expected: &'static str,
    },

    /// The first parameter is a forward reference to a different name.
    #[error("first generic parameter ('{found}') must refer to the declaring type name ({expected})")]
    ForwardReference {
        /// Name referenced.
        found: String,
        /// Declaring type.
        expected: &'static str,
    },

    /// The code parameter is not a closed enumeration.
    #[error("second generic parameter ({found}) must be an enumerated type")]
    NotAnEnumeration {
        /// Parameter as written.
        found: String,
    },

    /// The value parameter is neither a type nor a shape construct.
    #[error(
        "{} generic parameter ({found}) must be a valid type or shape construct (union, tuple, list)",
        ordinal(.position)
    )]
    InvalidShape {
        /// One-based position of the parameter.
        position: usize,
        /// Parameter as written.
        found: String,
    },
}

const fn ordinal(position: &usize) -> &'static str {
    match *position {
        1 => "first",
        2 => "second",
        3 => "third",
        _ => "trailing",
    }
}

/// Checks a declaration's generic parameter list.
///
/// Every applicable check runs independently; the result lists all issues
/// found, in parameter order. When the arity is wrong only the first
/// parameter is checked further, since later positions cannot be assigned a
/// meaning.
///
/// ```rust
/// use qresult::{DeclParam, Declaration, Declared, DeclarationIssue, Family, Shape, validate};
///
/// struct Orphan;
///
/// impl Declared for Orphan {
///     const NAME: &'static str = "Orphan";
///     fn shape() -> Shape { Shape::Any }
///     fn declaration() -> Declaration {
///         Declaration::new::<Self>(Family::Plain, Some(vec![DeclParam::SelfType]))
///     }
/// }
///
/// assert_eq!(
///     validate(&Orphan::declaration()),
///     vec![DeclarationIssue::ParameterCount { expected: 2, found: 1 }]
/// );
/// ```
#[must_use]
pub fn validate(declaration: &Declaration) -> Vec<DeclarationIssue> {
    let Some(params) = declaration.params() else {
        return vec![DeclarationIssue::MissingParameters];
    };
    let family = declaration.family();
    let mut issues = Vec::new();

    let arity_matches = params.len() == family.arity();
    if !arity_matches {
        issues.push(DeclarationIssue::ParameterCount {
            expected: family.arity(),
            found: params.len(),
        });
    }

    if let Some(first) = params.first() {
        issues.extend(check_self_reference(declaration, first));
    }

    if !arity_matches {
        return issues;
    }

    if family == Family::Coded
        && let Some(code) = params.get(1)
    {
        issues.extend(check_code(code));
    }

    let position = family.value_position();
    if let Some(value) = params.get(position) {
        issues.extend(check_shape(position + 1, value));
    }

    issues
}

fn check_self_reference(declaration: &Declaration, param: &DeclParam) -> Option<DeclarationIssue> {
    let expected = declaration.type_name();
    match param {
        DeclParam::SelfType => None,
        DeclParam::Type { id, .. } if *id == declaration.type_id() => None,
        DeclParam::ForwardRef(name) if *name == expected => None,
        DeclParam::ForwardRef(name) => Some(DeclarationIssue::ForwardReference {
            found: (*name).to_owned(),
            expected,
        }),
        other => Some(DeclarationIssue::SelfReference {
            found: other.to_string(),
            expected,
        }),
    }
}

fn check_code(param: &DeclParam) -> Option<DeclarationIssue> {
    match param {
        DeclParam::Code(info) if info.enumerated => None,
        other => Some(DeclarationIssue::NotAnEnumeration {
            found: other.to_string(),
        }),
    }
}

fn check_shape(position: usize, param: &DeclParam) -> Option<DeclarationIssue> {
    match param {
        DeclParam::Shape(_) => None,
        other => Some(DeclarationIssue::InvalidShape {
            position,
            found: other.to_string(),
        }),
    }
}

/// Outcome of validating one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationReport {
    type_name: &'static str,
    issues: Vec<DeclarationIssue>,
}

impl DeclarationReport {
    /// Validates `declaration`.
    #[must_use]
    pub fn new(declaration: &Declaration) -> Self {
        Self {
            type_name: declaration.type_name(),
            issues: validate(declaration),
        }
    }

    /// Name of the validated declaration.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Issues found, in parameter order.
    #[must_use]
    pub fn issues(&self) -> &[DeclarationIssue] {
        &self.issues
    }

    /// Returns `true` when no issues were found.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.issues.is_empty()
    }
}
