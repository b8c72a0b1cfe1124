//! Expansion of the `QResult` and `CResult` derives.

mod crate_path;
mod generate;
mod parse;
mod shape;

use proc_macro2::TokenStream;
use syn::{Data, DeriveInput};

pub(crate) use generate::generate;
pub(crate) use parse::{DeclAttr, Param, parse_decl_attr};

/// Outcome family being derived.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Family {
    Plain,
    Coded,
}

impl Family {
    pub(crate) const fn arity(self) -> usize {
        match self {
            Self::Plain => 2,
            Self::Coded => 3,
        }
    }

    pub(crate) const fn derive_name(self) -> &'static str {
        match self {
            Self::Plain => "QResult",
            Self::Coded => "CResult",
        }
    }
}

/// Expands a declaration derive for `input`.
pub(crate) fn expand(input: &DeriveInput, family: Family) -> syn::Result<TokenStream> {
    if let Data::Union(data) = &input.data {
        return Err(syn::Error::new_spanned(
            data.union_token,
            format!("{} cannot be derived for unions", family.derive_name()),
        ));
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "outcome declarations cannot be generic",
        ));
    }
    let attr = parse_decl_attr(&input.attrs)?;
    Ok(generate(&input.ident, family, attr.as_ref()))
}

pub(crate) use crate_path::resolve as resolve_crate_path;
