//! Procedural macros for `qresult`.
//!
//! `#[derive(QResult)]` and `#[derive(CResult)]` turn a marker type into an
//! outcome declaration. The generic parameters are written in a
//! `#[qresult(...)]` attribute in the order the outcome family expects:
//!
//! ```rust,ignore
//! #[derive(QResult)]
//! #[qresult(Self, (String, i64, Vec<Decimal>))]
//! struct Address;
//!
//! #[derive(CResult)]
//! #[qresult(Self, ECode, Union<String, i64>)]
//! struct Token;
//! ```
//!
//! The derives never reject a malformed parameter list themselves. They
//! record it in the generated declaration so that `qresult` can report it at
//! runtime, once per type, without preventing the rest of the program from
//! compiling.
//!
//! `#[derive(DiscreteCode)]` lists the unit variants of an enum as the
//! members of a discrete failure code type.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod code;
mod derive;

use derive::Family;

/// Derives a two-parameter outcome declaration from `#[qresult(...)]`.
#[proc_macro_derive(QResult, attributes(qresult))]
pub fn derive_qresult(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input, Family::Plain)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives a three-parameter outcome declaration from `#[qresult(...)]`.
#[proc_macro_derive(CResult, attributes(qresult))]
pub fn derive_cresult(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input, Family::Coded)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives `qresult::DiscreteCode` for an enum with unit variants.
///
/// Rename members with `#[code(name = "...")]` on a variant or
/// `#[code(rename_all = "SCREAMING_SNAKE_CASE")]` on the enum.
#[proc_macro_derive(DiscreteCode, attributes(code))]
pub fn derive_discrete_code(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    code::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
