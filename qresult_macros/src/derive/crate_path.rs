//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `crate = "..."` argument into the path that
//! prefixes every `qresult` item referenced by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from a parsed `crate = "..."` argument.
///
/// Defaults to `::qresult` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::qresult }, |path| quote! { #path })
}
