//! Parsing of the `#[qresult(...)]` declaration attribute.

use syn::parse::ParseStream;
use syn::{Attribute, LitStr, Token, Type};

/// One generic parameter as written in the attribute.
#[derive(Clone)]
pub(crate) enum Param {
    /// A by-name forward reference such as `"Address"`.
    Forward(LitStr),
    /// A Rust type.
    Type(Type),
}

/// Parsed `#[qresult(...)]` attribute.
#[derive(Clone, Default)]
pub(crate) struct DeclAttr {
    pub params: Vec<Param>,
    pub crate_path: Option<syn::Path>,
}

/// Extracts the `#[qresult(...)]` attribute, if present.
///
/// Returns `Ok(None)` when the type carries no such attribute; a repeated
/// attribute is a hard error since only one parameter list can apply.
pub(crate) fn parse_decl_attr(attrs: &[Attribute]) -> syn::Result<Option<DeclAttr>> {
    let mut found: Option<DeclAttr> = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("qresult")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[qresult(...)] attribute",
            ));
        }
        found = Some(attr.parse_args_with(parse_args)?);
    }
    Ok(found)
}

fn parse_args(input: ParseStream<'_>) -> syn::Result<DeclAttr> {
    let mut out = DeclAttr::default();
    while !input.is_empty() {
        if input.peek(Token![crate]) && input.peek2(Token![=]) {
            let keyword = input.parse::<Token![crate]>()?;
            input.parse::<Token![=]>()?;
            let path = input.parse::<LitStr>()?;
            if out.crate_path.is_some() {
                return Err(syn::Error::new(keyword.span, "duplicate `crate` argument"));
            }
            out.crate_path = Some(path.parse::<syn::Path>()?);
        } else if input.peek(LitStr) {
            out.params.push(Param::Forward(input.parse()?));
        } else {
            out.params.push(Param::Type(input.parse()?));
        }
        if input.is_empty() {
            break;
        }
        input.parse::<Token![,]>()?;
    }
    Ok(out)
}

/// Renders a type the way it was written, without token spacing.
pub(crate) fn type_text(ty: &Type) -> String {
    let spaced = quote::quote!(#ty).to_string();
    [
        (" :: ", "::"),
        (":: ", "::"),
        (" < ", "<"),
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" , ", ", "),
        ("( ", "("),
        (" )", ")"),
        ("[ ", "["),
        (" ]", "]"),
        (" ; ", "; "),
        ("& ", "&"),
    ]
    .iter()
    .fold(spaced, |text, (from, to)| text.replace(from, to))
}

/// Renders a parameter for diagnostics.
pub(crate) fn param_text(param: &Param) -> String {
    match param {
        Param::Forward(lit) => format!("'{}'", lit.value()),
        Param::Type(ty) => type_text(ty),
    }
}

/// Returns `true` when `ty` is the `Self` keyword.
pub(crate) fn is_self(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("Self"))
}
