//! Lowering of a declared value type into a payload type and shape.
//!
//! `Union<..>`, `Vec<..>`/`List<..>`, `Option<..>` and tuples are taken
//! apart so that the generated shape describes every level. A `Union`
//! cannot be expressed statically, so its position becomes the dynamic
//! `Value` type; everything else keeps its Rust type.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Payload type and shape expression for one declared type.
pub(crate) struct Lowered {
    pub ty: TokenStream,
    pub shape: TokenStream,
}

enum Construct<'a> {
    Union(Vec<&'a Type>),
    List(&'a Type),
    Optional(&'a Type),
    Tuple(Vec<&'a Type>),
    Plain,
}

pub(crate) fn lower(ty: &Type, krate: &TokenStream) -> Lowered {
    match classify(ty) {
        Construct::Union(alternatives) => {
            let shapes = alternatives.iter().map(|alt| lower(alt, krate).shape);
            Lowered {
                ty: quote! { #krate::Value },
                shape: quote! { #krate::Shape::union([#(#shapes),*]) },
            }
        }
        Construct::List(element) => {
            let inner = lower(element, krate);
            let (inner_ty, inner_shape) = (inner.ty, inner.shape);
            Lowered {
                ty: quote! { ::std::vec::Vec<#inner_ty> },
                shape: quote! { #krate::Shape::list(#inner_shape) },
            }
        }
        Construct::Optional(element) => {
            let inner = lower(element, krate);
            let (inner_ty, inner_shape) = (inner.ty, inner.shape);
            Lowered {
                ty: quote! { ::core::option::Option<#inner_ty> },
                shape: quote! { #krate::Shape::optional(#inner_shape) },
            }
        }
        Construct::Tuple(elements) => {
            let parts: Vec<Lowered> = elements.iter().map(|elem| lower(elem, krate)).collect();
            let types = parts.iter().map(|part| &part.ty);
            let shapes = parts.iter().map(|part| &part.shape);
            Lowered {
                ty: quote! { (#(#types,)*) },
                shape: quote! { #krate::Shape::tuple([#(#shapes),*]) },
            }
        }
        Construct::Plain => Lowered {
            ty: quote! { #ty },
            shape: quote! { <#ty as #krate::Payload>::shape() },
        },
    }
}

fn classify(ty: &Type) -> Construct<'_> {
    match ty {
        Type::Paren(inner) => classify(&inner.elem),
        Type::Group(inner) => classify(&inner.elem),
        Type::Tuple(tuple) if !tuple.elems.is_empty() => {
            Construct::Tuple(tuple.elems.iter().collect())
        }
        Type::Path(path) => classify_path(path),
        _ => Construct::Plain,
    }
}

fn classify_path(path: &TypePath) -> Construct<'_> {
    if path.qself.is_some() {
        return Construct::Plain;
    }
    let Some(last) = path.path.segments.last() else {
        return Construct::Plain;
    };
    let name = last.ident.to_string();
    let args = type_arguments(&last.arguments);
    match (name.as_str(), args.as_slice()) {
        ("Union", [_, ..]) => Construct::Union(args.to_vec()),
        ("Vec" | "List", &[element]) => Construct::List(element),
        ("Option", &[element]) => Construct::Optional(element),
        _ => Construct::Plain,
    }
}

fn type_arguments(arguments: &PathArguments) -> Vec<&Type> {
    let PathArguments::AngleBracketed(angle) = arguments else {
        return Vec::new();
    };
    angle
        .args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    fn lowered(ty: &Type) -> (String, String) {
        let krate = quote! { q };
        let out = lower(ty, &krate);
        (out.ty.to_string(), out.shape.to_string())
    }

    #[rstest]
    fn plain_types_keep_their_type() {
        let (ty, shape) = lowered(&parse_quote!(String));
        assert_eq!(ty, "String");
        assert_eq!(shape, "< String as q :: Payload > :: shape ()");
    }

    #[rstest]
    fn unions_become_dynamic() {
        let (ty, shape) = lowered(&parse_quote!(Union<String, i64>));
        assert_eq!(ty, "q :: Value");
        assert!(shape.starts_with("q :: Shape :: union ("), "{shape}");
        assert!(shape.contains("< i64 as q :: Payload >"), "{shape}");
    }

    #[rstest]
    fn lists_and_tuples_are_lowered_structurally() {
        let (ty, shape) = lowered(&parse_quote!((String, List<Decimal>)));
        assert_eq!(ty, "(String , :: std :: vec :: Vec < Decimal > ,)");
        assert!(shape.starts_with("q :: Shape :: tuple ("), "{shape}");
        assert!(shape.contains("q :: Shape :: list ("), "{shape}");
    }

    #[rstest]
    fn unions_nested_in_lists_make_the_element_dynamic() {
        let (ty, _) = lowered(&parse_quote!(Vec<Union<String, i64>>));
        assert_eq!(ty, ":: std :: vec :: Vec < q :: Value >");
    }

    #[rstest]
    fn options_become_optional_shapes() {
        let (ty, shape) = lowered(&parse_quote!(Option<i64>));
        assert_eq!(ty, ":: core :: option :: Option < i64 >");
        assert!(shape.starts_with("q :: Shape :: optional ("), "{shape}");
    }

    #[rstest]
    fn unit_is_a_plain_type() {
        let (ty, _) = lowered(&parse_quote!(()));
        assert_eq!(ty, "()");
    }
}
