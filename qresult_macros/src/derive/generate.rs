//! Code generation for outcome declarations.
//!
//! The generated `Declared::declaration` records the parameter list as
//! written. Positions that cannot be interpreted fall back to `Unbound` for
//! the code and the dynamic `Value` for the payload, so the declaration still
//! compiles and the runtime validator can report the mistake.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::parse::{is_self, param_text, type_text};
use super::shape::lower;
use super::{DeclAttr, Family, Param, resolve_crate_path};

/// Tokens filling the generated impls.
struct Parts {
    code_ty: TokenStream,
    value_ty: TokenStream,
    shape: TokenStream,
    params: TokenStream,
}

impl Parts {
    fn unbound(krate: &TokenStream) -> Self {
        Self {
            code_ty: quote! { #krate::Unbound },
            value_ty: quote! { #krate::Value },
            shape: quote! { #krate::Shape::Any },
            params: quote! { ::core::option::Option::None },
        }
    }

    fn build(family: Family, attr: &DeclAttr, krate: &TokenStream) -> Self {
        let mut parts = Self::unbound(krate);
        let arity_matches = attr.params.len() == family.arity();
        let value_position = family.arity() - 1;

        let entries: Vec<TokenStream> = attr
            .params
            .iter()
            .enumerate()
            .map(|(position, param)| match position {
                0 => self_param(param, krate),
                1 if arity_matches && family == Family::Coded => {
                    parts.code_param(param, krate)
                }
                p if arity_matches && p == value_position => parts.value_param(param, krate),
                _ => unresolved(param, krate),
            })
            .collect();

        parts.params = quote! {
            ::core::option::Option::Some(::std::vec![#(#entries),*])
        };
        parts
    }

    fn code_param(&mut self, param: &Param, krate: &TokenStream) -> TokenStream {
        match param {
            Param::Type(ty) => {
                self.code_ty = quote! { #ty };
                quote! { #krate::DeclParam::code::<#ty>() }
            }
            Param::Forward(_) => unresolved(param, krate),
        }
    }

    fn value_param(&mut self, param: &Param, krate: &TokenStream) -> TokenStream {
        match param {
            Param::Type(ty) => {
                let lowered = lower(ty, krate);
                self.value_ty = lowered.ty;
                self.shape = lowered.shape;
                quote! { #krate::DeclParam::Shape(<Self as #krate::Declared>::shape()) }
            }
            Param::Forward(_) => unresolved(param, krate),
        }
    }
}

fn self_param(param: &Param, krate: &TokenStream) -> TokenStream {
    match param {
        Param::Forward(name) => quote! { #krate::DeclParam::ForwardRef(#name) },
        Param::Type(ty) if is_self(ty) => quote! { #krate::DeclParam::SelfType },
        Param::Type(ty) => {
            let text = type_text(ty);
            quote! { #krate::DeclParam::of_type::<#ty>(#text) }
        }
    }
}

fn unresolved(param: &Param, krate: &TokenStream) -> TokenStream {
    let text = param_text(param);
    quote! { #krate::DeclParam::Unresolved(#text) }
}

/// Generates the `Declared` impl and the family-specific declaration impl.
pub(crate) fn generate(ident: &Ident, family: Family, attr: Option<&DeclAttr>) -> TokenStream {
    let krate = resolve_crate_path(attr.and_then(|a| a.crate_path.as_ref()));
    let Parts {
        code_ty,
        value_ty,
        shape,
        params,
    } = attr.map_or_else(
        || Parts::unbound(&krate),
        |a| Parts::build(family, a, &krate),
    );
    let name = ident.to_string();

    let (family_tokens, family_impl) = match family {
        Family::Plain => (
            quote! { #krate::Family::Plain },
            quote! {
                #[automatically_derived]
                impl #krate::ResultDecl for #ident {
                    type Value = #value_ty;
                }
            },
        ),
        Family::Coded => (
            quote! { #krate::Family::Coded },
            quote! {
                #[automatically_derived]
                impl #krate::CResultDecl for #ident {
                    type Code = #code_ty;
                    type Value = #value_ty;
                }
            },
        ),
    };

    quote! {
        #[automatically_derived]
        impl #krate::Declared for #ident {
            const NAME: &'static str = #name;

            fn shape() -> #krate::Shape {
                #shape
            }

            fn declaration() -> #krate::Declaration {
                #krate::Declaration::new::<Self>(#family_tokens, #params)
            }
        }

        #family_impl
    }
}
