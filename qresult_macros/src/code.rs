//! Expansion of the `DiscreteCode` derive.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Variant};

use crate::derive::resolve_crate_path;

/// Case conversion applied to variant names by `rename_all`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Snake,
    ScreamingSnake,
    Kebab,
    Camel,
    Pascal,
}

impl RenameRule {
    pub(crate) fn parse(rule: &str, span: Span) -> syn::Result<Self> {
        match rule {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            _ => Err(syn::Error::new(span, format!("unknown rename_all rule `{rule}`"))),
        }
    }

    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
            Self::Snake => name.to_snake_case(),
            Self::ScreamingSnake => name.to_shouty_snake_case(),
            Self::Kebab => name.to_kebab_case(),
            Self::Camel => name.to_lower_camel_case(),
            Self::Pascal => name.to_upper_camel_case(),
        }
    }
}

#[derive(Default)]
struct EnumAttrs {
    rename_all: Option<RenameRule>,
    crate_path: Option<syn::Path>,
}

fn parse_enum_attrs(attrs: &[Attribute]) -> syn::Result<EnumAttrs> {
    let mut out = EnumAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("code")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let rule = meta.value()?.parse::<LitStr>()?;
                out.rename_all = Some(RenameRule::parse(&rule.value(), rule.span())?);
                Ok(())
            } else if meta.path.is_ident("crate") {
                let path = meta.value()?.parse::<LitStr>()?;
                out.crate_path = Some(path.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `rename_all` or `crate`"))
            }
        })?;
    }
    Ok(out)
}

fn variant_name(variant: &Variant, rule: Option<RenameRule>) -> syn::Result<String> {
    let mut name = None;
    for attr in variant.attrs.iter().filter(|a| a.path().is_ident("code")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                name = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("expected `name`"))
            }
        })?;
    }
    let ident = variant.ident.to_string();
    Ok(name.unwrap_or_else(|| rule.map_or_else(|| ident.clone(), |r| r.apply(&ident))))
}

/// Expands `#[derive(DiscreteCode)]` for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "DiscreteCode can only be derived for enums",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "DiscreteCode cannot be derived for generic enums",
        ));
    }
    let attrs = parse_enum_attrs(&input.attrs)?;
    let krate = resolve_crate_path(attrs.crate_path.as_ref());
    let ident = &input.ident;
    let type_name = ident.to_string();

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut names = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "DiscreteCode variants must be unit variants",
            ));
        }
        variants.push(&variant.ident);
        names.push(variant_name(variant, attrs.rename_all)?);
    }

    Ok(quote! {
        #[automatically_derived]
        impl #krate::DiscreteCode for #ident {
            const TYPE_NAME: &'static str = #type_name;

            fn members() -> ::core::option::Option<&'static [Self]> {
                const MEMBERS: &[#ident] = &[#(#ident::#variants),*];
                ::core::option::Option::Some(MEMBERS)
            }

            fn name(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(match *self {
                    #(#ident::#variants => #names,)*
                })
            }
        }
    })
}
