use super::derived_trait_names;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Ident, Type, Variant};

/// What the expansion needs to know about one error variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    /// `(field, type)` of the wrapped error, if any.
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
}

impl ErrorVariant<'_> {
    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "appflow_error only supports enums")
            .to_compile_error();
    };
    let variants = match data.variants.iter().map(parse_variant).collect::<Result<Vec<_>, _>>() {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);
    let derives = derived_trait_names(&input.attrs);
    let debug = (!derives.contains("Debug")).then(|| quote! { #[derive(Debug)] });
    let error = (!derives.contains("Error")).then(|| quote! { #[derive(::thiserror::Error)] });
    let ext_trait = expand_ext_trait(name, &ext, &variants);
    let source_impls = variants
        .iter()
        .filter(|v| !v.is_internal())
        .filter_map(|v| v.source.map(|source| expand_source_impls(name, &ext, v.ident, source)));
    let message_impls = variants.iter().any(ErrorVariant::is_internal).then(|| {
        quote! {
            impl From<&'static str> for #name {
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            impl From<String> for #name {
                fn from(message: String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    });

    quote! {
        #debug
        #error
        #input

        #ext_trait
        #(#source_impls)*
        #message_impls

        /// Renders an attached context as ` (context)`, or nothing.
        #[allow(dead_code)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| format!(" ({c})").into())
        }
    }
}

fn parse_variant(variant: &Variant) -> syn::Result<ErrorVariant<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "appflow_error variants must use named fields",
        ));
    };

    let mut source = None;
    let mut has_context = false;
    for field in &fields.named {
        let Some(ident) = &field.ident else { continue };
        if ident == "context" {
            if !is_context_type(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "`context` must be Option<Cow<'static, str>>",
                ));
            }
            has_context = true;
        } else if ident == "source" || has_attr(field, "source") {
            source = Some((ident, &field.ty));
        }
    }

    if source.is_some() && !has_context {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "variants wrapping a source need `context: Option<Cow<'static, str>>`",
        ));
    }
    Ok(ErrorVariant { ident: &variant.ident, source, has_context })
}

/// The `XExt` trait: `context` is provided on top of `with_context`.
fn expand_ext_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        quote! { #name::#ident { context: slot, .. } => *slot = Some(context), }
    });

    quote! {
        pub trait #ext<T>: Sized {
            /// Like [`Self::context`], but the message is only built on the error branch.
            fn with_context<C, F>(self, f: F) -> ::std::result::Result<T, #name>
            where
                C: Into<::std::borrow::Cow<'static, str>>,
                F: FnOnce() -> C;

            /// Attaches a human-readable context to the error, replacing any earlier one.
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name> {
                let context = context.into();
                self.with_context(move || context)
            }
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            fn with_context<C, F>(self, f: F) -> Self
            where
                C: Into<::std::borrow::Cow<'static, str>>,
                F: FnOnce() -> C,
            {
                self.map_err(|mut err| {
                    let context = f().into();
                    #[allow(unreachable_patterns)]
                    match &mut err {
                        #(#arms)*
                        _ => {},
                    }
                    err
                })
            }
        }
    }
}

/// `From<Source>` plus the `XExt` impl on `Result<T, Source>`.
fn expand_source_impls(
    name: &Ident,
    ext: &Ident,
    variant: &Ident,
    (field, ty): (&Ident, &Type),
) -> TokenStream {
    quote! {
        #[automatically_derived]
        impl From<#ty> for #name {
            fn from(#field: #ty) -> Self {
                Self::#variant { #field, context: None }
            }
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #ty> {
            fn with_context<C, F>(self, f: F) -> ::std::result::Result<T, #name>
            where
                C: Into<::std::borrow::Cow<'static, str>>,
                F: FnOnce() -> C,
            {
                self.map_err(|#field| #name::#variant { #field, context: Some(f().into()) })
            }
        }
    }
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Accepts `Option<Cow<'static, str>>`, with or without a `std::borrow::` path.
fn is_context_type(ty: &Type) -> bool {
    let rendered = quote!(#ty).to_string().replace(' ', "");
    let Some(inner) = rendered.strip_prefix("Option<").and_then(|rest| rest.strip_suffix('>'))
    else {
        return false;
    };
    let inner = inner.strip_prefix("::").unwrap_or(inner);
    let inner = inner.strip_prefix("std::borrow::").unwrap_or(inner);
    inner == "Cow<'static,str>"
}
