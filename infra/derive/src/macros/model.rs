use super::derived_trait_names;
use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;
use syn::{
    Attribute, Data, DataEnum, DeriveInput, Fields, GenericArgument, Lit, LitStr, Meta,
    PathArguments, Type, parse_quote,
};

/// Expands the `#[cfn_model]` attribute macro.
///
/// Dispatches on the shape of the item: named-field struct (record), enum of newtype
/// variants (one-of group) or enum of unit variants (string enumeration).
pub fn expand_cfn_model(args: TokenStream, input: DeriveInput) -> TokenStream {
    let args = match parse_model_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };
    let serde_meta = match serde_meta_info(&input.attrs) {
        Ok(info) => info,
        Err(err) => return err,
    };
    let rule = match effective_rule(args.rename_all.as_ref(), &serde_meta) {
        Ok(rule) => rule,
        Err(err) => return err,
    };

    let shape = match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Named(_)) => Shape::Record,
        Data::Enum(data) if is_unit_enum(data) => Shape::StringEnum,
        Data::Enum(data) if is_newtype_enum(data) => Shape::Union,
        Data::Enum(_) => {
            return syn::Error::new_spanned(
                &input.ident,
                "cfn_model enums must be all unit variants or all single-field tuple variants",
            )
            .to_compile_error();
        },
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "cfn_model supports structs with named fields and enums",
            )
            .to_compile_error();
        },
    };

    match shape {
        Shape::Record => expand_record(input, &args, &serde_meta, rule),
        Shape::StringEnum => expand_string_enum(input, rule),
        Shape::Union => expand_union(input, rule),
    }
}

enum Shape {
    Record,
    Union,
    StringEnum,
}

// --- Records ---

fn expand_record(
    mut input: DeriveInput,
    args: &ModelArgs,
    serde_meta: &SerdeMetaInfo,
    rule: RenameRule,
) -> TokenStream {
    let deny_attr = match deny_unknown_attr(args.deny_unknown_fields, serde_meta, &input) {
        Ok(attr) => attr,
        Err(err) => return err,
    };
    let rename_attr = if serde_meta.rename_all.is_some() {
        quote! {}
    } else {
        let lit = LitStr::new(rule.serde_name(), Span::call_site());
        quote! { #[serde(rename_all = #lit)] }
    };

    let derives = derived_trait_names(&input.attrs);
    let mut wanted = vec![
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("PartialEq", quote! { PartialEq }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ];
    if args.builder {
        wanted.push(("TypedBuilder", quote! { ::typed_builder::TypedBuilder }));
    }
    let derive_attr = derive_attr(&derives, &wanted);

    let Data::Struct(data) = &mut input.data else {
        return quote! {};
    };
    let Fields::Named(fields) = &mut data.fields else {
        return quote! {};
    };

    let mut metas = Vec::new();
    let mut seen_keys = FxHashSet::default();
    for field in &mut fields.named {
        let Some(ident) = field.ident.as_ref() else { continue };
        let field_name = ident.to_string().trim_start_matches("r#").to_owned();

        let field_serde = match serde_meta_info(&field.attrs) {
            Ok(info) => info,
            Err(err) => return err,
        };
        let key = field_serde
            .rename
            .as_ref()
            .map_or_else(|| rule.apply_to_field(&field_name), LitStr::value);
        if !seen_keys.insert(key.clone()) {
            return syn::Error::new_spanned(ident, format!("Duplicate CloudFormation key `{key}`"))
                .to_compile_error();
        }

        let inner = option_inner(&field.ty);
        let required = inner.is_none();
        let declared = inner.unwrap_or(&field.ty);
        let type_name = schema_type_name(declared);

        if !required && !field_serde.skip_serializing_if {
            field
                .attrs
                .push(parse_quote! { #[serde(default, skip_serializing_if = "Option::is_none")] });
        }
        if args.builder && !field.attrs.iter().any(|attr| attr.path().is_ident("builder")) {
            if required {
                field.attrs.push(parse_quote! { #[builder(setter(into))] });
            } else {
                field.attrs.push(parse_quote! { #[builder(default, setter(strip_option, into))] });
            }
        }

        metas.push(quote! {
            ::appflow_domain::PropertyMeta {
                field: #field_name,
                key: #key,
                required: #required,
                type_name: #type_name,
            }
        });
    }

    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        #derive_attr
        #rename_attr
        #deny_attr
        #input

        #[automatically_derived]
        impl #impl_generics ::appflow_domain::CfnProperties for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #name_str;
            const PROPERTIES: &'static [::appflow_domain::PropertyMeta] = &[#(#metas),*];
        }
    }
}

// --- One-of groups ---

fn expand_union(mut input: DeriveInput, rule: RenameRule) -> TokenStream {
    let derives = derived_trait_names(&input.attrs);
    let derive_attr = derive_attr(
        &derives,
        &[
            ("Debug", quote! { Debug }),
            ("Clone", quote! { Clone }),
            ("PartialEq", quote! { PartialEq }),
            ("Serialize", quote! { ::serde::Serialize }),
            ("Deserialize", quote! { ::serde::Deserialize }),
        ],
    );

    let keyed = match rename_variants(&mut input, rule, false) {
        Ok(keyed) => keyed,
        Err(err) => return err,
    };
    let keys = keyed.iter().map(|(_, key)| key);
    let arms = keyed.iter().map(|(ident, key)| quote! { Self::#ident(_) => #key, });
    let name = &input.ident;

    quote! {
        #derive_attr
        #input

        #[automatically_derived]
        impl ::appflow_domain::CfnUnion for #name {
            const VARIANTS: &'static [&'static str] = &[#(#keys),*];

            fn variant_key(&self) -> &'static str {
                match self {
                    #(#arms)*
                }
            }
        }
    }
}

// --- String enumerations ---

fn expand_string_enum(mut input: DeriveInput, rule: RenameRule) -> TokenStream {
    let derives = derived_trait_names(&input.attrs);
    let derive_attr = derive_attr(
        &derives,
        &[
            ("Debug", quote! { Debug }),
            ("Clone", quote! { Clone }),
            ("Copy", quote! { Copy }),
            ("PartialEq", quote! { PartialEq }),
            ("Eq", quote! { Eq }),
            ("Hash", quote! { Hash }),
            ("Serialize", quote! { ::serde::Serialize }),
            ("Deserialize", quote! { ::serde::Deserialize }),
            ("EnumString", quote! { ::strum_macros::EnumString }),
            ("Display", quote! { ::strum_macros::Display }),
            ("AsRefStr", quote! { ::strum_macros::AsRefStr }),
            ("EnumIter", quote! { ::strum_macros::EnumIter }),
        ],
    );

    let keyed = match rename_variants(&mut input, rule, true) {
        Ok(keyed) => keyed,
        Err(err) => return err,
    };
    let values = keyed.iter().map(|(_, key)| key);
    let arms = keyed.iter().map(|(ident, key)| quote! { Self::#ident => #key, });
    let name = &input.ident;

    quote! {
        #derive_attr
        #input

        #[automatically_derived]
        impl ::appflow_domain::CfnEnum for #name {
            const VALUES: &'static [&'static str] = &[#(#values),*];

            fn as_value(&self) -> &'static str {
                match self {
                    #(#arms)*
                }
            }
        }
    }
}

/// Pins every variant to an explicit wire spelling and returns `(ident, key)` pairs.
///
/// With `strum` set, the same spelling is mirrored into `#[strum(serialize = ...)]` so
/// `Display`/`FromStr` agree with serde.
fn rename_variants(
    input: &mut DeriveInput,
    rule: RenameRule,
    strum: bool,
) -> Result<Vec<(syn::Ident, String)>, TokenStream> {
    let Data::Enum(data) = &mut input.data else {
        return Ok(Vec::new());
    };

    let mut keyed = Vec::with_capacity(data.variants.len());
    let mut seen = FxHashSet::default();
    for variant in &mut data.variants {
        let variant_serde = serde_meta_info(&variant.attrs)?;
        let key = match &variant_serde.rename {
            Some(lit) => lit.value(),
            None => {
                let key = rule.apply_to_variant(&variant.ident.to_string());
                variant.attrs.push(parse_quote! { #[serde(rename = #key)] });
                key
            },
        };
        if !seen.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("Duplicate CloudFormation value `{key}`"),
            )
            .to_compile_error());
        }
        if strum {
            variant.attrs.push(parse_quote! { #[strum(serialize = #key)] });
        }
        keyed.push((variant.ident.clone(), key));
    }

    Ok(keyed)
}

fn is_unit_enum(data: &DataEnum) -> bool {
    !data.variants.is_empty() && data.variants.iter().all(|v| matches!(v.fields, Fields::Unit))
}

fn is_newtype_enum(data: &DataEnum) -> bool {
    !data.variants.is_empty()
        && data
            .variants
            .iter()
            .all(|v| matches!(&v.fields, Fields::Unnamed(f) if f.unnamed.len() == 1))
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Type shown in property tables: scalar wrappers that also accept intrinsics are listed
/// under their literal type.
fn schema_type_name(ty: &Type) -> String {
    let raw = quote!(#ty).to_string().replace(' ', "");
    let raw = raw
        .strip_prefix("CfnValue<")
        .and_then(|inner| inner.strip_suffix('>'))
        .map_or_else(|| raw.clone(), str::to_owned);
    match raw.as_str() {
        "CfnString" => "String".to_owned(),
        "CfnBool" => "bool".to_owned(),
        "CfnInteger" => "i64".to_owned(),
        "CfnNumber" => "f64".to_owned(),
        _ => raw,
    }
}

fn derive_attr(existing: &FxHashSet<String>, wanted: &[(&str, TokenStream)]) -> TokenStream {
    let tokens: Vec<&TokenStream> =
        wanted.iter().filter(|(name, _)| !existing.contains(*name)).map(|(_, t)| t).collect();

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

// --- Rename rules ---

#[derive(Clone, Copy, PartialEq, Eq)]
enum RenameRule {
    Pascal,
    Camel,
    ScreamingSnake,
    Lower,
    Upper,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self, TokenStream> {
        match lit.value().as_str() {
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            _ => Err(syn::Error::new_spanned(
                lit,
                "Unsupported rename_all; expected PascalCase, camelCase, SCREAMING_SNAKE_CASE, lowercase or UPPERCASE",
            )
            .to_compile_error()),
        }
    }

    const fn serde_name(self) -> &'static str {
        match self {
            Self::Pascal => "PascalCase",
            Self::Camel => "camelCase",
            Self::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Self::Lower => "lowercase",
            Self::Upper => "UPPERCASE",
        }
    }

    /// Mirrors serde's field renaming for `snake_case` field names.
    fn apply_to_field(self, field: &str) -> String {
        match self {
            Self::Pascal => pascal_from_snake(field),
            Self::Camel => {
                let pascal = pascal_from_snake(field);
                let mut chars = pascal.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_ascii_lowercase().to_string() + chars.as_str()
                })
            },
            Self::ScreamingSnake | Self::Upper => field.to_ascii_uppercase(),
            Self::Lower => field.to_owned(),
        }
    }

    /// Mirrors serde's variant renaming for `PascalCase` variant names.
    fn apply_to_variant(self, variant: &str) -> String {
        match self {
            Self::Pascal => variant.to_owned(),
            Self::Camel => {
                let mut chars = variant.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_ascii_lowercase().to_string() + chars.as_str()
                })
            },
            Self::ScreamingSnake => {
                let mut snake = String::with_capacity(variant.len() + 4);
                for (i, ch) in variant.char_indices() {
                    if i > 0 && ch.is_uppercase() {
                        snake.push('_');
                    }
                    snake.push(ch.to_ascii_uppercase());
                }
                snake
            },
            Self::Lower => variant.to_ascii_lowercase(),
            Self::Upper => variant.to_ascii_uppercase(),
        }
    }
}

fn pascal_from_snake(field: &str) -> String {
    let mut pascal = String::with_capacity(field.len());
    let mut capitalize = true;
    for ch in field.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            pascal.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            pascal.push(ch);
        }
    }
    pascal
}

fn effective_rule(
    requested: Option<&LitStr>,
    serde_meta: &SerdeMetaInfo,
) -> Result<RenameRule, TokenStream> {
    match (requested, &serde_meta.rename_all) {
        (Some(requested), Some(existing)) if requested.value() != existing.value() => Err(
            syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or set cfn_model(rename_all = \"...\") to match",
            )
            .to_compile_error(),
        ),
        (Some(lit), _) | (None, Some(lit)) => RenameRule::parse(lit),
        (None, None) => Ok(RenameRule::Pascal),
    }
}

// --- Arguments ---

struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
    builder: bool,
}

fn parse_model_args(args: TokenStream) -> Result<ModelArgs, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut rename_all = None;
    let mut deny_unknown_fields = None;
    let mut builder = None;

    for meta in metas {
        let name_value = expect_name_value(meta)?;
        if name_value.path.is_ident("rename_all") {
            let value = parse_string_literal(&name_value, "rename_all")?;
            rename_all = Some(set_once(rename_all, &name_value, value)?);
            continue;
        }
        if name_value.path.is_ident("deny_unknown_fields") {
            let value = parse_bool_literal(&name_value, "deny_unknown_fields")?;
            deny_unknown_fields = Some(set_once(deny_unknown_fields, &name_value, value)?);
            continue;
        }
        if name_value.path.is_ident("builder") {
            let value = parse_bool_literal(&name_value, "builder")?;
            builder = Some(set_once(builder, &name_value, value)?);
            continue;
        }
        return Err(syn::Error::new_spanned(
            name_value.path,
            "Unsupported argument; expected rename_all, deny_unknown_fields or builder",
        )
        .to_compile_error());
    }

    Ok(ModelArgs { rename_all, deny_unknown_fields, builder: builder.unwrap_or(true) })
}

fn expect_name_value(meta: Meta) -> Result<syn::MetaNameValue, TokenStream> {
    match meta {
        Meta::NameValue(name_value) => Ok(name_value),
        other => Err(syn::Error::new_spanned(
            other,
            "Expected name-value arguments like `rename_all = \"...\"`",
        )
        .to_compile_error()),
    }
}

fn parse_bool_literal(name_value: &syn::MetaNameValue, label: &str) -> Result<bool, TokenStream> {
    if let syn::Expr::Lit(expr_lit) = &name_value.value
        && let Lit::Bool(lit) = &expr_lit.lit
    {
        return Ok(lit.value);
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a boolean literal"))
        .to_compile_error())
}

fn parse_string_literal(
    name_value: &syn::MetaNameValue,
    label: &str,
) -> Result<LitStr, TokenStream> {
    if let syn::Expr::Lit(expr_lit) = &name_value.value
        && let Lit::Str(lit) = &expr_lit.lit
    {
        return Ok(lit.clone());
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a string literal"))
        .to_compile_error())
}

fn set_once<T>(current: Option<T>, token: &syn::MetaNameValue, value: T) -> Result<T, TokenStream> {
    if current.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument").to_compile_error());
    }
    Ok(value)
}

// --- Existing serde attributes ---

#[derive(Default)]
struct SerdeMetaInfo {
    rename: Option<LitStr>,
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
    skip_serializing_if: bool,
}

fn deny_unknown_attr(
    deny_unknown_fields: Option<bool>,
    serde_meta: &SerdeMetaInfo,
    input: &DeriveInput,
) -> Result<TokenStream, TokenStream> {
    let deny_unknown = deny_unknown_fields.unwrap_or(true);
    if serde_meta.deny_unknown_fields {
        if !deny_unknown {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            )
            .to_compile_error());
        }
        return Ok(quote! {});
    }

    if deny_unknown { Ok(quote! { #[serde(deny_unknown_fields)] }) } else { Ok(quote! {}) }
}

fn serde_meta_info(attrs: &[Attribute]) -> Result<SerdeMetaInfo, TokenStream> {
    let mut info = SerdeMetaInfo::default();

    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        let res = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                info.rename = Some(meta.value()?.parse()?);
                return Ok(());
            }
            if meta.path.is_ident("rename_all") {
                info.rename_all = Some(meta.value()?.parse()?);
                return Ok(());
            }
            if meta.path.is_ident("deny_unknown_fields") {
                info.deny_unknown_fields = true;
                return Ok(());
            }
            if meta.path.is_ident("skip_serializing_if") {
                info.skip_serializing_if = true;
            }
            skip_meta(&meta)
        });

        if let Err(err) = res {
            return Err(err.to_compile_error());
        }
    }

    Ok(info)
}

/// Consumes the value of a serde option this macro does not interpret.
fn skip_meta(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        let _: TokenStream = content.parse()?;
    }
    Ok(())
}
