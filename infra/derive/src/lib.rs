#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace.
//!
//! * [`cfn_model`] turns a plain declaration into a CloudFormation property model:
//!   serde wiring, a type-state builder and the static key table.
//! * [`appflow_error`] turns an enum into a context-aware `thiserror` error.
//!
//! ## Usage
//! Consumers need `serde`, `typed-builder`, `strum`, `strum_macros` and `appflow-domain`
//! in their own dependency list, because the expansion refers to them by absolute path:
//! ```toml
//! [dependencies]
//! appflow-derive.workspace = true
//! appflow-domain.workspace = true
//! serde.workspace = true
//! strum.workspace = true
//! strum_macros.workspace = true
//! typed-builder.workspace = true
//! ```
//!
//! See each macro's docstring for examples; they are `ignore`d to avoid compiling in this crate.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro to declare a CloudFormation property model.
///
/// The annotated item is the single source of truth for one record of the resource
/// schema. Three shapes are accepted:
///
/// * **Struct with named fields**: a property record.
///     * Derives `Debug`, `Clone`, `PartialEq`, `Serialize`, `Deserialize` and
///       `typed_builder::TypedBuilder` when missing.
///     * `rename_all = "PascalCase"` and `deny_unknown_fields` by default.
///     * `Option<T>` fields are optional: skipped when `None`, builder setter defaults to
///       `None` and takes the bare `T`. Every other field is required by the builder.
///     * Implements `appflow_domain::CfnProperties` with the key table
///       (field name, JSON key, required flag, declared type).
/// * **Enum of newtype variants**: a one-of group (`{"Salesforce": {...}}`).
///     * Implements `appflow_domain::CfnUnion`.
/// * **Enum of unit variants**: a string enumeration.
///     * Additionally derives `strum` `EnumString`, `Display`, `AsRefStr` and `EnumIter`
///       with the same wire spelling as serde, and implements `appflow_domain::CfnEnum`.
///
/// Per-field or per-variant `#[serde(rename = "...")]` overrides the computed key and is
/// reflected in the key table.
///
/// # Arguments
///
/// * `rename_all = "..."` - Overrides the rename policy (`PascalCase`, `camelCase`,
///   `SCREAMING_SNAKE_CASE`, `lowercase`, `UPPERCASE`).
/// * `deny_unknown_fields = false` - Disables strict field checking on records.
/// * `builder = false` - Skips the builder derive on records.
///
/// # Example
///
/// ```rust,ignore
/// use appflow_derive::cfn_model;
///
/// #[cfn_model]
/// pub struct LambdaConnectorProvisioningConfig {
///     pub lambda_arn: String,
/// }
///
/// #[cfn_model]
/// pub struct ConnectorProfileProps {
///     pub connector_profile_name: String,
///     #[serde(rename = "KMSArn")]
///     pub kms_arn: Option<String>,
/// }
///
/// #[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
/// pub enum WriteOperationType {
///     Insert,
///     Upsert,
/// }
/// ```
#[proc_macro_attribute]
pub fn cfn_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::model::expand_cfn_model(attr.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()` and
///   the lazy `.with_context(|| ...)` to any `Result` that can be converted into this error.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors name the field `source` or mark it `#[source]`, and
///    must also carry `context`.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use appflow_derive::appflow_error;
/// use std::borrow::Cow;
///
/// #[appflow_error]
/// pub enum TemplateError {
///     #[error("JSON error{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, TemplateError> {
///     serde_json::from_str(raw).context("Parsing template body")
/// }
/// ```
#[proc_macro_attribute]
pub fn appflow_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
