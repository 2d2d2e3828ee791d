//! Static property tables.
//!
//! Every model declared with `#[cfn_model]` carries one of the traits below. The tables are
//! the name mapping between Rust field names and CloudFormation JSON keys, generated from
//! the declaration itself so the two can never drift apart.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// One row of a record's property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyMeta {
    /// Rust field name (`kms_arn`).
    pub field: &'static str,
    /// CloudFormation key (`KMSArn`).
    pub key: &'static str,
    /// Whether CloudFormation rejects the record without this key.
    pub required: bool,
    /// Declared Rust type, `Option` stripped (`Vec<Task>`). Scalars that also accept an
    /// intrinsic are listed under their literal type (`String`, `bool`, `i64`, `f64`).
    pub type_name: &'static str,
}

/// A CloudFormation property record.
pub trait CfnProperties: Serialize + DeserializeOwned {
    /// Rust type name, used in diagnostics.
    const TYPE_NAME: &'static str;
    /// Property table in declaration order.
    const PROPERTIES: &'static [PropertyMeta];

    /// Looks a property up by its CloudFormation key.
    #[must_use]
    fn property(key: &str) -> Option<&'static PropertyMeta> {
        Self::PROPERTIES.iter().find(|p| p.key == key)
    }

    /// Looks a property up by its Rust field name.
    #[must_use]
    fn property_by_field(field: &str) -> Option<&'static PropertyMeta> {
        Self::PROPERTIES.iter().find(|p| p.field == field)
    }

    /// CloudFormation keys that must be present.
    fn required_keys() -> impl Iterator<Item = &'static str> {
        Self::PROPERTIES.iter().filter(|p| p.required).map(|p| p.key)
    }
}

/// A one-of group: serialized as an object holding exactly one variant key.
pub trait CfnUnion {
    /// Every accepted variant key.
    const VARIANTS: &'static [&'static str];

    /// The key of the populated variant.
    fn variant_key(&self) -> &'static str;
}

/// A closed string enumeration.
pub trait CfnEnum {
    /// Every accepted wire value.
    const VALUES: &'static [&'static str];

    /// Wire value of `self`.
    fn as_value(&self) -> &'static str;
}
