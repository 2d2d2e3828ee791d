//! # Domain Vocabulary
//!
//! Pure types shared by every AppFlow resource crate: the property-table metadata that
//! `#[cfn_model]` generates, connector identities, tags, intrinsic references and the
//! CLI configuration model.
//! Keep it lean: no I/O and no validation logic, just data and simple helpers.

// Lets `#[cfn_model]` expansions inside this crate resolve `::appflow_domain::...`.
extern crate self as appflow_domain;

pub mod config;
pub mod connector;
pub mod constants;
pub mod intrinsic;
pub mod registry;
pub mod schema;
pub mod tag;
pub mod value;

pub use connector::{ConnectorBound, ConnectorType};
pub use intrinsic::Intrinsic;
pub use registry::ResourceSchema;
pub use schema::{CfnEnum, CfnProperties, CfnUnion, PropertyMeta};
pub use tag::CfnTag;
pub use value::{CfnBool, CfnInteger, CfnNumber, CfnString, CfnValue};
