//! Everything a resource crate needs in one import.

pub use crate::error::{CfnError, CfnErrorExt};
pub use crate::inspector::{Inspectable, TreeInspector};
pub use crate::logical_id::LogicalId;
pub use crate::options::{DeletionPolicy, ResourceOptions};
pub use crate::resource::{CfnResource, ResourceNode};
pub use crate::stack::{Output, Stack};
pub use crate::tags::TagManager;
pub use crate::template::Template;
pub use crate::validate::{Report, Validate, Violation, validate_properties};
pub use appflow_domain::{
    CfnBool, CfnEnum, CfnInteger, CfnNumber, CfnProperties, CfnString, CfnTag, CfnUnion,
    CfnValue, ConnectorBound, ConnectorType, Intrinsic, PropertyMeta,
};
