//! Facade crate for the AppFlow resource models.
//! Re-exports the shared kernel and every enabled resource type, and dispatches template-level
//! operations (check, format, inspect) by CloudFormation type name.
//! Keep this crate thin: it should compose other crates, not model resources itself.
//!
//! ## Usage
//! - Add `appflow` with the resource types you need (`connector`, `connector-profile`,
//!   `flow`; all enabled by default).
//! - Build resources through [`prelude`], or load a template and hand it to
//!   [`check_template`] / [`format_template`].

mod dispatch;

pub use appflow_domain as domain;
pub use appflow_kernel as kernel;
pub use dispatch::{ResourceKind, check_template, format_template, inspect_template};

#[cfg(feature = "connector")]
pub use appflow_connector as connector;
#[cfg(feature = "connector-profile")]
pub use appflow_connector_profile as connector_profile;
#[cfg(feature = "flow")]
pub use appflow_flow as flow;

use appflow_domain::registry::ResourceSchema;

/// Schemas of every enabled resource type, sorted by type name.
pub static RESOURCE_TYPES: &[ResourceSchema] = &[
    #[cfg(feature = "connector")]
    ResourceKind::Connector.schema(),
    #[cfg(feature = "connector-profile")]
    ResourceKind::ConnectorProfile.schema(),
    #[cfg(feature = "flow")]
    ResourceKind::Flow.schema(),
];

/// Looks a resource schema up by CloudFormation type name.
#[must_use]
pub fn schema(resource_type: &str) -> Option<&'static ResourceSchema> {
    RESOURCE_TYPES.iter().find(|schema| schema.resource_type == resource_type)
}

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled resource types (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "connector")]
        "connector",
        #[cfg(feature = "connector-profile")]
        "connector-profile",
        #[cfg(feature = "flow")]
        "flow",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

pub mod prelude {
    pub use appflow_kernel::prelude::*;

    #[cfg(feature = "connector")]
    pub use appflow_connector::{CfnConnector, CfnConnectorProps};
    #[cfg(feature = "connector-profile")]
    pub use appflow_connector_profile::{
        CfnConnectorProfile, CfnConnectorProfileProps, ConnectionMode,
    };
    #[cfg(feature = "flow")]
    pub use appflow_flow::{CfnFlow, CfnFlowProps};
}
