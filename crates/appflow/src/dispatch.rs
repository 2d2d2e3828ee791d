//! Template operations over whichever AppFlow types a template holds.

use appflow_domain::registry::ResourceSchema;
use appflow_kernel::prelude::*;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// An AppFlow resource type this build knows how to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    #[cfg(feature = "connector")]
    Connector,
    #[cfg(feature = "connector-profile")]
    ConnectorProfile,
    #[cfg(feature = "flow")]
    Flow,
}

impl ResourceKind {
    pub const ALL: &'static [Self] = &[
        #[cfg(feature = "connector")]
        Self::Connector,
        #[cfg(feature = "connector-profile")]
        Self::ConnectorProfile,
        #[cfg(feature = "flow")]
        Self::Flow,
    ];

    #[must_use]
    pub fn from_type(resource_type: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.resource_type() == resource_type)
    }

    #[must_use]
    pub const fn resource_type(self) -> &'static str {
        self.schema().resource_type
    }

    #[must_use]
    pub const fn schema(self) -> ResourceSchema {
        match self {
            #[cfg(feature = "connector")]
            Self::Connector => schema_of::<appflow_connector::CfnConnector>(false),
            #[cfg(feature = "connector-profile")]
            Self::ConnectorProfile => {
                schema_of::<appflow_connector_profile::CfnConnectorProfile>(false)
            },
            #[cfg(feature = "flow")]
            Self::Flow => schema_of::<appflow_flow::CfnFlow>(true),
        }
    }

    /// Raw table check, typed parse and cross-field rules of resource `id`.
    ///
    /// # Errors
    /// Returns [`CfnError::ResourceNotFound`] or [`CfnError::ResourceTypeMismatch`].
    pub fn check(self, template: &Template, id: &str) -> Result<Report, CfnError> {
        match self {
            #[cfg(feature = "connector")]
            Self::Connector => template.check_resource::<appflow_connector::CfnConnector>(id),
            #[cfg(feature = "connector-profile")]
            Self::ConnectorProfile => {
                template.check_resource::<appflow_connector_profile::CfnConnectorProfile>(id)
            },
            #[cfg(feature = "flow")]
            Self::Flow => template.check_resource::<appflow_flow::CfnFlow>(id),
        }
    }

    /// Replaces resource `id` with its canonical rendering.
    ///
    /// # Errors
    /// Returns the parse or rendering failure.
    pub fn canonicalize(self, template: &mut Template, id: &str) -> Result<(), CfnError> {
        match self {
            #[cfg(feature = "connector")]
            Self::Connector => canonicalize_as::<appflow_connector::CfnConnector>(template, id),
            #[cfg(feature = "connector-profile")]
            Self::ConnectorProfile => canonicalize_as::<
                appflow_connector_profile::CfnConnectorProfile,
            >(template, id),
            #[cfg(feature = "flow")]
            Self::Flow => canonicalize_as::<appflow_flow::CfnFlow>(template, id),
        }
    }

    /// Tree-inspector attributes of resource `id`.
    ///
    /// # Errors
    /// Returns the parse or rendering failure.
    pub fn inspect(self, template: &Template, id: &str) -> Result<Value, CfnError> {
        match self {
            #[cfg(feature = "connector")]
            Self::Connector => inspect_as::<appflow_connector::CfnConnector>(template, id),
            #[cfg(feature = "connector-profile")]
            Self::ConnectorProfile => {
                inspect_as::<appflow_connector_profile::CfnConnectorProfile>(template, id)
            },
            #[cfg(feature = "flow")]
            Self::Flow => inspect_as::<appflow_flow::CfnFlow>(template, id),
        }
    }
}

const fn schema_of<R: CfnResource>(taggable: bool) -> ResourceSchema {
    ResourceSchema {
        resource_type: R::RESOURCE_TYPE,
        attributes: R::ATTRIBUTES,
        properties: <R::Props as CfnProperties>::PROPERTIES,
        taggable,
    }
}

fn canonicalize_as<R: CfnResource>(template: &mut Template, id: &str) -> Result<(), CfnError> {
    let resource = template.resource::<R>(id)?;
    template.put_resource(&resource)
}

fn inspect_as<R: CfnResource>(template: &Template, id: &str) -> Result<Value, CfnError> {
    let resource = template.resource::<R>(id)?;
    let mut inspector = TreeInspector::new();
    resource.inspect(&mut inspector)?;
    Ok(inspector.into_value())
}

/// AppFlow resources of `template` in document order; other types are skipped.
fn appflow_resources(template: &Template) -> Vec<(String, ResourceKind)> {
    template
        .resource_ids()
        .filter_map(|id| {
            let kind = template.resource_type(id).and_then(ResourceKind::from_type)?;
            Some((id.to_owned(), kind))
        })
        .collect()
}

/// Checks every AppFlow resource and returns the non-empty reports by logical ID.
///
/// # Errors
/// Returns an error only when a resource cannot be checked at all.
pub fn check_template(template: &Template) -> Result<Vec<(String, Report)>, CfnError> {
    let resources = appflow_resources(template);
    debug!(resources = resources.len(), "Checking template");

    let mut failures = Vec::new();
    for (id, kind) in resources {
        let report = kind.check(template, &id)?;
        if !report.is_empty() {
            for violation in report.violations() {
                warn!(id = %id, resource_type = kind.resource_type(), "{violation}");
            }
            failures.push((id, report));
        }
    }
    Ok(failures)
}

/// Re-renders every AppFlow resource canonically and returns how many were rewritten.
///
/// # Errors
/// Returns the first resource that fails to parse.
pub fn format_template(template: &mut Template) -> Result<usize, CfnError> {
    let resources = appflow_resources(template);
    for (id, kind) in &resources {
        kind.canonicalize(template, id).with_context(|| format!("Formatting {id}"))?;
    }
    debug!(resources = resources.len(), "Template formatted");
    Ok(resources.len())
}

/// Tree-inspector attributes of every AppFlow resource, keyed by logical ID.
///
/// # Errors
/// Returns the first resource that fails to parse.
pub fn inspect_template(template: &Template) -> Result<Map<String, Value>, CfnError> {
    let mut nodes = Map::new();
    for (id, kind) in appflow_resources(template) {
        let value = kind.inspect(template, &id)?;
        nodes.insert(id, value);
    }
    Ok(nodes)
}
