//! Construct scope and template synthesis.

use crate::error::CfnError;
use crate::inspector::TreeInspector;
use crate::logical_id::LogicalId;
use crate::resource::{CfnResource, ResourceNode};
use appflow_domain::Intrinsic;
use appflow_domain::config::SynthConfig;
use appflow_domain::constants::TEMPLATE_FORMAT_VERSION;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// A template output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    pub value: Intrinsic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Owns resources by logical ID and renders them as one template.
#[derive(Debug, Default)]
pub struct Stack {
    description: Option<String>,
    resources: Vec<Box<dyn ResourceNode>>,
    outputs: Vec<(LogicalId, Output)>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Takes ownership of `resource`.
    ///
    /// # Errors
    /// Returns [`CfnError::DuplicateLogicalId`] if the logical ID is already taken.
    pub fn add<R: CfnResource>(&mut self, resource: R) -> Result<&mut R, CfnError> {
        let id = resource.logical_id().clone();
        if self.contains(id.as_str()) {
            return Err(CfnError::DuplicateLogicalId { id: id.into(), context: None });
        }
        debug!(id = %id, resource_type = R::RESOURCE_TYPE, "Resource added");

        self.resources.push(Box::new(resource));
        let last = self.resources.len() - 1;
        self.resources[last]
            .as_any_mut()
            .downcast_mut::<R>()
            .ok_or_else(|| CfnError::from("Freshly added resource has an unexpected type"))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&dyn ResourceNode> {
        self.resources.iter().find(|node| node.id().as_str() == id).map(|node| &**node)
    }

    /// Typed access to a stored resource.
    ///
    /// # Errors
    /// Returns [`CfnError::ResourceNotFound`] or [`CfnError::ResourceTypeMismatch`].
    pub fn get<R: CfnResource>(&self, id: &str) -> Result<&R, CfnError> {
        let node = self
            .node(id)
            .ok_or_else(|| CfnError::ResourceNotFound { id: id.to_owned(), context: None })?;
        let found = node.resource_type();
        node.as_any().downcast_ref::<R>().ok_or_else(|| type_mismatch::<R>(id, found))
    }

    /// Mutable typed access to a stored resource.
    ///
    /// # Errors
    /// Returns [`CfnError::ResourceNotFound`] or [`CfnError::ResourceTypeMismatch`].
    pub fn get_mut<R: CfnResource>(&mut self, id: &str) -> Result<&mut R, CfnError> {
        let node = self
            .resources
            .iter_mut()
            .find(|node| node.id().as_str() == id)
            .ok_or_else(|| CfnError::ResourceNotFound { id: id.to_owned(), context: None })?;
        let found = node.resource_type();
        node.as_any_mut().downcast_mut::<R>().ok_or_else(|| type_mismatch::<R>(id, found))
    }

    /// Drops a resource and returns whether it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.resources.len();
        self.resources.retain(|node| node.id().as_str() != id);
        before != self.resources.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ResourceNode> {
        self.resources.iter().map(|node| &**node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Declares a template output.
    ///
    /// # Errors
    /// Returns [`CfnError::InvalidLogicalId`] for a bad name, [`CfnError::DuplicateLogicalId`]
    /// for a reused one, and [`CfnError::ResourceNotFound`] or [`CfnError::UnknownAttribute`]
    /// when `value` points at something this stack does not hold.
    pub fn add_output(
        &mut self,
        name: &str,
        value: Intrinsic,
        description: Option<String>,
    ) -> Result<(), CfnError> {
        let name = LogicalId::new(name)?;
        if self.outputs.iter().any(|(existing, _)| *existing == name) {
            return Err(CfnError::DuplicateLogicalId {
                id: name.into(),
                context: Some("Outputs".into()),
            });
        }
        self.check_intrinsic(&value)?;
        self.outputs.push((name, Output { value, description }));
        Ok(())
    }

    fn check_intrinsic(&self, value: &Intrinsic) -> Result<(), CfnError> {
        let Some(target) = value.target() else {
            return Ok(());
        };
        let node = self
            .node(target)
            .ok_or_else(|| CfnError::ResourceNotFound { id: target.to_owned(), context: None })?;
        if let Intrinsic::GetAtt(_, attribute) = value
            && !node.attribute_names().contains(&attribute.as_str())
        {
            return Err(CfnError::UnknownAttribute {
                resource_type: node.resource_type().into(),
                attribute: attribute.clone(),
                context: None,
            });
        }
        Ok(())
    }

    /// Renders the template with default settings.
    ///
    /// # Errors
    /// See [`Stack::synth_with`].
    pub fn synth(&self) -> Result<Value, CfnError> {
        self.synth_with(&SynthConfig::default())
    }

    /// Validates every resource (unless disabled) and renders the template.
    ///
    /// # Errors
    /// Returns the first resource's violations, a dangling `DependsOn` as
    /// [`CfnError::ResourceNotFound`], or a rendering failure.
    pub fn synth_with(&self, config: &SynthConfig) -> Result<Value, CfnError> {
        debug!(
            resources = self.resources.len(),
            outputs = self.outputs.len(),
            "Synthesizing stack"
        );

        let mut resources = Map::new();
        for node in &self.resources {
            if config.validate {
                node.check_node().inspect_err(|err| warn!(id = %node.id(), "{err}"))?;
            }
            for dependency in &node.resource_options().depends_on {
                if !self.contains(dependency) {
                    return Err(CfnError::ResourceNotFound {
                        id: dependency.clone(),
                        context: Some(format!("DependsOn of {}", node.id()).into()),
                    });
                }
            }
            resources.insert(node.id().to_string(), node.render_entry()?);
        }

        let mut template = Map::new();
        template.insert(
            "AWSTemplateFormatVersion".to_owned(),
            Value::String(TEMPLATE_FORMAT_VERSION.to_owned()),
        );
        if let Some(description) = self.description.as_ref().or(config.description.as_ref()) {
            template.insert("Description".to_owned(), Value::String(description.clone()));
        }
        template.insert("Resources".to_owned(), Value::Object(resources));
        if !self.outputs.is_empty() {
            let mut outputs = Map::new();
            for (name, output) in &self.outputs {
                outputs.insert(name.to_string(), serde_json::to_value(output)?);
            }
            template.insert("Outputs".to_owned(), Value::Object(outputs));
        }
        Ok(Value::Object(template))
    }

    /// Tree-inspector attributes of every resource, keyed by logical ID.
    ///
    /// # Errors
    /// Returns a rendering failure.
    pub fn inspect(&self) -> Result<Map<String, Value>, CfnError> {
        let mut nodes = Map::new();
        for node in &self.resources {
            let mut inspector = TreeInspector::new();
            node.inspect_node(&mut inspector)?;
            nodes.insert(node.id().to_string(), inspector.into_value());
        }
        Ok(nodes)
    }
}

fn type_mismatch<R: CfnResource>(id: &str, found: &str) -> CfnError {
    CfnError::ResourceTypeMismatch {
        id: id.to_owned(),
        expected: R::RESOURCE_TYPE.into(),
        found: found.to_owned(),
        context: None,
    }
}
