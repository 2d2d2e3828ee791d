//! `AWS::AppFlow::Flow`: moves records from one source connector to one or more destinations,
//! transforming fields on the way.
//!
//! A flow reads from the connector of its [`SourceFlowConfig`], applies its [`Task`]s and
//! writes to every [`DestinationFlowConfig`]. [`CfnResource::validate`] checks that each
//! connector-keyed group agrees with the connector type declared beside it.
//!
//! Tags are owned by the resource's [`TagManager`] rather than the property record, so tags
//! added after construction render sorted together with the declared ones.

mod destination;
mod source;
mod task;
mod trigger;

pub use destination::*;
pub use source::*;
pub use task::*;
pub use trigger::*;

use appflow_derive::cfn_model;
use appflow_domain::constants::{ATTR_FLOW_ARN, FLOW};
use appflow_domain::{CfnString, CfnTag, Intrinsic};
use appflow_kernel::prelude::*;
use appflow_kernel::tags::INITIAL_PRIORITY;
use serde_json::Value;

#[cfn_model]
pub enum FlowStatus {
    Active,
    Suspended,
    Draft,
}

#[cfn_model]
pub struct CfnFlowProps {
    pub description: Option<CfnString>,
    pub destination_flow_config_list: Vec<DestinationFlowConfig>,
    pub flow_name: CfnString,
    pub flow_status: Option<FlowStatus>,
    #[serde(rename = "KMSArn")]
    pub kms_arn: Option<CfnString>,
    pub metadata_catalog_config: Option<MetadataCatalogConfig>,
    pub source_flow_config: SourceFlowConfig,
    /// Declared tags; moved into the resource's [`TagManager`] on construction.
    pub tags: Option<Vec<CfnTag>>,
    pub tasks: Vec<Task>,
    pub trigger_config: TriggerConfig,
}

/// Data catalog that receives the schema of the flow output.
#[cfn_model]
pub struct MetadataCatalogConfig {
    pub glue_data_catalog: Option<GlueDataCatalog>,
}

#[cfn_model]
pub struct GlueDataCatalog {
    pub database_name: CfnString,
    pub role_arn: CfnString,
    pub table_prefix: CfnString,
}

impl Validate for CfnFlowProps {
    fn check(&self, report: &mut Report) {
        let source = &self.source_flow_config;
        report.check_connector(
            "SourceFlowConfig.SourceConnectorProperties",
            source.connector_type,
            &source.source_connector_properties,
        );

        if self.destination_flow_config_list.is_empty() {
            report.push(Violation::Malformed {
                path: "DestinationFlowConfigList".to_owned(),
                message: "at least one destination is required".to_owned(),
            });
        }
        for (i, destination) in self.destination_flow_config_list.iter().enumerate() {
            let path = format!("DestinationFlowConfigList[{i}].DestinationConnectorProperties");
            let properties = &destination.destination_connector_properties;
            report.check_connector(&path, destination.connector_type, properties);
            if properties.lacks_id_fields() {
                report.missing(format!("{path}.{}.IdFieldNames", properties.variant_key()));
            }
        }

        for (i, task) in self.tasks.iter().enumerate() {
            if let Some(operator) = &task.connector_operator {
                report.check_connector(
                    &format!("Tasks[{i}].ConnectorOperator"),
                    source.connector_type,
                    operator,
                );
            }
        }

        let trigger = &self.trigger_config;
        if trigger.trigger_type == TriggerType::Scheduled && trigger.trigger_properties.is_none() {
            report.missing("TriggerConfig.TriggerProperties");
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CfnFlow {
    logical_id: LogicalId,
    props: CfnFlowProps,
    options: ResourceOptions,
    tags: TagManager,
}

impl CfnFlow {
    /// # Errors
    /// Returns [`CfnError::InvalidLogicalId`] if `logical_id` is not a valid logical ID.
    pub fn new(logical_id: &str, props: CfnFlowProps) -> Result<Self, CfnError> {
        let logical_id = LogicalId::new(logical_id)?;
        Ok(Self::from_parts(logical_id, props, ResourceOptions::default()))
    }

    #[must_use]
    pub fn attr_flow_arn(&self) -> Intrinsic {
        Intrinsic::get_att(self.logical_id.as_str(), ATTR_FLOW_ARN)
    }

    pub fn tags_mut(&mut self) -> &mut TagManager {
        &mut self.tags
    }
}

impl CfnResource for CfnFlow {
    const RESOURCE_TYPE: &'static str = FLOW;
    const ATTRIBUTES: &'static [&'static str] = &[ATTR_FLOW_ARN];
    type Props = CfnFlowProps;

    fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    /// The property record. Tags given at construction live in [`CfnFlow::tags_mut`], so
    /// `tags` is `None` here.
    fn props(&self) -> &CfnFlowProps {
        &self.props
    }

    /// Tags assigned here render with the initial priority: they replace tags given at
    /// construction and lose to tags added through [`CfnFlow::tags_mut`].
    fn props_mut(&mut self) -> &mut CfnFlowProps {
        &mut self.props
    }

    fn options(&self) -> &ResourceOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ResourceOptions {
        &mut self.options
    }

    fn from_parts(
        logical_id: LogicalId,
        mut props: CfnFlowProps,
        options: ResourceOptions,
    ) -> Self {
        let tags = TagManager::from_initial(props.tags.take().unwrap_or_default());
        Self { logical_id, props, options, tags }
    }

    fn tags(&self) -> Option<&TagManager> {
        Some(&self.tags)
    }

    fn render_properties(&self) -> Result<Value, CfnError> {
        let mut props = self.props.clone();
        let mut tags = self.tags.clone();
        for tag in props.tags.take().unwrap_or_default() {
            tags.set_tag(tag.key, tag.value, INITIAL_PRIORITY);
        }
        props.tags = tags.render_optional();
        serde_json::to_value(&props)
            .with_context(|| format!("Rendering properties of {}", self.logical_id))
    }
}
