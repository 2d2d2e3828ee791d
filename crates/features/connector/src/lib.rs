//! `AWS::AppFlow::Connector`: registers a custom connector backed by a Lambda function.

mod props;

pub use props::{
    CfnConnectorProps, ConnectorProvisioningConfig, ConnectorProvisioningType,
    LambdaConnectorProvisioningConfig,
};

use appflow_domain::Intrinsic;
use appflow_domain::constants::{ATTR_CONNECTOR_ARN, CONNECTOR};
use appflow_kernel::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CfnConnector {
    logical_id: LogicalId,
    props: CfnConnectorProps,
    options: ResourceOptions,
}

impl CfnConnector {
    /// # Errors
    /// Returns [`CfnError::InvalidLogicalId`] if `logical_id` is not a valid logical ID.
    pub fn new(logical_id: &str, props: CfnConnectorProps) -> Result<Self, CfnError> {
        let logical_id = LogicalId::new(logical_id)?;
        Ok(Self { logical_id, props, options: ResourceOptions::default() })
    }

    /// ARN of the registered connector.
    #[must_use]
    pub fn attr_connector_arn(&self) -> Intrinsic {
        Intrinsic::get_att(self.logical_id.as_str(), ATTR_CONNECTOR_ARN)
    }
}

impl CfnResource for CfnConnector {
    const RESOURCE_TYPE: &'static str = CONNECTOR;
    const ATTRIBUTES: &'static [&'static str] = &[ATTR_CONNECTOR_ARN];
    type Props = CfnConnectorProps;

    fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    fn props(&self) -> &CfnConnectorProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut CfnConnectorProps {
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
        props: CfnConnectorProps,
        options: ResourceOptions,
    ) -> Self {
        Self { logical_id, props, options }
    }
}
