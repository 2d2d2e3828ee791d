//! CloudFormation names that are not property keys.

pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

// Resource types
pub const CONNECTOR: &str = "AWS::AppFlow::Connector";
pub const CONNECTOR_PROFILE: &str = "AWS::AppFlow::ConnectorProfile";
pub const FLOW: &str = "AWS::AppFlow::Flow";

// Read-only attributes
pub const ATTR_CONNECTOR_ARN: &str = "ConnectorArn";
pub const ATTR_CONNECTOR_PROFILE_ARN: &str = "ConnectorProfileArn";
pub const ATTR_CREDENTIALS_ARN: &str = "CredentialsArn";
pub const ATTR_FLOW_ARN: &str = "FlowArn";

// Tree inspector attribute names
pub const INSPECT_TYPE: &str = "aws:cdk:cloudformation:type";
pub const INSPECT_PROPS: &str = "aws:cdk:cloudformation:props";

/// Longest logical ID CloudFormation accepts.
pub const MAX_LOGICAL_ID_LEN: usize = 255;

/// Environment prefix for configuration overrides (`APPFLOW__SYNTH__PRETTY=false`).
pub const ENV_PREFIX: &str = "APPFLOW";
