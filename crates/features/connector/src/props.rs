use appflow_derive::cfn_model;
use appflow_domain::CfnString;
use appflow_kernel::validate::{Report, Validate};

#[cfn_model]
pub struct CfnConnectorProps {
    /// Unique label; defaults to the Lambda function name on the AWS side.
    pub connector_label: Option<CfnString>,
    pub connector_provisioning_config: ConnectorProvisioningConfig,
    pub connector_provisioning_type: ConnectorProvisioningType,
    pub description: Option<CfnString>,
}

#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectorProvisioningType {
    Lambda,
}

#[cfn_model]
pub struct ConnectorProvisioningConfig {
    pub lambda: Option<LambdaConnectorProvisioningConfig>,
}

#[cfn_model]
pub struct LambdaConnectorProvisioningConfig {
    pub lambda_arn: CfnString,
}

impl Validate for CfnConnectorProps {
    fn check(&self, report: &mut Report) {
        match self.connector_provisioning_type {
            ConnectorProvisioningType::Lambda => {
                if self.connector_provisioning_config.lambda.is_none() {
                    report.missing("ConnectorProvisioningConfig.Lambda");
                }
            },
        }
    }
}
