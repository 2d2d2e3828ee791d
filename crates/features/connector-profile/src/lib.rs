//! `AWS::AppFlow::ConnectorProfile`: a named credential and settings bundle for one connector.
//!
//! The per-connector groups are one-of enums ([`ConnectorProfileCredentials`],
//! [`ConnectorProfileProperties`]); which variant is populated must agree with
//! [`CfnConnectorProfileProps::connector_type`], checked by [`CfnResource::validate`].
//!
//! ```rust
//! use appflow_connector_profile::{CfnConnectorProfile, CfnConnectorProfileProps, ConnectionMode};
//! use appflow_domain::ConnectorType;
//! use appflow_kernel::CfnResource;
//!
//! let props = CfnConnectorProfileProps::builder()
//!     .connection_mode(ConnectionMode::Public)
//!     .connector_profile_name("my-profile")
//!     .connector_type(ConnectorType::Salesforce)
//!     .build();
//! let profile = CfnConnectorProfile::new("Profile", props).unwrap();
//! assert_eq!(profile.render_properties().unwrap().as_object().unwrap().len(), 3);
//! ```

mod auth;
mod credentials;
mod properties;

pub use auth::{
    ApiKeyCredentials, AuthenticationType, BasicAuthCredentials, ConnectorOAuthRequest,
    CustomAuthCredentials, OAuth2Credentials, OAuth2GrantType, OAuth2Properties, OAuthCredentials,
    OAuthProperties,
};
pub use credentials::*;
pub use properties::*;

use appflow_derive::cfn_model;
use appflow_domain::constants::{
    ATTR_CONNECTOR_PROFILE_ARN, ATTR_CREDENTIALS_ARN, CONNECTOR_PROFILE,
};
use appflow_domain::{CfnString, ConnectorType, Intrinsic};
use appflow_kernel::prelude::*;

#[cfn_model]
pub enum ConnectionMode {
    #[serde(alias = "PUBLIC")]
    Public,
    #[serde(alias = "PRIVATE")]
    Private,
}

#[cfn_model]
pub struct CfnConnectorProfileProps {
    pub connection_mode: ConnectionMode,
    /// Label of a registered custom connector; only used with `CustomConnector`.
    pub connector_label: Option<CfnString>,
    pub connector_profile_config: Option<ConnectorProfileConfig>,
    pub connector_profile_name: CfnString,
    pub connector_type: ConnectorType,
    /// Key used to encrypt the stored credentials.
    #[serde(rename = "KMSArn")]
    pub kms_arn: Option<CfnString>,
}

#[cfn_model]
pub struct ConnectorProfileConfig {
    pub connector_profile_credentials: Option<ConnectorProfileCredentials>,
    pub connector_profile_properties: Option<ConnectorProfileProperties>,
}

impl Validate for CfnConnectorProfileProps {
    fn check(&self, report: &mut Report) {
        if self.connector_type == ConnectorType::CustomConnector && self.connector_label.is_none() {
            report.missing("ConnectorLabel");
        }

        let Some(config) = &self.connector_profile_config else {
            return;
        };
        if let Some(credentials) = &config.connector_profile_credentials {
            report.check_connector(
                "ConnectorProfileConfig.ConnectorProfileCredentials",
                self.connector_type,
                credentials,
            );
            if let ConnectorProfileCredentials::CustomConnector(custom) = credentials
                && let Some(member) = custom.missing_member()
            {
                report.missing(format!(
                    "ConnectorProfileConfig.ConnectorProfileCredentials.CustomConnector.{member}"
                ));
            }
        }
        if let Some(properties) = &config.connector_profile_properties {
            report.check_connector(
                "ConnectorProfileConfig.ConnectorProfileProperties",
                self.connector_type,
                properties,
            );
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CfnConnectorProfile {
    logical_id: LogicalId,
    props: CfnConnectorProfileProps,
    options: ResourceOptions,
}

impl CfnConnectorProfile {
    /// # Errors
    /// Returns [`CfnError::InvalidLogicalId`] if `logical_id` is not a valid logical ID.
    pub fn new(logical_id: &str, props: CfnConnectorProfileProps) -> Result<Self, CfnError> {
        let logical_id = LogicalId::new(logical_id)?;
        Ok(Self { logical_id, props, options: ResourceOptions::default() })
    }

    #[must_use]
    pub fn attr_connector_profile_arn(&self) -> Intrinsic {
        Intrinsic::get_att(self.logical_id.as_str(), ATTR_CONNECTOR_PROFILE_ARN)
    }

    /// ARN of the Secrets Manager secret holding the profile credentials.
    #[must_use]
    pub fn attr_credentials_arn(&self) -> Intrinsic {
        Intrinsic::get_att(self.logical_id.as_str(), ATTR_CREDENTIALS_ARN)
    }
}

impl CfnResource for CfnConnectorProfile {
    const RESOURCE_TYPE: &'static str = CONNECTOR_PROFILE;
    const ATTRIBUTES: &'static [&'static str] = &[ATTR_CONNECTOR_PROFILE_ARN, ATTR_CREDENTIALS_ARN];
    type Props = CfnConnectorProfileProps;

    fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    fn props(&self) -> &CfnConnectorProfileProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut CfnConnectorProfileProps {
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
        props: CfnConnectorProfileProps,
        options: ResourceOptions,
    ) -> Self {
        Self { logical_id, props, options }
    }
}
