//! Connector-specific, non-secret settings of a connector profile.

use crate::auth::{OAuth2Properties, OAuthProperties};
use appflow_derive::cfn_model;
use appflow_domain::{CfnBool, CfnInteger, CfnString, ConnectorBound, ConnectorType};
use std::collections::BTreeMap;

/// Properties for exactly one connector.
#[cfn_model]
pub enum ConnectorProfileProperties {
    CustomConnector(CustomConnectorProfileProperties),
    Datadog(DatadogConnectorProfileProperties),
    Dynatrace(DynatraceConnectorProfileProperties),
    InforNexus(InforNexusConnectorProfileProperties),
    Marketo(MarketoConnectorProfileProperties),
    Pardot(PardotConnectorProfileProperties),
    Redshift(RedshiftConnectorProfileProperties),
    #[serde(rename = "SAPOData")]
    SapoData(SapoDataConnectorProfileProperties),
    Salesforce(SalesforceConnectorProfileProperties),
    ServiceNow(ServiceNowConnectorProfileProperties),
    Slack(SlackConnectorProfileProperties),
    Snowflake(SnowflakeConnectorProfileProperties),
    Veeva(VeevaConnectorProfileProperties),
    Zendesk(ZendeskConnectorProfileProperties),
}

impl ConnectorBound for ConnectorProfileProperties {
    fn connector_type(&self) -> ConnectorType {
        match self {
            Self::CustomConnector(_) => ConnectorType::CustomConnector,
            Self::Datadog(_) => ConnectorType::Datadog,
            Self::Dynatrace(_) => ConnectorType::Dynatrace,
            Self::InforNexus(_) => ConnectorType::Infornexus,
            Self::Marketo(_) => ConnectorType::Marketo,
            Self::Pardot(_) => ConnectorType::Pardot,
            Self::Redshift(_) => ConnectorType::Redshift,
            Self::SapoData(_) => ConnectorType::SapoData,
            Self::Salesforce(_) => ConnectorType::Salesforce,
            Self::ServiceNow(_) => ConnectorType::Servicenow,
            Self::Slack(_) => ConnectorType::Slack,
            Self::Snowflake(_) => ConnectorType::Snowflake,
            Self::Veeva(_) => ConnectorType::Veeva,
            Self::Zendesk(_) => ConnectorType::Zendesk,
        }
    }
}

#[cfn_model]
pub struct CustomConnectorProfileProperties {
    #[serde(rename = "OAuth2Properties")]
    pub oauth2_properties: Option<OAuth2Properties>,
    pub profile_properties: Option<BTreeMap<String, String>>,
}

#[cfn_model]
pub struct DatadogConnectorProfileProperties {
    pub instance_url: CfnString,
}

#[cfn_model]
pub struct DynatraceConnectorProfileProperties {
    pub instance_url: CfnString,
}

#[cfn_model]
pub struct InforNexusConnectorProfileProperties {
    pub instance_url: CfnString,
}

#[cfn_model]
pub struct MarketoConnectorProfileProperties {
    pub instance_url: CfnString,
}

#[cfn_model]
pub struct PardotConnectorProfileProperties {
    pub business_unit_id: CfnString,
    pub instance_url: Option<CfnString>,
    pub is_sandbox_environment: Option<CfnBool>,
}

/// Connection details of an Amazon Redshift cluster or serverless workgroup.
#[cfn_model]
pub struct RedshiftConnectorProfileProperties {
    /// Staging bucket for data loaded into Redshift.
    pub bucket_name: CfnString,
    pub bucket_prefix: Option<CfnString>,
    pub cluster_identifier: Option<CfnString>,
    /// Role used by the Redshift Data API.
    pub data_api_role_arn: Option<CfnString>,
    pub database_name: Option<CfnString>,
    /// JDBC URL of the cluster.
    pub database_url: Option<CfnString>,
    pub is_redshift_serverless: Option<CfnBool>,
    /// Role that grants Redshift read access to the staging bucket.
    pub role_arn: CfnString,
    pub workgroup_name: Option<CfnString>,
}

#[cfn_model]
pub struct SapoDataConnectorProfileProperties {
    pub application_host_url: Option<CfnString>,
    pub application_service_path: Option<CfnString>,
    pub client_number: Option<CfnString>,
    #[serde(rename = "DisableSSO")]
    pub disable_sso: Option<CfnBool>,
    pub logon_language: Option<CfnString>,
    #[serde(rename = "OAuthProperties")]
    pub oauth_properties: Option<OAuthProperties>,
    pub port_number: Option<CfnInteger>,
    pub private_link_service_name: Option<CfnString>,
}

/// Salesforce keeps two lower camel case keys, as CloudFormation does.
#[cfn_model]
pub struct SalesforceConnectorProfileProperties {
    pub instance_url: Option<CfnString>,
    #[serde(rename = "isSandboxEnvironment")]
    pub is_sandbox_environment: Option<CfnBool>,
    #[serde(rename = "usePrivateLinkForMetadataAndAuthorization")]
    pub use_private_link_for_metadata_and_authorization: Option<CfnBool>,
}

#[cfn_model]
pub struct ServiceNowConnectorProfileProperties {
    pub instance_url: CfnString,
}

#[cfn_model]
pub struct SlackConnectorProfileProperties {
    pub instance_url: CfnString,
}

#[cfn_model]
pub struct SnowflakeConnectorProfileProperties {
    pub account_name: Option<CfnString>,
    pub bucket_name: CfnString,
    pub bucket_prefix: Option<CfnString>,
    pub private_link_service_name: Option<CfnString>,
    pub region: Option<CfnString>,
    /// External stage the data is loaded through.
    pub stage: CfnString,
    pub warehouse: CfnString,
}

#[cfn_model]
pub struct VeevaConnectorProfileProperties {
    pub instance_url: CfnString,
}

#[cfn_model]
pub struct ZendeskConnectorProfileProperties {
    pub instance_url: CfnString,
}
