//! Connector-specific secrets of a connector profile.

use crate::auth::{
    ApiKeyCredentials, AuthenticationType, BasicAuthCredentials, ConnectorOAuthRequest,
    CustomAuthCredentials, OAuth2Credentials, OAuth2GrantType, OAuthCredentials,
};
use appflow_derive::cfn_model;
use appflow_domain::{CfnString, ConnectorBound, ConnectorType};

/// Credentials for exactly one connector.
#[cfn_model]
pub enum ConnectorProfileCredentials {
    Amplitude(AmplitudeConnectorProfileCredentials),
    CustomConnector(CustomConnectorProfileCredentials),
    Datadog(DatadogConnectorProfileCredentials),
    Dynatrace(DynatraceConnectorProfileCredentials),
    GoogleAnalytics(GoogleAnalyticsConnectorProfileCredentials),
    InforNexus(InforNexusConnectorProfileCredentials),
    Marketo(MarketoConnectorProfileCredentials),
    Pardot(PardotConnectorProfileCredentials),
    Redshift(RedshiftConnectorProfileCredentials),
    #[serde(rename = "SAPOData")]
    SapoData(SapoDataConnectorProfileCredentials),
    Salesforce(SalesforceConnectorProfileCredentials),
    ServiceNow(ServiceNowConnectorProfileCredentials),
    Singular(SingularConnectorProfileCredentials),
    Slack(SlackConnectorProfileCredentials),
    Snowflake(SnowflakeConnectorProfileCredentials),
    Trendmicro(TrendmicroConnectorProfileCredentials),
    Veeva(VeevaConnectorProfileCredentials),
    Zendesk(ZendeskConnectorProfileCredentials),
}

impl ConnectorBound for ConnectorProfileCredentials {
    fn connector_type(&self) -> ConnectorType {
        match self {
            Self::Amplitude(_) => ConnectorType::Amplitude,
            Self::CustomConnector(_) => ConnectorType::CustomConnector,
            Self::Datadog(_) => ConnectorType::Datadog,
            Self::Dynatrace(_) => ConnectorType::Dynatrace,
            Self::GoogleAnalytics(_) => ConnectorType::Googleanalytics,
            Self::InforNexus(_) => ConnectorType::Infornexus,
            Self::Marketo(_) => ConnectorType::Marketo,
            Self::Pardot(_) => ConnectorType::Pardot,
            Self::Redshift(_) => ConnectorType::Redshift,
            Self::SapoData(_) => ConnectorType::SapoData,
            Self::Salesforce(_) => ConnectorType::Salesforce,
            Self::ServiceNow(_) => ConnectorType::Servicenow,
            Self::Singular(_) => ConnectorType::Singular,
            Self::Slack(_) => ConnectorType::Slack,
            Self::Snowflake(_) => ConnectorType::Snowflake,
            Self::Trendmicro(_) => ConnectorType::Trendmicro,
            Self::Veeva(_) => ConnectorType::Veeva,
            Self::Zendesk(_) => ConnectorType::Zendesk,
        }
    }
}

#[cfn_model]
pub struct AmplitudeConnectorProfileCredentials {
    pub api_key: CfnString,
    pub secret_key: CfnString,
}

/// Credentials of a custom connector; the populated member must match `AuthenticationType`.
#[cfn_model]
pub struct CustomConnectorProfileCredentials {
    pub authentication_type: AuthenticationType,
    pub api_key: Option<ApiKeyCredentials>,
    pub basic: Option<BasicAuthCredentials>,
    pub custom: Option<CustomAuthCredentials>,
    pub oauth2: Option<OAuth2Credentials>,
}

impl CustomConnectorProfileCredentials {
    /// Key of the member `AuthenticationType` requires, when it is absent.
    #[must_use]
    pub const fn missing_member(&self) -> Option<&'static str> {
        let present = match self.authentication_type {
            AuthenticationType::Oauth2 => self.oauth2.is_some(),
            AuthenticationType::Apikey => self.api_key.is_some(),
            AuthenticationType::Basic => self.basic.is_some(),
            AuthenticationType::Custom => self.custom.is_some(),
        };
        if present {
            return None;
        }
        Some(match self.authentication_type {
            AuthenticationType::Oauth2 => "Oauth2",
            AuthenticationType::Apikey => "ApiKey",
            AuthenticationType::Basic => "Basic",
            AuthenticationType::Custom => "Custom",
        })
    }
}

#[cfn_model]
pub struct DatadogConnectorProfileCredentials {
    pub api_key: CfnString,
    pub application_key: CfnString,
}

#[cfn_model]
pub struct DynatraceConnectorProfileCredentials {
    pub api_token: CfnString,
}

#[cfn_model]
pub struct GoogleAnalyticsConnectorProfileCredentials {
    pub client_id: CfnString,
    pub client_secret: CfnString,
    pub access_token: Option<CfnString>,
    pub refresh_token: Option<CfnString>,
    #[serde(rename = "ConnectorOAuthRequest")]
    pub connector_oauth_request: Option<ConnectorOAuthRequest>,
}

#[cfn_model]
pub struct InforNexusConnectorProfileCredentials {
    pub access_key_id: CfnString,
    pub datakey: CfnString,
    pub secret_access_key: CfnString,
    pub user_id: CfnString,
}

#[cfn_model]
pub struct MarketoConnectorProfileCredentials {
    pub client_id: CfnString,
    pub client_secret: CfnString,
    pub access_token: Option<CfnString>,
    #[serde(rename = "ConnectorOAuthRequest")]
    pub connector_oauth_request: Option<ConnectorOAuthRequest>,
}

#[cfn_model]
pub struct PardotConnectorProfileCredentials {
    pub access_token: Option<CfnString>,
    pub refresh_token: Option<CfnString>,
    /// Secrets Manager ARN holding the client ID and secret.
    pub client_credentials_arn: Option<CfnString>,
    #[serde(rename = "ConnectorOAuthRequest")]
    pub connector_oauth_request: Option<ConnectorOAuthRequest>,
}

#[cfn_model]
pub struct RedshiftConnectorProfileCredentials {
    pub username: Option<CfnString>,
    pub password: Option<CfnString>,
}

#[cfn_model]
pub struct SapoDataConnectorProfileCredentials {
    pub basic_auth_credentials: Option<BasicAuthCredentials>,
    #[serde(rename = "OAuthCredentials")]
    pub oauth_credentials: Option<OAuthCredentials>,
}

#[cfn_model]
pub struct SalesforceConnectorProfileCredentials {
    pub access_token: Option<CfnString>,
    pub refresh_token: Option<CfnString>,
    pub client_credentials_arn: Option<CfnString>,
    #[serde(rename = "ConnectorOAuthRequest")]
    pub connector_oauth_request: Option<ConnectorOAuthRequest>,
    #[serde(rename = "OAuth2GrantType")]
    pub oauth2_grant_type: Option<OAuth2GrantType>,
    /// Signed JWT for the `JWT_BEARER` grant.
    pub jwt_token: Option<CfnString>,
}

#[cfn_model]
pub struct ServiceNowConnectorProfileCredentials {
    pub username: Option<CfnString>,
    pub password: Option<CfnString>,
    #[serde(rename = "OAuth2Credentials")]
    pub oauth2_credentials: Option<OAuth2Credentials>,
}

#[cfn_model]
pub struct SingularConnectorProfileCredentials {
    pub api_key: CfnString,
}

#[cfn_model]
pub struct SlackConnectorProfileCredentials {
    pub client_id: CfnString,
    pub client_secret: CfnString,
    pub access_token: Option<CfnString>,
    #[serde(rename = "ConnectorOAuthRequest")]
    pub connector_oauth_request: Option<ConnectorOAuthRequest>,
}

#[cfn_model]
pub struct SnowflakeConnectorProfileCredentials {
    pub username: CfnString,
    pub password: CfnString,
}

#[cfn_model]
pub struct TrendmicroConnectorProfileCredentials {
    pub api_secret_key: CfnString,
}

#[cfn_model]
pub struct VeevaConnectorProfileCredentials {
    pub username: CfnString,
    pub password: CfnString,
}

#[cfn_model]
pub struct ZendeskConnectorProfileCredentials {
    pub client_id: CfnString,
    pub client_secret: CfnString,
    pub access_token: Option<CfnString>,
    #[serde(rename = "ConnectorOAuthRequest")]
    pub connector_oauth_request: Option<ConnectorOAuthRequest>,
}
