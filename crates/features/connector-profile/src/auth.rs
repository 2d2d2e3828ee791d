//! Authentication records shared by several connectors.

use appflow_derive::cfn_model;
use appflow_domain::CfnString;
use std::collections::BTreeMap;

#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationType {
    Oauth2,
    Apikey,
    Basic,
    Custom,
}

#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OAuth2GrantType {
    AuthorizationCode,
    RefreshToken,
    ClientCredentials,
    JwtBearer,
}

/// Values used by the OAuth authorization code flow.
#[cfn_model]
pub struct ConnectorOAuthRequest {
    pub auth_code: Option<CfnString>,
    pub redirect_uri: Option<CfnString>,
}

#[cfn_model]
pub struct BasicAuthCredentials {
    pub username: CfnString,
    pub password: CfnString,
}

#[cfn_model]
pub struct ApiKeyCredentials {
    pub api_key: CfnString,
    pub api_secret_key: Option<CfnString>,
}

/// Credentials of a connector that authenticates through custom parameters.
#[cfn_model]
pub struct CustomAuthCredentials {
    pub custom_authentication_type: CfnString,
    pub credentials_map: Option<BTreeMap<String, String>>,
}

#[cfn_model]
pub struct OAuth2Credentials {
    pub access_token: Option<CfnString>,
    pub client_id: Option<CfnString>,
    pub client_secret: Option<CfnString>,
    #[serde(rename = "OAuthRequest")]
    pub oauth_request: Option<ConnectorOAuthRequest>,
    pub refresh_token: Option<CfnString>,
}

/// OAuth credentials of the SAP OData connector.
#[cfn_model]
pub struct OAuthCredentials {
    pub access_token: Option<CfnString>,
    pub refresh_token: Option<CfnString>,
    pub client_id: Option<CfnString>,
    pub client_secret: Option<CfnString>,
    #[serde(rename = "ConnectorOAuthRequest")]
    pub connector_oauth_request: Option<ConnectorOAuthRequest>,
}

#[cfn_model]
pub struct OAuth2Properties {
    #[serde(rename = "OAuth2GrantType")]
    pub oauth2_grant_type: Option<OAuth2GrantType>,
    pub token_url: Option<CfnString>,
    pub token_url_custom_properties: Option<BTreeMap<String, String>>,
}

/// OAuth endpoints of the SAP OData connector.
#[cfn_model]
pub struct OAuthProperties {
    pub auth_code_url: Option<CfnString>,
    #[serde(rename = "OAuthScopes")]
    pub oauth_scopes: Option<Vec<String>>,
    pub token_url: Option<CfnString>,
}
