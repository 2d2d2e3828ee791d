//! Where a flow reads from.

use appflow_derive::cfn_model;
use appflow_domain::{CfnBool, CfnInteger, CfnString, ConnectorBound, ConnectorType};
use std::collections::BTreeMap;

#[cfn_model]
pub struct SourceFlowConfig {
    pub api_version: Option<CfnString>,
    pub connector_profile_name: Option<CfnString>,
    pub connector_type: ConnectorType,
    pub incremental_pull_config: Option<IncrementalPullConfig>,
    pub source_connector_properties: SourceConnectorProperties,
}

/// Field used to detect new and changed records on incremental pulls.
#[cfn_model]
pub struct IncrementalPullConfig {
    pub datetime_type_field_name: Option<CfnString>,
}

/// Source settings for exactly one connector.
#[cfn_model]
pub enum SourceConnectorProperties {
    Amplitude(AmplitudeSourceProperties),
    CustomConnector(CustomConnectorSourceProperties),
    Datadog(DatadogSourceProperties),
    Dynatrace(DynatraceSourceProperties),
    GoogleAnalytics(GoogleAnalyticsSourceProperties),
    InforNexus(InforNexusSourceProperties),
    Marketo(MarketoSourceProperties),
    Pardot(PardotSourceProperties),
    S3(S3SourceProperties),
    #[serde(rename = "SAPOData")]
    SapoData(SapoDataSourceProperties),
    Salesforce(SalesforceSourceProperties),
    ServiceNow(ServiceNowSourceProperties),
    Singular(SingularSourceProperties),
    Slack(SlackSourceProperties),
    Trendmicro(TrendmicroSourceProperties),
    Veeva(VeevaSourceProperties),
    Zendesk(ZendeskSourceProperties),
}

impl ConnectorBound for SourceConnectorProperties {
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
            Self::S3(_) => ConnectorType::S3,
            Self::SapoData(_) => ConnectorType::SapoData,
            Self::Salesforce(_) => ConnectorType::Salesforce,
            Self::ServiceNow(_) => ConnectorType::Servicenow,
            Self::Singular(_) => ConnectorType::Singular,
            Self::Slack(_) => ConnectorType::Slack,
            Self::Trendmicro(_) => ConnectorType::Trendmicro,
            Self::Veeva(_) => ConnectorType::Veeva,
            Self::Zendesk(_) => ConnectorType::Zendesk,
        }
    }
}

// Connectors whose source settings are just the object to read.
macro_rules! object_sources {
    ($($name:ident),* $(,)?) => {
        $(
            #[cfn_model]
            pub struct $name {
                pub object: CfnString,
            }
        )*
    };
}

object_sources!(
    AmplitudeSourceProperties,
    DatadogSourceProperties,
    DynatraceSourceProperties,
    GoogleAnalyticsSourceProperties,
    InforNexusSourceProperties,
    MarketoSourceProperties,
    PardotSourceProperties,
    ServiceNowSourceProperties,
    SingularSourceProperties,
    SlackSourceProperties,
    TrendmicroSourceProperties,
    ZendeskSourceProperties,
);

#[cfn_model]
pub struct CustomConnectorSourceProperties {
    pub entity_name: CfnString,
    pub custom_properties: Option<BTreeMap<String, String>>,
    pub data_transfer_api: Option<DataTransferApi>,
}

/// API a custom connector uses for the transfer.
#[cfn_model]
pub struct DataTransferApi {
    pub name: CfnString,
    #[serde(rename = "Type")]
    pub transfer_type: DataTransferApiType,
}

#[cfn_model(rename_all = "UPPERCASE")]
pub enum DataTransferApiType {
    Sync,
    Async,
    Automatic,
}

#[cfn_model]
pub struct S3SourceProperties {
    pub bucket_name: CfnString,
    pub bucket_prefix: CfnString,
    pub s3_input_format_config: Option<S3InputFormatConfig>,
}

#[cfn_model]
pub struct S3InputFormatConfig {
    pub s3_input_file_type: Option<S3InputFileType>,
}

#[cfn_model(rename_all = "UPPERCASE")]
pub enum S3InputFileType {
    Csv,
    Json,
}

#[cfn_model]
pub struct SapoDataSourceProperties {
    pub object_path: CfnString,
    pub pagination_config: Option<SapoDataPaginationConfig>,
    pub parallelism_config: Option<SapoDataParallelismConfig>,
}

/// Page size of OData requests.
#[cfn_model(rename_all = "camelCase")]
pub struct SapoDataPaginationConfig {
    pub max_page_size: CfnInteger,
}

/// Number of concurrent OData requests.
#[cfn_model(rename_all = "camelCase")]
pub struct SapoDataParallelismConfig {
    pub max_parallelism: CfnInteger,
}

#[cfn_model]
pub struct SalesforceSourceProperties {
    pub object: CfnString,
    pub data_transfer_api: Option<SalesforceDataTransferApi>,
    pub enable_dynamic_field_update: Option<CfnBool>,
    pub include_deleted_records: Option<CfnBool>,
}

/// Salesforce API used for transfers; `AUTOMATIC` picks by record count.
#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesforceDataTransferApi {
    Automatic,
    Bulkv2,
    RestSync,
}

#[cfn_model]
pub struct VeevaSourceProperties {
    pub object: CfnString,
    pub document_type: Option<CfnString>,
    pub include_all_versions: Option<CfnBool>,
    pub include_renditions: Option<CfnBool>,
    pub include_source_files: Option<CfnBool>,
}
