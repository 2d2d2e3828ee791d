//! Where a flow writes to.

use appflow_derive::cfn_model;
use appflow_domain::{CfnBool, CfnInteger, CfnString, ConnectorBound, ConnectorType};
use std::collections::BTreeMap;

#[cfn_model]
pub struct DestinationFlowConfig {
    pub api_version: Option<CfnString>,
    pub connector_profile_name: Option<CfnString>,
    pub connector_type: ConnectorType,
    pub destination_connector_properties: DestinationConnectorProperties,
}

/// Destination settings for exactly one connector.
#[cfn_model]
pub enum DestinationConnectorProperties {
    CustomConnector(CustomConnectorDestinationProperties),
    EventBridge(EventBridgeDestinationProperties),
    LookoutMetrics(LookoutMetricsDestinationProperties),
    Marketo(MarketoDestinationProperties),
    Redshift(RedshiftDestinationProperties),
    S3(S3DestinationProperties),
    #[serde(rename = "SAPOData")]
    SapoData(SapoDataDestinationProperties),
    Salesforce(SalesforceDestinationProperties),
    Snowflake(SnowflakeDestinationProperties),
    Upsolver(UpsolverDestinationProperties),
    Zendesk(ZendeskDestinationProperties),
}

impl ConnectorBound for DestinationConnectorProperties {
    fn connector_type(&self) -> ConnectorType {
        match self {
            Self::CustomConnector(_) => ConnectorType::CustomConnector,
            Self::EventBridge(_) => ConnectorType::EventBridge,
            Self::LookoutMetrics(_) => ConnectorType::LookoutMetrics,
            Self::Marketo(_) => ConnectorType::Marketo,
            Self::Redshift(_) => ConnectorType::Redshift,
            Self::S3(_) => ConnectorType::S3,
            Self::SapoData(_) => ConnectorType::SapoData,
            Self::Salesforce(_) => ConnectorType::Salesforce,
            Self::Snowflake(_) => ConnectorType::Snowflake,
            Self::Upsolver(_) => ConnectorType::Upsolver,
            Self::Zendesk(_) => ConnectorType::Zendesk,
        }
    }
}

impl DestinationConnectorProperties {
    /// `true` when the write operation needs record IDs that are not given.
    #[must_use]
    pub fn lacks_id_fields(&self) -> bool {
        let (operation, ids) = match self {
            Self::CustomConnector(p) => (p.write_operation_type, &p.id_field_names),
            Self::SapoData(p) => (p.write_operation_type, &p.id_field_names),
            Self::Salesforce(p) => (p.write_operation_type, &p.id_field_names),
            Self::Zendesk(p) => (p.write_operation_type, &p.id_field_names),
            _ => return false,
        };
        operation.is_some_and(WriteOperationType::needs_id_fields)
            && ids.as_ref().is_none_or(Vec::is_empty)
    }
}

/// Where records that fail to write are parked.
#[cfn_model]
pub struct ErrorHandlingConfig {
    pub bucket_name: Option<CfnString>,
    pub bucket_prefix: Option<CfnString>,
    pub fail_on_first_error: Option<CfnBool>,
}

#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WriteOperationType {
    Insert,
    Upsert,
    Update,
    Delete,
}

impl WriteOperationType {
    /// Every operation except `INSERT` addresses existing records.
    #[must_use]
    pub const fn needs_id_fields(self) -> bool {
        !matches!(self, Self::Insert)
    }
}

#[cfn_model]
pub struct CustomConnectorDestinationProperties {
    pub entity_name: CfnString,
    pub custom_properties: Option<BTreeMap<String, String>>,
    pub error_handling_config: Option<ErrorHandlingConfig>,
    pub id_field_names: Option<Vec<String>>,
    pub write_operation_type: Option<WriteOperationType>,
}

#[cfn_model]
pub struct EventBridgeDestinationProperties {
    pub object: CfnString,
    pub error_handling_config: Option<ErrorHandlingConfig>,
}

#[cfn_model]
pub struct LookoutMetricsDestinationProperties {
    pub object: Option<CfnString>,
}

#[cfn_model]
pub struct MarketoDestinationProperties {
    pub object: CfnString,
    pub error_handling_config: Option<ErrorHandlingConfig>,
}

/// Redshift loads through an intermediate S3 bucket.
#[cfn_model]
pub struct RedshiftDestinationProperties {
    pub object: CfnString,
    pub intermediate_bucket_name: CfnString,
    pub bucket_prefix: Option<CfnString>,
    pub error_handling_config: Option<ErrorHandlingConfig>,
}

#[cfn_model]
pub struct S3DestinationProperties {
    pub bucket_name: CfnString,
    pub bucket_prefix: Option<CfnString>,
    pub s3_output_format_config: Option<S3OutputFormatConfig>,
}

#[cfn_model]
pub struct S3OutputFormatConfig {
    pub aggregation_config: Option<AggregationConfig>,
    pub file_type: Option<FileType>,
    pub prefix_config: Option<PrefixConfig>,
    pub preserve_source_data_typing: Option<CfnBool>,
}

#[cfn_model]
pub struct AggregationConfig {
    pub aggregation_type: Option<AggregationType>,
    /// Target size of each output file, in MB.
    pub target_file_size: Option<CfnInteger>,
}

#[cfn_model]
pub enum AggregationType {
    None,
    SingleFile,
}

#[cfn_model(rename_all = "UPPERCASE")]
pub enum FileType {
    Csv,
    Json,
    Parquet,
}

/// Folder layout of the objects a flow writes.
#[cfn_model]
pub struct PrefixConfig {
    pub path_prefix_hierarchy: Option<Vec<PathPrefix>>,
    pub prefix_format: Option<PrefixFormat>,
    pub prefix_type: Option<PrefixType>,
}

#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathPrefix {
    ExecutionId,
    SchemaVersion,
}

#[cfn_model(rename_all = "UPPERCASE")]
pub enum PrefixFormat {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrefixType {
    Filename,
    Path,
    PathAndFilename,
}

#[cfn_model]
pub struct SapoDataDestinationProperties {
    pub object_path: CfnString,
    pub error_handling_config: Option<ErrorHandlingConfig>,
    pub id_field_names: Option<Vec<String>>,
    pub success_response_handling_config: Option<SuccessResponseHandlingConfig>,
    pub write_operation_type: Option<WriteOperationType>,
}

/// Where SAP OData success responses are stored.
#[cfn_model]
pub struct SuccessResponseHandlingConfig {
    pub bucket_name: Option<CfnString>,
    pub bucket_prefix: Option<CfnString>,
}

#[cfn_model]
pub struct SalesforceDestinationProperties {
    pub object: CfnString,
    pub data_transfer_api: Option<crate::source::SalesforceDataTransferApi>,
    pub error_handling_config: Option<ErrorHandlingConfig>,
    pub id_field_names: Option<Vec<String>>,
    pub write_operation_type: Option<WriteOperationType>,
}

#[cfn_model]
pub struct SnowflakeDestinationProperties {
    pub object: CfnString,
    pub intermediate_bucket_name: CfnString,
    pub bucket_prefix: Option<CfnString>,
    pub error_handling_config: Option<ErrorHandlingConfig>,
}

#[cfn_model]
pub struct UpsolverDestinationProperties {
    pub bucket_name: CfnString,
    pub bucket_prefix: Option<CfnString>,
    pub s3_output_format_config: UpsolverS3OutputFormatConfig,
}

/// Upsolver variant of [`S3OutputFormatConfig`]; the prefix layout is mandatory.
#[cfn_model]
pub struct UpsolverS3OutputFormatConfig {
    pub aggregation_config: Option<AggregationConfig>,
    pub file_type: Option<FileType>,
    pub prefix_config: PrefixConfig,
}

#[cfn_model]
pub struct ZendeskDestinationProperties {
    pub object: CfnString,
    pub error_handling_config: Option<ErrorHandlingConfig>,
    pub id_field_names: Option<Vec<String>>,
    pub write_operation_type: Option<WriteOperationType>,
}
