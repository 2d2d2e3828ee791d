//! Field-level transformations applied between source and destination.

use appflow_derive::cfn_model;
use appflow_domain::{CfnString, ConnectorBound, ConnectorType};

#[cfn_model]
pub struct Task {
    pub connector_operator: Option<ConnectorOperator>,
    pub destination_field: Option<CfnString>,
    pub source_fields: Vec<String>,
    pub task_properties: Option<Vec<TaskPropertiesObject>>,
    pub task_type: TaskType,
}

#[cfn_model]
pub enum TaskType {
    Arithmetic,
    Filter,
    Map,
    #[serde(rename = "Map_all")]
    MapAll,
    Mask,
    Merge,
    Passthrough,
    Truncate,
    Validate,
    Partition,
}

/// Operation run by the source connector, keyed by that connector.
#[cfn_model]
pub enum ConnectorOperator {
    Amplitude(Operator),
    CustomConnector(Operator),
    Datadog(Operator),
    Dynatrace(Operator),
    GoogleAnalytics(Operator),
    InforNexus(Operator),
    Marketo(Operator),
    Pardot(Operator),
    S3(Operator),
    #[serde(rename = "SAPOData")]
    SapoData(Operator),
    Salesforce(Operator),
    ServiceNow(Operator),
    Singular(Operator),
    Slack(Operator),
    Trendmicro(Operator),
    Veeva(Operator),
    Zendesk(Operator),
}

impl ConnectorOperator {
    #[must_use]
    pub const fn operator(&self) -> Operator {
        match self {
            Self::Amplitude(op)
            | Self::CustomConnector(op)
            | Self::Datadog(op)
            | Self::Dynatrace(op)
            | Self::GoogleAnalytics(op)
            | Self::InforNexus(op)
            | Self::Marketo(op)
            | Self::Pardot(op)
            | Self::S3(op)
            | Self::SapoData(op)
            | Self::Salesforce(op)
            | Self::ServiceNow(op)
            | Self::Singular(op)
            | Self::Slack(op)
            | Self::Trendmicro(op)
            | Self::Veeva(op)
            | Self::Zendesk(op) => *op,
        }
    }
}

impl ConnectorBound for ConnectorOperator {
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

#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Projection,
    LessThan,
    GreaterThan,
    Contains,
    Between,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
    EqualTo,
    NotEqualTo,
    Addition,
    Multiplication,
    Division,
    Subtraction,
    MaskAll,
    MaskFirstN,
    MaskLastN,
    ValidateNonNull,
    ValidateNonZero,
    ValidateNonNegative,
    ValidateNumeric,
    NoOp,
}

#[cfn_model]
pub struct TaskPropertiesObject {
    pub key: TaskPropertyKey,
    pub value: CfnString,
}

impl TaskPropertiesObject {
    #[must_use]
    pub fn new(key: TaskPropertyKey, value: impl Into<CfnString>) -> Self {
        Self { key, value: value.into() }
    }
}

#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPropertyKey {
    Value,
    Values,
    DataType,
    UpperBound,
    LowerBound,
    SourceDataType,
    DestinationDataType,
    ValidationAction,
    MaskValue,
    MaskLength,
    TruncateLength,
    MathOperationFieldsOrder,
    ConcatFormat,
    SubfieldCategoryMap,
    ExcludeSourceFieldsList,
    IncludeNewFields,
    OrderedPartitionKeysList,
}
