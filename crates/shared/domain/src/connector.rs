use appflow_derive::cfn_model;

/// Every connector AppFlow knows about, spelled as CloudFormation spells it.
#[cfn_model]
pub enum ConnectorType {
    Salesforce,
    Singular,
    Slack,
    Redshift,
    S3,
    Marketo,
    Googleanalytics,
    Zendesk,
    Servicenow,
    Datadog,
    Trendmicro,
    Snowflake,
    Dynatrace,
    Infornexus,
    Amplitude,
    Veeva,
    EventBridge,
    LookoutMetrics,
    Upsolver,
    Honeycode,
    CustomerProfiles,
    #[serde(rename = "SAPOData")]
    SapoData,
    CustomConnector,
    Pardot,
}

/// A connector-keyed one-of group whose populated variant belongs to one connector.
///
/// Used to check that the variant matches the `ConnectorType` declared next to it.
pub trait ConnectorBound {
    fn connector_type(&self) -> ConnectorType;
}
