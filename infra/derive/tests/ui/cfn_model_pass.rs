use appflow_derive::cfn_model;

#[cfn_model]
pub struct GlueDataCatalog {
    pub database_name: String,
    pub role_arn: String,
    pub table_prefix: Option<String>,
}

#[cfn_model(rename_all = "camelCase")]
pub struct PaginationConfig {
    pub max_page_size: i64,
}

#[cfn_model]
pub enum Destination {
    Glue(GlueDataCatalog),
    #[serde(rename = "SAPOData")]
    SapoData(PaginationConfig),
}

#[cfn_model(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WriteOperationType {
    Insert,
    Upsert,
}

fn main() {
    let _ = GlueDataCatalog::builder().database_name("db").role_arn("arn").build();
    let _ = Destination::SapoData(PaginationConfig::builder().max_page_size(10).build());
    let _ = WriteOperationType::Upsert;
}
