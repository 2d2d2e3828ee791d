use appflow_derive::cfn_model;

#[cfn_model]
pub struct GlueDataCatalog {
    pub database_name: String,
    pub role_arn: String,
    pub table_prefix: Option<String>,
}

fn main() {
    let _ = GlueDataCatalog::builder().database_name("db").table_prefix("sf_").build();
}
