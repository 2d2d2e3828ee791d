use appflow_derive::cfn_model;

/// A CloudFormation resource tag (`{"Key": "...", "Value": "..."}`).
#[cfn_model(builder = false)]
#[derive(Eq, Hash, PartialOrd, Ord)]
pub struct CfnTag {
    pub key: String,
    pub value: String,
}

impl CfnTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}
