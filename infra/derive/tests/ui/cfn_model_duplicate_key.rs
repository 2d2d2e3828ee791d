use appflow_derive::cfn_model;

#[cfn_model]
pub struct FlowProps {
    pub kms_arn: Option<String>,
    #[serde(rename = "KmsArn")]
    pub key_arn: Option<String>,
}

fn main() {}
