use appflow_domain::constants::{
    ATTR_FLOW_ARN, CONNECTOR, CONNECTOR_PROFILE, FLOW, INSPECT_PROPS, INSPECT_TYPE,
    TEMPLATE_FORMAT_VERSION,
};
use appflow_domain::{CfnEnum, CfnProperties, CfnTag, ConnectorType};
use serde_json::json;

#[test]
fn constants_match_cloudformation_names() {
    assert_eq!(TEMPLATE_FORMAT_VERSION, "2010-09-09");
    assert_eq!(CONNECTOR, "AWS::AppFlow::Connector");
    assert_eq!(CONNECTOR_PROFILE, "AWS::AppFlow::ConnectorProfile");
    assert_eq!(FLOW, "AWS::AppFlow::Flow");
    assert_eq!(ATTR_FLOW_ARN, "FlowArn");
    assert_eq!(INSPECT_TYPE, "aws:cdk:cloudformation:type");
    assert_eq!(INSPECT_PROPS, "aws:cdk:cloudformation:props");
}

#[test]
fn tag_table_maps_fields_to_keys() {
    assert_eq!(CfnTag::TYPE_NAME, "CfnTag");
    let key = CfnTag::property_by_field("key").expect("key row");
    assert_eq!(key.key, "Key");
    assert!(key.required);
    assert_eq!(CfnTag::property("Value").map(|p| p.field), Some("value"));
    assert_eq!(CfnTag::required_keys().collect::<Vec<_>>(), ["Key", "Value"]);
}

#[test]
fn tag_rejects_unknown_keys() {
    let ok: CfnTag = serde_json::from_value(json!({ "Key": "team", "Value": "data" })).unwrap();
    assert_eq!(ok, CfnTag::new("team", "data"));

    let extra = json!({ "Key": "team", "Value": "data", "Owner": "me" });
    assert!(serde_json::from_value::<CfnTag>(extra).is_err());
}

#[test]
fn connector_type_parses_wire_values() {
    let ty: ConnectorType = serde_json::from_value(json!("SAPOData")).unwrap();
    assert_eq!(ty, ConnectorType::SapoData);
    assert!(serde_json::from_value::<ConnectorType>(json!("SapoData")).is_err());
    assert!(ConnectorType::VALUES.contains(&"CustomConnector"));
}
