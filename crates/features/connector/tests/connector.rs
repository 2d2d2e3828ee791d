use appflow_connector::{
    CfnConnector, CfnConnectorProps, ConnectorProvisioningConfig, ConnectorProvisioningType,
    LambdaConnectorProvisioningConfig,
};
use appflow_kernel::prelude::*;
use proptest::prelude::*;
use serde_json::json;

fn lambda_props(arn: &str) -> CfnConnectorProps {
    CfnConnectorProps::builder()
        .connector_provisioning_config(
            ConnectorProvisioningConfig::builder()
                .lambda(LambdaConnectorProvisioningConfig::builder().lambda_arn(arn).build())
                .build(),
        )
        .connector_provisioning_type(ConnectorProvisioningType::Lambda)
        .build()
}

#[test]
fn renders_only_set_properties() {
    let props = lambda_props("arn:aws:lambda:eu-west-1:1:function:c");
    let connector = CfnConnector::new("Custom", props).expect("valid id");

    assert_eq!(
        connector.render_properties().unwrap(),
        json!({
            "ConnectorProvisioningConfig": {
                "Lambda": { "LambdaArn": "arn:aws:lambda:eu-west-1:1:function:c" }
            },
            "ConnectorProvisioningType": "LAMBDA"
        })
    );
}

#[test]
fn missing_required_property_fails_to_parse() {
    let raw = json!({ "ConnectorProvisioningType": "LAMBDA" });
    let err = serde_json::from_value::<CfnConnectorProps>(raw).unwrap_err();
    assert!(err.to_string().contains("missing field `ConnectorProvisioningConfig`"));
}

#[test]
fn lambda_provisioning_needs_lambda_config() {
    let props = CfnConnectorProps::builder()
        .connector_provisioning_config(ConnectorProvisioningConfig::builder().build())
        .connector_provisioning_type(ConnectorProvisioningType::Lambda)
        .build();
    let connector = CfnConnector::new("Custom", props).unwrap();

    let err = connector.validate().unwrap_err();
    assert!(matches!(
        err,
        CfnError::MissingProperty { ref path, .. } if path == "ConnectorProvisioningConfig.Lambda"
    ));
}

#[test]
fn key_table_follows_cloudformation() {
    let keys: Vec<_> = CfnConnectorProps::PROPERTIES.iter().map(|p| p.key).collect();
    assert_eq!(
        keys,
        [
            "ConnectorLabel",
            "ConnectorProvisioningConfig",
            "ConnectorProvisioningType",
            "Description"
        ]
    );
    assert_eq!(
        CfnConnectorProps::required_keys().collect::<Vec<_>>(),
        ["ConnectorProvisioningConfig", "ConnectorProvisioningType"]
    );
}

#[test]
fn arn_attribute_is_a_get_att() {
    let connector = CfnConnector::new("Custom", lambda_props("arn")).unwrap();
    assert_eq!(
        serde_json::to_value(connector.attr_connector_arn()).unwrap(),
        json!({ "Fn::GetAtt": ["Custom", "ConnectorArn"] })
    );
    assert_eq!(connector.attr("ConnectorArn").unwrap(), connector.attr_connector_arn());
}

#[test]
fn synthesized_template_parses_back() {
    let mut stack = Stack::new();
    let mut connector = CfnConnector::new("Custom", lambda_props("arn")).unwrap();
    connector.props_mut().description = Some("orders".into());
    stack.add(connector.clone()).unwrap();

    let template = Template::from_value(stack.synth().unwrap()).unwrap();
    assert_eq!(template.resource::<CfnConnector>("Custom").unwrap(), connector);
}

proptest! {
    #[test]
    fn props_round_trip(
        arn in "arn:aws:lambda:[a-z0-9-]{1,12}:[0-9]{12}:function:[A-Za-z0-9_]{1,20}",
        label in proptest::option::of("[A-Za-z0-9_]{1,16}"),
        description in proptest::option::of(".{0,32}"),
    ) {
        let mut props = lambda_props(&arn);
        props.connector_label = label.map(Into::into);
        props.description = description.map(Into::into);

        let value = serde_json::to_value(&props).unwrap();
        let back: CfnConnectorProps = serde_json::from_value(value).unwrap();
        prop_assert_eq!(back, props);
    }
}
