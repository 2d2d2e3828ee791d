use appflow_flow::*;
use appflow_kernel::prelude::*;
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashSet;

fn s3_source() -> SourceFlowConfig {
    SourceFlowConfig::builder()
        .connector_type(ConnectorType::S3)
        .source_connector_properties(SourceConnectorProperties::S3(
            S3SourceProperties::builder().bucket_name("raw").bucket_prefix("in").build(),
        ))
        .build()
}

fn s3_destination() -> DestinationFlowConfig {
    DestinationFlowConfig::builder()
        .connector_type(ConnectorType::S3)
        .destination_connector_properties(DestinationConnectorProperties::S3(
            S3DestinationProperties::builder()
                .bucket_name("curated")
                .s3_output_format_config(
                    S3OutputFormatConfig::builder().file_type(FileType::Parquet).build(),
                )
                .build(),
        ))
        .build()
}

fn map_all() -> Task {
    Task::builder()
        .source_fields(Vec::<String>::new())
        .task_type(TaskType::MapAll)
        .connector_operator(ConnectorOperator::S3(Operator::NoOp))
        .task_properties(vec![TaskPropertiesObject::new(
            TaskPropertyKey::ExcludeSourceFieldsList,
            "[]",
        )])
        .build()
}

fn minimal() -> CfnFlowProps {
    CfnFlowProps::builder()
        .destination_flow_config_list(vec![s3_destination()])
        .flow_name("copy-raw")
        .source_flow_config(s3_source())
        .tasks(vec![map_all()])
        .trigger_config(TriggerConfig::on_demand())
        .build()
}

#[test]
fn minimal_flow_renders_cloudformation_keys() {
    let flow = CfnFlow::new("Copy", minimal()).unwrap();
    assert_eq!(
        flow.render_properties().unwrap(),
        json!({
            "DestinationFlowConfigList": [{
                "ConnectorType": "S3",
                "DestinationConnectorProperties": {
                    "S3": {
                        "BucketName": "curated",
                        "S3OutputFormatConfig": { "FileType": "PARQUET" }
                    }
                }
            }],
            "FlowName": "copy-raw",
            "SourceFlowConfig": {
                "ConnectorType": "S3",
                "SourceConnectorProperties": { "S3": { "BucketName": "raw", "BucketPrefix": "in" } }
            },
            "Tasks": [{
                "ConnectorOperator": { "S3": "NO_OP" },
                "SourceFields": [],
                "TaskProperties": [{ "Key": "EXCLUDE_SOURCE_FIELDS_LIST", "Value": "[]" }],
                "TaskType": "Map_all"
            }],
            "TriggerConfig": { "TriggerType": "OnDemand" }
        })
    );
    assert!(flow.validate().is_ok());
}

#[test]
fn parses_a_scheduled_salesforce_flow() {
    let raw = json!({
        "FlowName": "accounts",
        "FlowStatus": "Active",
        "KMSArn": "arn:aws:kms:eu-west-1:111122223333:key/abcd",
        "SourceFlowConfig": {
            "ConnectorType": "Salesforce",
            "ConnectorProfileName": "sf",
            "IncrementalPullConfig": { "DatetimeTypeFieldName": "LastModifiedDate" },
            "SourceConnectorProperties": {
                "Salesforce": {
                    "Object": "Account",
                    "DataTransferApi": "BULKV2",
                    "EnableDynamicFieldUpdate": false,
                    "IncludeDeletedRecords": true
                }
            }
        },
        "DestinationFlowConfigList": [{
            "ConnectorType": "Redshift",
            "ConnectorProfileName": "warehouse",
            "DestinationConnectorProperties": {
                "Redshift": {
                    "Object": "public.accounts",
                    "IntermediateBucketName": "staging",
                    "ErrorHandlingConfig": { "FailOnFirstError": true }
                }
            }
        }],
        "Tasks": [{
            "ConnectorOperator": { "Salesforce": "PROJECTION" },
            "SourceFields": ["Id", "Name"],
            "TaskType": "Filter"
        }],
        "TriggerConfig": {
            "TriggerType": "Scheduled",
            "TriggerProperties": {
                "ScheduleExpression": "rate(1hours)",
                "DataPullMode": "Incremental",
                "ScheduleStartTime": 1700000000.0,
                "TimeZone": "Europe/Kyiv"
            }
        },
        "MetadataCatalogConfig": {
            "GlueDataCatalog": { "DatabaseName": "db", "RoleArn": "arn:role", "TablePrefix": "sf_" }
        }
    });
    let props: CfnFlowProps = serde_json::from_value(raw).unwrap();
    let flow = CfnFlow::new("Accounts", props).unwrap();
    assert!(flow.validate().is_ok());

    let source = &flow.props().source_flow_config;
    let SourceConnectorProperties::Salesforce(salesforce) = &source.source_connector_properties
    else {
        panic!("expected a Salesforce source");
    };
    assert_eq!(salesforce.data_transfer_api, Some(SalesforceDataTransferApi::Bulkv2));
    let schedule = flow.props().trigger_config.trigger_properties.as_ref().unwrap();
    assert_eq!(schedule.data_pull_mode, Some(DataPullMode::Incremental));
    assert_eq!(flow.props().flow_status, Some(FlowStatus::Active));
}

#[test]
fn exceptional_keys_follow_cloudformation() {
    let source = SourceConnectorProperties::SapoData(
        SapoDataSourceProperties::builder()
            .object_path("/sap/opu/odata/sap/API_SALES_ORDER_SRV/A_SalesOrder")
            .pagination_config(SapoDataPaginationConfig { max_page_size: 500_i64.into() })
            .parallelism_config(SapoDataParallelismConfig { max_parallelism: 4_i64.into() })
            .build(),
    );
    let value = serde_json::to_value(&source).unwrap();
    assert_eq!(value["SAPOData"]["PaginationConfig"], json!({ "maxPageSize": 500 }));
    assert_eq!(value["SAPOData"]["ParallelismConfig"], json!({ "maxParallelism": 4 }));

    let s3 = S3SourceProperties::builder()
        .bucket_name("b")
        .bucket_prefix("p")
        .s3_input_format_config(
            S3InputFormatConfig::builder().s3_input_file_type(S3InputFileType::Csv).build(),
        )
        .build();
    assert_eq!(
        serde_json::to_value(&s3).unwrap()["S3InputFormatConfig"],
        json!({ "S3InputFileType": "CSV" })
    );

    assert_eq!(CfnFlowProps::property_by_field("kms_arn").unwrap().key, "KMSArn");
    assert_eq!(DataTransferApi::property_by_field("transfer_type").unwrap().key, "Type");
}

#[test]
fn tags_render_sorted_and_stay_out_of_props() {
    let mut props = minimal();
    props.tags = Some(vec![CfnTag::new("team", "data"), CfnTag::new("env", "prod")]);
    let mut flow = CfnFlow::new("Copy", props).unwrap();
    assert!(flow.props().tags.is_none());

    flow.tags_mut().add("cost-center", "42");
    let rendered = flow.render_properties().unwrap();
    assert_eq!(
        rendered["Tags"],
        json!([
            { "Key": "cost-center", "Value": "42" },
            { "Key": "env", "Value": "prod" },
            { "Key": "team", "Value": "data" }
        ])
    );
    assert_eq!(flow.tags().unwrap().get("env"), Some("prod"));

    let untagged = CfnFlow::new("Plain", minimal()).unwrap();
    assert!(!untagged.render_properties().unwrap().as_object().unwrap().contains_key("Tags"));
}

#[test]
fn tags_set_through_props_mut_are_merged() {
    let mut props = minimal();
    props.tags = Some(vec![CfnTag::new("env", "prod")]);
    let mut flow = CfnFlow::new("Copy", props).unwrap();
    flow.tags_mut().add("owner", "data-team");

    flow.props_mut().tags = Some(vec![CfnTag::new("env", "stage"), CfnTag::new("owner", "me")]);
    let rendered = flow.render_properties().unwrap();
    assert_eq!(
        rendered["Tags"],
        json!([
            { "Key": "env", "Value": "stage" },
            { "Key": "owner", "Value": "data-team" }
        ])
    );
}

#[test]
fn source_mismatch_is_reported() {
    let mut props = minimal();
    props.source_flow_config.connector_type = ConnectorType::Salesforce;
    props.tasks.clear();
    let err = CfnFlow::new("Copy", props).unwrap().validate().unwrap_err();
    let CfnError::ConnectorMismatch { path, expected, found, .. } = &err else {
        panic!("expected a connector mismatch, got {err}");
    };
    assert_eq!(path, "SourceFlowConfig.SourceConnectorProperties.S3");
    assert_eq!((*expected, *found), (ConnectorType::Salesforce, ConnectorType::S3));
}

#[test]
fn destination_mismatch_is_reported_per_item() {
    let mut props = minimal();
    let mut second = s3_destination();
    second.connector_type = ConnectorType::Snowflake;
    props.destination_flow_config_list.push(second);
    let violations = CfnFlow::new("Copy", props).unwrap().validate().unwrap_err().violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].path(),
        "DestinationFlowConfigList[1].DestinationConnectorProperties.S3"
    );
}

#[test]
fn task_operator_must_match_the_source() {
    let mut props = minimal();
    props.tasks.push(
        Task::builder()
            .source_fields(vec!["Id".to_owned()])
            .task_type(TaskType::Filter)
            .connector_operator(ConnectorOperator::Salesforce(Operator::Projection))
            .build(),
    );
    let violations = CfnFlow::new("Copy", props).unwrap().validate().unwrap_err().violations();
    assert_eq!(violations[0].path(), "Tasks[1].ConnectorOperator.Salesforce");
}

#[test]
fn scheduled_trigger_needs_properties() {
    let mut props = minimal();
    props.trigger_config = TriggerConfig::builder().trigger_type(TriggerType::Scheduled).build();
    let err = CfnFlow::new("Copy", props).unwrap().validate().unwrap_err();
    assert!(matches!(
        err,
        CfnError::MissingProperty { ref path, .. } if path == "TriggerConfig.TriggerProperties"
    ));

    let mut props = minimal();
    props.trigger_config = TriggerConfig::scheduled("rate(5minutes)");
    assert!(CfnFlow::new("Copy", props).unwrap().validate().is_ok());
}

#[test]
fn upsert_without_id_fields_is_reported() {
    let mut props = minimal();
    props.destination_flow_config_list = vec![
        DestinationFlowConfig::builder()
            .connector_type(ConnectorType::Zendesk)
            .destination_connector_properties(DestinationConnectorProperties::Zendesk(
                ZendeskDestinationProperties::builder()
                    .object("tickets")
                    .write_operation_type(WriteOperationType::Upsert)
                    .build(),
            ))
            .build(),
    ];
    let violations = CfnFlow::new("Copy", props).unwrap().validate().unwrap_err().violations();
    assert_eq!(
        violations[0].path(),
        "DestinationFlowConfigList[0].DestinationConnectorProperties.Zendesk.IdFieldNames"
    );
}

#[test]
fn several_violations_are_aggregated() {
    let mut props = minimal();
    props.destination_flow_config_list.clear();
    props.trigger_config = TriggerConfig::builder().trigger_type(TriggerType::Scheduled).build();
    let err = CfnFlow::new("Copy", props).unwrap().validate().unwrap_err();
    assert!(matches!(err, CfnError::InvalidProperties { .. }));
    let paths: Vec<_> = err.violations().iter().map(|v| v.path().to_owned()).collect();
    assert_eq!(paths, ["DestinationFlowConfigList", "TriggerConfig.TriggerProperties"]);
}

#[test]
fn raw_properties_are_checked_before_parsing() {
    let raw = json!({
        "Resources": {
            "Copy": {
                "Type": "AWS::AppFlow::Flow",
                "Properties": { "FlowName": "copy", "FlowArn": "nope", "Tasks": null }
            }
        }
    });
    let report = Template::from_value(raw).unwrap().check_resource::<CfnFlow>("Copy").unwrap();
    let paths: Vec<_> = report.violations().iter().map(Violation::path).collect();
    assert_eq!(
        paths,
        ["DestinationFlowConfigList", "SourceFlowConfig", "Tasks", "TriggerConfig", "FlowArn"]
    );
}

fn assert_bijective<P: CfnProperties>() {
    let fields: HashSet<_> = P::PROPERTIES.iter().map(|p| p.field).collect();
    let keys: HashSet<_> = P::PROPERTIES.iter().map(|p| p.key).collect();
    assert_eq!(fields.len(), P::PROPERTIES.len(), "{} repeats a field", P::TYPE_NAME);
    assert_eq!(keys.len(), P::PROPERTIES.len(), "{} repeats a key", P::TYPE_NAME);
    for meta in P::PROPERTIES {
        assert_eq!(P::property(meta.key), Some(meta));
        assert_eq!(P::property_by_field(meta.field), Some(meta));
    }
}

#[test]
fn name_mapping_is_bijective() {
    assert_bijective::<CfnFlowProps>();
    assert_bijective::<SourceFlowConfig>();
    assert_bijective::<DestinationFlowConfig>();
    assert_bijective::<Task>();
    assert_bijective::<ScheduledTriggerProperties>();
    assert_bijective::<S3OutputFormatConfig>();
    assert_bijective::<SapoDataDestinationProperties>();
    assert_bijective::<CustomConnectorSourceProperties>();

    let required: Vec<_> = CfnFlowProps::required_keys().collect();
    assert_eq!(
        required,
        ["DestinationFlowConfigList", "FlowName", "SourceFlowConfig", "Tasks", "TriggerConfig"]
    );
}

#[test]
fn unions_list_their_connectors() {
    assert_eq!(SourceConnectorProperties::VARIANTS.len(), 17);
    assert_eq!(DestinationConnectorProperties::VARIANTS.len(), 11);
    assert_eq!(ConnectorOperator::VARIANTS.len(), SourceConnectorProperties::VARIANTS.len());
    for key in SourceConnectorProperties::VARIANTS {
        assert!(ConnectorOperator::VARIANTS.contains(key), "no operator for {key}");
    }
    assert_eq!(Operator::VALUES.len(), 21);
    assert_eq!(TaskPropertyKey::VALUES.len(), 17);
}

#[test]
fn template_round_trip_with_outputs() {
    let mut props = minimal();
    props.tags = Some(vec![CfnTag::new("env", "prod")]);
    props.trigger_config = TriggerConfig::scheduled("rate(1days)");
    let flow = CfnFlow::new("Copy", props).unwrap();

    let mut stack = Stack::new();
    let arn = stack.add(flow.clone()).unwrap().attr_flow_arn();
    stack.add_output("FlowArn", arn, None).unwrap();
    let synthesized = stack.synth().unwrap();
    assert_eq!(
        synthesized["Outputs"]["FlowArn"]["Value"],
        json!({ "Fn::GetAtt": ["Copy", "FlowArn"] })
    );

    let template = Template::from_value(synthesized).unwrap();
    assert_eq!(template.resource::<CfnFlow>("Copy").unwrap(), flow);
}

fn destination_strategy() -> impl Strategy<Value = DestinationFlowConfig> {
    prop_oneof![
        ("[a-z0-9-]{3,20}", proptest::option::of("[a-z]{1,8}")).prop_map(|(bucket, prefix)| {
            let mut s3 = S3DestinationProperties::builder().bucket_name(bucket).build();
            s3.bucket_prefix = prefix.map(Into::into);
            DestinationFlowConfig::builder()
                .connector_type(ConnectorType::S3)
                .destination_connector_properties(DestinationConnectorProperties::S3(s3))
                .build()
        }),
        ("[A-Za-z_]{1,16}", any::<bool>()).prop_map(|(object, fail_fast)| {
            let errors = ErrorHandlingConfig::builder().fail_on_first_error(fail_fast).build();
            DestinationFlowConfig::builder()
                .connector_type(ConnectorType::Snowflake)
                .destination_connector_properties(DestinationConnectorProperties::Snowflake(
                    SnowflakeDestinationProperties::builder()
                        .object(object)
                        .intermediate_bucket_name("staging")
                        .error_handling_config(errors)
                        .build(),
                ))
                .build()
        }),
    ]
}

proptest! {
    #[test]
    fn flows_round_trip(
        name in "[A-Za-z0-9_-]{1,64}",
        destinations in proptest::collection::vec(destination_strategy(), 1..4),
        tags in proptest::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{0,8}", 0..4),
        threshold in proptest::option::of(1i64..100),
    ) {
        let mut props = minimal();
        props.flow_name = name.into();
        props.destination_flow_config_list = destinations;
        props.tags = (!tags.is_empty())
            .then(|| tags.into_iter().map(|(k, v)| CfnTag::new(k, v)).collect());
        let mut trigger = TriggerConfig::scheduled("rate(1hours)");
        if let Some(schedule) = trigger.trigger_properties.as_mut() {
            schedule.flow_error_deactivation_threshold = threshold.map(Into::into);
        }
        props.trigger_config = trigger;

        let flow = CfnFlow::new("Flow", props).unwrap();
        prop_assert!(flow.validate().is_ok());
        let value = flow.render_properties().unwrap();
        prop_assert!(value.as_object().unwrap().values().all(|v| !v.is_null()));

        let back: CfnFlowProps = serde_json::from_value(value).unwrap();
        let flow_back = CfnFlow::new("Flow", back).unwrap();
        prop_assert_eq!(flow_back, flow);
    }
}
