//! Property validation.
//!
//! Two layers run before a template leaves the process:
//! * [`validate_properties`] checks a raw JSON property object against a record's key table,
//!   so hand-written templates get every missing, unknown or `null` key reported at once.
//! * [`Validate`] carries the cross-field rules serde cannot express, such as a connector
//!   variant that must match the `ConnectorType` declared beside it.

use crate::error::CfnError;
use appflow_domain::{CfnProperties, CfnUnion, ConnectorBound, ConnectorType};
use serde_json::Value;
use std::fmt;

/// One rule broken by a property tree. Paths are dotted CloudFormation keys
/// (`SourceFlowConfig.SourceConnectorProperties`), list items as `Tasks[2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Missing { path: String },
    Unknown { path: String },
    Null { path: String },
    ConnectorMismatch { path: String, expected: ConnectorType, found: ConnectorType },
    Malformed { path: String, message: String },
}

impl Violation {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Missing { path }
            | Self::Unknown { path }
            | Self::Null { path }
            | Self::ConnectorMismatch { path, .. }
            | Self::Malformed { path, .. } => path,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "missing required property `{path}`"),
            Self::Unknown { path } => write!(f, "unknown property `{path}`"),
            Self::Null { path } => write!(f, "property `{path}` is null"),
            Self::ConnectorMismatch { path, expected, found } => {
                write!(f, "`{path}` configures {found} but the connector type is {expected}")
            },
            Self::Malformed { path, message } => write!(f, "`{path}`: {message}"),
        }
    }
}

/// Collects violations for one resource.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    violations: Vec<Violation>,
}

impl Report {
    #[must_use]
    pub const fn new() -> Self {
        Self { violations: Vec::new() }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn missing(&mut self, path: impl Into<String>) {
        self.push(Violation::Missing { path: path.into() });
    }

    pub fn mismatch(
        &mut self,
        path: impl Into<String>,
        expected: ConnectorType,
        found: ConnectorType,
    ) {
        self.push(Violation::ConnectorMismatch { path: path.into(), expected, found });
    }

    /// Records a mismatch when the populated variant of `value` does not belong to `declared`.
    pub fn check_connector<U>(&mut self, path: &str, declared: ConnectorType, value: &U)
    where
        U: ConnectorBound + CfnUnion,
    {
        let found = value.connector_type();
        if found != declared {
            self.mismatch(format!("{path}.{}", value.variant_key()), declared, found);
        }
    }

    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Converts the report into a result for the resource `resource`.
    ///
    /// A single violation keeps its dedicated error variant; several are reported together.
    ///
    /// # Errors
    /// Returns the error describing the collected violations, if any.
    pub fn into_result(self, resource: &str) -> Result<(), CfnError> {
        let mut violations = self.violations;
        let resource = resource.to_owned();
        match violations.len() {
            0 => Ok(()),
            1 => Err(match violations.remove(0) {
                Violation::Missing { path } => {
                    CfnError::MissingProperty { resource, path, context: None }
                },
                Violation::Unknown { path } => {
                    CfnError::UnknownProperty { resource, path, context: None }
                },
                Violation::Null { path } => {
                    CfnError::NullProperty { resource, path, context: None }
                },
                Violation::ConnectorMismatch { path, expected, found } => {
                    CfnError::ConnectorMismatch { resource, path, expected, found, context: None }
                },
                malformed @ Violation::Malformed { .. } => CfnError::InvalidProperties {
                    resource,
                    violations: vec![malformed],
                    context: None,
                },
            }),
            _ => Err(CfnError::InvalidProperties { resource, violations, context: None }),
        }
    }
}

/// Cross-field rules of a property record.
pub trait Validate {
    /// Appends every broken rule to `report`.
    fn check(&self, report: &mut Report);
}

/// Checks a raw property object against the key table of `P`.
///
/// Only the top level is inspected; nested records are covered by the typed parse.
#[must_use]
pub fn validate_properties<P: CfnProperties>(properties: &Value) -> Report {
    let mut report = Report::new();
    let Some(object) = properties.as_object() else {
        report.push(Violation::Malformed {
            path: P::TYPE_NAME.to_owned(),
            message: format!("expected an object, found {}", kind_of(properties)),
        });
        return report;
    };

    for meta in P::PROPERTIES {
        match object.get(meta.key) {
            None if meta.required => report.missing(meta.key),
            Some(Value::Null) => report.push(Violation::Null { path: meta.key.to_owned() }),
            _ => {},
        }
    }
    for key in object.keys() {
        if P::property(key).is_none() {
            report.push(Violation::Unknown { path: key.clone() });
        }
    }

    if !report.is_empty() {
        tracing::debug!(
            record = P::TYPE_NAME,
            violations = report.violations.len(),
            "Raw properties rejected"
        );
    }
    report
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[appflow_derive::cfn_model]
    struct Sample {
        name: String,
        #[serde(rename = "KMSArn")]
        kms_arn: Option<String>,
    }

    #[test]
    fn reports_every_violation() {
        let report = validate_properties::<Sample>(&json!({ "KMSArn": null, "Extra": 1 }));
        assert_eq!(
            report.violations(),
            [
                Violation::Missing { path: "Name".to_owned() },
                Violation::Null { path: "KMSArn".to_owned() },
                Violation::Unknown { path: "Extra".to_owned() },
            ]
        );
    }

    #[test]
    fn accepts_minimal_object() {
        assert!(validate_properties::<Sample>(&json!({ "Name": "x" })).is_empty());
    }

    #[test]
    fn rejects_non_object() {
        let report = validate_properties::<Sample>(&json!([1, 2]));
        assert!(matches!(report.violations(), [Violation::Malformed { .. }]));
    }

    #[test]
    fn single_violation_keeps_its_variant() {
        let mut report = Report::new();
        report.missing("FlowName");
        let err = report.into_result("Flow").unwrap_err();
        assert!(matches!(err, CfnError::MissingProperty { ref path, .. } if path == "FlowName"));
    }

    #[test]
    fn several_violations_are_aggregated() {
        let mut report = Report::new();
        report.missing("FlowName");
        report.mismatch("SourceFlowConfig", ConnectorType::S3, ConnectorType::Slack);
        let err = report.into_result("Flow").unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert!(err.to_string().contains("configures Slack but the connector type is S3"));
    }
}
