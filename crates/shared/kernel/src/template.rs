//! Parsed CloudFormation templates.
//!
//! A [`Template`] keeps the document as JSON so sections and resources this workspace does
//! not model (parameters, foreign resource types) survive a parse/render cycle untouched.
//! AppFlow resources are pulled out as typed values with [`Template::resource`].

use crate::error::{CfnError, CfnErrorExt};
use crate::logical_id::LogicalId;
use crate::options::ResourceOptions;
use crate::resource::{CfnResource, render_entry};
use crate::validate::{Report, Violation, validate_properties};
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    body: Map<String, Value>,
}

impl Template {
    /// # Errors
    /// Returns [`CfnError::Serialize`] for malformed JSON and [`CfnError::Internal`] when the
    /// document or its `Resources` section is not an object.
    pub fn from_json(raw: &str) -> Result<Self, CfnError> {
        let value: Value = serde_json::from_str(raw).context("Parsing template")?;
        Self::from_value(value)
    }

    /// # Errors
    /// Returns [`CfnError::Internal`] when the document or its `Resources` section is not an
    /// object.
    pub fn from_value(value: Value) -> Result<Self, CfnError> {
        let Value::Object(body) = value else {
            return Err(CfnError::Internal {
                message: "template must be a JSON object".into(),
                context: None,
            });
        };
        if body.get("Resources").is_some_and(|resources| !resources.is_object()) {
            return Err(CfnError::Internal {
                message: "`Resources` must be an object".into(),
                context: None,
            });
        }
        let count = body.get("Resources").and_then(Value::as_object).map_or(0, Map::len);
        debug!(resources = count, "Template parsed");
        Ok(Self { body })
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.body.get("Description").and_then(Value::as_str)
    }

    fn resources_section(&self) -> Option<&Map<String, Value>> {
        self.body.get("Resources").and_then(Value::as_object)
    }

    /// Logical IDs in document order.
    pub fn resource_ids(&self) -> impl Iterator<Item = &str> {
        self.resources_section()
            .into_iter()
            .flat_map(|resources| resources.keys().map(String::as_str))
    }

    /// `Type` of the resource `id`.
    #[must_use]
    pub fn resource_type(&self, id: &str) -> Option<&str> {
        self.raw_resource(id)?.get("Type")?.as_str()
    }

    #[must_use]
    pub fn raw_resource(&self, id: &str) -> Option<&Value> {
        self.resources_section()?.get(id)
    }

    fn entry_of<R: CfnResource>(&self, id: &str) -> Result<&Map<String, Value>, CfnError> {
        let entry = self
            .raw_resource(id)
            .and_then(Value::as_object)
            .ok_or_else(|| CfnError::ResourceNotFound { id: id.to_owned(), context: None })?;
        let found = entry.get("Type").and_then(Value::as_str).unwrap_or_default();
        if found != R::RESOURCE_TYPE {
            return Err(CfnError::ResourceTypeMismatch {
                id: id.to_owned(),
                expected: R::RESOURCE_TYPE.into(),
                found: found.to_owned(),
                context: None,
            });
        }
        Ok(entry)
    }

    /// Parses the resource `id` into its typed model.
    ///
    /// # Errors
    /// Returns [`CfnError::ResourceNotFound`], [`CfnError::ResourceTypeMismatch`],
    /// [`CfnError::InvalidLogicalId`], or [`CfnError::Serialize`] when the properties do not
    /// match the model.
    pub fn resource<R: CfnResource>(&self, id: &str) -> Result<R, CfnError> {
        let entry = self.entry_of::<R>(id)?;
        let logical_id = LogicalId::new(id)?;

        let properties =
            entry.get("Properties").cloned().unwrap_or_else(|| Value::Object(Map::new()));
        let props = serde_json::from_value::<R::Props>(properties)
            .with_context(|| format!("Properties of {id}"))?;

        let options: Map<String, Value> = entry
            .iter()
            .filter(|(key, _)| ResourceOptions::KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let options = serde_json::from_value::<ResourceOptions>(Value::Object(options))
            .with_context(|| format!("Resource options of {id}"))?;

        Ok(R::from_parts(logical_id, props, options))
    }

    /// Every resource of type `R`, in document order.
    ///
    /// # Errors
    /// Returns the first resource that fails to parse.
    pub fn resources<R: CfnResource>(&self) -> Result<Vec<R>, CfnError> {
        self.resource_ids()
            .filter(|id| self.resource_type(id) == Some(R::RESOURCE_TYPE))
            .map(|id| self.resource::<R>(id))
            .collect()
    }

    /// Full check of resource `id`: raw key table, typed parse, then cross-field rules.
    ///
    /// # Errors
    /// Returns [`CfnError::ResourceNotFound`] or [`CfnError::ResourceTypeMismatch`] when the
    /// entry cannot be checked at all.
    pub fn check_resource<R: CfnResource>(&self, id: &str) -> Result<Report, CfnError> {
        let entry = self.entry_of::<R>(id)?;
        let empty = Value::Object(Map::new());
        let properties = entry.get("Properties").unwrap_or(&empty);

        let mut report = validate_properties::<R::Props>(properties);
        if !report.is_empty() {
            return Ok(report);
        }
        match self.resource::<R>(id) {
            Ok(resource) => {
                if let Err(err) = resource.validate() {
                    for violation in err.violations() {
                        report.push(violation);
                    }
                }
            },
            Err(err) => report.push(Violation::Malformed {
                path: "Properties".to_owned(),
                message: err.to_string(),
            }),
        }
        Ok(report)
    }

    /// Replaces (or appends) the entry of `resource` with its canonical rendering.
    ///
    /// # Errors
    /// Returns a rendering failure.
    pub fn put_resource<R: CfnResource>(&mut self, resource: &R) -> Result<(), CfnError> {
        let entry = render_entry(resource)?;
        let resources = self
            .body
            .entry("Resources")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(resources) = resources {
            resources.insert(resource.logical_id().to_string(), entry);
        }
        Ok(())
    }

    #[must_use]
    pub fn as_value(&self) -> Value {
        Value::Object(self.body.clone())
    }

    /// # Errors
    /// Returns [`CfnError::Serialize`] if rendering fails.
    pub fn to_json_string(&self, pretty: bool) -> Result<String, CfnError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(&self.body)
        } else {
            serde_json::to_string(&self.body)
        };
        rendered.context("Rendering template")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::tests::Widget;
    use crate::stack::Stack;
    use serde_json::json;

    const RAW: &str = r#"{
        "AWSTemplateFormatVersion": "2010-09-09",
        "Parameters": { "Env": { "Type": "String" } },
        "Resources": {
            "Bucket": { "Type": "AWS::S3::Bucket", "Properties": { "BucketName": "b" } },
            "Gear": {
                "Type": "Test::Widget",
                "Properties": { "WidgetName": "gear", "Size": 2 },
                "DependsOn": "Bucket"
            }
        }
    }"#;

    #[test]
    fn typed_resources_come_back_out() {
        let template = Template::from_json(RAW).unwrap();
        let gear = template.resource::<Widget>("Gear").unwrap();
        assert_eq!(gear.props().size, Some(2));
        assert_eq!(gear.options().depends_on, ["Bucket"]);
        assert_eq!(template.resources::<Widget>().unwrap().len(), 1);
    }

    #[test]
    fn foreign_resources_are_preserved() {
        let mut template = Template::from_json(RAW).unwrap();
        let gear = template.resource::<Widget>("Gear").unwrap();
        template.put_resource(&gear).unwrap();

        let value = template.as_value();
        assert_eq!(
            value["Resources"]["Bucket"],
            json!({ "Type": "AWS::S3::Bucket", "Properties": { "BucketName": "b" } })
        );
        assert_eq!(value["Parameters"]["Env"]["Type"], "String");
        assert_eq!(value["Resources"]["Gear"]["DependsOn"], json!(["Bucket"]));
    }

    #[test]
    fn type_mismatch_and_absence_are_reported() {
        let template = Template::from_json(RAW).unwrap();
        assert!(matches!(
            template.resource::<Widget>("Bucket"),
            Err(CfnError::ResourceTypeMismatch { .. })
        ));
        assert!(matches!(
            template.resource::<Widget>("Nope"),
            Err(CfnError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn check_reports_raw_violations() {
        let raw = json!({
            "Resources": { "Gear": { "Type": "Test::Widget", "Properties": { "Colour": "red" } } }
        });
        let report = Template::from_value(raw).unwrap().check_resource::<Widget>("Gear").unwrap();
        assert_eq!(
            report.violations(),
            [
                Violation::Missing { path: "WidgetName".to_owned() },
                Violation::Unknown { path: "Colour".to_owned() },
            ]
        );
    }

    #[test]
    fn check_reports_type_errors() {
        let raw = json!({
            "Resources": { "Gear": { "Type": "Test::Widget", "Properties": { "WidgetName": 5 } } }
        });
        let report = Template::from_value(raw).unwrap().check_resource::<Widget>("Gear").unwrap();
        assert!(matches!(report.violations(), [Violation::Malformed { .. }]));
    }

    #[test]
    fn stack_output_parses_back() {
        let mut stack = Stack::new();
        stack.add(Widget::new("Gear", "gear")).unwrap();
        let template = Template::from_value(stack.synth().unwrap()).unwrap();
        assert_eq!(template.resource::<Widget>("Gear").unwrap(), Widget::new("Gear", "gear"));
    }

    #[test]
    fn non_object_templates_are_rejected() {
        assert!(Template::from_json("[]").is_err());
        assert!(Template::from_json("{ \"Resources\": [] }").is_err());
        assert!(Template::from_json("{").is_err());
    }
}
