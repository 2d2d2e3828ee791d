//! The resource abstraction.
//!
//! [`CfnResource`] is the typed face of one CloudFormation resource: a logical ID, a property
//! record and the resource options. [`ResourceNode`] is its object-safe twin, used by
//! [`Stack`](crate::stack::Stack) to hold resources of different types side by side.

use crate::error::{CfnError, CfnErrorExt};
use crate::inspector::{Inspectable, TreeInspector};
use crate::logical_id::LogicalId;
use crate::options::ResourceOptions;
use crate::tags::TagManager;
use crate::validate::{Report, Validate};
use appflow_domain::{CfnProperties, Intrinsic};
use serde_json::{Map, Value};
use std::any::Any;
use std::fmt::Debug;

pub trait CfnResource: Debug + Clone + PartialEq + 'static {
    /// CloudFormation type name (`AWS::AppFlow::Flow`).
    const RESOURCE_TYPE: &'static str;
    /// Attributes readable through `Fn::GetAtt`.
    const ATTRIBUTES: &'static [&'static str];

    type Props: CfnProperties + Validate + Debug + Clone + PartialEq;

    fn logical_id(&self) -> &LogicalId;
    fn props(&self) -> &Self::Props;
    fn props_mut(&mut self) -> &mut Self::Props;
    fn options(&self) -> &ResourceOptions;
    fn options_mut(&mut self) -> &mut ResourceOptions;

    /// Reassembles a resource parsed out of a template.
    fn from_parts(logical_id: LogicalId, props: Self::Props, options: ResourceOptions) -> Self;

    /// Tag manager of taggable resources.
    fn tags(&self) -> Option<&TagManager> {
        None
    }

    /// Property object with CloudFormation keys; unset optional properties are absent.
    ///
    /// # Errors
    /// Returns [`CfnError::Serialize`] if the record cannot be turned into JSON.
    fn render_properties(&self) -> Result<Value, CfnError> {
        serde_json::to_value(self.props())
            .with_context(|| format!("Rendering properties of {}", self.logical_id()))
    }

    /// Runs the cross-field rules of the property record.
    ///
    /// # Errors
    /// Returns the violations found, see [`Report::into_result`].
    fn validate(&self) -> Result<(), CfnError> {
        let mut report = Report::new();
        self.props().check(&mut report);
        report.into_result(self.logical_id().as_str())
    }

    /// `{"Ref": "<logical id>"}`
    fn reference(&self) -> Intrinsic {
        Intrinsic::reference(self.logical_id().as_str())
    }

    /// `{"Fn::GetAtt": ["<logical id>", "<name>"]}`
    ///
    /// # Errors
    /// Returns [`CfnError::UnknownAttribute`] if the resource type has no such attribute.
    fn attr(&self, name: &str) -> Result<Intrinsic, CfnError> {
        if !Self::ATTRIBUTES.contains(&name) {
            return Err(CfnError::UnknownAttribute {
                resource_type: Self::RESOURCE_TYPE.into(),
                attribute: name.to_owned(),
                context: None,
            });
        }
        Ok(Intrinsic::get_att(self.logical_id().as_str(), name))
    }
}

/// Type-erased resource stored by a stack.
pub trait ResourceNode: Any + Debug {
    fn resource_type(&self) -> &'static str;
    fn id(&self) -> &LogicalId;
    fn attribute_names(&self) -> &'static [&'static str];
    fn resource_options(&self) -> &ResourceOptions;

    /// Full template entry: `Type`, `Properties` and any resource options.
    ///
    /// # Errors
    /// Returns [`CfnError::Serialize`] if rendering fails.
    fn render_entry(&self) -> Result<Value, CfnError>;

    /// # Errors
    /// Returns the violations of the resource.
    fn check_node(&self) -> Result<(), CfnError>;

    /// # Errors
    /// Returns [`CfnError::Serialize`] if rendering fails.
    fn inspect_node(&self, inspector: &mut TreeInspector) -> Result<(), CfnError>;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<R: CfnResource> ResourceNode for R {
    fn resource_type(&self) -> &'static str {
        R::RESOURCE_TYPE
    }

    fn id(&self) -> &LogicalId {
        self.logical_id()
    }

    fn attribute_names(&self) -> &'static [&'static str] {
        R::ATTRIBUTES
    }

    fn resource_options(&self) -> &ResourceOptions {
        self.options()
    }

    fn render_entry(&self) -> Result<Value, CfnError> {
        render_entry(self)
    }

    fn check_node(&self) -> Result<(), CfnError> {
        self.validate()
    }

    fn inspect_node(&self, inspector: &mut TreeInspector) -> Result<(), CfnError> {
        self.inspect(inspector)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Renders the template entry of `resource`.
///
/// # Errors
/// Returns [`CfnError::Serialize`] if the properties or options cannot be rendered.
pub fn render_entry<R: CfnResource>(resource: &R) -> Result<Value, CfnError> {
    let mut entry = Map::new();
    entry.insert("Type".to_owned(), Value::String(R::RESOURCE_TYPE.to_owned()));
    entry.insert("Properties".to_owned(), resource.render_properties()?);

    let options = serde_json::to_value(resource.options())
        .with_context(|| format!("Rendering options of {}", resource.logical_id()))?;
    if let Value::Object(options) = options {
        entry.extend(options);
    }
    Ok(Value::Object(entry))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use appflow_derive::cfn_model;
    use serde_json::json;

    #[cfn_model]
    pub(crate) struct WidgetProps {
        pub(crate) widget_name: String,
        pub(crate) size: Option<u32>,
    }

    impl Validate for WidgetProps {
        fn check(&self, report: &mut Report) {
            if self.size == Some(0) {
                report.missing("Size");
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Widget {
        logical_id: LogicalId,
        props: WidgetProps,
        options: ResourceOptions,
    }

    impl Widget {
        pub(crate) fn new(id: &str, name: &str) -> Self {
            Self {
                logical_id: LogicalId::new(id).unwrap(),
                props: WidgetProps::builder().widget_name(name).build(),
                options: ResourceOptions::default(),
            }
        }
    }

    impl CfnResource for Widget {
        const RESOURCE_TYPE: &'static str = "Test::Widget";
        const ATTRIBUTES: &'static [&'static str] = &["WidgetArn"];
        type Props = WidgetProps;

        fn logical_id(&self) -> &LogicalId {
            &self.logical_id
        }

        fn props(&self) -> &WidgetProps {
            &self.props
        }

        fn props_mut(&mut self) -> &mut WidgetProps {
            &mut self.props
        }

        fn options(&self) -> &ResourceOptions {
            &self.options
        }

        fn options_mut(&mut self) -> &mut ResourceOptions {
            &mut self.options
        }

        fn from_parts(logical_id: LogicalId, props: WidgetProps, options: ResourceOptions) -> Self {
            Self { logical_id, props, options }
        }
    }

    #[test]
    fn entry_carries_type_properties_and_options() {
        let mut widget = Widget::new("Gear", "gear");
        widget.options_mut().add_dependency("Other");
        assert_eq!(
            render_entry(&widget).unwrap(),
            json!({
                "Type": "Test::Widget",
                "Properties": { "WidgetName": "gear" },
                "DependsOn": ["Other"]
            })
        );
    }

    #[test]
    fn attributes_are_checked() {
        let widget = Widget::new("Gear", "gear");
        assert_eq!(widget.attr("WidgetArn").unwrap(), Intrinsic::get_att("Gear", "WidgetArn"));
        assert!(matches!(widget.attr("Nope"), Err(CfnError::UnknownAttribute { .. })));
        assert_eq!(widget.reference(), Intrinsic::reference("Gear"));
    }

    #[test]
    fn validate_runs_record_rules() {
        let mut widget = Widget::new("Gear", "gear");
        assert!(widget.validate().is_ok());
        widget.props_mut().size = Some(0);
        assert!(matches!(widget.validate(), Err(CfnError::MissingProperty { .. })));
    }
}
