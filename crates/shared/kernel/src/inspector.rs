use crate::error::CfnError;
use crate::resource::CfnResource;
use appflow_domain::constants::{INSPECT_PROPS, INSPECT_TYPE};
use serde_json::{Map, Value};

/// Collects introspection attributes of a construct.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TreeInspector {
    attributes: Map<String, Value>,
}

impl TreeInspector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }

    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.attributes)
    }
}

/// Something that can describe itself to a [`TreeInspector`].
pub trait Inspectable {
    /// # Errors
    /// Returns an error if the description cannot be rendered.
    fn inspect(&self, inspector: &mut TreeInspector) -> Result<(), CfnError>;
}

impl<R: CfnResource> Inspectable for R {
    fn inspect(&self, inspector: &mut TreeInspector) -> Result<(), CfnError> {
        inspector.add_attribute(INSPECT_TYPE, Value::String(R::RESOURCE_TYPE.to_owned()));
        inspector.add_attribute(INSPECT_PROPS, self.render_properties()?);
        Ok(())
    }
}
