//! Static description of a supported resource type.
//! The facade crate collects one [`ResourceSchema`] per type for discovery (`appflow schema`).

use crate::PropertyMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    /// CloudFormation type name (`AWS::AppFlow::Flow`).
    pub resource_type: &'static str,
    /// Read-only attributes available through `Fn::GetAtt`.
    pub attributes: &'static [&'static str],
    /// Top-level property table.
    pub properties: &'static [PropertyMeta],
    pub taggable: bool,
}

impl ResourceSchema {
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&'static PropertyMeta> {
        self.properties.iter().find(|p| p.key == key)
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(&name)
    }
}
