use appflow_derive::cfn_model;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use typed_builder::TypedBuilder;

/// What CloudFormation does with the physical resource on delete or replacement.
#[cfn_model]
pub enum DeletionPolicy {
    Delete,
    Retain,
    Snapshot,
    RetainExceptOnDelete,
}

/// Resource attributes that sit beside `Type` and `Properties` in a template entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceOptions {
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    #[builder(default, setter(into))]
    pub depends_on: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub deletion_policy: Option<DeletionPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub update_replace_policy: Option<DeletionPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub metadata: Option<Value>,
}

impl ResourceOptions {
    /// Template entry keys owned by this struct.
    pub const KEYS: &'static [&'static str] =
        &["DependsOn", "DeletionPolicy", "UpdateReplacePolicy", "Condition", "Metadata"];

    pub fn add_dependency(&mut self, logical_id: impl Into<String>) {
        let logical_id = logical_id.into();
        if !self.depends_on.contains(&logical_id) {
            self.depends_on.push(logical_id);
        }
    }
}

// `DependsOn` is either a single logical ID or a list of them.
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(id) => vec![id],
        OneOrMany::Many(ids) => ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn depends_on_accepts_string_or_list() {
        let one: ResourceOptions =
            serde_json::from_value(json!({ "DependsOn": "Profile" })).unwrap();
        assert_eq!(one.depends_on, ["Profile"]);

        let many: ResourceOptions =
            serde_json::from_value(json!({ "DependsOn": ["A", "B"], "DeletionPolicy": "Retain" }))
                .unwrap();
        assert_eq!(many.depends_on, ["A", "B"]);
        assert_eq!(many.deletion_policy, Some(DeletionPolicy::Retain));
    }

    #[test]
    fn empty_options_render_nothing() {
        assert_eq!(serde_json::to_value(ResourceOptions::default()).unwrap(), json!({}));
    }

    #[test]
    fn dependencies_are_deduplicated() {
        let mut options = ResourceOptions::builder().condition("IsProd").build();
        options.add_dependency("Profile");
        options.add_dependency("Profile");
        assert_eq!(options.depends_on, ["Profile"]);
        assert_eq!(options.condition.as_deref(), Some("IsProd"));
    }
}
