use crate::value::CfnString;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value CloudFormation resolves at deploy time.
///
/// Serialized in the one-key object form (`{"Ref": "Flow"}`,
/// `{"Fn::GetAtt": ["Flow", "FlowArn"]}`, `{"Fn::Sub": "..."}`). `Fn::GetAtt` also parses
/// from the dotted `"Flow.FlowArn"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    Ref(String),
    GetAtt(String, String),
    Sub(String),
    ImportValue(String),
    Join(String, Vec<CfnString>),
}

const FUNCTIONS: &[&str] = &["Ref", "Fn::GetAtt", "Fn::Sub", "Fn::ImportValue", "Fn::Join"];

impl Intrinsic {
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Self::Ref(logical_id.into())
    }

    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::GetAtt(logical_id.into(), attribute.into())
    }

    /// Logical ID the token points at, when it points at one.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Ref(id) | Self::GetAtt(id, _) => Some(id),
            Self::Sub(_) | Self::ImportValue(_) | Self::Join(..) => None,
        }
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ref(id) => write!(f, "${{Token[Ref.{id}]}}"),
            Self::GetAtt(id, attr) => write!(f, "${{Token[{id}.{attr}]}}"),
            Self::Sub(body) => write!(f, "${{Token[Sub:{body}]}}"),
            Self::ImportValue(name) => write!(f, "${{Token[Import.{name}]}}"),
            Self::Join(delimiter, parts) => {
                let parts: Vec<String> = parts.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(delimiter.as_str()))
            },
        }
    }
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Ref(id) => map.serialize_entry("Ref", id)?,
            Self::GetAtt(id, attr) => map.serialize_entry("Fn::GetAtt", &[id, attr])?,
            Self::Sub(body) => map.serialize_entry("Fn::Sub", body)?,
            Self::ImportValue(name) => map.serialize_entry("Fn::ImportValue", name)?,
            Self::Join(delimiter, parts) => {
                map.serialize_entry("Fn::Join", &(delimiter, parts))?;
            },
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Intrinsic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(IntrinsicVisitor)
    }
}

struct IntrinsicVisitor;

impl<'de> Visitor<'de> for IntrinsicVisitor {
    type Value = Intrinsic;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with a single intrinsic function key")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let Some(key) = map.next_key::<String>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        let value = match key.as_str() {
            "Ref" => Intrinsic::Ref(map.next_value()?),
            "Fn::GetAtt" => match map.next_value()? {
                GetAttArgs::List(id, attr) => Intrinsic::GetAtt(id, attr),
                GetAttArgs::Dotted(path) => {
                    let Some((id, attr)) = path.split_once('.') else {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Str(&path),
                            &"`LogicalId.Attribute`",
                        ));
                    };
                    Intrinsic::GetAtt(id.to_owned(), attr.to_owned())
                },
            },
            "Fn::Sub" => Intrinsic::Sub(map.next_value()?),
            "Fn::ImportValue" => Intrinsic::ImportValue(map.next_value()?),
            "Fn::Join" => {
                let (delimiter, parts): (String, Vec<CfnString>) = map.next_value()?;
                Intrinsic::Join(delimiter, parts)
            },
            other => return Err(de::Error::unknown_field(other, FUNCTIONS)),
        };
        if map.next_key::<String>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }
        Ok(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GetAttArgs {
    List(String, String),
    Dotted(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_att_uses_list_form() {
        let token = Intrinsic::get_att("MyFlow", "FlowArn");
        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            json!({ "Fn::GetAtt": ["MyFlow", "FlowArn"] })
        );
        assert_eq!(token.target(), Some("MyFlow"));
    }

    #[test]
    fn parses_ref() {
        let token: Intrinsic = serde_json::from_value(json!({ "Ref": "Profile" })).unwrap();
        assert_eq!(token, Intrinsic::reference("Profile"));
    }

    #[test]
    fn rejects_two_keys() {
        let raw = json!({ "Ref": "A", "Fn::Sub": "b" });
        assert!(serde_json::from_value::<Intrinsic>(raw).is_err());
    }

    #[test]
    fn parses_dotted_get_att() {
        let token: Intrinsic =
            serde_json::from_value(json!({ "Fn::GetAtt": "Key.Arn" })).unwrap();
        assert_eq!(token, Intrinsic::get_att("Key", "Arn"));
        assert_eq!(serde_json::to_value(&token).unwrap(), json!({ "Fn::GetAtt": ["Key", "Arn"] }));
    }

    #[test]
    fn join_nests_tokens() {
        let raw = json!({ "Fn::Join": ["", ["arn:aws:kms:", { "Ref": "AWS::Region" }]] });
        let token: Intrinsic = serde_json::from_value(raw.clone()).unwrap();
        let Intrinsic::Join(_, parts) = &token else { panic!("expected Fn::Join") };
        assert!(parts[1].is_token());
        assert_eq!(serde_json::to_value(&token).unwrap(), raw);
    }

    #[test]
    fn display_is_token_like() {
        assert_eq!(Intrinsic::reference("A").to_string(), "${Token[Ref.A]}");
    }
}
