//! Property scalars that may be deferred to deploy time.

use crate::intrinsic::Intrinsic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar property: either a literal or an [`Intrinsic`] CloudFormation resolves later.
///
/// Serialized untagged, so `"my-profile"` and `{"Ref": "ProfileName"}` are both accepted
/// under the same key and render back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CfnValue<T> {
    Literal(T),
    Token(Intrinsic),
}

pub type CfnString = CfnValue<String>;
pub type CfnBool = CfnValue<bool>;
pub type CfnInteger = CfnValue<i64>;
pub type CfnNumber = CfnValue<f64>;

impl<T> CfnValue<T> {
    /// The literal, or `None` for a deferred value.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&T> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Token(_) => None,
        }
    }

    #[must_use]
    pub const fn as_token(&self) -> Option<&Intrinsic> {
        match self {
            Self::Literal(_) => None,
            Self::Token(token) => Some(token),
        }
    }

    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }
}

impl CfnValue<String> {
    /// The literal as `&str`, or `None` for a deferred value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().map(String::as_str)
    }
}

impl<T> From<Intrinsic> for CfnValue<T> {
    fn from(token: Intrinsic) -> Self {
        Self::Token(token)
    }
}

impl From<String> for CfnString {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for CfnString {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

impl From<bool> for CfnBool {
    fn from(value: bool) -> Self {
        Self::Literal(value)
    }
}

impl From<i64> for CfnInteger {
    fn from(value: i64) -> Self {
        Self::Literal(value)
    }
}

impl From<f64> for CfnNumber {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

impl PartialEq<str> for CfnString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for CfnString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl<T: fmt::Display> fmt::Display for CfnValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => value.fmt(f),
            Self::Token(token) => token.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literals_and_tokens_share_a_key() {
        let literal: CfnString = serde_json::from_value(json!("my-profile")).unwrap();
        assert_eq!(literal, "my-profile");

        let token: CfnString =
            serde_json::from_value(json!({ "Fn::GetAtt": ["Key", "Arn"] })).unwrap();
        assert_eq!(token.as_token(), Some(&Intrinsic::get_att("Key", "Arn")));
        assert_eq!(serde_json::to_value(&token).unwrap(), json!({ "Fn::GetAtt": ["Key", "Arn"] }));
    }

    #[test]
    fn scalars_accept_tokens() {
        let flag: CfnBool = serde_json::from_value(json!({ "Ref": "Sandbox" })).unwrap();
        assert!(flag.is_token());
        let size: CfnInteger = serde_json::from_value(json!(1000)).unwrap();
        assert_eq!(size.as_literal(), Some(&1000));
    }

    #[test]
    fn wrong_literal_type_is_rejected() {
        assert!(serde_json::from_value::<CfnBool>(json!("yes")).is_err());
        assert!(serde_json::from_value::<CfnString>(json!({ "Fn::Nope": "x" })).is_err());
    }
}
