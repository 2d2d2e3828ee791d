use crate::error::CfnError;
use appflow_domain::constants::MAX_LOGICAL_ID_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Template-local resource name: ASCII alphanumeric, 1..=255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogicalId(String);

impl LogicalId {
    /// # Errors
    /// Returns [`CfnError::InvalidLogicalId`] when `id` is empty, too long or not alphanumeric.
    pub fn new(id: impl Into<String>) -> Result<Self, CfnError> {
        let id = id.into();
        let reason = if id.is_empty() {
            "must not be empty"
        } else if id.len() > MAX_LOGICAL_ID_LEN {
            "must be at most 255 characters"
        } else if !id.bytes().all(|b| b.is_ascii_alphanumeric()) {
            "must contain only ASCII letters and digits"
        } else {
            return Ok(Self(id));
        };
        Err(CfnError::InvalidLogicalId { id, reason: reason.into(), context: None })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LogicalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LogicalId {
    type Error = CfnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LogicalId {
    type Error = CfnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogicalId> for String {
    fn from(value: LogicalId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric() {
        assert_eq!(LogicalId::new("MyFlow2").unwrap().as_str(), "MyFlow2");
    }

    #[test]
    fn rejects_bad_ids() {
        for bad in ["", "my-flow", "Flow_1", "Flöw"] {
            assert!(
                matches!(LogicalId::new(bad), Err(CfnError::InvalidLogicalId { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!(LogicalId::new("A".repeat(256)).is_err());
        assert!(LogicalId::new("A".repeat(255)).is_ok());
    }
}
