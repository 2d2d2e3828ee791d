use crate::validate::Violation;
use appflow_domain::ConnectorType;
use std::borrow::Cow;

/// Errors raised while building, validating, synthesizing or parsing resources.
#[appflow_derive::appflow_error]
pub enum CfnError {
    /// JSON (de)serialization failure, including type mismatches in parsed properties.
    #[error("JSON error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Missing required property `{path}` on `{resource}`{}", format_context(.context))]
    MissingProperty { resource: String, path: String, context: Option<Cow<'static, str>> },

    #[error("Unknown property `{path}` on `{resource}`{}", format_context(.context))]
    UnknownProperty { resource: String, path: String, context: Option<Cow<'static, str>> },

    #[error("Property `{path}` on `{resource}` is null{}", format_context(.context))]
    NullProperty { resource: String, path: String, context: Option<Cow<'static, str>> },

    /// More than one violation, or one that has no dedicated variant.
    #[error(
        "Invalid properties on `{resource}`{}: {}",
        format_context(.context),
        format_violations(.violations)
    )]
    InvalidProperties {
        resource: String,
        violations: Vec<Violation>,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Connector mismatch at `{path}` on `{resource}`{}: declared {expected}, configured {found}",
        format_context(.context)
    )]
    ConnectorMismatch {
        resource: String,
        path: String,
        expected: ConnectorType,
        found: ConnectorType,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid logical ID `{id}`{}: {reason}", format_context(.context))]
    InvalidLogicalId { id: String, reason: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Logical ID `{id}` is already in use{}", format_context(.context))]
    DuplicateLogicalId { id: String, context: Option<Cow<'static, str>> },

    #[error("Resource `{id}` not found{}", format_context(.context))]
    ResourceNotFound { id: String, context: Option<Cow<'static, str>> },

    #[error("Resource `{id}` is `{found}`, expected `{expected}`{}", format_context(.context))]
    ResourceTypeMismatch {
        id: String,
        expected: Cow<'static, str>,
        found: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("`{resource_type}` has no attribute `{attribute}`{}", format_context(.context))]
    UnknownAttribute {
        resource_type: Cow<'static, str>,
        attribute: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_violations(violations: &[Violation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl CfnError {
    /// Violations carried by the error, flattened to the [`Violation`] form.
    ///
    /// Structural errors (logical IDs, lookups, JSON) have none.
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        match self {
            Self::MissingProperty { path, .. } => vec![Violation::Missing { path: path.clone() }],
            Self::UnknownProperty { path, .. } => vec![Violation::Unknown { path: path.clone() }],
            Self::NullProperty { path, .. } => vec![Violation::Null { path: path.clone() }],
            Self::ConnectorMismatch { path, expected, found, .. } => {
                vec![Violation::ConnectorMismatch {
                    path: path.clone(),
                    expected: *expected,
                    found: *found,
                }]
            },
            Self::InvalidProperties { violations, .. } => violations.clone(),
            _ => Vec::new(),
        }
    }
}
