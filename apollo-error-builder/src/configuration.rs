//! Configuration for the error builder.

use displaydoc::Display;
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, Display)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// could not parse configuration: {0}
    InvalidConfiguration(#[from] serde_yaml::Error),
}

/// How errors are shaped by an [`ErrorBuilder`](crate::ErrorBuilder).
///
/// A configuration is bound to a builder when the builder is created and never
/// changes afterwards. To change the behavior, create a new builder.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields, default)]
pub struct Configuration {
    /// Capture the call stack into `extensions.exception.stacktrace` when an
    /// error is built with an underlying cause.
    pub stack_trace: bool,
}

#[buildstructor::buildstructor]
impl Configuration {
    #[builder]
    pub fn new(stack_trace: Option<bool>) -> Self {
        Self {
            stack_trace: stack_trace.unwrap_or_default(),
        }
    }

    /// Parse a configuration from YAML (JSON is a subset of YAML).
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigurationError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}

/// Generate a JSON schema for [`Configuration`].
pub fn generate_config_schema() -> RootSchema {
    schemars::schema_for!(Configuration)
}
