//! The closed set of Apollo error codes.

use std::fmt;

use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use serde_json_bytes::ByteString;
use serde_json_bytes::Value;

/// Machine readable category of a GraphQL error, stored under `extensions.code`.
///
/// The string forms are the ones Apollo Server and the router put on the wire,
/// so clients can branch on them without parsing messages.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    JsonSchema,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The operation string contains a syntax error.
    GraphqlParseFailed,
    /// The operation is not valid against the server's schema.
    GraphqlValidationFailed,
    /// The operation includes an invalid value for a field argument.
    BadUserInput,
    /// The server failed to authenticate with a required data source.
    Unauthenticated,
    /// The server was unauthorized to access a required data source.
    Forbidden,
    /// An automatic persisted query hash was not found in the cache.
    PersistedQueryNotFound,
    /// Automatic persisted queries are disabled on the server.
    PersistedQueryNotSupported,
    /// An unspecified error occurred.
    #[default]
    InternalServerError,
}

impl ErrorCode {
    /// The canonical wire form of this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::GraphqlParseFailed => "GRAPHQL_PARSE_FAILED",
            ErrorCode::GraphqlValidationFailed => "GRAPHQL_VALIDATION_FAILED",
            ErrorCode::BadUserInput => "BAD_USER_INPUT",
            ErrorCode::Unauthenticated => "UNAUTHENTICATED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::PersistedQueryNotFound => "PERSISTED_QUERY_NOT_FOUND",
            ErrorCode::PersistedQueryNotSupported => "PERSISTED_QUERY_NOT_SUPPORTED",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorCode> for Value {
    fn from(code: ErrorCode) -> Self {
        Value::String(ByteString::from(code.as_str()))
    }
}
