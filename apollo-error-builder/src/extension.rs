//! Deferred changes to the `extensions` map of a GraphQL error.

use std::fmt;

use serde_json_bytes::ByteString;
use serde_json_bytes::Value;

use crate::Configuration;
use crate::stacktrace;

/// The `extensions` field of a GraphQL error. Keeps insertion order.
pub type Extensions = apollo_compiler::response::JsonMap;

pub(crate) const CODE_KEY: &str = "code";
pub(crate) const EXCEPTION_KEY: &str = "exception";
const EXCEPTION_ERROR_KEY: &str = "error";
const EXCEPTION_STACKTRACE_KEY: &str = "stacktrace";

/// A change to [`Extensions`] that is applied when the error is built.
///
/// Extensions are applied in the order they are given to the builder, so a
/// later extension overwrites any key set by an earlier one. This includes
/// `code` and `exception`.
pub struct Extension(Kind);

enum Kind {
    Error(String),
    Value(ByteString, Value),
    Fn(Box<dyn FnOnce(&mut Extensions) + Send>),
}

/// Attach an underlying cause as `extensions.exception`.
///
/// `exception.error` is the string form of `error`. If the builder is
/// configured with [`Configuration::stack_trace`], `exception.stacktrace`
/// holds the call stack at the point the error is built, starting at the
/// caller of the builder.
pub fn with_error(error: impl fmt::Display) -> Extension {
    Extension(Kind::Error(error.to_string()))
}

/// Set `extensions[key]` to `value`, replacing any previous value.
pub fn with_value(key: impl Into<String>, value: impl Into<Value>) -> Extension {
    let key: String = key.into();
    Extension(Kind::Value(ByteString::from(key), value.into()))
}

impl Extension {
    /// An extension running arbitrary code against the map.
    pub fn from_fn(f: impl FnOnce(&mut Extensions) + Send + 'static) -> Self {
        Extension(Kind::Fn(Box::new(f)))
    }

    pub(crate) fn apply(self, extensions: &mut Extensions, configuration: &Configuration) {
        match self.0 {
            Kind::Error(message) => {
                let mut exception = Extensions::new();
                exception.insert(EXCEPTION_ERROR_KEY, Value::String(message.into()));
                if configuration.stack_trace {
                    let trace = stacktrace::capture()
                        .into_iter()
                        .map(|entry| Value::String(entry.into()))
                        .collect();
                    exception.insert(EXCEPTION_STACKTRACE_KEY, Value::Array(trace));
                }
                extensions.insert(EXCEPTION_KEY, Value::Object(exception));
            }
            Kind::Value(key, value) => {
                extensions.insert(key, value);
            }
            Kind::Fn(f) => f(extensions),
        }
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Kind::Error(message) => f.debug_tuple("WithError").field(message).finish(),
            Kind::Value(key, value) => f.debug_tuple("WithValue").field(key).field(value).finish(),
            Kind::Fn(_) => f.write_str("FromFn"),
        }
    }
}
