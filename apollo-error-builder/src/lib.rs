//! Builds GraphQL errors that follow the Apollo error extensions convention.
//!
//! Every error carries a machine readable `extensions.code` (see [`ErrorCode`]).
//! Callers can attach an underlying cause with [`with_error`], which becomes
//! `extensions.exception`, and arbitrary entries with [`with_value`]:
//!
//! ```ignore
//! use apollo_error_builder::ErrorBuilder;
//! use apollo_error_builder::with_error;
//!
//! let builder = ErrorBuilder::default();
//! let error = builder.internal_server_error("oops", [with_error(db_error)]);
//! // {"code": "INTERNAL_SERVER_ERROR", "exception": {"error": "db down"}}
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(unreachable_pub)]

mod builder;
mod code;
mod configuration;
mod extension;
mod stacktrace;

pub use apollo_compiler::response::GraphQLError;
pub use builder::ErrorBuilder;
pub use builder::ErrorExtension;
pub use code::ErrorCode;
pub use configuration::Configuration;
pub use configuration::ConfigurationError;
pub use configuration::generate_config_schema;
pub use extension::Extension;
pub use extension::Extensions;
pub use extension::with_error;
pub use extension::with_value;
