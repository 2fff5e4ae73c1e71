//! Building GraphQL errors.

use apollo_compiler::response::GraphQLError;

use crate::Configuration;
use crate::ErrorCode;
use crate::extension;
use crate::extension::Extension;
use crate::extension::Extensions;

/// Trait used to describe how an application error is reported to clients.
pub trait ErrorExtension: std::fmt::Display {
    /// The code to put in `extensions.code`.
    fn extension_code(&self) -> ErrorCode {
        ErrorCode::InternalServerError
    }

    /// Additional entries merged into `extensions` after `code` and `exception`.
    fn custom_extension_details(&self) -> Option<Extensions> {
        None
    }
}

macro_rules! category {
    ($(#[$doc:meta])* $name:ident => $code:ident) => {
        $(#[$doc])*
        pub fn $name(
            &self,
            message: impl Into<String>,
            extensions: impl IntoIterator<Item = Extension>,
        ) -> GraphQLError {
            self.build(ErrorCode::$code, message, extensions)
        }
    };
}

/// Builds [`GraphQLError`]s with `extensions.code` set.
///
/// ```ignore
/// let builder = ErrorBuilder::default();
/// let error = builder.user_input_error("bad id", [with_value("field", "id")]);
/// assert_eq!(error.extensions["code"], "BAD_USER_INPUT");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ErrorBuilder {
    configuration: Configuration,
}

impl ErrorBuilder {
    /// A builder bound to `configuration`.
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    /// The configuration this builder was created with.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Build an error with the given code.
    ///
    /// `extensions` starts out as `{"code": code}` and each [`Extension`] is
    /// then applied in order.
    pub fn build(
        &self,
        code: ErrorCode,
        message: impl Into<String>,
        extensions: impl IntoIterator<Item = Extension>,
    ) -> GraphQLError {
        let mut map = Extensions::new();
        map.insert(extension::CODE_KEY, code.into());
        let mut applied = 0;
        for extension in extensions {
            extension.apply(&mut map, &self.configuration);
            applied += 1;
        }
        tracing::trace!(code = %code, extensions = applied, "built graphql error");

        GraphQLError {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: map,
        }
    }

    /// Build an error from an application error.
    ///
    /// The message is the error's string form and `extensions.exception`
    /// carries it as the cause, followed by any custom details.
    pub fn from_error<E>(&self, error: &E) -> GraphQLError
    where
        E: ErrorExtension + ?Sized,
    {
        let mut extensions = vec![extension::with_error(error)];
        if let Some(details) = error.custom_extension_details() {
            extensions.extend(
                details
                    .into_iter()
                    .map(|(key, value)| extension::with_value(key.as_str(), value)),
            );
        }
        self.build(error.extension_code(), error.to_string(), extensions)
    }

    category!(
        /// The GraphQL operation string contains a syntax error.
        syntax_error => GraphqlParseFailed
    );

    category!(
        /// The GraphQL operation is not valid against the server's schema.
        validation_error => GraphqlValidationFailed
    );

    category!(
        /// The GraphQL operation includes an invalid value for a field argument.
        user_input_error => BadUserInput
    );

    category!(
        /// The server failed to authenticate with a required data source, such as a REST API.
        authentication_error => Unauthenticated
    );

    category!(
        /// The server was unauthorized to access a required data source, such as a REST API.
        forbidden_error => Forbidden
    );

    category!(
        /// A client sent the hash of a query string to execute via automatic persisted
        /// queries, but the query was not in the APQ cache.
        persisted_query_not_found_error => PersistedQueryNotFound
    );

    category!(
        /// A client sent the hash of a query string to execute via automatic persisted
        /// queries, but the server has disabled APQ.
        persisted_query_not_supported_error => PersistedQueryNotSupported
    );

    category!(
        /// An unspecified error occurred.
        #[doc(alias = "none")]
        internal_server_error => InternalServerError
    );
}
