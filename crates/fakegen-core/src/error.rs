//! Error types for generator registration and invocation.

use crate::param::ParamType;

/// Error returned when a generator lookup cannot produce a value.
///
/// Every variant is terminal for the single request that produced it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// No generator is registered under the requested name
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    /// Parameter was not supplied and declares no default
    #[error("Missing required parameter '{field}'")]
    MissingParameter { field: String },

    /// Parameter value could not be parsed as the requested type
    #[error("Parameter '{field}' value '{value}' could not be parsed as {expected}")]
    MalformedParameter {
        field: String,
        value: String,
        expected: ParamType,
    },

    /// Cross-parameter constraint violated
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generator read a parameter its schema does not declare
    #[error("Parameter '{field}' is not declared by this generator")]
    UndeclaredParameter { field: String },

    /// Generator read a declared parameter as a different type
    #[error("Parameter '{field}' is declared as {declared} but was read as {requested}")]
    ParameterTypeMismatch {
        field: String,
        declared: ParamType,
        requested: ParamType,
    },
}

impl LookupError {
    /// Create a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingParameter {
            field: field.to_string(),
        }
    }

    pub(crate) fn malformed(field: &str, value: &str, expected: ParamType) -> Self {
        Self::MalformedParameter {
            field: field.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}

/// Error returned when a generator cannot be registered.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Generator name is empty or whitespace
    #[error("Generator name must not be empty")]
    EmptyName,

    /// A generator is already registered under this name
    #[error("Generator already registered: {0}")]
    DuplicateGenerator(String),

    /// Parameter field declared twice in one descriptor
    #[error("Generator '{generator}' declares parameter '{field}' more than once")]
    DuplicateParam { generator: String, field: String },

    /// Declared default does not parse as the declared type
    #[error("Generator '{generator}' has an invalid default for '{field}': {source}")]
    InvalidDefault {
        generator: String,
        field: String,
        #[source]
        source: LookupError,
    },
}
