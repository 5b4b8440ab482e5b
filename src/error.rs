//! Error types for the schema model and registry

use thiserror::Error;

use crate::naming::NamingConvention;
use crate::version::SchemaVersion;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema model, registry and resolution errors
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid schema at {location}: {reason}")]
    InvalidSchema { location: String, reason: String },

    #[error("Endpoint already registered: {0}")]
    DuplicatePath(String),

    #[error("Duplicate field name '{name}' ({convention}) at {location} in version {version}")]
    DuplicateFieldName {
        location: String,
        name: String,
        convention: NamingConvention,
        version: SchemaVersion,
    },

    #[error("Registry is sealed: no further registrations are accepted")]
    RegistryClosed,

    #[error("Endpoint not found: {0}")]
    NotFound(String),

    #[error("No schema for {endpoint} at version {version}")]
    NoSchemaForVersion {
        endpoint: String,
        version: SchemaVersion,
    },

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    /// Shorthand for an `InvalidSchema` error
    pub(crate) fn invalid(location: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::InvalidSchema {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
