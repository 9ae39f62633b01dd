//! Error types for strut

use thiserror::Error;

/// The main error type for strut operations
#[derive(Debug, Error)]
pub enum StrutError {
    /// An object's tag bag is missing or carries the wrong kind tag.
    /// Query helpers recover this into "not found"; it never reaches a user.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// No active scene or usable selection for the requested operation.
    #[error("Context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Attribute error: {0}")]
    AttrError(String),

    #[error("Geometry error: {0}")]
    GeometryError(String),
}

/// Result type alias for strut operations
pub type Result<T> = std::result::Result<T, StrutError>;

impl From<toml::de::Error> for StrutError {
    fn from(err: toml::de::Error) -> Self {
        StrutError::AttrError(err.to_string())
    }
}

impl From<toml::ser::Error> for StrutError {
    fn from(err: toml::ser::Error) -> Self {
        StrutError::AttrError(err.to_string())
    }
}
