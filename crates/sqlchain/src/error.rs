//! Error types for sqlchain

use thiserror::Error;

/// Result type alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while turning values into SQL text.
///
/// Empty inputs are never an error: every clause renderer turns an empty
/// collection into empty text so calls can be chained unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The value has no SQL-literal form (floats, booleans, nested references)
    #[error("Unsupported value type: {type_name}")]
    UnsupportedValueType { type_name: String },

    /// A reference value was null at render time
    #[error("Null reference in rendered value")]
    NullReference,

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

impl RenderError {
    /// Create an unsupported-type error for the named type
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedValueType {
            type_name: type_name.into(),
        }
    }

    /// Check if this is a null reference error
    pub fn is_null_reference(&self) -> bool {
        matches!(self, Self::NullReference)
    }

    /// Check if this is an unsupported value type error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedValueType { .. })
    }
}

impl From<toml::de::Error> for RenderError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
