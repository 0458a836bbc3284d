//! Rendering configuration.

use crate::error::RenderResult;
use serde::{Deserialize, Serialize};

/// What to do with a value that cannot be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderPolicy {
    /// Return the error to the caller (default).
    #[default]
    Strict,
    /// Render the offending value as empty text and emit a `tracing` warning.
    Lenient,
}

/// Configuration shared by [`Renderer`](crate::Renderer) and the statement builders.
///
/// # Example
/// ```
/// use sqlchain::{RenderConfig, RenderPolicy};
///
/// let config = RenderConfig::new().with_policy(RenderPolicy::Lenient);
/// assert!(config.is_lenient());
///
/// let loaded = RenderConfig::from_toml_str("policy = \"lenient\"")?;
/// assert_eq!(loaded, config);
/// # Ok::<(), sqlchain::RenderError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Handling of unsupported values and null references.
    pub policy: RenderPolicy,
    /// Emit the finished statement at `debug` level when a builder is built.
    pub log_rendered_sql: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults (strict, no SQL logging).
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut for a lenient configuration.
    pub fn lenient() -> Self {
        Self::new().with_policy(RenderPolicy::Lenient)
    }

    /// Set the render policy.
    pub fn with_policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Log finished SQL through `tracing`.
    pub fn enable_sql_logging(mut self) -> Self {
        self.log_rendered_sql = true;
        self
    }

    /// Stop logging finished SQL.
    pub fn disable_sql_logging(mut self) -> Self {
        self.log_rendered_sql = false;
        self
    }

    /// Whether the lenient policy is active.
    pub fn is_lenient(&self) -> bool {
        self.policy == RenderPolicy::Lenient
    }

    /// Parse a configuration from TOML text.
    ///
    /// Missing keys fall back to their defaults:
    ///
    /// ```toml
    /// policy = "lenient"
    /// log_rendered_sql = true
    /// ```
    pub fn from_toml_str(raw: &str) -> RenderResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}
