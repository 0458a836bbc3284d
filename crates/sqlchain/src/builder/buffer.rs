//! Accumulating text buffer shared by the statement builders.

use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::renderer::Renderer;

/// Owned SQL text plus the first render error seen while appending to it.
///
/// A buffer has a single writer: its builder. Builders are consumed and
/// returned by every chained call, so no other handle can append concurrently.
#[derive(Debug, Clone, Default)]
pub(crate) struct QueryBuffer {
    sql: String,
    renderer: Renderer,
    build_error: Option<RenderError>,
}

impl QueryBuffer {
    pub(crate) fn with_config(config: RenderConfig) -> Self {
        Self {
            sql: String::new(),
            renderer: Renderer::new(config),
            build_error: None,
        }
    }

    pub(crate) fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub(crate) fn config(&self) -> &RenderConfig {
        self.renderer.config()
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.sql
    }

    /// Start a new statement, discarding the previous text and any error.
    pub(crate) fn reset(&mut self, text: impl Into<String>) {
        self.sql = text.into();
        self.build_error = None;
    }

    pub(crate) fn push(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    /// Append `" " + text` unless `text` is empty.
    pub(crate) fn push_spaced(&mut self, text: &str) {
        if !text.is_empty() {
            self.sql.push(' ');
            self.sql.push_str(text);
        }
    }

    /// Append rendered text, or remember the error if rendering failed.
    ///
    /// Only the first error is kept.
    pub(crate) fn push_rendered(&mut self, rendered: RenderResult<String>) {
        match rendered {
            Ok(text) => self.sql.push_str(&text),
            Err(err) => {
                if self.build_error.is_none() {
                    self.build_error = Some(err);
                }
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.sql.clear();
        self.build_error = None;
    }

    pub(crate) fn build_error(&self) -> Option<&RenderError> {
        self.build_error.as_ref()
    }

    pub(crate) fn validate(&self) -> RenderResult<()> {
        match &self.build_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
