//! Policy-aware rendering.

use crate::clause::{self, FragmentSet};
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::value::{Quoting, Value, render_value};

/// Renders values and value clauses under a [`RenderConfig`].
///
/// With the default (strict) policy this behaves exactly like the free
/// functions in [`clause`](crate::clause). Under
/// [`RenderPolicy::Lenient`](crate::RenderPolicy::Lenient) a value that fails to
/// render becomes empty text and a warning is logged instead.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// A renderer using the strict policy.
    pub fn strict() -> Self {
        Self::default()
    }

    /// A renderer using the lenient policy.
    pub fn lenient() -> Self {
        Self::new(RenderConfig::lenient())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a single value.
    pub fn value(&self, value: &Value, quoting: Quoting) -> RenderResult<String> {
        match render_value(value, quoting) {
            Err(err) if self.config.is_lenient() => {
                tracing::warn!(
                    target: "sqlchain.render",
                    error = %err,
                    value = ?value,
                    "rendering value as empty text"
                );
                Ok(String::new())
            }
            rendered => rendered,
        }
    }

    /// See [`clause::render_keyed_clause`].
    pub fn keyed_clause(
        &self,
        prefix: &str,
        fragments: &FragmentSet<Value>,
        parenthesize_each: bool,
        quoting: Quoting,
    ) -> RenderResult<String> {
        self.clause(prefix, fragments.values(), parenthesize_each, quoting)
    }

    /// See [`clause::render_clause`]. Items are always rendered unquoted.
    pub fn clause<'a, I>(
        &self,
        prefix: &str,
        items: I,
        parenthesize_each: bool,
        _quoting: Quoting,
    ) -> RenderResult<String>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        clause::clause_with(prefix, items, parenthesize_each, |v| {
            self.value(v, Quoting::Unquoted)
        })
    }

    /// See [`clause::render_value_list`].
    pub fn value_list(&self, fragments: &FragmentSet<Value>, quoting: Quoting) -> RenderResult<String> {
        clause::value_list_with(fragments.values(), |v| self.value(v, quoting))
    }

    /// See [`clause::render_in_clause`].
    pub fn in_clause(&self, field: &str, values: &[Value], quoting: Quoting) -> RenderResult<String> {
        clause::in_clause_with(field, values, |v| self.value(v, quoting))
    }
}
