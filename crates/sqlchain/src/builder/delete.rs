use super::buffer::QueryBuffer;
use super::traits::SqlBuilder;
use crate::clause::{FragmentSet, and_clause, or_clause, where_clause};
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::value::{Quoting, Value};
use std::fmt;

/// DELETE statement builder.
///
/// No WHERE is added implicitly: `delete("t")` alone renders
/// `DELETE FROM t`.
#[derive(Debug, Clone, Default)]
pub struct DeleteBuilder {
    buf: QueryBuffer,
}

impl DeleteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            buf: QueryBuffer::with_config(config),
        }
    }

    /// `DELETE FROM table`
    pub fn delete(mut self, table: &str) -> Self {
        self.buf.reset(format!("DELETE FROM {}", table));
        self
    }

    pub fn where_(mut self, cond: &str) -> Self {
        self.buf.push(&where_clause(cond));
        self
    }

    /// WHERE built from positioned conditions, space-joined in position order.
    pub fn where_keyed(mut self, conds: &FragmentSet<Value>) -> Self {
        let rendered = self
            .buf
            .renderer()
            .keyed_clause("WHERE", conds, false, Quoting::Unquoted);
        self.buf.push_rendered(rendered);
        self
    }

    /// `WHERE field IN(v1,v2,...)`
    pub fn where_in<I, T>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let rendered = self.buf.renderer().in_clause(field, &values, Quoting::Quoted);
        self.buf.push_rendered(rendered);
        self
    }

    pub fn and(mut self, cond: &str) -> Self {
        self.buf.push(&and_clause(cond));
        self
    }

    pub fn or(mut self, cond: &str) -> Self {
        self.buf.push(&or_clause(cond));
        self
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn build_error(&self) -> Option<&RenderError> {
        self.buf.build_error()
    }
}

impl SqlBuilder for DeleteBuilder {
    fn kind(&self) -> &'static str {
        "delete"
    }

    fn build_sql(&self) -> String {
        self.buf.as_str().to_string()
    }

    fn config(&self) -> &RenderConfig {
        self.buf.config()
    }

    fn validate(&self) -> RenderResult<()> {
        self.buf.validate()
    }
}

impl fmt::Display for DeleteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buf.as_str())
    }
}
