use super::buffer::QueryBuffer;
use super::traits::SqlBuilder;
use crate::clause::{FragmentSet, and_clause, or_clause, render_field_list, render_keyword, where_clause};
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::value::{Quoting, Value};
use std::fmt;

/// UPDATE statement builder.
#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    buf: QueryBuffer,
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            buf: QueryBuffer::with_config(config),
        }
    }

    /// `UPDATE table`
    pub fn update(mut self, table: &str) -> Self {
        self.buf.reset(format!("UPDATE {}", table));
        self
    }

    /// `SET assignment`, e.g. `set("ProductName='Pakgen Bulbs'")`.
    pub fn set(mut self, assignment: &str) -> Self {
        self.buf.push(&render_keyword("SET", assignment));
        self
    }

    /// `SET a,b,...` from positioned assignments, comma-joined in position order.
    ///
    /// Assignments are emitted unquoted; an assignment whose value is a
    /// subquery should be written as `Field=(SELECT ...)`.
    pub fn set_keyed(mut self, assignments: &FragmentSet<Value>) -> Self {
        if assignments.is_empty() {
            return self;
        }
        let rendered = self
            .buf
            .renderer()
            .value_list(assignments, Quoting::Unquoted)
            .map(|list| render_keyword("SET", &list));
        self.buf.push_rendered(rendered);
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

    pub fn and(mut self, cond: &str) -> Self {
        self.buf.push(&and_clause(cond));
        self
    }

    pub fn or(mut self, cond: &str) -> Self {
        self.buf.push(&or_clause(cond));
        self
    }

    /// `RETURNING a,b`
    pub fn returning<S: AsRef<str>>(mut self, fields: &[S]) -> Self {
        self.buf
            .push_spaced(&render_field_list("RETURNING", false, fields));
        self
    }

    /// `RETURNING *`
    pub fn returning_all(mut self) -> Self {
        self.buf.push(" RETURNING *");
        self
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn build_error(&self) -> Option<&RenderError> {
        self.buf.build_error()
    }
}

impl SqlBuilder for UpdateBuilder {
    fn kind(&self) -> &'static str {
        "update"
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

impl fmt::Display for UpdateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buf.as_str())
    }
}
