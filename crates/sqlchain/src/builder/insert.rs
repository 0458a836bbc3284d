use super::buffer::QueryBuffer;
use super::traits::SqlBuilder;
use crate::clause::{CONTINUATION, FragmentSet, render_field_list};
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::value::{Quoting, Value};
use std::fmt;

/// INSERT statement builder.
///
/// Rows can be given as typed values (`values`, `values_set`), which are
/// quoted by the value renderer, or as pre-rendered group text
/// (`values_raw`, `values_groups`, `values_seq`), which is emitted as-is.
///
/// # Example
/// ```
/// use sqlchain::{FragmentSet, InsertBuilder, SqlBuilder, Value};
///
/// let row: FragmentSet<Value> = FragmentSet::from_seq(["Mrs", "Susan"]);
/// let sql = InsertBuilder::new()
///     .insert("Person.Contact")
///     .fields(&["Title", "FirstName"])
///     .values(&row)
///     .build()?;
/// assert_eq!(sql, "INSERT INTO Person.Contact (Title,FirstName) VALUES('Mrs','Susan')");
/// # Ok::<(), sqlchain::RenderError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InsertBuilder {
    buf: QueryBuffer,
}

impl InsertBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            buf: QueryBuffer::with_config(config),
        }
    }

    /// `INSERT INTO table`
    pub fn insert(mut self, table: &str) -> Self {
        self.buf.reset(format!("INSERT INTO {}", table));
        self
    }

    /// Column list: ` (a,b,c)`
    pub fn fields<S: AsRef<str>>(mut self, fields: &[S]) -> Self {
        self.buf.push(&render_field_list("", true, fields));
        self
    }

    /// One row of typed values: ` VALUES(v1,v2,...)`.
    pub fn values(mut self, row: &FragmentSet<Value>) -> Self {
        if row.is_empty() {
            return self;
        }
        let rendered = self
            .buf
            .renderer()
            .value_list(row, Quoting::Quoted)
            .map(|list| format!(" VALUES({})", list));
        self.buf.push_rendered(rendered);
        self
    }

    /// Another row of typed values after `values`: `,(v1,v2,...)`.
    pub fn values_set(mut self, row: &FragmentSet<Value>) -> Self {
        if row.is_empty() {
            return self;
        }
        let rendered = self
            .buf
            .renderer()
            .value_list(row, Quoting::Quoted)
            .map(|list| format!("{}({})", CONTINUATION, list));
        self.buf.push_rendered(rendered);
        self
    }

    /// One pre-rendered row: ` VALUES(text)`.
    ///
    /// String values inside `text` must already be single-quoted.
    pub fn values_raw(mut self, text: &str) -> Self {
        self.buf.push(&format!(" VALUES({})", text));
        self
    }

    /// Several pre-rendered rows in position order: ` VALUES(g0),(g1),...`.
    pub fn values_groups(mut self, groups: &FragmentSet<Value>) -> Self {
        let rendered = self
            .buf
            .renderer()
            .keyed_clause("VALUES", groups, true, Quoting::Unquoted);
        self.buf.push_rendered(rendered);
        self
    }

    /// Sequence form of [`values_groups`](Self::values_groups).
    pub fn values_seq<S: AsRef<str>>(mut self, groups: &[S]) -> Self {
        let groups: Vec<Value> = groups.iter().map(|g| Value::text(g.as_ref())).collect();
        let rendered = self
            .buf
            .renderer()
            .clause("VALUES", &groups, true, Quoting::Unquoted);
        self.buf.push_rendered(rendered);
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

impl SqlBuilder for InsertBuilder {
    fn kind(&self) -> &'static str {
        "insert"
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

impl fmt::Display for InsertBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buf.as_str())
    }
}
