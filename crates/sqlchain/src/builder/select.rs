use super::buffer::QueryBuffer;
use super::traits::SqlBuilder;
use crate::clause::{
    FragmentSet, and_clause, limit_clause, offset_clause, or_clause, render_field_list,
    render_keyword, where_clause,
};
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::value::{Quoting, Value};
use std::fmt;

/// SELECT statement builder.
///
/// Clauses are appended in call order; the builder does not reorder or check
/// them. `select`, `select_distinct` and `select_all` start a new statement.
///
/// # Example
/// ```
/// use sqlchain::{SelectBuilder, SqlBuilder};
///
/// let sql = SelectBuilder::new()
///     .select(&["ContactID", "FirstName"])
///     .from("Person.Contact")
///     .where_("ContactID>100")
///     .order_by("FirstName")
///     .build()?;
/// assert_eq!(sql, "SELECT ContactID,FirstName FROM Person.Contact WHERE ContactID>100 ORDER BY FirstName");
/// # Ok::<(), sqlchain::RenderError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    buf: QueryBuffer,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that renders values under `config`.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            buf: QueryBuffer::with_config(config),
        }
    }

    // ==================== Statement start ====================

    /// `SELECT a,b,c`
    pub fn select<S: AsRef<str>>(mut self, fields: &[S]) -> Self {
        self.buf.reset(render_field_list("SELECT", false, fields));
        self
    }

    /// `SELECT DISTINCT a,b,c`
    pub fn select_distinct<S: AsRef<str>>(mut self, fields: &[S]) -> Self {
        self.buf.reset(render_field_list("SELECT DISTINCT", false, fields));
        self
    }

    /// `SELECT * FROM table`
    pub fn select_all(mut self, table: &str) -> Self {
        self.buf.reset(format!("SELECT * FROM {}", table));
        self
    }

    pub fn from(mut self, table: &str) -> Self {
        self.buf.push(&render_keyword("FROM", table));
        self
    }

    // ==================== WHERE ====================

    pub fn where_(mut self, cond: &str) -> Self {
        self.buf.push(&where_clause(cond));
        self
    }

    /// WHERE built from positioned conditions, space-joined in position order.
    ///
    /// Each condition carries its own connective:
    /// ```
    /// use sqlchain::{FragmentSet, SelectBuilder, SqlBuilder, Value};
    ///
    /// let conds: FragmentSet<Value> =
    ///     FragmentSet::from([(0, "CategoryID=3 OR"), (1, "BarcodeID=22")]);
    /// let qb = SelectBuilder::new().select_all("Stock.Product").where_keyed(&conds);
    /// assert_eq!(
    ///     qb.to_sql(),
    ///     "SELECT * FROM Stock.Product WHERE CategoryID=3 OR BarcodeID=22"
    /// );
    /// ```
    pub fn where_keyed(mut self, conds: &FragmentSet<Value>) -> Self {
        let rendered = self
            .buf
            .renderer()
            .keyed_clause("WHERE", conds, false, Quoting::Unquoted);
        self.buf.push_rendered(rendered);
        self
    }

    /// `WHERE field IN(v1,v2,...)`; text values are quoted, integers are not.
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

    // ==================== Ordering / paging ====================

    pub fn order_by(mut self, field: &str) -> Self {
        self.buf.push(&render_keyword("ORDER BY", field));
        self
    }

    pub fn group_by(mut self, field: &str) -> Self {
        self.buf.push(&render_keyword("GROUP BY", field));
        self
    }

    pub fn asc(mut self) -> Self {
        self.buf.push(" ASC");
        self
    }

    pub fn desc(mut self) -> Self {
        self.buf.push(" DESC");
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.buf.push(&offset_clause(n));
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.buf.push(&limit_clause(n));
        self
    }

    // ==================== State ====================

    /// Erase the statement text and any recorded error.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// First render error recorded while building, if any.
    pub fn build_error(&self) -> Option<&RenderError> {
        self.buf.build_error()
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut QueryBuffer {
        &mut self.buf
    }
}

impl SqlBuilder for SelectBuilder {
    fn kind(&self) -> &'static str {
        "select"
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

impl fmt::Display for SelectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buf.as_str())
    }
}
