use super::select::SelectBuilder;
use super::traits::SqlBuilder;
use crate::clause::{FragmentSet, render_field_list, render_keyword};
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::value::Value;
use std::fmt;

/// JOIN statement builder.
///
/// Wraps a [`SelectBuilder`] and adds JOIN/ON/USING/AS on top of it; every
/// SELECT clause method is forwarded.
///
/// # Example
/// ```
/// use sqlchain::{JoinBuilder, SqlBuilder};
///
/// let sql = JoinBuilder::new()
///     .select_all("Sales.OrderDetail")
///     .as_("sod")
///     .join("Sales.OrderHeader")
///     .as_("soh")
///     .on("sod.OrderID", "soh.OrderID")
///     .to_sql();
/// assert_eq!(
///     sql,
///     "SELECT * FROM Sales.OrderDetail AS sod JOIN Sales.OrderHeader AS soh ON sod.OrderID=soh.OrderID"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct JoinBuilder {
    select: SelectBuilder,
}

impl JoinBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            select: SelectBuilder::with_config(config),
        }
    }

    /// Continue building on top of an existing SELECT.
    pub fn from_select(select: SelectBuilder) -> Self {
        Self { select }
    }

    /// Give back the underlying SELECT builder.
    pub fn into_select(self) -> SelectBuilder {
        self.select
    }

    // ==================== JOIN ====================

    /// `JOIN table`
    pub fn join(mut self, table: &str) -> Self {
        self.select
            .buffer_mut()
            .push(&render_keyword("JOIN", table));
        self
    }

    /// `USING (a,b)`
    pub fn using<S: AsRef<str>>(mut self, fields: &[S]) -> Self {
        self.select
            .buffer_mut()
            .push_spaced(&render_field_list("USING", true, fields));
        self
    }

    /// `ON column1=column2`
    pub fn on(mut self, column1: &str, column2: &str) -> Self {
        self.select
            .buffer_mut()
            .push(&render_keyword("ON", &format!("{}={}", column1, column2)));
        self
    }

    /// `AS alias` for the table added just before.
    pub fn as_(mut self, alias: &str) -> Self {
        self.select.buffer_mut().push(&render_keyword("AS", alias));
        self
    }

    // ==================== Forwarded SELECT clauses ====================

    pub fn select<S: AsRef<str>>(self, fields: &[S]) -> Self {
        self.map(|s| s.select(fields))
    }

    pub fn select_distinct<S: AsRef<str>>(self, fields: &[S]) -> Self {
        self.map(|s| s.select_distinct(fields))
    }

    pub fn select_all(self, table: &str) -> Self {
        self.map(|s| s.select_all(table))
    }

    pub fn from(self, table: &str) -> Self {
        self.map(|s| s.from(table))
    }

    pub fn where_(self, cond: &str) -> Self {
        self.map(|s| s.where_(cond))
    }

    pub fn where_keyed(self, conds: &FragmentSet<Value>) -> Self {
        self.map(|s| s.where_keyed(conds))
    }

    pub fn where_in<I, T>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.map(|s| s.where_in(field, values))
    }

    pub fn and(self, cond: &str) -> Self {
        self.map(|s| s.and(cond))
    }

    pub fn or(self, cond: &str) -> Self {
        self.map(|s| s.or(cond))
    }

    pub fn order_by(self, field: &str) -> Self {
        self.map(|s| s.order_by(field))
    }

    pub fn group_by(self, field: &str) -> Self {
        self.map(|s| s.group_by(field))
    }

    pub fn asc(self) -> Self {
        self.map(SelectBuilder::asc)
    }

    pub fn desc(self) -> Self {
        self.map(SelectBuilder::desc)
    }

    pub fn offset(self, n: u64) -> Self {
        self.map(|s| s.offset(n))
    }

    pub fn limit(self, n: u64) -> Self {
        self.map(|s| s.limit(n))
    }

    pub fn clear(&mut self) {
        self.select.clear();
    }

    pub fn build_error(&self) -> Option<&RenderError> {
        self.select.build_error()
    }

    fn map(self, f: impl FnOnce(SelectBuilder) -> SelectBuilder) -> Self {
        Self {
            select: f(self.select),
        }
    }
}

impl SqlBuilder for JoinBuilder {
    fn kind(&self) -> &'static str {
        "join"
    }

    fn build_sql(&self) -> String {
        self.select.build_sql()
    }

    fn config(&self) -> &RenderConfig {
        self.select.config()
    }

    fn validate(&self) -> RenderResult<()> {
        self.select.validate()
    }
}

impl fmt::Display for JoinBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.select, f)
    }
}
