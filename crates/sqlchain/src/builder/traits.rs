use crate::config::RenderConfig;
use crate::error::RenderResult;

/// Base trait for statement builders.
pub trait SqlBuilder {
    /// Statement kind, used in log output.
    fn kind(&self) -> &'static str;

    /// The SQL text assembled so far.
    fn build_sql(&self) -> String;

    /// Configuration the builder renders values with.
    fn config(&self) -> &RenderConfig;

    /// Debug helper.
    fn to_sql(&self) -> String {
        self.build_sql()
    }

    /// Validate builder state.
    fn validate(&self) -> RenderResult<()> {
        Ok(())
    }

    /// Validate, then return the finished SQL text.
    fn build(&self) -> RenderResult<String> {
        self.validate()?;
        let sql = self.build_sql();
        if self.config().log_rendered_sql {
            tracing::debug!(target: "sqlchain.sql", kind = self.kind(), sql = %sql, "built statement");
        }
        Ok(sql)
    }
}
