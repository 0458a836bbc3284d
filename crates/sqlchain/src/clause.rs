//! Clause assembly.
//!
//! Turns ordered collections of values or field names into clause text. Every
//! function here is pure: inputs are borrowed, a new `String` is returned, and
//! an empty input produces an empty string (no keyword is emitted), so callers
//! can chain clause calls without checking for emptiness first.
//!
//! Output grammar is fixed: one leading space before each injected keyword, no
//! trailing space, and `,` with no surrounding spaces between list items.
//!
//! Items that render to empty text are skipped by the keyed and IN clauses.
//!
//! The value-rendering functions here always use the strict policy; use a
//! [`Renderer`](crate::Renderer) to render under a configured policy.

mod fragments;

pub use fragments::FragmentSet;

use crate::error::RenderResult;
use crate::value::{Quoting, Value, render_value};

/// Prefix that continues a previous group list (`,(...)`) instead of opening
/// a new keyword clause.
pub const CONTINUATION: &str = ",";

/// Render a keyed clause in ascending position order.
///
/// Without `parenthesize_each` the items are space-separated after the prefix
/// (`" WHERE a b"`); with it each item is wrapped in parentheses and the groups
/// are comma-separated (`" VALUES(a),(b)"`). When `prefix` is [`CONTINUATION`]
/// it is emitted bare, with no leading space.
///
/// Fragments are pre-rendered SQL, so they are always rendered unquoted. The
/// `quoting` argument is accepted for parity with the other renderers and has
/// no effect on the output.
///
/// ```
/// use sqlchain::{FragmentSet, Quoting, Value, render_keyed_clause};
///
/// let conds: FragmentSet<Value> =
///     FragmentSet::from([(1, "BarcodeID=22"), (0, "CategoryID=3 OR")]);
/// assert_eq!(
///     render_keyed_clause("WHERE", &conds, false, Quoting::Quoted)?,
///     " WHERE CategoryID=3 OR BarcodeID=22"
/// );
/// # Ok::<(), sqlchain::RenderError>(())
/// ```
pub fn render_keyed_clause(
    prefix: &str,
    fragments: &FragmentSet<Value>,
    parenthesize_each: bool,
    quoting: Quoting,
) -> RenderResult<String> {
    render_clause(prefix, fragments.values(), parenthesize_each, quoting)
}

/// Sequence form of [`render_keyed_clause`]: items are taken in iteration order.
///
/// Like the keyed form, items are always rendered unquoted.
pub fn render_clause<'a, I>(
    prefix: &str,
    items: I,
    parenthesize_each: bool,
    _quoting: Quoting,
) -> RenderResult<String>
where
    I: IntoIterator<Item = &'a Value>,
{
    clause_with(prefix, items, parenthesize_each, |v| {
        render_value(v, Quoting::Unquoted)
    })
}

/// Render a keyed set as a bare comma list: `a,b,c`.
pub fn render_value_list(fragments: &FragmentSet<Value>, quoting: Quoting) -> RenderResult<String> {
    value_list_with(fragments.values(), |v| render_value(v, quoting))
}

/// Render `" WHERE field IN(v1,v2,...)"`.
///
/// Integers stay unquoted even under [`Quoting::Quoted`].
pub fn render_in_clause(field: &str, values: &[Value], quoting: Quoting) -> RenderResult<String> {
    in_clause_with(field, values, |v| render_value(v, quoting))
}

/// Render a list of already-textual names: `prefix a,b,c`.
///
/// With `parenthesize` the list is wrapped: `prefix (a,b,c)`. Names are never
/// quoted. An empty prefix yields a leading space (`" (a,b)"`), which is how
/// the INSERT column list is attached.
pub fn render_field_list<S: AsRef<str>>(prefix: &str, parenthesize: bool, fields: &[S]) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let joined = join_with(fields.iter().map(|f| f.as_ref()), ",");
    if parenthesize {
        format!("{} ({})", prefix, joined)
    } else {
        format!("{} {}", prefix, joined)
    }
}

/// Render a single-keyword clause: `" KEYWORD text"`.
pub fn render_keyword(keyword: &str, text: &str) -> String {
    format!(" {} {}", keyword, text)
}

/// `" WHERE cond"`
pub fn where_clause(cond: &str) -> String {
    render_keyword("WHERE", cond)
}

/// `" AND cond"`
pub fn and_clause(cond: &str) -> String {
    render_keyword("AND", cond)
}

/// `" OR cond"`
pub fn or_clause(cond: &str) -> String {
    render_keyword("OR", cond)
}

/// `" OFFSET n"`
pub fn offset_clause(n: u64) -> String {
    render_keyword("OFFSET", &n.to_string())
}

/// `" LIMIT n"`
pub fn limit_clause(n: u64) -> String {
    render_keyword("LIMIT", &n.to_string())
}

// ==================== Shared assembly ====================

pub(crate) fn clause_with<'a, I, F>(
    prefix: &str,
    items: I,
    parenthesize_each: bool,
    mut render: F,
) -> RenderResult<String>
where
    I: IntoIterator<Item = &'a Value>,
    F: FnMut(&Value) -> RenderResult<String>,
{
    let parts = non_empty_parts(items, &mut render)?;
    if parts.is_empty() {
        return Ok(String::new());
    }

    let mut sql = if prefix == CONTINUATION {
        prefix.to_string()
    } else {
        format!(" {}", prefix)
    };

    if parenthesize_each {
        sql.push_str(&join_with(parts.iter().map(|p| format!("({})", p)), ","));
    } else {
        for part in &parts {
            sql.push(' ');
            sql.push_str(part);
        }
    }
    Ok(sql)
}

pub(crate) fn value_list_with<'a, I, F>(items: I, mut render: F) -> RenderResult<String>
where
    I: IntoIterator<Item = &'a Value>,
    F: FnMut(&Value) -> RenderResult<String>,
{
    let parts = items
        .into_iter()
        .map(&mut render)
        .collect::<RenderResult<Vec<_>>>()?;
    Ok(parts.join(","))
}

pub(crate) fn in_clause_with<F>(field: &str, values: &[Value], render: F) -> RenderResult<String>
where
    F: FnMut(&Value) -> RenderResult<String>,
{
    let parts = non_empty_parts(values, render)?;
    if parts.is_empty() {
        return Ok(String::new());
    }
    Ok(format!(" WHERE {} IN({})", field, parts.join(",")))
}

/// Rendered items with empty text dropped, so a clause whose items all render
/// empty emits no keyword and no dangling separator.
fn non_empty_parts<'a, I, F>(items: I, mut render: F) -> RenderResult<Vec<String>>
where
    I: IntoIterator<Item = &'a Value>,
    F: FnMut(&Value) -> RenderResult<String>,
{
    let mut parts = Vec::new();
    for item in items {
        let part = render(item)?;
        if !part.is_empty() {
            parts.push(part);
        }
    }
    Ok(parts)
}

fn join_with<I, S>(items: I, sep: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(item.as_ref());
    }
    out
}
