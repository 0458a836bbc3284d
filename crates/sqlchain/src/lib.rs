//! # sqlchain
//!
//! Fluent string assembly for SQL statement text.
//!
//! sqlchain builds SELECT/INSERT/UPDATE/DELETE/JOIN text from ordered
//! fragments. It does not parse, validate or execute SQL, and it does not
//! escape anything: callers supply fragments that are already safe.
//!
//! ## Layers
//!
//! - **Values** ([`value`]): [`Value`] is a closed set of renderable shapes;
//!   [`render_value`] turns one into literal text under a [`Quoting`] mode.
//! - **Clauses** ([`clause`]): ordered or positioned collections
//!   ([`FragmentSet`]) rendered into clause text such as `" WHERE a b"`,
//!   `" VALUES(a),(b)"` or `" WHERE f IN(1,2)"`.
//! - **Builders** ([`builder`]): chained statement assembly on top of the
//!   clause layer.
//!
//! ## Example
//!
//! ```
//! use sqlchain::prelude::*;
//!
//! let conds: FragmentSet<Value> = FragmentSet::from([(1, "BarcodeID=22"), (0, "CategoryID=3 OR")]);
//! let sql = UpdateBuilder::new()
//!     .update("Stock.Product")
//!     .set("ProductName='Pakgen Bulbs'")
//!     .where_keyed(&conds)
//!     .build()?;
//! assert_eq!(
//!     sql,
//!     "UPDATE Stock.Product SET ProductName='Pakgen Bulbs' WHERE CategoryID=3 OR BarcodeID=22"
//! );
//! # Ok::<(), sqlchain::RenderError>(())
//! ```

pub mod builder;
pub mod clause;
pub mod config;
pub mod error;
pub mod ops;
pub mod prelude;
pub mod renderer;
pub mod value;

pub use builder::{
    DeleteBuilder, InsertBuilder, JoinBuilder, SelectBuilder, SqlBuilder, UpdateBuilder,
};
pub use clause::{
    CONTINUATION, FragmentSet, and_clause, limit_clause, offset_clause, or_clause, render_clause,
    render_field_list, render_in_clause, render_keyed_clause, render_keyword, render_value_list,
    where_clause,
};
pub use config::{RenderConfig, RenderPolicy};
pub use error::{RenderError, RenderResult};
pub use renderer::Renderer;
pub use value::{Quoting, Value, render_value};
