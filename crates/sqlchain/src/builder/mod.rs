//! Fluent statement builders.
//!
//! Each builder owns a private text buffer and appends one clause per chained
//! call, in call order. Values are rendered through the builder's
//! [`Renderer`](crate::Renderer); a render failure is recorded (first error
//! wins) and reported by [`SqlBuilder::build`], while
//! [`SqlBuilder::to_sql`] always returns the text assembled so far.
//!
//! Builders are plain owned values. Chained methods take `self` and return
//! it, so a builder has exactly one writer at a time.

mod buffer;
pub mod delete;
pub mod insert;
pub mod join;
pub mod select;
pub mod traits;
pub mod update;

pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use join::JoinBuilder;
pub use select::SelectBuilder;
pub use traits::SqlBuilder;
pub use update::UpdateBuilder;
