//! Commonly used types and traits.
//!
//! ```
//! use sqlchain::prelude::*;
//! ```

pub use crate::builder::{
    DeleteBuilder, InsertBuilder, JoinBuilder, SelectBuilder, SqlBuilder, UpdateBuilder,
};
pub use crate::clause::FragmentSet;
pub use crate::config::{RenderConfig, RenderPolicy};
pub use crate::error::{RenderError, RenderResult};
pub use crate::ops;
pub use crate::renderer::Renderer;
pub use crate::value::{Quoting, Value};
