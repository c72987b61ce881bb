//! Quill Core - a fluent builder for SQL SELECT statements
//!
//! Partial specifications (columns, filters, ordering, row limit) accumulate
//! across chained calls and are only assembled into a SQL string when the
//! query is rendered. Nothing is parsed, escaped or executed.

pub mod builder;
pub mod direction;
pub mod draft;
pub mod error;

// Re-export main types
pub use builder::{IntoColumns, QueryBuilder, RenderStyle, SelectBuilder};
pub use direction::{IntoDirection, SortDirection};
pub use draft::{Conditions, OrderSlot, QueryDraft};
pub use error::{Error, Result};

/// Create a new SELECT builder for the given table
///
/// # Examples
/// ```
/// use quill_core::{from, QueryBuilder};
///
/// let query = from("bank")?.where_("name = samuel").limit(1);
/// assert_eq!(query.to_sql(), "SELECT * FROM bank WHERE name = samuel ORDER BY   LIMIT 1");
/// assert!(from("").is_err());
/// # Ok::<(), quill_core::Error>(())
/// ```
pub fn from(table: &str) -> Result<SelectBuilder> {
    SelectBuilder::new(table)
}
