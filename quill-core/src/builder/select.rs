//! SELECT query builder implementation

use std::fmt;

use super::{IntoColumns, QueryBuilder, RenderStyle};
use crate::direction::{IntoDirection, SortDirection};
use crate::draft::QueryDraft;
use crate::Result;

/// SELECT query builder
///
/// Every mutator consumes the builder and hands it back, so calls chain in
/// program order. Rendering borrows, so a builder can be rendered, mutated
/// and rendered again.
///
/// # Examples
/// ```
/// use quill_core::{from, QueryBuilder};
///
/// let sql = from("users")?
///     .select(("id", "name", "email"))
///     .where_("age > 18")
///     .where_("country = 'Cri'")
///     .order_by("name", "ASC")
///     .limit(10)
///     .to_sql();
///
/// assert_eq!(
///     sql,
///     "SELECT id, name, email FROM users WHERE age > 18 AND country = 'Cri' ORDER BY name ASC LIMIT 10"
/// );
/// # Ok::<(), quill_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SelectBuilder {
    draft: QueryDraft,
    style: RenderStyle,
}

impl SelectBuilder {
    /// Create a new SELECT query builder for `table`
    ///
    /// Blank table names are rejected with [`Error::InvalidArgument`](crate::Error::InvalidArgument).
    pub fn new(table: &str) -> Result<Self> {
        Ok(Self::from_draft(QueryDraft::new(table)?))
    }

    /// Wrap an existing draft, e.g. one restored with [`QueryDraft::from_json`]
    ///
    /// Drafts can only be built or deserialized with a non-blank table, so
    /// there is nothing left to check here.
    pub fn from_draft(draft: QueryDraft) -> Self {
        Self {
            draft,
            style: RenderStyle::default(),
        }
    }

    /// Replace the projected columns
    ///
    /// The last call wins; columns from earlier calls are discarded, not
    /// appended to. An empty list renders as `SELECT *`.
    pub fn select<T>(mut self, columns: T) -> Self
    where
        T: IntoColumns,
    {
        self.set_columns(columns);
        self
    }

    /// Select all columns (equivalent to `select(())`)
    pub fn select_all(self) -> Self {
        self.select(())
    }

    /// Add a WHERE fragment, ANDed with any previous ones
    ///
    /// The fragment is copied into the query as-is, without parsing or escaping.
    pub fn where_(mut self, condition: impl Into<String>) -> Self {
        self.push_where(condition);
        self
    }

    /// Add an AND WHERE fragment (same as where_)
    pub fn and_where(self, condition: impl Into<String>) -> Self {
        self.where_(condition)
    }

    /// Set the ORDER BY field and direction, replacing any earlier ordering
    pub fn order_by<D>(mut self, field: &str, direction: D) -> Self
    where
        D: IntoDirection,
    {
        self.set_order(field, direction);
        self
    }

    /// Order by `field` ascending
    pub fn order_by_asc(self, field: &str) -> Self {
        self.order_by(field, SortDirection::Asc)
    }

    /// Order by `field` descending
    pub fn order_by_desc(self, field: &str) -> Self {
        self.order_by(field, SortDirection::Desc)
    }

    /// Set the LIMIT clause, replacing any earlier limit
    pub fn limit(mut self, limit: u64) -> Self {
        self.set_limit(limit);
        self
    }

    /// Choose how unset clauses are rendered
    pub fn style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the projected columns in place
    pub fn set_columns<T>(&mut self, columns: T) -> &mut Self
    where
        T: IntoColumns,
    {
        self.draft.columns = columns.into_columns();
        tracing::trace!(target: "quill::builder", columns = ?self.draft.columns, "select");
        self
    }

    /// Append a WHERE fragment in place
    pub fn push_where(&mut self, condition: impl Into<String>) -> &mut Self {
        let condition = condition.into();
        tracing::trace!(target: "quill::builder", %condition, "where");
        self.draft.conditions.push(condition);
        self
    }

    /// Overwrite the ORDER BY slot in place
    pub fn set_order<D>(&mut self, field: &str, direction: D) -> &mut Self
    where
        D: IntoDirection,
    {
        self.draft.order.field = field.to_string();
        self.draft.order.direction = direction.into_direction();
        tracing::trace!(
            target: "quill::builder",
            field = %self.draft.order.field,
            direction = %self.draft.order.direction,
            "order_by"
        );
        self
    }

    /// Overwrite the LIMIT in place
    pub fn set_limit(&mut self, limit: u64) -> &mut Self {
        self.draft.limit = Some(limit);
        tracing::trace!(target: "quill::builder", limit, "limit");
        self
    }

    /// Read-only view of the accumulated draft
    pub fn draft(&self) -> &QueryDraft {
        &self.draft
    }

    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    fn projection_clause(&self) -> String {
        if self.draft.columns.is_empty() {
            "SELECT * FROM".to_string()
        } else {
            format!("SELECT {} FROM", self.draft.columns.join(", "))
        }
    }

    fn where_clause(&self) -> Option<String> {
        if self.draft.conditions.is_empty() {
            None
        } else {
            Some(format!("WHERE {}", self.draft.conditions.as_slice().join(" AND ")))
        }
    }

    fn order_clause(&self) -> String {
        format!("ORDER BY {} {}", self.draft.order.field, self.draft.order.direction)
    }

    /// ORDER BY with empty tokens dropped, so a lone direction still shows
    fn compact_order_clause(&self) -> String {
        let order = &self.draft.order;
        let mut clause = "ORDER BY".to_string();
        for token in [&order.field, &order.direction] {
            if !token.is_empty() {
                clause.push(' ');
                clause.push_str(token);
            }
        }
        clause
    }

    fn limit_clause(&self) -> String {
        format!("LIMIT {}", self.draft.limit.unwrap_or(0))
    }
}

impl QueryBuilder for SelectBuilder {
    fn to_sql(&self) -> String {
        let mut clauses = vec![self.projection_clause(), self.draft.table().to_string()];

        match self.style {
            RenderStyle::Verbatim => {
                // Empty slots are kept so the separators stay in place.
                clauses.push(self.where_clause().unwrap_or_default());
                clauses.push(self.order_clause());
                clauses.push(self.limit_clause());
            }
            RenderStyle::Compact => {
                clauses.extend(self.where_clause());
                if !self.draft.order.is_unset() {
                    clauses.push(self.compact_order_clause());
                }
                if self.draft.limit.is_some() {
                    clauses.push(self.limit_clause());
                }
            }
        }

        let sql = clauses.join(" ");
        tracing::debug!(target: "quill::builder", style = ?self.style, %sql, "rendered query");
        sql
    }

    fn clone_builder(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for SelectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
