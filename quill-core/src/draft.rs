//! The accumulated, not-yet-rendered query specification

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Filter fragments, combined with AND when rendered.
///
/// Append-only: fragments keep call order and there is no way to remove or
/// reorder one once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conditions(Vec<String>);

impl Conditions {
    pub fn push(&mut self, condition: String) {
        self.0.push(condition);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

/// Single ORDER BY slot; every `order_by` call overwrites both tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSlot {
    pub field: String,
    pub direction: String,
}

impl OrderSlot {
    /// True while both the field and the direction are empty
    pub fn is_unset(&self) -> bool {
        self.field.is_empty() && self.direction.is_empty()
    }
}

/// Query draft owned by a [`SelectBuilder`](crate::SelectBuilder)
///
/// Deserializing goes through the same table check as [`QueryDraft::new`],
/// so a draft with a blank table cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDraft")]
pub struct QueryDraft {
    table: String,
    pub(crate) columns: Vec<String>,
    pub(crate) conditions: Conditions,
    pub(crate) order: OrderSlot,
    pub(crate) limit: Option<u64>,
}

/// Unchecked wire shape of a [`QueryDraft`]
#[derive(Deserialize)]
struct RawDraft {
    table: String,
    columns: Vec<String>,
    conditions: Conditions,
    order: OrderSlot,
    limit: Option<u64>,
}

impl TryFrom<RawDraft> for QueryDraft {
    type Error = Error;

    fn try_from(raw: RawDraft) -> Result<Self> {
        validate_table(&raw.table)?;
        Ok(Self {
            table: raw.table,
            columns: raw.columns,
            conditions: raw.conditions,
            order: raw.order,
            limit: raw.limit,
        })
    }
}

impl QueryDraft {
    /// Create an empty draft for `table`, rejecting blank names
    pub fn new(table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        validate_table(&table)?;

        Ok(Self {
            table,
            columns: Vec::new(),
            conditions: Conditions::default(),
            order: OrderSlot::default(),
            limit: None,
        })
    }

    /// Restore a draft from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDraft = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Snapshot the draft as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    pub fn order(&self) -> &OrderSlot {
        &self.order
    }

    /// The requested row limit, if `limit` was ever called
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }
}

fn validate_table(table: &str) -> Result<()> {
    if table.trim().is_empty() {
        tracing::warn!(target: "quill::builder", "rejected empty table name");
        return Err(Error::invalid_argument("table name must not be empty"));
    }
    Ok(())
}
