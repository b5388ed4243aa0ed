//! Schema entities as returned by the project API.
//!
//! These are read-only snapshots: the remote schema owns them, this client
//! only renders what it fetched.

use serde::{Deserialize, Serialize};

/// One column of a table or view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub format: String,
    pub is_nullable: bool,
    /// Column comment, absent when none was set on the remote schema.
    #[serde(default)]
    pub comment: Option<String>,
}

/// What kind of schema object an entity is.
///
/// Only base tables (plain or partitioned) accept column mutation through
/// this UI; views and foreign tables are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Table,
    PartitionedTable,
    View,
    MaterializedView,
    ForeignTable,
}

impl EntityKind {
    pub fn is_table_like(self) -> bool {
        matches!(self, Self::Table | Self::PartitionedTable)
    }
}

/// A table or view entity with its ordered column inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntity {
    pub id: u64,
    pub schema: String,
    pub name: String,
    pub kind: EntityKind,
    pub columns: Vec<Column>,
}

impl TableEntity {
    /// `schema.name`, the form used in error subjects and headings.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    pub fn is_table_like(&self) -> bool {
        self.kind.is_table_like()
    }
}
