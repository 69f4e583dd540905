// Parser module: recognizes single-row INSERT statements and turns them into descriptors.

pub mod columns;
pub mod insert;

use crate::error::{InsertParseError, InsertParseResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Structural summary of a single-row INSERT: target table and column list.
///
/// Equality and hashing only look at `(table_name, columns)`; the source text
/// is carried along for diagnostics. Two descriptors that compare equal can be
/// merged into one multi-row statement.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InsertDescriptor {
    table_name: String,
    columns: Vec<String>,
    original_sql: String,
}

impl InsertDescriptor {
    /// Build a descriptor from already-cleaned parts.
    ///
    /// Fails if the table name is blank or there are no columns.
    pub fn new(
        table_name: impl Into<String>,
        columns: Vec<String>,
        original_sql: impl Into<String>,
    ) -> InsertParseResult<Self> {
        let table_name = table_name.into();
        if table_name.trim().is_empty() {
            return Err(InsertParseError::EmptyTableName);
        }
        if columns.is_empty() {
            return Err(InsertParseError::EmptyColumnList);
        }
        Ok(Self {
            table_name,
            columns,
            original_sql: original_sql.into(),
        })
    }

    /// Parse SQL text, reporting why it was rejected.
    pub fn parse(sql: &str) -> InsertParseResult<Self> {
        insert::describe(sql)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The trimmed statement this descriptor was parsed from.
    pub fn original_sql(&self) -> &str {
        &self.original_sql
    }

    /// True when the source statement holds at least one `?` placeholder.
    pub fn is_parametrized(&self) -> bool {
        self.original_sql.contains('?')
    }

    /// True when both statements target the same table with the same ordered columns.
    pub fn is_compatible_with(&self, other: &InsertDescriptor) -> bool {
        crate::batch::is_compatible(self, other)
    }
}

impl PartialEq for InsertDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.table_name == other.table_name && self.columns == other.columns
    }
}

impl Eq for InsertDescriptor {}

impl Hash for InsertDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table_name.hash(state);
        self.columns.hash(state);
    }
}

impl FromStr for InsertDescriptor {
    type Err = InsertParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Canonical single-row form, e.g. `INSERT INTO users (id, name) VALUES (?, ?)`.
impl fmt::Display for InsertDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_multi_row_sql(NonZeroUsize::MIN))
    }
}
