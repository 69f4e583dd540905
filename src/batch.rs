// Batch helpers: decide whether two INSERTs can share a statement and build the
// combined multi-row SQL. Bound values are the caller's business; we only emit `?`.

use crate::error::{BatchError, BatchResult};
use crate::parser::InsertDescriptor;
use std::num::NonZeroUsize;

/// Two descriptors can be merged when table and ordered columns match exactly.
///
/// Comparison is case-sensitive and does not look at the original SQL text.
pub fn is_compatible(a: &InsertDescriptor, b: &InsertDescriptor) -> bool {
    a.table_name() == b.table_name() && a.columns() == b.columns()
}

/// Build `INSERT INTO t (c1, c2) VALUES (?, ?), (?, ?), ...` with `rows` tuples.
///
/// Returns an error when there is no descriptor or `rows` is not positive.
///
/// ```
/// use insert_batch::{generate_multi_row_insert, parse_insert};
///
/// let info = parse_insert("INSERT INTO users (id, name) VALUES (?, ?)");
/// let sql = generate_multi_row_insert(info.as_ref(), 2).unwrap();
/// assert_eq!(sql, "INSERT INTO users (id, name) VALUES (?, ?), (?, ?)");
/// ```
pub fn generate_multi_row_insert(
    descriptor: Option<&InsertDescriptor>,
    rows: i64,
) -> BatchResult<String> {
    let descriptor = descriptor.ok_or(BatchError::MissingDescriptor)?;
    let rows = usize::try_from(rows)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(BatchError::InvalidRowCount(rows))?;
    Ok(descriptor.to_multi_row_sql(rows))
}

impl InsertDescriptor {
    /// Canonical multi-row SQL for this descriptor, single-space separated.
    pub fn to_multi_row_sql(&self, rows: NonZeroUsize) -> String {
        let tuple = format!("({})", vec!["?"; self.column_count()].join(", "));
        let values = vec![tuple.as_str(); rows.get()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES {}",
            self.table_name(),
            self.columns().join(", "),
            values
        )
    }
}
