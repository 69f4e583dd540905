// INSERT matcher: recognizes `INSERT INTO table (cols) VALUES (` and builds descriptors.
// The value tuple and anything after the first `VALUES (` is never looked at.

use crate::error::{InsertParseError, InsertParseResult};
use crate::parser::columns::split_columns;
use crate::parser::InsertDescriptor;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

// Table token is word characters, backticks and dots (`schema`.`t`); the column
// group stops at the first ')' and must be followed by whitespace before VALUES.
static INSERT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*INSERT\s+INTO\s+([\w`.]+)\s*\(([^)]*)\)\s+VALUES\s*\(")
        .expect("valid insert regex")
});

static INSERT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*INSERT\s+INTO\s").expect("valid insert prefix regex"));

/// Raw pieces captured by the matcher, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertMatch<'a> {
    /// Table token as written, including any backticks or schema prefix.
    pub table: &'a str,
    /// Everything between the column-list parentheses, uncleaned.
    pub columns: &'a str,
}

/// Match the `INSERT INTO <table> (<columns>) VALUES (` prefix of a statement.
pub fn match_insert(sql: &str) -> InsertParseResult<InsertMatch<'_>> {
    if sql.trim().is_empty() {
        return Err(InsertParseError::Blank);
    }
    let Some(caps) = INSERT_RE.captures(sql) else {
        if INSERT_PREFIX_RE.is_match(sql) {
            return Err(InsertParseError::Malformed);
        }
        return Err(InsertParseError::NotAnInsert);
    };
    match (caps.get(1), caps.get(2)) {
        (Some(table), Some(columns)) => Ok(InsertMatch {
            table: table.as_str(),
            columns: columns.as_str(),
        }),
        _ => Err(InsertParseError::Malformed),
    }
}

// Matcher + column parser. Either a complete descriptor or an error, never in between.
pub(crate) fn describe(sql: &str) -> InsertParseResult<InsertDescriptor> {
    let result = match_insert(sql).and_then(|m| {
        InsertDescriptor::new(m.table.trim(), split_columns(m.columns), sql.trim())
    });
    match &result {
        Ok(info) => trace!(
            table = info.table_name(),
            columns = info.column_count(),
            "parsed INSERT"
        ),
        Err(e) => debug!(reason = %e, "statement is not a batchable INSERT"),
    }
    result
}

/// Parse a single-row INSERT with an explicit column list.
///
/// Returns `None` for anything that is not of the form
/// `INSERT INTO <table> (<columns>) VALUES (...)`, including blank input and
/// column lists that are empty once cleaned. Use [`InsertDescriptor::parse`]
/// to learn why a statement was rejected.
///
/// ```
/// use insert_batch::parse_insert;
///
/// let info = parse_insert("insert into Users (`ID`, Name) values (?, ?)").unwrap();
/// assert_eq!(info.table_name(), "Users");
/// assert_eq!(info.columns(), ["ID", "Name"]);
/// ```
pub fn parse_insert(sql: &str) -> Option<InsertDescriptor> {
    describe(sql).ok()
}

/// True when the statement parses as an INSERT and contains at least one `?`.
///
/// The `?` may appear anywhere in the text, not only in the VALUES tuple.
pub fn is_parametrized_insert(sql: &str) -> bool {
    parse_insert(sql).is_some_and(|info| info.is_parametrized())
}
