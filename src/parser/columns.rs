// Column list parser: cleans the text found between the column-list parentheses.

/// Split a raw column list into column names.
///
/// Each comma-separated token is trimmed and loses exactly one pair of
/// wrapping backticks. Empty tokens are dropped; order and duplicates are kept.
///
/// Known limitation: the split is on every comma, so a quoted identifier that
/// contains a comma (`` `a,b` ``) comes out as two tokens.
pub fn split_columns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| strip_backticks(token.trim()))
        .filter(|col| !col.is_empty())
        .map(str::to_string)
        .collect()
}

// Only a matched pair is removed; other quote styles are left alone.
fn strip_backticks(token: &str) -> &str {
    token
        .strip_prefix('`')
        .and_then(|t| t.strip_suffix('`'))
        .unwrap_or(token)
}
