// Script splitter: breaks a SQL script into statements on `;`.
// Semicolons inside single quotes, double quotes or backticks do not split,
// and a backslash escapes the next character. Comments are not recognized.

/// Split `script` into trimmed, non-empty statements without their trailing `;`.
pub fn split_statements(script: &str) -> Vec<String> {
    let mut splitter = StatementSplitter::new();
    for c in script.chars() {
        splitter.push(c);
    }
    splitter.finish()
}

// Tracks quoting state across characters.
struct StatementSplitter {
    buffer: String,
    statements: Vec<String>,
    in_single_quote: bool,
    in_double_quote: bool,
    in_backtick: bool,
    escape_next: bool,
}

impl StatementSplitter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            statements: Vec::new(),
            in_single_quote: false,
            in_double_quote: false,
            in_backtick: false,
            escape_next: false,
        }
    }

    fn quoted(&self) -> bool {
        self.in_single_quote || self.in_double_quote || self.in_backtick
    }

    fn push(&mut self, c: char) {
        if self.escape_next {
            self.escape_next = false;
            self.buffer.push(c);
            return;
        }
        match c {
            '\\' => self.escape_next = true,
            '\'' if !self.in_double_quote && !self.in_backtick => {
                self.in_single_quote = !self.in_single_quote
            }
            '"' if !self.in_single_quote && !self.in_backtick => {
                self.in_double_quote = !self.in_double_quote
            }
            '`' if !self.in_single_quote && !self.in_double_quote => {
                self.in_backtick = !self.in_backtick
            }
            ';' if !self.quoted() => {
                self.flush();
                return;
            }
            _ => {}
        }
        self.buffer.push(c);
    }

    fn flush(&mut self) {
        let stmt = self.buffer.trim();
        if !stmt.is_empty() {
            self.statements.push(stmt.to_string());
        }
        self.buffer.clear();
    }

    // Anything left after the last `;` is kept (best effort, even if a quote is unterminated).
    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.statements
    }
}
