//! Statement splitting for SQL script text
//!
//! Splits a script into individual statements at delimiter boundaries,
//! ignoring delimiters inside single-quoted literals, `--` line comments,
//! and `/* */` block comments. A `-- @DELIMITER <d>` directive line switches
//! the active delimiter for the remainder of the script.

/// Statement delimiter used when a script declares none
pub const DEFAULT_DELIMITER: &str = ";";

/// Split `script` into statements, honoring quotes, comments, and
/// `-- @DELIMITER` directives. Blank statements are dropped; a trailing
/// fragment without a closing delimiter is emitted if non-blank.
pub fn split_statements(script: &str, default_delimiter: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut delimiter = default_delimiter.to_string();
    let mut in_quote = false;
    let mut in_block_comment = false;

    for line in script.lines() {
        if !in_quote && !in_block_comment {
            if let Some(new_delimiter) = delimiter_directive(line) {
                delimiter = new_delimiter;
                continue;
            }
        }

        let chars: Vec<char> = line.chars().collect();
        let mut in_line_comment = false;
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if in_block_comment {
                current.push(c);
                if c == '*' && chars.get(i + 1) == Some(&'/') {
                    current.push('/');
                    in_block_comment = false;
                    i += 2;
                    continue;
                }
                i += 1;
                continue;
            }
            if in_line_comment {
                current.push(c);
                i += 1;
                continue;
            }
            if in_quote {
                current.push(c);
                if c == '\'' {
                    // a doubled quote stays inside the literal
                    if chars.get(i + 1) == Some(&'\'') {
                        current.push('\'');
                        i += 2;
                        continue;
                    }
                    in_quote = false;
                }
                i += 1;
                continue;
            }
            match c {
                '\'' => {
                    in_quote = true;
                    current.push(c);
                    i += 1;
                }
                '-' if chars.get(i + 1) == Some(&'-') => {
                    in_line_comment = true;
                    current.push(c);
                    i += 1;
                }
                '/' if chars.get(i + 1) == Some(&'*') => {
                    in_block_comment = true;
                    current.push(c);
                    i += 1;
                }
                _ if starts_with_at(&chars, i, &delimiter) => {
                    push_statement(&mut statements, &mut current);
                    i += delimiter.chars().count();
                }
                _ => {
                    current.push(c);
                    i += 1;
                }
            }
        }
        current.push('\n');
    }
    push_statement(&mut statements, &mut current);
    statements
}

/// Parse a `-- @DELIMITER <d>` directive line (keyword case-insensitive).
fn delimiter_directive(line: &str) -> Option<String> {
    const KEYWORD: &str = "@DELIMITER";
    let rest = line.trim_start().strip_prefix("--")?.trim_start();
    let head = rest.get(..KEYWORD.len())?;
    let tail = &rest[KEYWORD.len()..];
    if !head.eq_ignore_ascii_case(KEYWORD) || !tail.starts_with(char::is_whitespace) {
        return None;
    }
    let token = tail.split_whitespace().next()?;
    Some(token.to_string())
}

fn starts_with_at(chars: &[char], i: usize, delimiter: &str) -> bool {
    let mut j = i;
    for d in delimiter.chars() {
        if chars.get(j) != Some(&d) {
            return false;
        }
        j += 1;
    }
    !delimiter.is_empty()
}

fn push_statement(statements: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
    current.clear();
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
