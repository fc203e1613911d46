//! Parser for the `KEY=VALUE` runtime env file format.
//!
//! Responsibilities:
//! - Turn file text into a flat `EnvMap` in a single line-oriented pass.
//!
//! Does NOT handle:
//! - Reading the file (see `env_loader.rs`).
//! - Escapes, multi-line values, variable expansion, or `export` prefixes.
//!
//! Invariants:
//! - Lines are split on `\n`; blank lines and lines starting with `#` are skipped.
//! - The first `=` separates key from value; lines without `=` are skipped.
//! - Keys are trimmed and case-sensitive; an empty key skips the line.
//! - Values are trimmed, then one matching pair of `"` or `'` is stripped.
//! - Duplicate keys resolve last-write-wins.
//! - Parsing never fails.

use std::collections::BTreeMap;

/// Parsed env file contents, keyed by variable name.
pub type EnvMap = BTreeMap<String, String>;

/// Parse env file text into an `EnvMap`.
pub fn parse_env(content: &str) -> EnvMap {
    let mut vars = EnvMap::new();
    for line in content.split('\n') {
        if let Some((key, value)) = parse_line(line) {
            vars.insert(key.to_string(), value.to_string());
        }
    }
    vars
}

/// Parse a single line, returning `None` for lines that carry no assignment.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    if line.trim().is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key, strip_quotes(value.trim())))
}

/// Strip one matching pair of surrounding quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
