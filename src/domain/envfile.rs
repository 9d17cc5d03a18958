//! Client `.env` file parsing

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Environment file in the client home, written by the client setup scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientEnvFile {
    /// Path to this env file
    pub path: PathBuf,
    /// Parsed variables
    pub variables: BTreeMap<String, String>,
}

impl ClientEnvFile {
    /// Parse env file content.
    ///
    /// Accepts `KEY=value` and `export KEY=value` lines. Blank lines and
    /// `#` comments are skipped.
    pub fn parse(content: &str, path: PathBuf) -> Self {
        let mut variables = BTreeMap::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let assignment = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            if let Some((key, value)) = parse_env_line(assignment) {
                if !key.is_empty() {
                    variables.insert(key.to_string(), value);
                }
            }
        }

        Self { path, variables }
    }

    /// Value for `key`, `None` when absent or empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Parse a single assignment.
/// Returns (key, value) with trailing comments and quotes stripped from value.
fn parse_env_line(line: &str) -> Option<(&str, String)> {
    let (key, value) = line.split_once('=')?;
    let value = strip_trailing_comment(value);
    Some((key.trim(), strip_quotes(value)))
}

/// Strip trailing comment from a value, respecting quotes.
/// `'value'  # comment` → `'value'`
/// `'val#ue'` → `'val#ue'`
fn strip_trailing_comment(s: &str) -> &str {
    let s = s.trim();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for (i, b) in s.bytes().enumerate() {
        match b {
            b'\'' if !in_double_quote => in_single_quote = !in_single_quote,
            b'"' if !in_single_quote => in_double_quote = !in_double_quote,
            b'#' if !in_single_quote && !in_double_quote => {
                return s[..i].trim_end();
            }
            _ => {}
        }
    }
    s
}

fn strip_quotes(s: &str) -> String {
    let s = s.trim();
    let quoted = s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')));
    if quoted {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}
