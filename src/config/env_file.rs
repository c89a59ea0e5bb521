//! .env file parsing.
//!
//! This module parses environment variable files in the `KEY=value` format
//! used by the demo's `.env` and `.env.example`.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{RagCheckError, Result};

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`, and `KEY=value # trailing` for unquoted values
/// - Shell style: `export KEY=value`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// When a key repeats, the last assignment wins.
///
/// # Example
///
/// ```
/// use ragcheck::config::EnvFileParser;
///
/// let content = r#"
/// # OpenAI
/// OPENAI_API_KEY=sk-abc123
/// export MODEL="gpt-4o-mini"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("OPENAI_API_KEY"), Some(&"sk-abc123".to_string()));
/// assert_eq!(vars.get("MODEL"), Some(&"gpt-4o-mini".to_string()));
/// assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    ///
    /// Lines that are not assignments are ignored.
    pub fn parse(content: &str) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    /// Parse a single line.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return None;
        }

        Some((key.to_string(), Self::unquote(value.trim())))
    }

    /// Remove surrounding quotes from a value, or a trailing comment from an
    /// unquoted one.
    fn unquote(value: &str) -> String {
        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) {
                if let Some(end) = value[1..].find(quote) {
                    return value[1..end + 1].to_string();
                }
            }
        }

        match value.find(" #") {
            Some(pos) => value[..pos].trim_end().to_string(),
            None => value.to_string(),
        }
    }

    /// Load and parse an env file from a path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ragcheck::config::EnvFileParser;
    /// use std::path::Path;
    ///
    /// let vars = EnvFileParser::load(Path::new(".env")).unwrap();
    /// for key in vars.keys() {
    ///     println!("{}", key);
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content =
            std::fs::read_to_string(path).map_err(|source| RagCheckError::EnvFileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::parse(&content))
    }
}
