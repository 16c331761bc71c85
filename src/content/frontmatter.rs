//! Split a markdown document into YAML front matter and body.
//!
//! The front matter is a leading block opened by a `---` line and closed by a
//! `---` or `...` line. Everything after the closing line's terminator is the
//! body, byte for byte.

use serde_yaml::{Mapping, Value};
use tracing::warn;

/// Scalar metadata parsed from a front-matter block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata(Mapping);

impl Metadata {
    /// Wrap an already-parsed YAML mapping.
    pub fn from_mapping(mapping: Mapping) -> Self {
        Self(mapping)
    }

    /// Get a scalar value by top-level key, rendered as a string.
    ///
    /// Strings, numbers and booleans are returned; sequences, mappings and
    /// nulls are not scalars and yield `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        let v = self.0.get(Value::String(key.to_string()))?;
        match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(Value::String(key.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Top-level keys that are strings, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().filter_map(Value::as_str)
    }
}

/// A raw document split into metadata and body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub metadata: Metadata,
    pub body: String,
}

/// Parse raw document text into metadata and body.
///
/// Never fails. A document without a front-matter block has empty metadata
/// and its whole text as body. A block that is not a YAML mapping yields empty
/// metadata, but is still removed from the body.
pub fn parse_document(raw: &str) -> ParsedDocument {
    match split_frontmatter(raw) {
        Some((block, body)) => ParsedDocument {
            metadata: parse_metadata(block),
            body: body.to_string(),
        },
        None => ParsedDocument {
            metadata: Metadata::default(),
            body: raw.to_string(),
        },
    }
}

/// Locate the front-matter block. Returns `(block, body)` slices of `raw`, or
/// `None` if the document does not open with a complete block.
fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let content = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut pieces = content.split_inclusive('\n');

    let first = pieces.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for piece in pieces {
        let line_start = offset;
        offset += piece.len();
        if matches!(piece.trim_end(), "---" | "...") {
            return Some((&content[block_start..line_start], &content[offset..]));
        }
    }
    None
}

fn parse_metadata(block: &str) -> Metadata {
    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(mapping)) => Metadata(mapping),
        Ok(Value::Null) => Metadata::default(),
        Ok(other) => {
            warn!(kind = value_kind(&other), "front matter is not a mapping; ignoring it");
            Metadata::default()
        }
        Err(err) => {
            warn!(error = %err, "front matter is not valid YAML; ignoring it");
            Metadata::default()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
