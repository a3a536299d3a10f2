use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Failure to load a policy file as a string-keyed mapping.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The input looked like JSON and did not parse as JSON or YAML.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The input did not parse as YAML.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Policy file contents: rule or action name mapped to its raw expression.
///
/// Values stay untyped until the expression parser sees them, so shape
/// errors are reported against the entry that carries them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PolicyDocument {
    entries: BTreeMap<String, Value>,
}

impl PolicyDocument {
    /// Build a document from already-parsed entries.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Raw expression for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a YAML or JSON policy file.
///
/// Input that starts with `{` is tried as JSON first, then as a YAML flow
/// mapping. Empty documents (including a bare YAML `~`) yield no entries.
pub fn parse_document(input: &str) -> Result<PolicyDocument, DocumentError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(PolicyDocument::default());
    }

    if trimmed.starts_with('{') {
        return match serde_json::from_str::<PolicyDocument>(trimmed) {
            Ok(document) => Ok(document),
            Err(json_err) => parse_yaml(input).map_err(|_| DocumentError::Json(json_err)),
        };
    }

    parse_yaml(input)
}

fn parse_yaml(input: &str) -> Result<PolicyDocument, DocumentError> {
    let parsed: Option<PolicyDocument> = serde_yaml::from_str(input)?;
    Ok(parsed.unwrap_or_default())
}
