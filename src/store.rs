use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Immutable mapping from question number to its text, loaded once at startup.
///
/// Keys are opaque numeric strings; lookup is plain string equality. The
/// content blob optionally carries a question and an answer separated by a
/// blank line (see `format::format_entry`).
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct QuestionStore {
    entries: BTreeMap<String, String>,
}

impl QuestionStore {
    /// Read and parse the questions file. Any failure here is fatal: the bot
    /// cannot serve a single request without the store.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read questions file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("malformed questions file {}", path.display()))
    }

    /// Parse a JSON object mapping question numbers to content strings.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn lookup(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Entries whose content contains `query` case-insensitively, in key
    /// order. The ordering is deterministic but carries no meaning.
    pub fn search(&self, query: &str) -> Vec<(&str, &str)> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, content)| content.to_lowercase().contains(&query))
            .map(|(id, content)| (id.as_str(), content.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
