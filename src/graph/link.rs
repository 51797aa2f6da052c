//! Link: one directed edge of a data-flow graph

use indexmap::IndexMap;
use serde::Deserialize;

/// Purpose metadata attached to a link: category name to the purpose
/// entries declared under it. Document order of both categories and
/// entries is preserved so the joined category string is reproducible.
pub type Purposes = IndexMap<String, Vec<String>>;

/// A directed edge of the flow graph as it appears in a manifest.
///
/// `source` and `target` name the endpoint nodes. A link is only usable
/// when both endpoints are non-empty; anything else is skipped rather
/// than rejected. `purposes` and `text` are optional in the document and
/// default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// Node this link originates from
    #[serde(default)]
    pub source: String,
    /// Node this link points at
    #[serde(default)]
    pub target: String,
    /// Purpose categories carried by this link
    #[serde(default)]
    pub purposes: Purposes,
    /// Free-text lines associated with this link
    #[serde(default)]
    pub text: Vec<String>,
}

impl Link {
    /// Create a bare link between two nodes
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            purposes: Purposes::new(),
            text: Vec::new(),
        }
    }

    /// Attach purpose entries under a category
    pub fn with_purpose(mut self, category: impl Into<String>, entries: Vec<&str>) -> Self {
        self.purposes.insert(
            category.into(),
            entries.into_iter().map(String::from).collect(),
        );
        self
    }

    /// Attach free-text lines
    pub fn with_text(mut self, lines: Vec<&str>) -> Self {
        self.text = lines.into_iter().map(String::from).collect();
        self
    }

    /// A link is usable only when both endpoints are named
    pub fn is_usable(&self) -> bool {
        !self.source.is_empty() && !self.target.is_empty()
    }
}
