//! Manifest document parsing

use crate::graph::Link;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while decoding a manifest document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A flow-graph manifest: a mapping with a `links` sequence.
///
/// Anything else in the document is ignored. A document that is not a
/// mapping, lacks `links`, or whose `links` is not a sequence fails to
/// decode; callers assembling tables treat that as "no data" rather
/// than an error.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowDocument {
    /// Edge records of the graph
    pub links: Vec<Link>,
}

impl FlowDocument {
    /// Decode a manifest from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_yaml::from_str(content)?)
    }
}
