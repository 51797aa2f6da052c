//! Adjacency structure built from a manifest's link list

use super::link::{Link, Purposes};
use std::collections::HashMap;

/// Adjacency mapping of a flow graph.
///
/// Maps each source node to its outgoing `(target, purposes)` pairs in
/// the order the links appear in the document. Links with an empty
/// endpoint are skipped, and malformed metadata never fails the build.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    outgoing: HashMap<String, Vec<(String, Purposes)>>,
}

impl Adjacency {
    /// Build the adjacency mapping from an ordered link list
    pub fn build(links: &[Link]) -> Self {
        let mut outgoing: HashMap<String, Vec<(String, Purposes)>> = HashMap::new();
        for link in links {
            if !link.is_usable() {
                continue;
            }
            outgoing
                .entry(link.source.clone())
                .or_default()
                .push((link.target.clone(), link.purposes.clone()));
        }
        Self { outgoing }
    }

    /// Outgoing `(target, purposes)` pairs of a node, empty if unknown
    pub fn neighbors(&self, node: &str) -> &[(String, Purposes)] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the node appears as a source of at least one link
    pub fn contains(&self, node: &str) -> bool {
        self.outgoing.contains_key(node)
    }

    /// Number of distinct source nodes
    pub fn source_count(&self) -> usize {
        self.outgoing.len()
    }
}
