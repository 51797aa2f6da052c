//! Path query result structures

use crate::graph::Purposes;

/// One simple path together with the purposes accumulated along it.
///
/// `nodes` runs from the query's start to its end with no repeats.
/// `purposes` concatenates the entries of every traversed link per
/// category, categories keyed in first-encounter order, values kept
/// verbatim (no deduplication).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurposedPath {
    /// Nodes visited, start to end inclusive
    pub nodes: Vec<String>,
    /// Purpose entries gathered from every traversed link
    pub purposes: Purposes,
}

impl PurposedPath {
    /// Number of hops (edges) in the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Accumulated category names joined with ", " in first-encounter order
    pub fn category_list(&self) -> String {
        self.purposes
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hops() {
        let path = PurposedPath {
            nodes: vec!["a".into(), "b".into(), "c".into()],
            purposes: Purposes::new(),
        };
        assert_eq!(path.hops(), 2);
    }

    #[test]
    fn test_category_list_joins_keys_in_order() {
        let mut purposes = Purposes::new();
        purposes.insert("analytics".into(), vec!["clicks".into()]);
        purposes.insert("ads".into(), vec!["profile".into()]);
        let path = PurposedPath {
            nodes: vec!["a".into()],
            purposes,
        };
        assert_eq!(path.category_list(), "analytics, ads");
    }
}
