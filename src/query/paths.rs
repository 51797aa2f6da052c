//! Exhaustive simple-path enumeration with purpose accumulation

use super::types::PurposedPath;
use crate::graph::{Adjacency, Purposes};

/// Query for every simple path between two nodes.
///
/// Runs a depth-first search over the adjacency mapping and returns ALL
/// simple paths from `start` to `end`, each paired with the purposes
/// accumulated along its links. Worst-case path count is exponential in
/// the branching factor; manifests are small enough that this is fine.
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Node paths must start at
    pub start: String,
    /// Node paths must end at
    pub end: String,
}

impl PathQuery {
    /// Create a path query between two nodes
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Execute the query against an adjacency mapping.
    ///
    /// Returns an empty vec when no path exists or when `start` has no
    /// outgoing links (unless `start == end`, which yields the single
    /// trivial one-node path with empty purposes).
    pub fn execute(&self, adjacency: &Adjacency) -> Vec<PurposedPath> {
        let mut results = Vec::new();
        self.walk(adjacency, &self.start, Vec::new(), Purposes::new(), &mut results);
        results
    }

    /// Extend the current branch by one node.
    ///
    /// `path` and `accumulated` are owned per-branch snapshots; sibling
    /// branches must never observe each other's mutations, so both are
    /// cloned at every fork rather than shared.
    fn walk(
        &self,
        adjacency: &Adjacency,
        node: &str,
        mut path: Vec<String>,
        accumulated: Purposes,
        results: &mut Vec<PurposedPath>,
    ) {
        path.push(node.to_string());

        // A found path is terminal: never continue past the end node.
        if node == self.end {
            results.push(PurposedPath {
                nodes: path,
                purposes: accumulated,
            });
            return;
        }

        for (next, link_purposes) in adjacency.neighbors(node) {
            if path.iter().any(|seen| seen == next) {
                continue;
            }
            let mut branch = accumulated.clone();
            for (category, entries) in link_purposes {
                branch
                    .entry(category.clone())
                    .or_default()
                    .extend(entries.iter().cloned());
            }
            self.walk(adjacency, next, path.clone(), branch, results);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Link;

    fn diamond() -> Adjacency {
        // a -> b -> d
        //  \-> c -> d
        Adjacency::build(&[
            Link::new("a", "b").with_purpose("analytics", vec!["clicks"]),
            Link::new("a", "c").with_purpose("ads", vec!["profile"]),
            Link::new("b", "d").with_purpose("storage", vec!["s3"]),
            Link::new("c", "d").with_purpose("analytics", vec!["views"]),
        ])
    }

    #[test]
    fn test_single_edge_path() {
        let adj = Adjacency::build(&[Link::new("a", "b").with_purpose("p1", vec!["x"])]);
        let paths = PathQuery::between("a", "b").execute(&adj);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, ["a", "b"]);
        assert_eq!(paths[0].purposes["p1"], ["x"]);
    }

    #[test]
    fn test_chain_accumulates_both_links() {
        let adj = Adjacency::build(&[
            Link::new("a", "b").with_purpose("p1", vec!["x"]),
            Link::new("b", "c").with_purpose("p2", vec!["y"]),
        ]);
        let paths = PathQuery::between("a", "c").execute(&adj);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, ["a", "b", "c"]);
        assert_eq!(paths[0].category_list(), "p1, p2");
    }

    #[test]
    fn test_diamond_yields_two_isolated_branches() {
        let paths = PathQuery::between("a", "d").execute(&diamond());

        assert_eq!(paths.len(), 2);
        // Branch via b never sees the purposes gathered via c and vice versa.
        let via_b = paths.iter().find(|p| p.nodes[1] == "b").unwrap();
        let via_c = paths.iter().find(|p| p.nodes[1] == "c").unwrap();
        assert_eq!(via_b.category_list(), "analytics, storage");
        assert_eq!(via_c.category_list(), "ads, analytics");
        assert_eq!(via_c.purposes["analytics"], ["views"]);
    }

    #[test]
    fn test_same_category_concatenates_without_dedup() {
        let adj = Adjacency::build(&[
            Link::new("a", "b").with_purpose("p", vec!["x"]),
            Link::new("b", "c").with_purpose("p", vec!["x", "y"]),
        ]);
        let paths = PathQuery::between("a", "c").execute(&adj);
        assert_eq!(paths[0].purposes["p"], ["x", "x", "y"]);
    }

    #[test]
    fn test_trivial_path_when_start_equals_end() {
        let adj = diamond();
        let paths = PathQuery::between("a", "a").execute(&adj);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, ["a"]);
        assert!(paths[0].purposes.is_empty());
    }

    #[test]
    fn test_trivial_path_for_node_absent_from_adjacency() {
        let paths = PathQuery::between("ghost", "ghost").execute(&diamond());
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, ["ghost"]);
    }

    #[test]
    fn test_no_path_when_start_absent() {
        let paths = PathQuery::between("ghost", "d").execute(&diamond());
        assert!(paths.is_empty());
    }

    #[test]
    fn test_no_path_against_edge_direction() {
        let paths = PathQuery::between("d", "a").execute(&diamond());
        assert!(paths.is_empty());
    }

    #[test]
    fn test_cycle_truncates_instead_of_looping() {
        // a -> b -> a cycle plus an exit b -> c
        let adj = Adjacency::build(&[
            Link::new("a", "b"),
            Link::new("b", "a"),
            Link::new("b", "c"),
        ]);
        let paths = PathQuery::between("a", "c").execute(&adj);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, ["a", "b", "c"]);
    }

    #[test]
    fn test_self_loop_never_traversed() {
        let adj = Adjacency::build(&[Link::new("a", "a"), Link::new("a", "b")]);
        let paths = PathQuery::between("a", "b").execute(&adj);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, ["a", "b"]);
    }

    #[test]
    fn test_terminal_at_first_arrival_on_end() {
        // a -> b -> c: the walk to b must not continue to c when b is the end.
        let adj = Adjacency::build(&[Link::new("a", "b"), Link::new("b", "c")]);
        let paths = PathQuery::between("a", "b").execute(&adj);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes, ["a", "b"]);
    }
}
