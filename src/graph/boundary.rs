//! Root and leaf detection over a link list

use super::link::Link;
use std::collections::HashSet;

/// The boundary of a flow graph: its root and leaf node sets.
///
/// Roots appear as a source but never as a target; leaves appear as a
/// target but never as a source. A node playing both parts lands in
/// neither set. Empty endpoint values are ignored entirely. Membership
/// only, no ordering guarantee.
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    pub roots: HashSet<String>,
    pub leaves: HashSet<String>,
}

impl Boundary {
    /// Compute roots and leaves from a link list. Pure and order-independent.
    pub fn detect(links: &[Link]) -> Self {
        let mut sources: HashSet<String> = HashSet::new();
        let mut targets: HashSet<String> = HashSet::new();

        for link in links {
            if !link.source.is_empty() {
                sources.insert(link.source.clone());
            }
            if !link.target.is_empty() {
                targets.insert(link.target.clone());
            }
        }

        let roots = sources.difference(&targets).cloned().collect();
        let leaves = targets.difference(&sources).cloned().collect();
        Self { roots, leaves }
    }
}
