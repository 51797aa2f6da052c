//! Table assembly: flatten a flow graph into per-path rows

use crate::document::FlowDocument;
use crate::graph::{Adjacency, Boundary, Link};
use crate::query::PathQuery;
use serde::Serialize;
use std::collections::HashSet;

/// One output row of the flattened table.
///
/// Field order matters: it is the column order of the persisted table.
/// `purpose` carries the category names accumulated along a full path;
/// `text` carries the lines of the direct root-to-leaf link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FlowRow {
    /// Leaf node: the kind of data that ends up collected
    pub data_type: String,
    /// Root node: who the flow originates from
    pub collector: String,
    /// ", "-joined purpose categories of the whole path
    pub purpose: String,
    /// "\n"-joined text lines of the direct root-to-leaf link
    pub text: String,
}

/// The flattened table produced from one manifest.
///
/// Rows are sorted ascending by (`data_type`, `collector`) with fully
/// duplicate rows removed, so equal inputs always produce equal tables.
#[derive(Debug, Clone, Default)]
pub struct FlowTable {
    rows: Vec<FlowRow>,
}

impl FlowTable {
    /// Assemble the table from raw manifest text.
    ///
    /// Every failure mode degrades to an empty table: a document that is
    /// not a mapping, has no `links` sequence, or does not parse at all
    /// simply yields no rows.
    pub fn from_yaml(content: &str) -> Self {
        match FlowDocument::from_yaml(content) {
            Ok(doc) => Self::from_links(&doc.links),
            Err(_) => Self::default(),
        }
    }

    /// Assemble the table from an already-decoded link list.
    ///
    /// For every (root, leaf) pair, every simple path between them is
    /// enumerated; each path emits one row per DIRECT root-to-leaf link.
    /// Text comes from that direct link, purposes from the full path. A
    /// pair connected only through intermediate nodes emits nothing.
    pub fn from_links(links: &[Link]) -> Self {
        let adjacency = Adjacency::build(links);
        let boundary = Boundary::detect(links);

        let mut rows = Vec::new();
        for root in &boundary.roots {
            for leaf in &boundary.leaves {
                let paths = PathQuery::between(root, leaf).execute(&adjacency);
                for path in &paths {
                    for link in links {
                        if &link.source == root && &link.target == leaf {
                            rows.push(FlowRow {
                                data_type: leaf.clone(),
                                collector: root.clone(),
                                purpose: path.category_list(),
                                text: link.text.join("\n"),
                            });
                        }
                    }
                }
            }
        }

        let mut table = Self { rows };
        table.normalize();
        table
    }

    /// Sort by (`data_type`, `collector`) and drop fully duplicate rows.
    ///
    /// The sort is stable, so rows within one (root, leaf) pair keep
    /// their enumeration order; dedup keeps the first occurrence.
    fn normalize(&mut self) {
        self.rows
            .sort_by(|a, b| (&a.data_type, &a.collector).cmp(&(&b.data_type, &b.collector)));
        let mut seen: HashSet<FlowRow> = HashSet::new();
        self.rows.retain(|row| seen.insert(row.clone()));
    }

    /// Rows in final (sorted, deduplicated) order
    pub fn rows(&self) -> &[FlowRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
