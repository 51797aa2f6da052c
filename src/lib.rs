//! Flowtab: Flatten Data-Flow Graphs into Path Tables
//!
//! Takes YAML manifests describing directed data-flow graphs (links with
//! per-edge purpose metadata and free text) and flattens them into CSV
//! tables with one row per simple root-to-leaf path.
//!
//! # Core Concepts
//!
//! - **Links**: directed edges carrying purpose categories and text lines
//! - **Boundary**: root nodes (never a target) and leaf nodes (never a source)
//! - **Paths**: every simple root-to-leaf path, with purposes accumulated
//!   along the way
//!
//! # Example
//!
//! ```
//! use flowtab::FlowTable;
//!
//! let yaml = "links:\n  - {source: app, target: vendor, purposes: {analytics: [clicks]}, text: [event stream]}\n";
//! let table = FlowTable::from_yaml(yaml);
//! assert_eq!(table.rows()[0].purpose, "analytics");
//! ```

pub mod batch;
mod document;
mod graph;
pub mod query;
pub mod table;

pub use batch::{process_directory, BatchError, BatchResult, BatchSummary, DEFAULT_MANIFEST};
pub use document::{DocumentError, FlowDocument};
pub use graph::{Adjacency, Boundary, Link, Purposes};
pub use query::{PathQuery, PurposedPath};
pub use table::{FlowRow, FlowTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
