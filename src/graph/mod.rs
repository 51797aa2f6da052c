//! Core flow-graph data structures

mod adjacency;
mod boundary;
mod link;

pub use adjacency::Adjacency;
pub use boundary::Boundary;
pub use link::{Link, Purposes};
