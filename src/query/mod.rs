//! Path queries over flow graphs

mod paths;
mod types;

pub use paths::PathQuery;
pub use types::PurposedPath;
