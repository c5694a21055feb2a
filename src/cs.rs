pub mod graph;
pub mod list;

// Re-export all modules
pub use graph::*;
pub use list::*;
