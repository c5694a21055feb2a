pub mod challenge;
pub mod cs;
pub mod error;

pub use cs::{graph, list};
pub use error::{Error, Result};
