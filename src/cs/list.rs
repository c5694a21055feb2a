pub mod fixture;
pub mod render;

pub use fixture::LinkedList;
pub use render::{list_values, render_list, DEFAULT_RENDER_MAX_NODES, DEFAULT_VALUES_MAX_NODES};
