pub mod floyd_cycle;

pub use floyd_cycle::{detect_cycle, find_cycle_start, has_cycle, Link, ListNode, NodeRef};
