//! Bounded traversal helpers. Both functions stop after a fixed number of
//! nodes, so they are safe to call on lists that loop.

use std::fmt::Display;

use crate::cs::graph::floyd_cycle::Link;

/// Node cap used by [`render_list`] when printing a list.
pub const DEFAULT_RENDER_MAX_NODES: usize = 15;

/// Node cap used by [`list_values`].
pub const DEFAULT_VALUES_MAX_NODES: usize = 20;

const TRUNCATION_MARKER: &str = "... (cycle detected)";

/// Collects at most `max_nodes` values, starting at `head`.
pub fn list_values<T: Clone>(head: &Link<T>, max_nodes: usize) -> Vec<T> {
    let mut values = Vec::new();
    let mut current = head.clone();

    while values.len() < max_nodes {
        let Some(node) = current.take() else {
            break;
        };
        let node = node.borrow();
        values.push(node.val.clone());
        current = node.next.clone();
    }
    values
}

/// Formats the list as `1 -> 2 -> 3`.
///
/// An absent head renders as `None`. If nodes remain after `max_nodes` have
/// been printed, a `... (cycle detected)` segment is appended; a list that is
/// merely longer than the cap gets the same marker.
pub fn render_list<T: Display>(head: &Link<T>, max_nodes: usize) -> String {
    if head.is_none() {
        return "None".to_string();
    }

    let mut parts = Vec::new();
    let mut current = head.clone();

    while parts.len() < max_nodes {
        let Some(node) = current.take() else {
            break;
        };
        let node = node.borrow();
        parts.push(node.val.to_string());
        current = node.next.clone();
    }

    if current.is_some() {
        parts.push(TRUNCATION_MARKER.to_string());
    }
    parts.join(" -> ")
}
