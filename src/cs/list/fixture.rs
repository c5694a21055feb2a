//! Builds singly-linked lists from value sequences and splices back-edges
//! into them, producing the acyclic and rho-shaped inputs the cycle detector
//! is exercised against.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use crate::cs::graph::floyd_cycle::{Link, ListNode, NodeRef};
use crate::error::{Error, Result};

/// A list that owns every node it created, in construction order.
///
/// Keeping the nodes in construction order lets a cycle be spliced by index
/// without walking a structure that may already loop. Dropping the list
/// unlinks all of its nodes so shared `Rc` cycles are released.
pub struct LinkedList<T> {
    nodes: Vec<NodeRef<T>>,
}

impl<T> LinkedList<T> {
    /// Creates an acyclic list holding `values` in order.
    ///
    /// Returns [`Error::InvalidInput`] if `values` is empty, since a list must
    /// always have a head.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let nodes: Vec<NodeRef<T>> = values
            .into_iter()
            .map(|val| Rc::new(RefCell::new(ListNode::new(val))))
            .collect();

        if nodes.is_empty() {
            return Err(Error::InvalidInput(
                "values list cannot be empty - head must always exist".to_string(),
            ));
        }

        for pair in nodes.windows(2) {
            pair[0].borrow_mut().next = Some(Rc::clone(&pair[1]));
        }
        debug!("built linked list with {} nodes", nodes.len());

        Ok(LinkedList { nodes })
    }

    /// The first node. Always present.
    pub fn head(&self) -> &NodeRef<T> {
        &self.nodes[0]
    }

    /// The head wrapped as a link, for APIs that accept an optional head.
    pub fn head_link(&self) -> Link<T> {
        Some(Rc::clone(self.head()))
    }

    /// The last node created, whose link is the one a cycle replaces.
    pub fn tail(&self) -> &NodeRef<T> {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Returns the node at 0-indexed construction position `index`.
    pub fn node(&self, index: usize) -> Option<&NodeRef<T>> {
        self.nodes.get(index)
    }

    /// Number of distinct nodes in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Links the tail to the node at `pos`.
    ///
    /// `None` leaves the list as it is. A position outside the list is ignored
    /// as well. Returns whether a back-edge was spliced.
    pub fn create_cycle(&mut self, pos: Option<usize>) -> bool {
        let Some(pos) = pos else {
            return false;
        };
        let Some(target) = self.nodes.get(pos).map(Rc::clone) else {
            warn!(
                "ignoring cycle position {} for a list of {} nodes",
                pos,
                self.nodes.len()
            );
            return false;
        };

        self.tail().borrow_mut().next = Some(target);
        debug!("linked tail back to position {}", pos);
        true
    }

    /// Strict form of [`create_cycle`](Self::create_cycle): a position outside
    /// the list is an error.
    pub fn with_cycle_at(mut self, pos: usize) -> Result<Self> {
        if pos >= self.nodes.len() {
            return Err(Error::CyclePositionOutOfRange {
                pos,
                len: self.nodes.len(),
            });
        }
        self.create_cycle(Some(pos));
        Ok(self)
    }

    /// Restores the tail as a terminal node.
    pub fn clear_cycle(&mut self) {
        self.tail().borrow_mut().next = None;
    }
}

impl<T> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("len", &self.nodes.len())
            .field("cyclic", &self.tail().borrow().next.is_some())
            .finish()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        for node in &self.nodes {
            node.borrow_mut().next = None;
        }
    }
}
