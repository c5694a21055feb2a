//! # Floyd's Cycle Detection (Tortoise and Hare)
//!
//! Detects whether a singly-linked list loops back on itself in \( O(n) \)
//! time and \( O(1) \) extra space. Nodes are compared by identity
//! (`Rc::ptr_eq`), never by value, so lists holding repeated values are
//! handled correctly.
//!
//! ## Overview
//!
//! Two cursors start at the head. The slow cursor advances one node per round
//! and the fast cursor advances two. If the fast cursor runs off the end of the
//! list there is no cycle. Otherwise the fast cursor enters the loop and gains
//! one node per round on the slow cursor, so the two must land on the same
//! node within one lap.
//!
//! To find the *start* of the cycle, restart one cursor at the head and
//! advance both by one node per round. They meet at the entry node.
//!
//! ## Example Usage
//!
//! ```rust
//! use listcycle::cs::graph::{detect_cycle, find_cycle_start, has_cycle};
//! use listcycle::cs::list::LinkedList;
//!
//! // 1 -> 2 -> 3 -> 4 -> 5, then 5 links back to 3.
//! let list = LinkedList::from_values([1, 2, 3, 4, 5])
//!     .unwrap()
//!     .with_cycle_at(2)
//!     .unwrap();
//!
//! assert!(has_cycle(list.head()));
//! assert_eq!(detect_cycle(&list.head_link()), Ok(true));
//!
//! let start = find_cycle_start(&list.head_link()).unwrap();
//! assert_eq!(start.borrow().val, 3);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::error::{Error, Result};

/// Shared handle to a list node.
pub type NodeRef<T> = Rc<RefCell<ListNode<T>>>;

/// An optional successor link.
pub type Link<T> = Option<NodeRef<T>>;

/// A singly-linked list node that can share ownership (via `Rc`) and be
/// modified (via `RefCell`). This allows creating cycles for testing or
/// demonstration of cycle detection.
pub struct ListNode<T> {
    pub val: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    /// Creates a new `ListNode` with the given value and no next pointer.
    pub fn new(val: T) -> Self {
        ListNode { val, next: None }
    }
}

// A derived impl would recurse forever on a cyclic list.
impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode")
            .field("val", &self.val)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

fn successor<T>(node: &NodeRef<T>) -> Link<T> {
    node.borrow().next.clone()
}

/// Determines if the list starting at `head` has a cycle using Floyd's
/// Tortoise and Hare.
///
/// The list is only read. No memory is allocated: cursor moves are reference
/// count bumps on existing nodes.
pub fn has_cycle<T>(head: &NodeRef<T>) -> bool {
    let mut slow = Rc::clone(head);
    let mut fast = Rc::clone(head);
    let mut rounds = 0usize;

    loop {
        for _ in 0..2 {
            match successor(&fast) {
                Some(next) => fast = next,
                None => return false,
            }
        }

        // slow only walks over nodes fast has already passed
        slow = match successor(&slow) {
            Some(next) => next,
            None => return false,
        };
        rounds += 1;

        if Rc::ptr_eq(&slow, &fast) {
            debug!("cursors met after {} rounds", rounds);
            return true;
        }
    }
}

/// Checked entry point: fails with [`Error::InvalidInput`] when the head is
/// absent, otherwise behaves like [`has_cycle`].
pub fn detect_cycle<T>(head: &Link<T>) -> Result<bool> {
    match head {
        Some(node) => Ok(has_cycle(node)),
        None => Err(Error::InvalidInput(
            "cycle detection needs a head node".to_string(),
        )),
    }
}

/// If a cycle exists, returns the node where the cycle begins. If no cycle
/// exists (or the list is empty), returns `None`.
///
/// The first phase is the same meeting search as [`has_cycle`]. From the
/// meeting point, one cursor restarts at the head and both advance one node at
/// a time; the distance from the head to the entry equals the distance from
/// the meeting point to the entry modulo the cycle length, so they meet there.
pub fn find_cycle_start<T>(head: &Link<T>) -> Option<NodeRef<T>> {
    let head = head.as_ref()?;
    let mut slow = Rc::clone(head);
    let mut fast = Rc::clone(head);

    // Phase 1: Detect cycle
    let meeting = loop {
        fast = successor(&fast)?;
        fast = successor(&fast)?;
        slow = successor(&slow)?;
        if Rc::ptr_eq(&slow, &fast) {
            break slow;
        }
    };

    // Phase 2: Find start of cycle
    let mut ptr1 = Rc::clone(head);
    let mut ptr2 = meeting;
    while !Rc::ptr_eq(&ptr1, &ptr2) {
        ptr1 = successor(&ptr1)?;
        ptr2 = successor(&ptr2)?;
    }
    Some(ptr1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::list::LinkedList;
    use proptest::prelude::*;
    use rand::Rng;

    fn cyclic(values: &[i32], pos: usize) -> LinkedList<i32> {
        LinkedList::from_values(values.iter().copied())
            .unwrap()
            .with_cycle_at(pos)
            .unwrap()
    }

    fn acyclic(values: &[i32]) -> LinkedList<i32> {
        LinkedList::from_values(values.iter().copied()).unwrap()
    }

    #[test]
    fn test_absent_head() {
        assert_eq!(
            detect_cycle::<i32>(&None),
            Err(Error::InvalidInput(
                "cycle detection needs a head node".to_string()
            ))
        );
        assert!(find_cycle_start::<i32>(&None).is_none());
    }

    #[test]
    fn test_single_node_no_cycle() {
        let list = acyclic(&[1]);
        assert!(!has_cycle(list.head()));
        assert_eq!(detect_cycle(&list.head_link()), Ok(false));
        assert!(find_cycle_start(&list.head_link()).is_none());
    }

    #[test]
    fn test_self_loop() {
        let n1 = Rc::new(RefCell::new(ListNode::new(42)));
        n1.borrow_mut().next = Some(n1.clone());

        assert!(has_cycle(&n1));
        let start = find_cycle_start(&Some(n1.clone())).unwrap();
        assert!(Rc::ptr_eq(&start, &n1));

        // break the loop so the node is freed
        n1.borrow_mut().next = None;
    }

    #[test]
    fn test_two_nodes_no_cycle() {
        let list = acyclic(&[1, 2]);
        assert!(!has_cycle(list.head()));
    }

    #[test]
    fn test_two_nodes_cycle_at_head() {
        let list = cyclic(&[1, 2], 0);
        assert!(has_cycle(list.head()));
        let start = find_cycle_start(&list.head_link()).unwrap();
        assert!(Rc::ptr_eq(&start, list.head()));
    }

    #[test]
    fn test_four_nodes() {
        assert!(!has_cycle(acyclic(&[1, 2, 3, 4]).head()));

        let list = cyclic(&[1, 2, 3, 4], 2);
        assert!(has_cycle(list.head()));
        let start = find_cycle_start(&list.head_link()).unwrap();
        assert!(Rc::ptr_eq(&start, list.node(2).unwrap()));
    }

    #[test]
    fn test_tail_links_to_itself() {
        let list = cyclic(&[10, 20, 30, 40, 50], 4);
        assert!(has_cycle(list.head()));
        let start = find_cycle_start(&list.head_link()).unwrap();
        assert_eq!(start.borrow().val, 50);
    }

    #[test]
    fn test_hundred_nodes_cycle_at_fifty() {
        let values: Vec<i32> = (1000..1100).collect();
        let list = cyclic(&values, 50);
        assert!(has_cycle(list.head()));
        let start = find_cycle_start(&list.head_link()).unwrap();
        assert_eq!(start.borrow().val, 1050);
    }

    #[test]
    fn test_repeated_values_use_identity() {
        // Every node holds the same value; only identity tells them apart.
        let list = LinkedList::from_values(vec![7; 9]).unwrap();
        assert!(!has_cycle(list.head()));

        let list = LinkedList::from_values(vec![7; 9]).unwrap().with_cycle_at(5).unwrap();
        assert!(has_cycle(list.head()));
        let start = find_cycle_start(&list.head_link()).unwrap();
        assert!(Rc::ptr_eq(&start, list.node(5).unwrap()));
    }

    #[test]
    fn test_detection_is_deterministic() {
        let list = cyclic(&[42, 17, 99, 3, 88, 156, 7], 3);
        let first = has_cycle(list.head());
        let second = has_cycle(list.head());
        assert!(first);
        assert_eq!(first, second);

        let list = acyclic(&[42, 17, 99, 3, 88, 156, 7]);
        assert_eq!(has_cycle(list.head()), has_cycle(list.head()));
    }

    #[test]
    fn test_detection_leaves_list_untouched() {
        let list = cyclic(&[1, 2, 3, 4, 5, 6], 1);
        assert!(has_cycle(list.head()));
        for i in 0..list.len() - 1 {
            let next = list.node(i).unwrap().borrow().next.clone().unwrap();
            assert!(Rc::ptr_eq(&next, list.node(i + 1).unwrap()));
        }
        let back = list.tail().borrow().next.clone().unwrap();
        assert!(Rc::ptr_eq(&back, list.node(1).unwrap()));
    }

    #[test]
    fn test_acyclic_lists_up_to_one_thousand() {
        for len in 1..=1000 {
            let values: Vec<i32> = (1..=len).collect();
            assert!(!has_cycle(acyclic(&values).head()), "len {}", len);
        }
    }

    #[test]
    fn test_every_cycle_position_small_lists() {
        for len in 1..=120usize {
            let values: Vec<i32> = (0..len as i32).collect();
            for pos in 0..len {
                let list = cyclic(&values, pos);
                assert!(has_cycle(list.head()), "len {} pos {}", len, pos);
                let start = find_cycle_start(&list.head_link()).unwrap();
                assert!(Rc::ptr_eq(&start, list.node(pos).unwrap()));
            }
        }
    }

    #[test]
    fn test_random_shapes() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(1..=1000);
            let values: Vec<i32> = (0..len).map(|_| rng.gen_range(1..=10_000)).collect();
            if rng.gen_bool(0.5) {
                let pos = rng.gen_range(0..len as usize);
                assert!(has_cycle(cyclic(&values, pos).head()));
            } else {
                assert!(!has_cycle(acyclic(&values).head()));
            }
        }
    }

    fn len_and_pos() -> impl Strategy<Value = (usize, usize)> {
        (1usize..=1000).prop_flat_map(|len| (Just(len), 0..len))
    }

    proptest! {
        #[test]
        fn prop_tail_to_any_position_is_a_cycle((len, pos) in len_and_pos()) {
            let values: Vec<i32> = (1..=len as i32).collect();
            let list = cyclic(&values, pos);
            prop_assert!(has_cycle(list.head()));
            prop_assert_eq!(detect_cycle(&list.head_link()), Ok(true));
        }

        #[test]
        fn prop_no_back_edge_is_acyclic(len in 1usize..=1000) {
            let values: Vec<i32> = (1..=len as i32).collect();
            let list = acyclic(&values);
            prop_assert!(!has_cycle(list.head()));
            prop_assert!(find_cycle_start(&list.head_link()).is_none());
        }
    }
}
