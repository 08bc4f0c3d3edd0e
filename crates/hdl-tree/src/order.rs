/*
 * order.rs
 * Copyright (c) 2026 hdl-tools contributors
 */

//! The three visiting orders: leaves only, pre-order and post-order.
//!
//! Each order is a zero-sized marker implementing [`TraversalOrder`]; the
//! successor rules walk the live tree shape and keep no state of their own.

use crate::cursor::TraversalOrder;
use crate::node::NodeRef;

/// Leaves of a subtree, left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leaves;

impl TraversalOrder for Leaves {
    fn next_node<T>(node: NodeRef<'_, T>) -> Option<NodeRef<'_, T>> {
        node.next_leaf()
    }

    fn begin<T>(root: NodeRef<'_, T>) -> NodeRef<'_, T> {
        root.leftmost_descendant()
    }
}

/// Every node of a subtree, visited before its descendants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreOrder;

impl TraversalOrder for PreOrder {
    fn next_node<T>(node: NodeRef<'_, T>) -> Option<NodeRef<'_, T>> {
        if let Some(first) = node.child(0) {
            return Some(first);
        }
        let mut node = node;
        while node.is_last_child() {
            node = node.parent()?;
        }
        node.next_sibling()
    }
}

/// Every node of a subtree, visited after its descendants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostOrder;

impl TraversalOrder for PostOrder {
    fn next_node<T>(node: NodeRef<'_, T>) -> Option<NodeRef<'_, T>> {
        if node.is_last_child() {
            return node.parent();
        }
        node.next_sibling().map(NodeRef::leftmost_descendant)
    }

    fn begin<T>(root: NodeRef<'_, T>) -> NodeRef<'_, T> {
        root.leftmost_descendant()
    }

    // The root is the last node visited, so the sentinel is its successor.
    fn end<T>(root: NodeRef<'_, T>) -> Option<NodeRef<'_, T>> {
        Self::next_node(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;

    #[test]
    fn test_pre_order_successor_climbs_to_next_sibling() {
        let tree = tree!(0, [tree!(1, [tree!(11, [tree!(111)])]), tree!(2)]);
        let deepest = tree.root().descend_path(&[0, 0, 0]);

        assert_eq!(PreOrder::next_node(deepest).map(|n| *n.value()), Some(2));
        assert!(PreOrder::next_node(tree.root().child(1).unwrap()).is_none());
    }

    #[test]
    fn test_post_order_successor_returns_parent_after_last_child() {
        let tree = tree!(0, [tree!(1), tree!(2, [tree!(21), tree!(22)])]);
        let one = tree.root().child(0).unwrap();
        let last = tree.root().descend_path(&[1, 1]);

        assert_eq!(PostOrder::next_node(one).map(|n| *n.value()), Some(21));
        assert_eq!(PostOrder::next_node(last).map(|n| *n.value()), Some(2));
        assert!(PostOrder::next_node(tree.root()).is_none());
    }

    #[test]
    fn test_leaves_begin_is_leftmost_leaf() {
        let tree = tree!(0, [tree!(1, [tree!(11)]), tree!(2)]);
        assert_eq!(*Leaves::begin(tree.root()).value(), 11);
        assert_eq!(Leaves::end(tree.root()), None);
    }

    #[test]
    fn test_single_node_orders() {
        let tree = tree!(5);
        let root = tree.root();

        assert_eq!(Leaves::begin(root), root);
        assert_eq!(PreOrder::begin(root), root);
        assert_eq!(PostOrder::begin(root), root);
        assert!(PreOrder::end(root).is_none());
        assert!(PostOrder::end(root).is_none());
    }
}
