/*
 * node.rs
 * Copyright (c) 2026 hdl-tools contributors
 *
 * Read-only node handles and navigation primitives.
 */

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::cursor::{Traversal, TraversalOrder, Walker};
use crate::error::{Result, TreeError};
use crate::order::{Leaves, PostOrder, PreOrder};
use crate::tree::{NodeId, Slot, Tree};

/// A borrowed handle on one node of a [`Tree`].
///
/// Handles are `Copy`. Two handles are equal only when they designate the
/// same node of the same tree object; payloads are never compared (see
/// [`crate::deep_equal`] for that).
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn slot(self) -> &'a Slot<T> {
        self.tree.slot(self.id)
    }

    fn with_id(self, id: NodeId) -> Self {
        Self::new(self.tree, id)
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to.
    pub fn tree(self) -> &'a Tree<T> {
        self.tree
    }

    pub fn value(self) -> &'a T {
        &self.slot().value
    }

    /// Direct children, in order.
    pub fn children(self) -> Children<'a, T> {
        Children {
            tree: self.tree,
            ids: self.slot().children.iter(),
        }
    }

    pub fn num_children(self) -> usize {
        self.slot().children.len()
    }

    pub fn is_leaf(self) -> bool {
        self.slot().children.is_empty()
    }

    pub fn child(self, index: usize) -> Option<Self> {
        self.slot().children.get(index).map(|&id| self.with_id(id))
    }

    /// The parent node; `None` for the root.
    pub fn parent(self) -> Option<Self> {
        self.slot().parent.map(|id| self.with_id(id))
    }

    /// The root of the tree this node belongs to.
    pub fn root(self) -> Self {
        self.with_id(NodeId::ROOT)
    }

    /// Index of this node within its parent's children; 0 for the root.
    pub fn birth_rank(self) -> usize {
        let Some(parent) = self.parent() else {
            return 0;
        };
        match parent.slot().children.binary_search(&self.id) {
            Ok(rank) => rank,
            Err(_) => panic!(
                "node {} is missing from the children of its parent {}",
                self.id.index(),
                parent.id.index()
            ),
        }
    }

    /// True for the root and for the final child of its parent.
    pub fn is_last_child(self) -> bool {
        match self.parent() {
            None => true,
            Some(parent) => parent.slot().children.last() == Some(&self.id),
        }
    }

    /// True for the root and for the first child of its parent.
    pub fn is_first_child(self) -> bool {
        match self.parent() {
            None => true,
            Some(parent) => parent.slot().children.first() == Some(&self.id),
        }
    }

    pub fn next_sibling(self) -> Option<Self> {
        if self.is_last_child() {
            return None;
        }
        self.parent()?.child(self.birth_rank() + 1)
    }

    pub fn previous_sibling(self) -> Option<Self> {
        if self.is_first_child() {
            return None;
        }
        self.parent()?.child(self.birth_rank() - 1)
    }

    /// Follow first children down to a leaf. A leaf is its own leftmost
    /// descendant.
    pub fn leftmost_descendant(self) -> Self {
        let mut node = self;
        while let Some(first) = node.child(0) {
            node = first;
        }
        node
    }

    /// Follow last children down to a leaf. A leaf is its own rightmost
    /// descendant.
    pub fn rightmost_descendant(self) -> Self {
        let mut node = self;
        while let Some(&last) = node.slot().children.last() {
            node = node.with_id(last);
        }
        node
    }

    /// The leaf that follows this node in left-to-right leaf order.
    ///
    /// Climbs to the nearest ancestor (or self) that has a next sibling and
    /// returns that sibling's leftmost descendant. `None` past the last leaf
    /// of the whole tree.
    pub fn next_leaf(self) -> Option<Self> {
        let mut node = self;
        while node.is_last_child() {
            node = node.parent()?;
        }
        node.next_sibling().map(Self::leftmost_descendant)
    }

    /// The leaf that precedes this node in left-to-right leaf order.
    pub fn previous_leaf(self) -> Option<Self> {
        let mut node = self;
        while node.is_first_child() {
            node = node.parent()?;
        }
        node.previous_sibling().map(Self::rightmost_descendant)
    }

    /// Follow a path of child indices.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range for its level. Use
    /// [`NodeRef::try_descend_path`] when the path comes from untrusted input.
    pub fn descend_path(self, path: &[usize]) -> Self {
        match self.try_descend_path(path) {
            Ok(node) => node,
            Err(err) => panic!("cannot descend path [{}]: {err}", format_path(path)),
        }
    }

    /// Follow a path of child indices, reporting the first index that does
    /// not exist.
    pub fn try_descend_path(self, path: &[usize]) -> Result<Self> {
        path.iter()
            .enumerate()
            .try_fold(self, |node, (depth, &index)| {
                node.child(index).ok_or_else(|| TreeError::PathOutOfRange {
                    depth,
                    index,
                    num_children: node.num_children(),
                })
            })
    }

    /// Child indices leading from the root to this node.
    pub fn path(self) -> Vec<usize> {
        let mut path: Vec<usize> = std::iter::successors(Some(self), |node| node.parent())
            .take_while(|node| node.parent().is_some())
            .map(Self::birth_rank)
            .collect();
        path.reverse();
        path
    }

    /// Number of ancestors; 0 for the root.
    pub fn depth(self) -> usize {
        self.ancestors().count()
    }

    /// Parent, grandparent, and so on up to the root.
    pub fn ancestors(self) -> Ancestors<'a, T> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Leaves of the subtree rooted here.
    pub fn leaves(self) -> Traversal<'a, T, Leaves> {
        Traversal::new(self)
    }

    /// The subtree rooted here, each node before its descendants.
    pub fn pre_order(self) -> Traversal<'a, T, PreOrder> {
        Traversal::new(self)
    }

    /// The subtree rooted here, each node after its descendants.
    pub fn post_order(self) -> Traversal<'a, T, PostOrder> {
        Traversal::new(self)
    }

    /// The subtree rooted here in an arbitrary order `O`.
    pub fn traverse<O: TraversalOrder>(self) -> Traversal<'a, T, O> {
        Traversal::new(self)
    }

    /// A walker over the subtree rooted here that does not borrow the tree.
    pub fn walker<O: TraversalOrder>(self) -> Walker<O> {
        Walker::new(self)
    }
}

/// Iterator over the direct children of a node.
pub struct Children<'a, T> {
    tree: &'a Tree<T>,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| NodeRef::new(self.tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<T> DoubleEndedIterator for Children<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| NodeRef::new(self.tree, id))
    }
}

impl<T> ExactSizeIterator for Children<'_, T> {}

impl<T> FusedIterator for Children<'_, T> {}

/// Iterator over the ancestors of a node, nearest first.
pub struct Ancestors<'a, T> {
    next: Option<NodeRef<'a, T>>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent();
        Some(node)
    }
}

impl<T> FusedIterator for Ancestors<'_, T> {}

/// Render a path as dot-separated indices (`0.2.1`).
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
