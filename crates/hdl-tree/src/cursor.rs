/*
 * cursor.rs
 * Copyright (c) 2026 hdl-tools contributors
 *
 * Strategy-parametrized traversal cursors.
 */

//! One cursor shape shared by every traversal order.
//!
//! A [`TraversalOrder`] supplies a single successor rule, `next_node`. The
//! generic [`Cursor`] builds dereference, increment, offset and identity
//! comparison on top of it, and [`Traversal`] pairs a begin cursor with an
//! end sentinel to form an iterator.
//!
//! End sentinels are computed with the same successor rule. For subtree
//! traversals they may designate a node outside the subtree; they are only
//! ever compared, never dereferenced.

use std::any::type_name;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign};

use crate::node::NodeRef;
use crate::tree::{NodeId, Tree};

/// A visiting order over a tree.
///
/// Only [`next_node`](TraversalOrder::next_node) is required. The defaults
/// start at the traversal root and end one step past its rightmost
/// descendant.
pub trait TraversalOrder {
    /// The node visited after `node`, derived from the current tree shape.
    fn next_node<T>(node: NodeRef<'_, T>) -> Option<NodeRef<'_, T>>;

    /// The first node visited when traversing the subtree at `root`.
    fn begin<T>(root: NodeRef<'_, T>) -> NodeRef<'_, T> {
        root
    }

    /// The sentinel position reached after the last node of the subtree at
    /// `root` has been visited.
    fn end<T>(root: NodeRef<'_, T>) -> Option<NodeRef<'_, T>> {
        Self::next_node(root.rightmost_descendant())
    }
}

/// A position in a traversal of order `O`.
///
/// `None` positions are the exhausted sentinel. Cursors compare by node
/// identity, so cursors over distinct trees are never equal unless both are
/// exhausted.
pub struct Cursor<'a, T, O> {
    position: Option<NodeRef<'a, T>>,
    order: PhantomData<fn() -> O>,
}

impl<T, O> Clone for Cursor<'_, T, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, O> Copy for Cursor<'_, T, O> {}

impl<T, O> PartialEq for Cursor<'_, T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T, O> Eq for Cursor<'_, T, O> {}

impl<T, O> fmt::Debug for Cursor<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("order", &type_name::<O>())
            .field("node", &self.position.map(NodeRef::id))
            .finish()
    }
}

impl<'a, T, O: TraversalOrder> Cursor<'a, T, O> {
    /// A cursor positioned exactly at `node`.
    pub fn at(node: NodeRef<'a, T>) -> Self {
        Self::from_position(Some(node))
    }

    /// The first position of a traversal of the subtree at `root`.
    pub fn begin(root: NodeRef<'a, T>) -> Self {
        Self::from_position(Some(O::begin(root)))
    }

    /// The end sentinel of a traversal of the subtree at `root`.
    pub fn end(root: NodeRef<'a, T>) -> Self {
        Self::from_position(O::end(root))
    }

    /// The exhausted sentinel, past the end of any whole-tree traversal.
    pub fn exhausted() -> Self {
        Self::from_position(None)
    }

    fn from_position(position: Option<NodeRef<'a, T>>) -> Self {
        Self {
            position,
            order: PhantomData,
        }
    }

    /// The current node.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    pub fn get(&self) -> NodeRef<'a, T> {
        match self.position {
            Some(node) => node,
            None => panic!(
                "dereferenced an exhausted {} cursor",
                type_name::<O>().rsplit("::").next().unwrap_or("traversal")
            ),
        }
    }

    /// The current node, or `None` once exhausted.
    pub fn try_get(&self) -> Option<NodeRef<'a, T>> {
        self.position
    }

    /// Step to the next node. Stepping an exhausted cursor is a no-op.
    pub fn advance(&mut self) -> &mut Self {
        self.position = self.position.and_then(O::next_node);
        self
    }

    /// Step to the next node, returning the position held before the step.
    pub fn post_advance(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }

    /// Step `steps` times.
    pub fn advance_by(&mut self, steps: usize) -> &mut Self {
        for _ in 0..steps {
            self.advance();
        }
        self
    }
}

impl<T, O: TraversalOrder> Add<usize> for Cursor<'_, T, O> {
    type Output = Self;

    fn add(mut self, steps: usize) -> Self {
        self.advance_by(steps);
        self
    }
}

impl<T, O: TraversalOrder> AddAssign<usize> for Cursor<'_, T, O> {
    fn add_assign(&mut self, steps: usize) {
        self.advance_by(steps);
    }
}

/// A begin/end cursor pair over one (sub)tree.
///
/// Cloning a traversal restarts nothing and shares nothing: each clone
/// iterates independently from its own current position.
pub struct Traversal<'a, T, O> {
    front: Cursor<'a, T, O>,
    end: Cursor<'a, T, O>,
}

impl<T, O> Clone for Traversal<'_, T, O> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            end: self.end,
        }
    }
}

impl<T, O> fmt::Debug for Traversal<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("front", &self.front)
            .field("end", &self.end)
            .finish()
    }
}

impl<'a, T, O: TraversalOrder> Traversal<'a, T, O> {
    /// Traverse the subtree rooted at `root`.
    pub fn new(root: NodeRef<'a, T>) -> Self {
        Self::from_cursors(Cursor::begin(root), Cursor::end(root))
    }

    /// Traverse from `begin` up to, not including, `end`.
    pub fn from_cursors(begin: Cursor<'a, T, O>, end: Cursor<'a, T, O>) -> Self {
        Self { front: begin, end }
    }

    /// The position the next call to `next` will yield.
    pub fn begin(&self) -> Cursor<'a, T, O> {
        self.front
    }

    pub fn end(&self) -> Cursor<'a, T, O> {
        self.end
    }
}

impl<'a, T, O: TraversalOrder> Iterator for Traversal<'a, T, O> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.end {
            return None;
        }
        let node = self.front.try_get()?;
        self.front.advance();
        Some(node)
    }
}

impl<T, O: TraversalOrder> FusedIterator for Traversal<'_, T, O> {}

/// A traversal that holds node ids instead of borrowing the tree.
///
/// Each step takes the tree explicitly, so payloads can be modified between
/// steps:
///
/// ```
/// use hdl_tree::{PreOrder, tree};
///
/// let mut tree = tree!(1, [tree!(2), tree!(3)]);
/// let mut walker = tree.walker::<PreOrder>();
/// while let Some(id) = walker.next(&tree) {
///     tree[id] *= 10;
/// }
/// assert_eq!(tree, tree!(10, [tree!(20), tree!(30)]));
/// ```
///
/// [`Walker::next`] must be given the tree the walker was built from.
/// Appending children to a node at or above the walker's position
/// invalidates the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker<O> {
    next: Option<NodeId>,
    end: Option<NodeId>,
    order: PhantomData<fn() -> O>,
}

impl<O: TraversalOrder> Walker<O> {
    /// Walk the subtree rooted at `root`.
    pub fn new<T>(root: NodeRef<'_, T>) -> Self {
        Self {
            next: Some(O::begin(root).id()),
            end: O::end(root).map(NodeRef::id),
            order: PhantomData,
        }
    }

    /// The id of the next node, advancing the walker.
    ///
    /// `tree` must be the tree the walker was built from; another tree
    /// yields unrelated ids or panics on an id it does not contain.
    pub fn next<T>(&mut self, tree: &Tree<T>) -> Option<NodeId> {
        if self.next == self.end {
            return None;
        }
        let current = self.next?;
        self.next = O::next_node(tree.node(current)).map(NodeRef::id);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Leaves, PostOrder, PreOrder};
    use crate::tree;

    fn sample() -> Tree<i32> {
        tree!(0, [tree!(1, [tree!(11), tree!(12)]), tree!(2)])
    }

    #[test]
    fn test_get_and_advance() {
        let tree = sample();
        let mut cursor = Cursor::<_, PreOrder>::begin(tree.root());

        assert_eq!(*cursor.get().value(), 0);
        assert_eq!(*cursor.advance().get().value(), 1);
        let previous = cursor.post_advance();
        assert_eq!(*previous.get().value(), 1);
        assert_eq!(*cursor.get().value(), 11);
    }

    #[test]
    fn test_offset_composes_increments() {
        let tree = sample();
        let begin = Cursor::<_, PostOrder>::begin(tree.root());

        assert_eq!(*(begin + 0).get().value(), 11);
        assert_eq!(*(begin + 3).get().value(), 2);
        assert_eq!(begin + 2, (begin + 1) + 1);

        let mut cursor = begin;
        cursor += 4;
        assert_eq!(*cursor.get().value(), 0);
        cursor += 1;
        assert_eq!(cursor, Cursor::end(tree.root()));
        assert!(cursor.try_get().is_none());
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted() {
        let mut cursor = Cursor::<i32, Leaves>::exhausted();
        cursor.advance();
        assert_eq!(cursor, Cursor::exhausted());
    }

    #[test]
    #[should_panic(expected = "dereferenced an exhausted PreOrder cursor")]
    fn test_dereferencing_end_panics() {
        let tree = sample();
        Cursor::<_, PreOrder>::end(tree.root()).get();
    }

    #[test]
    fn test_end_sentinels_compare_equal() {
        let tree = sample();
        let one = tree.root().child(0).unwrap();

        assert_eq!(
            Cursor::<_, PreOrder>::end(one),
            Cursor::<_, PreOrder>::end(one)
        );
        assert_eq!(
            Cursor::<_, Leaves>::end(tree.root()),
            Cursor::<_, Leaves>::end(tree.root())
        );
        for node in tree.pre_order() {
            assert_ne!(Cursor::<_, PostOrder>::at(node), Cursor::end(tree.root()));
        }
    }

    #[test]
    fn test_cursors_over_distinct_trees_differ() {
        let left = sample();
        let right = sample();

        assert_ne!(
            Cursor::<_, PreOrder>::begin(left.root()),
            Cursor::<_, PreOrder>::begin(right.root())
        );
        assert_eq!(
            Cursor::<_, PreOrder>::end(left.root()),
            Cursor::<_, PreOrder>::end(right.root())
        );
    }

    #[test]
    fn test_subtree_end_lies_outside_subtree() {
        let tree = sample();
        let one = tree.root().child(0).unwrap();

        let pre_end = Cursor::<_, PreOrder>::end(one).get();
        assert_eq!(*pre_end.value(), 2);
        let post_end = Cursor::<_, PostOrder>::end(one).get();
        assert_eq!(*post_end.value(), 2);
        let leaves_end = Cursor::<_, Leaves>::end(one).get();
        assert_eq!(*leaves_end.value(), 2);
    }

    #[test]
    fn test_traversal_exposes_bounds() {
        let tree = sample();
        let mut traversal = tree.pre_order();

        assert_eq!(traversal.begin(), Cursor::begin(tree.root()));
        traversal.next();
        assert_eq!(*traversal.begin().get().value(), 1);
        assert_eq!(traversal.end(), Cursor::exhausted());
    }

    #[test]
    fn test_traversal_from_cursors() {
        let tree = sample();
        let begin = Cursor::<_, PreOrder>::begin(tree.root()) + 1;
        let end = begin + 3;
        let values: Vec<i32> = Traversal::from_cursors(begin, end)
            .map(|n| *n.value())
            .collect();
        assert_eq!(values, [1, 11, 12]);
    }

    #[test]
    fn test_traversal_is_fused() {
        let tree = Tree::new(7);
        let mut traversal = tree.leaves();

        assert_eq!(traversal.next().map(|n| *n.value()), Some(7));
        assert!(traversal.next().is_none());
        assert!(traversal.next().is_none());
    }

    #[test]
    #[should_panic(expected = "does not belong")]
    fn test_walker_stepped_with_another_tree_panics() {
        let tree = sample();
        let mut walker = tree.walker::<Leaves>();
        walker.next(&Tree::new(0));
    }

    #[test]
    fn test_walker_matches_traversal() {
        let tree = sample();
        let one = tree.root().child(0).unwrap();

        let mut walker = one.walker::<PostOrder>();
        let mut walked = Vec::new();
        while let Some(id) = walker.next(&tree) {
            walked.push(id);
        }
        let traversed: Vec<NodeId> = one.post_order().map(NodeRef::id).collect();
        assert_eq!(walked, traversed);
        assert!(walker.next(&tree).is_none());
    }
}
