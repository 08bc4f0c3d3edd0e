/*
 * tree.rs
 * Copyright (c) 2026 hdl-tools contributors
 *
 * Arena-backed ordered tree.
 */

//! The owning tree type.
//!
//! All nodes of a [`Tree`] live in a single vector owned by the tree. A node
//! is identified by its [`NodeId`]; the root is always [`NodeId::ROOT`].
//! Every slot records its parent id (a non-owning back-reference) and the
//! ordered ids of its children.
//!
//! Subtrees are only ever appended to the end of the vector, so the child ids
//! of any node are strictly increasing in insertion order. Navigation relies
//! on this to find a node's position among its siblings without storing it.

use std::ops::{Index, IndexMut};

use crate::cursor::{Traversal, TraversalOrder, Walker};
use crate::node::NodeRef;
use crate::order::{Leaves, PostOrder, PreOrder};

/// Identity of a node within its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the tree's storage.
    pub fn index(self) -> usize {
        self.0
    }

    fn offset(self, by: usize) -> NodeId {
        NodeId(self.0 + by)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// An ordered tree of `T` payloads.
///
/// Trees are assembled bottom-up: build the leaves with [`Tree::new`], then
/// move them under a parent with [`Tree::with_children`] or
/// [`Tree::push_child`].
///
/// ```
/// use hdl_tree::{Tree, tree};
///
/// let tree = tree!(0, [tree!(1), tree!(2, [tree!(21)])]);
/// let values: Vec<i32> = tree.pre_order().map(|node| *node.value()).collect();
/// assert_eq!(values, [0, 1, 2, 21]);
/// ```
#[derive(Clone)]
pub struct Tree<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Tree<T> {
    /// Create a single-node tree.
    pub fn new(value: T) -> Self {
        Self {
            slots: vec![Slot {
                value,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Create a tree whose root holds `value` and adopts `children` in order.
    pub fn with_children(value: T, children: impl IntoIterator<Item = Tree<T>>) -> Self {
        let mut tree = Tree::new(value);
        for child in children {
            tree.push_child(NodeId::ROOT, child);
        }
        tree
    }

    /// Move `subtree` under `parent` as its new last child.
    ///
    /// Returns the id the subtree's root has in this tree. Any [`Walker`]
    /// positioned at or above `parent` is invalidated.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn push_child(&mut self, parent: NodeId, subtree: Tree<T>) -> NodeId {
        assert!(
            parent.0 < self.slots.len(),
            "node {} does not belong to a tree of {} nodes",
            parent.0,
            self.slots.len()
        );
        let offset = self.slots.len();
        let appended = subtree.slots.len();
        self.slots.extend(subtree.slots.into_iter().map(|mut slot| {
            slot.parent = Some(slot.parent.map_or(parent, |p| p.offset(offset)));
            for child in &mut slot.children {
                *child = child.offset(offset);
            }
            slot
        }));
        let child = NodeId(offset);
        self.slots[parent.0].children.push(child);
        tracing::trace!(parent = parent.0, child = child.0, appended, "Appended subtree");
        child
    }

    /// Append a leaf holding `value` under `parent`.
    pub fn push_value(&mut self, parent: NodeId, value: T) -> NodeId {
        self.push_child(parent, Tree::new(value))
    }

    /// Total number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.slots.len()
    }

    /// The root node.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// The node with the given id, if it belongs to this tree.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        (id.0 < self.slots.len()).then(|| NodeRef::new(self, id))
    }

    /// The node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> NodeRef<'_, T> {
        match self.get(id) {
            Some(node) => node,
            None => panic!(
                "node {} does not belong to a tree of {} nodes",
                id.0,
                self.slots.len()
            ),
        }
    }

    /// Mutable handle on the root.
    pub fn root_mut(&mut self) -> NodeMut<'_, T> {
        NodeMut {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    /// Mutable handle on the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node_mut(&mut self, id: NodeId) -> NodeMut<'_, T> {
        let id = self.node(id).id();
        NodeMut { tree: self, id }
    }

    /// Mutable access to a node's payload.
    pub fn value_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.slots[id.0].value
    }

    /// Leaves of the whole tree, left to right.
    pub fn leaves(&self) -> Traversal<'_, T, Leaves> {
        self.root().leaves()
    }

    /// All nodes of the tree, each before its descendants.
    pub fn pre_order(&self) -> Traversal<'_, T, PreOrder> {
        self.root().pre_order()
    }

    /// All nodes of the tree, each after its descendants.
    pub fn post_order(&self) -> Traversal<'_, T, PostOrder> {
        self.root().post_order()
    }

    /// A detached walker over the whole tree in order `O`.
    pub fn walker<O: TraversalOrder>(&self) -> Walker<O> {
        self.root().walker()
    }

    /// Build a tree of identical shape by converting every payload.
    ///
    /// Node ids are preserved.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Tree<U> {
        Tree {
            slots: self
                .slots
                .into_iter()
                .map(|slot| Slot {
                    value: f(slot.value),
                    parent: slot.parent,
                    children: slot.children,
                })
                .collect(),
        }
    }

    pub(crate) fn slot(&self, id: NodeId) -> &Slot<T> {
        &self.slots[id.0]
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        &self.slots[id.0].value
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.value_mut(id)
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        crate::compare::deep_equal(self.root(), other.root()).is_ok()
    }
}

impl<T: Eq> Eq for Tree<T> {}

/// Mutable handle on one node of a [`Tree`].
///
/// Unlike [`NodeRef`], only one `NodeMut` can exist at a time, so structural
/// edits made through it cannot race with a borrowing traversal.
pub struct NodeMut<'a, T> {
    tree: &'a mut Tree<T>,
    id: NodeId,
}

impl<'a, T> NodeMut<'a, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Read-only view of the node.
    pub fn as_node(&self) -> NodeRef<'_, T> {
        NodeRef::new(self.tree, self.id)
    }

    pub fn value(&self) -> &T {
        &self.tree[self.id]
    }

    pub fn value_mut(&mut self) -> &mut T {
        self.tree.value_mut(self.id)
    }

    /// Consume the handle, keeping mutable access to the payload.
    pub fn into_value_mut(self) -> &'a mut T {
        self.tree.value_mut(self.id)
    }

    /// See [`Tree::push_child`].
    pub fn push_child(&mut self, subtree: Tree<T>) -> NodeId {
        self.tree.push_child(self.id, subtree)
    }

    /// See [`Tree::push_value`].
    pub fn push_value(&mut self, value: T) -> NodeId {
        self.tree.push_value(self.id, value)
    }

    /// Move the handle to the `index`-th child.
    pub fn into_child(self, index: usize) -> Option<NodeMut<'a, T>> {
        let child = self.tree.slot(self.id).children.get(index).copied()?;
        Some(NodeMut {
            tree: self.tree,
            id: child,
        })
    }

    /// Move the handle along a path of child indices.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for its level, like
    /// [`NodeRef::descend_path`].
    pub fn descend_path(self, path: &[usize]) -> NodeMut<'a, T> {
        let id = NodeRef::new(self.tree, self.id).descend_path(path).id();
        NodeMut {
            tree: self.tree,
            id,
        }
    }
}
