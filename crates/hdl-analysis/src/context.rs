//! Syntactic context of a node.
//!
//! A [`SyntaxTreeContext`] is the chain of ancestors of the node a rule is
//! looking at, ordered from the root down to the direct parent. Rules use it
//! to ask questions like "is this identifier declared inside a function?"
//! without the tree knowing what any payload means.
//!
//! Contexts are either maintained incrementally by the rule driver while it
//! walks the tree, or rebuilt on demand from parent links with
//! [`SyntaxTreeContext::of`].

use hdl_tree::{NodeId, NodeRef};

/// Ancestors of a node, root first.
pub struct SyntaxTreeContext<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
}

impl<T> Clone for SyntaxTreeContext<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SyntaxTreeContext<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.stack.iter().map(|node| node.value()))
            .finish()
    }
}

impl<T> Default for SyntaxTreeContext<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SyntaxTreeContext<'a, T> {
    /// An empty context (the context of a root).
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Rebuild the context of `node` by following its parent links.
    pub fn of(node: NodeRef<'a, T>) -> Self {
        let mut stack: Vec<NodeRef<'a, T>> = node.ancestors().collect();
        stack.reverse();
        Self { stack }
    }

    pub(crate) fn push(&mut self, node: NodeRef<'a, T>) {
        self.stack.push(node);
    }

    pub(crate) fn pop(&mut self) {
        self.stack.pop();
    }

    /// The direct parent of the node under inspection.
    pub fn top(&self) -> Option<NodeRef<'a, T>> {
        self.stack.last().copied()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Ancestors from the root down to the direct parent.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a, T>> + '_ {
        self.stack.iter().copied()
    }

    /// True if the direct parent's payload satisfies `pred`.
    pub fn direct_parent_is(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.top().is_some_and(|parent| pred(parent.value()))
    }

    /// True if any ancestor's payload satisfies `pred`.
    pub fn is_inside(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.stack.iter().any(|node| pred(node.value()))
    }

    /// The nearest ancestor whose payload satisfies `pred`.
    pub fn nearest(&self, pred: impl Fn(&T) -> bool) -> Option<NodeRef<'a, T>> {
        self.stack.iter().rev().copied().find(|node| pred(node.value()))
    }

    /// Ids of the ancestors, root first.
    pub fn ids(&self) -> Vec<NodeId> {
        self.stack.iter().map(|node| node.id()).collect()
    }
}
