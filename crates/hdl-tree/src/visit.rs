/*
 * visit.rs
 * Copyright (c) 2026 hdl-tools contributors
 *
 * Enter/exit visitation of a subtree.
 */

use crate::node::NodeRef;

/// Phase of a visit - whether we're entering or exiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TraversePhase {
    Enter,
    Exit,
}

enum Frame<'a, T> {
    Enter(NodeRef<'a, T>),
    Exit(NodeRef<'a, T>),
}

/// Top-down visit of the subtree rooted at `root`.
///
/// Each node is visited twice: once on entry (before its children) and once
/// on exit (after them). The visitor returns `true` to descend into the
/// children, `false` to skip them; the exit call happens either way.
///
/// ```
/// use hdl_tree::{TraversePhase, topdown_traverse, tree};
///
/// let tree = tree!(0, [tree!(1), tree!(2)]);
/// let mut events = Vec::new();
/// topdown_traverse(tree.root(), &mut |node, phase| {
///     events.push((*node.value(), phase));
///     true
/// });
/// assert_eq!(events.len(), 6);
/// assert_eq!(events[0], (0, TraversePhase::Enter));
/// assert_eq!(events[5], (0, TraversePhase::Exit));
/// ```
pub fn topdown_traverse<'a, T, F>(root: NodeRef<'a, T>, visitor: &mut F)
where
    F: FnMut(NodeRef<'a, T>, TraversePhase) -> bool,
{
    let mut stack = vec![Frame::Enter(root)];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(node) => {
                stack.push(Frame::Exit(node));
                if visitor(node, TraversePhase::Enter) {
                    stack.extend(node.children().rev().map(Frame::Enter));
                }
            }
            Frame::Exit(node) => {
                visitor(node, TraversePhase::Exit);
            }
        }
    }
}
