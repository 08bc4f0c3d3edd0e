/*
 * compare.rs
 * Copyright (c) 2026 hdl-tools contributors
 *
 * Structural comparison of (sub)trees.
 */

use thiserror::Error;

use crate::node::{NodeRef, format_path};

/// What differs at the first mismatching node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// The payloads compare unequal.
    Value,
    /// The nodes have a different number of children.
    ChildCount { left: usize, right: usize },
}

/// The first difference found between two trees, in pre-order.
///
/// `path` is relative to the roots that were compared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("trees differ at [{}]: {}", format_path(.path), describe(.kind))]
pub struct TreeMismatch {
    pub path: Vec<usize>,
    pub kind: MismatchKind,
}

fn describe(kind: &MismatchKind) -> String {
    match kind {
        MismatchKind::Value => "values differ".to_string(),
        MismatchKind::ChildCount { left, right } => {
            format!("{left} children vs {right} children")
        }
    }
}

/// Compare two subtrees node by node with a custom payload predicate.
///
/// Shapes must match exactly. Payload types may differ, which allows
/// comparing a tree against an expected skeleton.
pub fn structure_equal<T, U, F>(
    left: NodeRef<'_, T>,
    right: NodeRef<'_, U>,
    mut eq: F,
) -> Result<(), TreeMismatch>
where
    F: FnMut(&T, &U) -> bool,
{
    // Child counts are checked before moving on, so both pre-order
    // sequences stay aligned.
    for (l, r) in left.pre_order().zip(right.pre_order()) {
        let kind = if !eq(l.value(), r.value()) {
            Some(MismatchKind::Value)
        } else if l.num_children() != r.num_children() {
            Some(MismatchKind::ChildCount {
                left: l.num_children(),
                right: r.num_children(),
            })
        } else {
            None
        };
        if let Some(kind) = kind {
            return Err(TreeMismatch {
                path: relative_path(l, left),
                kind,
            });
        }
    }
    Ok(())
}

/// Compare two subtrees for equal shape and equal payloads.
pub fn deep_equal<T: PartialEq>(
    left: NodeRef<'_, T>,
    right: NodeRef<'_, T>,
) -> Result<(), TreeMismatch> {
    structure_equal(left, right, |l, r| l == r)
}

fn relative_path<T>(node: NodeRef<'_, T>, root: NodeRef<'_, T>) -> Vec<usize> {
    let mut path: Vec<usize> = std::iter::successors(Some(node), |n| n.parent())
        .take_while(|&n| n != root)
        .map(NodeRef::birth_rank)
        .collect();
    path.reverse();
    path
}
