/*
 * lib.rs
 * Copyright (c) 2026 hdl-tools contributors
 *
 * hdl-tree: ordered syntax trees and their traversals.
 *
 * This crate provides the tree every analysis in the toolchain walks:
 *
 * - An arena-backed ordered tree with parent/sibling navigation
 * - One cursor shape shared by three visiting orders (pre-order,
 *   post-order, leaves only), bounded to any subtree
 * - Path descent, ancestor chains and structural comparison
 * - A deterministic nested bracketed rendering for diagnostics
 */

//! Ordered syntax trees and their traversals.
//!
//! The payload type is opaque: source positions or tokens, when needed, are
//! carried inside `T` by the caller.
//!
//! ```
//! use hdl_tree::tree;
//!
//! let tree = tree!(0, [tree!(1, [tree!(11), tree!(12)]), tree!(2)]);
//! let subtree = tree.root().descend_path(&[0]);
//!
//! let pre: Vec<i32> = subtree.pre_order().map(|n| *n.value()).collect();
//! let post: Vec<i32> = subtree.post_order().map(|n| *n.value()).collect();
//! let leaves: Vec<i32> = tree.leaves().map(|n| *n.value()).collect();
//!
//! assert_eq!(pre, [1, 11, 12]);
//! assert_eq!(post, [11, 12, 1]);
//! assert_eq!(leaves, [11, 12, 2]);
//! ```

mod macros;

pub mod compare;
pub mod cursor;
pub mod error;
pub mod node;
pub mod order;
pub mod print;
pub mod tree;
pub mod visit;

// Re-export commonly used items at crate root
pub use compare::{MismatchKind, TreeMismatch, deep_equal, structure_equal};
pub use cursor::{Cursor, Traversal, TraversalOrder, Walker};
pub use error::{Result, TreeError};
pub use node::{Ancestors, Children, NodeRef, format_path};
pub use order::{Leaves, PostOrder, PreOrder};
pub use print::{PrintOptions, TreePrinter};
pub use tree::{NodeId, NodeMut, Tree};
pub use visit::{TraversePhase, topdown_traverse};
