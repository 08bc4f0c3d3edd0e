/*
 * macros.rs
 * Copyright (c) 2026 hdl-tools contributors
 */

/// Build a [`Tree`](crate::Tree) bottom-up.
///
/// `tree!(value)` is a single node; `tree!(value, [children...])` adopts
/// already-built trees as children, in order.
///
/// ```
/// use hdl_tree::tree;
///
/// let tree = tree!(0, [tree!(1), tree!(2, [tree!(21)])]);
/// assert_eq!(tree.num_nodes(), 4);
/// ```
#[macro_export]
macro_rules! tree {
    ($value:expr $(,)?) => {
        $crate::Tree::new($value)
    };
    ($value:expr, [$($child:expr),* $(,)?] $(,)?) => {
        $crate::Tree::with_children($value, [$($child),*])
    };
}
