/*
 * print.rs
 * Copyright (c) 2026 hdl-tools contributors
 *
 * Nested bracketed rendering of trees for diagnostics.
 */

//! Debug rendering.
//!
//! A tree renders as nested braces, one node per line:
//!
//! ```text
//! { (0)
//!   { (1) }
//!   { (2)
//!     { (21) }
//!   }
//! }
//! ```
//!
//! The layout only depends on the tree shape and the payload rendering, so
//! it is stable enough to compare in tests.

use std::fmt;
use std::fmt::Write as _;

use serde::Deserialize;

use crate::error::Result;
use crate::node::NodeRef;
use crate::tree::Tree;
use crate::visit::{TraversePhase, topdown_traverse};

/// Layout options for [`TreePrinter`].
///
/// Options can be loaded from TOML; missing keys keep their defaults:
///
/// ```
/// use hdl_tree::PrintOptions;
///
/// let options = PrintOptions::from_toml_str("max_depth = 3").unwrap();
/// assert_eq!(options.indent, 2);
/// assert_eq!(options.max_depth, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrintOptions {
    /// Spaces added per nesting level (default: 2).
    pub indent: usize,
    /// Nodes deeper than this are elided as `{ ... }` (default: unlimited).
    pub max_depth: Option<usize>,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            max_depth: None,
        }
    }
}

impl PrintOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    fn elides(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

/// Writes (sub)trees in the nested bracketed format.
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    options: PrintOptions,
}

impl TreePrinter {
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Write the subtree rooted at `root`, rendering payloads with
    /// `write_value`.
    pub fn write<'a, T, W, F>(
        &self,
        out: &mut W,
        root: NodeRef<'a, T>,
        mut write_value: F,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &'a T) -> fmt::Result,
    {
        let mut result = Ok(());
        let mut depth = 0usize;
        let mut first = true;

        topdown_traverse(root, &mut |node, phase| {
            match phase {
                TraversePhase::Enter => {
                    let level = depth;
                    depth += 1;
                    if result.is_err() {
                        return false;
                    }
                    result = self.open(out, node, level, first, &mut write_value);
                    first = false;
                    result.is_ok() && !self.options.elides(level)
                }
                TraversePhase::Exit => {
                    depth -= 1;
                    if result.is_ok() && !node.is_leaf() && !self.options.elides(depth) {
                        result = self.close(out, depth);
                    }
                    true
                }
            }
        });

        result
    }

    fn open<'a, T, W, F>(
        &self,
        out: &mut W,
        node: NodeRef<'a, T>,
        level: usize,
        first: bool,
        write_value: &mut F,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &'a T) -> fmt::Result,
    {
        if !first {
            out.write_char('\n')?;
        }
        self.pad(out, level)?;
        if self.options.elides(level) {
            return out.write_str("{ ... }");
        }
        out.write_str("{ (")?;
        write_value(out, node.value())?;
        out.write_char(')')?;
        if node.is_leaf() {
            out.write_str(" }")?;
        }
        Ok(())
    }

    fn close<W: fmt::Write>(&self, out: &mut W, level: usize) -> fmt::Result {
        out.write_char('\n')?;
        self.pad(out, level)?;
        out.write_char('}')
    }

    fn pad<W: fmt::Write>(&self, out: &mut W, level: usize) -> fmt::Result {
        write!(out, "{:width$}", "", width = level * self.options.indent)
    }

    /// Render the subtree rooted at `root` to a string using `Display`
    /// payloads.
    pub fn render<T: fmt::Display>(&self, root: NodeRef<'_, T>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write(&mut out, root, |out, value| write!(out, "{value}"));
        out
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::default().write(f, *self, |f, value| write!(f, "{value}"))
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::default().write(f, self.root(), |f, value| write!(f, "{value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;

    fn sample() -> Tree<i32> {
        tree!(
            0,
            [
                tree!(1),
                tree!(2, [tree!(21), tree!(22, [tree!(221)])]),
                tree!(3),
            ]
        )
    }

    #[test]
    fn test_single_node() {
        assert_eq!(Tree::new(7).to_string(), "{ (7) }");
    }

    #[test]
    fn test_display_nested() {
        insta::assert_snapshot!(sample().to_string(), @r"
        { (0)
          { (1) }
          { (2)
            { (21) }
            { (22)
              { (221) }
            }
          }
          { (3) }
        }
        ");
    }

    #[test]
    fn test_display_subtree() {
        let tree = sample();
        insta::assert_snapshot!(tree.root().child(1).unwrap().to_string(), @r"
        { (2)
          { (21) }
          { (22)
            { (221) }
          }
        }
        ");
    }

    #[test]
    fn test_debug_quotes_payloads() {
        let tree = tree!("top", [tree!("leaf")]);
        insta::assert_snapshot!(format!("{tree:?}"), @r#"
        { ("top")
          { ("leaf") }
        }
        "#);
    }

    #[test]
    fn test_max_depth_elides_deep_nodes() {
        let printer = TreePrinter::new(PrintOptions {
            indent: 4,
            max_depth: Some(1),
        });
        insta::assert_snapshot!(printer.render(sample().root()), @r"
        { (0)
            { (1) }
            { (2)
                { ... }
                { ... }
            }
            { (3) }
        }
        ");
    }

    #[test]
    fn test_max_depth_zero_keeps_root_only() {
        let printer = TreePrinter::new(PrintOptions {
            indent: 2,
            max_depth: Some(0),
        });
        assert_eq!(
            printer.render(tree!(0, [tree!(1, [tree!(11)])]).root()),
            "{ (0)\n  { ... }\n}"
        );
    }

    #[test]
    fn test_render_matches_display() {
        let tree = sample();
        let printer = TreePrinter::default();

        assert_eq!(printer.options(), &PrintOptions::default());
        assert_eq!(printer.render(tree.root()), tree.to_string());
        assert_eq!(
            printer.render(tree.root().descend_path(&[1, 1])),
            "{ (22)\n  { (221) }\n}"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let tree = sample();
        assert_eq!(tree.to_string(), tree.to_string());
        assert_eq!(tree.to_string(), sample().to_string());
    }

    #[test]
    fn test_options_from_toml() {
        let options = PrintOptions::from_toml_str("indent = 4\nmax_depth = 2\n").unwrap();
        assert_eq!(
            options,
            PrintOptions {
                indent: 4,
                max_depth: Some(2),
            }
        );
        assert_eq!(PrintOptions::from_toml_str("").unwrap(), PrintOptions::default());
    }

    #[test]
    fn test_options_reject_unknown_keys() {
        let err = PrintOptions::from_toml_str("width = 3").unwrap_err();
        assert!(err.to_string().starts_with("invalid print options"));
    }
}
