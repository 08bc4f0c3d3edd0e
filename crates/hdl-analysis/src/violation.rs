/*
 * violation.rs
 * Copyright (c) 2026 hdl-tools contributors
 *
 * Lint violations and per-rule status.
 */

use std::collections::BTreeSet;
use std::fmt;

use hdl_tree::{NodeId, NodeRef, format_path};

use crate::context::SyntaxTreeContext;
use crate::error::Result;

/// A single rule violation found in a syntax tree.
///
/// Violations order by their node's position in a pre-order walk (the path
/// from the root), then by reason.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LintViolation {
    /// Child indices from the root to the offending node.
    pub path: Vec<usize>,
    pub reason: String,
    pub node: NodeId,
    /// Ancestors of the offending node, root first.
    pub context: Vec<NodeId>,
}

impl LintViolation {
    /// Record a violation at `node`, seen within `context`.
    pub fn new<T>(
        node: NodeRef<'_, T>,
        reason: impl Into<String>,
        context: &SyntaxTreeContext<'_, T>,
    ) -> Self {
        Self {
            path: node.path(),
            reason: reason.into(),
            node: node.id(),
            context: context.ids(),
        }
    }

    /// Record a violation at `node`, rebuilding its context from parent links.
    pub fn at<T>(node: NodeRef<'_, T>, reason: impl Into<String>) -> Self {
        Self::new(node, reason, &SyntaxTreeContext::of(node))
    }

    /// Record a violation at the node reached by `path` from `root`.
    pub fn at_path<T>(
        root: NodeRef<'_, T>,
        path: &[usize],
        reason: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::at(root.try_descend_path(path)?, reason))
    }
}

/// The outcome of running one rule over one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintRuleStatus {
    pub rule_name: String,
    /// Where the rule is documented; may be empty.
    pub url: String,
    pub violations: BTreeSet<LintViolation>,
}

impl LintRuleStatus {
    pub fn new(rule_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            url: url.into(),
            violations: BTreeSet::new(),
        }
    }

    pub fn with_violations(mut self, violations: impl IntoIterator<Item = LintViolation>) -> Self {
        self.violations.extend(violations);
        self
    }

    /// True when the rule found nothing to report.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Record a violation. Returns `false` if an identical one was already
    /// recorded.
    pub fn add(&mut self, violation: LintViolation) -> bool {
        self.violations.insert(violation)
    }

    /// Drop every violation for which `is_waived` returns `true`.
    pub fn waive_violations(&mut self, mut is_waived: impl FnMut(&LintViolation) -> bool) {
        let before = self.violations.len();
        self.violations.retain(|violation| !is_waived(violation));
        tracing::trace!(
            rule = self.rule_name.as_str(),
            waived = before - self.violations.len(),
            "Waived violations"
        );
    }
}

/// One line per violation: `<path>: <reason> [<rule>]`.
impl fmt::Display for LintRuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let path = if violation.path.is_empty() {
                "(root)".to_string()
            } else {
                format_path(&violation.path)
            };
            write!(f, "{path}: {} [{}]", violation.reason, self.rule_name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use hdl_tree::{TreeError, tree};

    #[test]
    fn test_violation_captures_path_and_context() {
        let tree = tree!(0, [tree!(1, [tree!(11)]), tree!(2)]);
        let eleven = tree.root().descend_path(&[0, 0]);
        let violation = LintViolation::at(eleven, "too deep");

        assert_eq!(violation.path, [0, 0]);
        assert_eq!(violation.node, eleven.id());
        assert_eq!(
            violation.context,
            [tree.root().id(), tree.root().child(0).unwrap().id()]
        );
    }

    #[test]
    fn test_violations_order_by_tree_position() {
        let tree = tree!(0, [tree!(1, [tree!(11)]), tree!(2)]);
        let root = tree.root();
        let status = LintRuleStatus::new("order", "").with_violations([
            LintViolation::at(root.descend_path(&[1]), "b"),
            LintViolation::at(root.descend_path(&[0, 0]), "a"),
            LintViolation::at(root, "c"),
            LintViolation::at(root.descend_path(&[0]), "d"),
        ]);

        let reasons: Vec<&str> = status.violations.iter().map(|v| v.reason.as_str()).collect();
        assert_eq!(reasons, ["c", "d", "a", "b"]);
    }

    #[test]
    fn test_duplicate_violations_collapse() {
        let tree = tree!(0, [tree!(1)]);
        let one = tree.root().child(0).unwrap();
        let mut status = LintRuleStatus::new("dup", "");

        assert!(status.add(LintViolation::at(one, "same")));
        assert!(!status.add(LintViolation::at(one, "same")));
        assert!(status.add(LintViolation::at(one, "other")));
        assert_eq!(status.violations.len(), 2);
    }

    #[test]
    fn test_waive_violations() {
        let tree = tree!(0, [tree!(1), tree!(2), tree!(3)]);
        let mut status = LintRuleStatus::new("waive", "")
            .with_violations(tree.root().children().map(|n| LintViolation::at(n, "flagged")));
        assert!(!status.is_ok());

        status.waive_violations(|v| v.path == [1]);
        let paths: Vec<Vec<usize>> = status.violations.iter().map(|v| v.path.clone()).collect();
        assert_eq!(paths, [vec![0], vec![2]]);

        status.waive_violations(|_| true);
        assert!(status.is_ok());
    }

    #[test]
    fn test_at_path_reports_bad_path() {
        let tree = tree!(0, [tree!(1)]);
        let ok = LintViolation::at_path(tree.root(), &[0], "fine").unwrap();
        assert_eq!(ok.path, [0]);

        let err = LintViolation::at_path(tree.root(), &[0, 4], "bad").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Tree(TreeError::PathOutOfRange { depth: 1, index: 4, num_children: 0 })
        ));
    }

    #[test]
    fn test_display_lists_violations() {
        let tree = tree!(0, [tree!(1, [tree!(11)]), tree!(2)]);
        let root = tree.root();
        let status = LintRuleStatus::new("no-deep-nesting", "").with_violations([
            LintViolation::at(root.descend_path(&[0, 0]), "nested too deeply"),
            LintViolation::at(root, "root flagged"),
        ]);

        insta::assert_snapshot!(status.to_string(), @r"
        (root): root flagged [no-deep-nesting]
        0.0: nested too deeply [no-deep-nesting]
        ");
    }
}
