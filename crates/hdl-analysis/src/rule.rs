/*
 * rule.rs
 * Copyright (c) 2026 hdl-tools contributors
 *
 * Syntax tree lint rules and the driver that runs them.
 */

use hdl_tree::{NodeRef, TraversePhase, topdown_traverse};
use serde::{Deserialize, Serialize};

use crate::context::SyntaxTreeContext;
use crate::error::{AnalysisError, Result};
use crate::violation::LintRuleStatus;

/// A lint rule that inspects every node of a syntax tree once.
///
/// Rules accumulate violations across [`handle_node`](Self::handle_node)
/// calls and hand them back from [`report`](Self::report).
pub trait SyntaxTreeLintRule<T> {
    /// Name used in reports and rule selections.
    fn name(&self) -> &str;

    /// Where the rule is documented.
    fn url(&self) -> &str {
        ""
    }

    /// Inspect `node`. `context` holds its ancestors, root first.
    fn handle_node<'a>(&mut self, node: NodeRef<'a, T>, context: &SyntaxTreeContext<'a, T>);

    fn report(&self) -> LintRuleStatus;
}

/// Which rules to run, by name.
///
/// An empty `enable` list means every registered rule; `disable` wins over
/// `enable`.
///
/// ```toml
/// enable = ["identifier-case", "no-deep-nesting"]
/// disable = ["no-deep-nesting"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleSelection {
    pub enable: Vec<String>,
    pub disable: Vec<String>,
}

impl RuleSelection {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        let enabled = self.enable.is_empty() || self.enable.iter().any(|n| n == name);
        enabled && !self.disable.iter().any(|n| n == name)
    }

    /// Fails on the first selected name missing from `known`.
    fn validate(&self, known: &[&str]) -> Result<()> {
        match self
            .enable
            .iter()
            .chain(&self.disable)
            .find(|name| !known.contains(&name.as_str()))
        {
            Some(name) => Err(AnalysisError::UnknownRule { name: name.clone() }),
            None => Ok(()),
        }
    }
}

/// Run a single rule over the subtree rooted at `root`.
///
/// The context of `root` itself is rebuilt from its ancestors, so rules see
/// the same context whether they run on the whole tree or on a subtree.
pub fn run_syntax_tree_rule<T>(
    rule: &mut dyn SyntaxTreeLintRule<T>,
    root: NodeRef<'_, T>,
) -> LintRuleStatus {
    walk_with_context(root, |node, context| rule.handle_node(node, context));
    let status = rule.report();
    tracing::debug!(
        rule = rule.name(),
        violations = status.violations.len(),
        "Ran lint rule"
    );
    status
}

/// Run every rule over the subtree rooted at `root` in a single walk.
///
/// Statuses come back in the same order as `rules`.
pub fn run_syntax_tree_rules<T>(
    rules: &mut [Box<dyn SyntaxTreeLintRule<T>>],
    root: NodeRef<'_, T>,
) -> Vec<LintRuleStatus> {
    let enabled = vec![true; rules.len()];
    run_masked(rules, &enabled, root)
}

/// Run the rules that `selection` enables.
///
/// Selections naming a rule that is not in `rules` are rejected before
/// anything runs.
pub fn run_selected_rules<T>(
    rules: &mut [Box<dyn SyntaxTreeLintRule<T>>],
    selection: &RuleSelection,
    root: NodeRef<'_, T>,
) -> Result<Vec<LintRuleStatus>> {
    let known: Vec<&str> = rules.iter().map(|rule| rule.name()).collect();
    selection.validate(&known)?;
    let enabled: Vec<bool> = rules
        .iter()
        .map(|rule| selection.is_enabled(rule.name()))
        .collect();
    Ok(run_masked(rules, &enabled, root))
}

fn run_masked<T>(
    rules: &mut [Box<dyn SyntaxTreeLintRule<T>>],
    enabled: &[bool],
    root: NodeRef<'_, T>,
) -> Vec<LintRuleStatus> {
    walk_with_context(root, |node, context| {
        for (rule, _) in rules.iter_mut().zip(enabled).filter(|(_, on)| **on) {
            rule.handle_node(node, context);
        }
    });

    rules
        .iter()
        .zip(enabled)
        .filter(|(_, on)| **on)
        .map(|(rule, _)| {
            let status = rule.report();
            tracing::debug!(
                rule = rule.name(),
                violations = status.violations.len(),
                "Ran lint rule"
            );
            status
        })
        .collect()
}

/// Calls `handle` on every node of the subtree in pre-order, with the
/// node's ancestors as context.
fn walk_with_context<'a, T>(
    root: NodeRef<'a, T>,
    mut handle: impl FnMut(NodeRef<'a, T>, &SyntaxTreeContext<'a, T>),
) {
    let mut context = SyntaxTreeContext::of(root);
    topdown_traverse(root, &mut |node, phase| {
        match phase {
            TraversePhase::Enter => {
                handle(node, &context);
                context.push(node);
            }
            TraversePhase::Exit => context.pop(),
        }
        true
    });
}
