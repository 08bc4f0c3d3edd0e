//! Syntax tree lint infrastructure.
//!
//! This crate runs lint rules over [`hdl_tree`] syntax trees. It knows
//! nothing about any particular language: payloads are opaque, and rules
//! decide what a node means.
//!
//! # Key Concepts
//!
//! ## SyntaxTreeLintRule
//!
//! A [`SyntaxTreeLintRule`] is called once per node, in pre-order, with the
//! node's [`SyntaxTreeContext`] (its ancestors, root first). It reports a
//! [`LintRuleStatus`] holding the [`LintViolation`]s it found.
//!
//! ## Rule selection
//!
//! A [`RuleSelection`] (usually read from TOML) picks which registered rules
//! run. [`run_selected_rules`] rejects selections that name unknown rules.
//!
//! # Example
//!
//! ```
//! use hdl_analysis::{
//!     LintRuleStatus, LintViolation, SyntaxTreeContext, SyntaxTreeLintRule,
//!     run_syntax_tree_rule,
//! };
//! use hdl_tree::{NodeRef, tree};
//!
//! /// Flags identifiers declared directly under the module.
//! #[derive(Default)]
//! struct NoTopLevelWires {
//!     violations: Vec<LintViolation>,
//! }
//!
//! impl SyntaxTreeLintRule<&'static str> for NoTopLevelWires {
//!     fn name(&self) -> &str {
//!         "no-top-level-wires"
//!     }
//!
//!     fn handle_node<'a>(
//!         &mut self,
//!         node: NodeRef<'a, &'static str>,
//!         context: &SyntaxTreeContext<'a, &'static str>,
//!     ) {
//!         if *node.value() == "wire" && context.direct_parent_is(|kind| *kind == "module") {
//!             self.violations.push(LintViolation::new(node, "wire at module scope", context));
//!         }
//!     }
//!
//!     fn report(&self) -> LintRuleStatus {
//!         LintRuleStatus::new(self.name(), "").with_violations(self.violations.clone())
//!     }
//! }
//!
//! let tree = tree!("module", [tree!("wire"), tree!("always", [tree!("wire")])]);
//! let status = run_syntax_tree_rule(&mut NoTopLevelWires::default(), tree.root());
//! assert_eq!(status.to_string(), "0: wire at module scope [no-top-level-wires]");
//! ```

mod context;
mod error;
mod rule;
mod violation;

pub use context::SyntaxTreeContext;
pub use error::{AnalysisError, Result};
pub use rule::{
    RuleSelection, SyntaxTreeLintRule, run_selected_rules, run_syntax_tree_rule,
    run_syntax_tree_rules,
};
pub use violation::{LintRuleStatus, LintViolation};
