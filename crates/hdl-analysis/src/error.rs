/*
 * error.rs
 * Copyright (c) 2026 hdl-tools contributors
 */

//! Error types for rule selection and violation reporting.

use hdl_tree::TreeError;
use thiserror::Error;

/// Errors that can occur while configuring or running lint rules.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A rule selection names a rule that is not registered.
    #[error("Unknown lint rule: {name}")]
    UnknownRule { name: String },

    /// The rule selection could not be parsed.
    #[error("Invalid rule selection: {0}")]
    InvalidSelection(#[from] toml::de::Error),

    /// A tree operation failed (e.g. a violation path leaves the tree).
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
