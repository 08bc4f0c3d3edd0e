/*
 * error.rs
 * Copyright (c) 2026 hdl-tools contributors
 */

//! Error types for recoverable tree operations.
//!
//! Contract violations (dereferencing an exhausted cursor, an unchecked
//! path descent that leaves the tree) panic instead of returning these.

use thiserror::Error;

/// Errors returned by the checked tree operations.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A child index in a path does not exist at its level.
    #[error("path index {index} at depth {depth} is out of range (node has {num_children} children)")]
    PathOutOfRange {
        depth: usize,
        index: usize,
        num_children: usize,
    },

    /// Print options could not be parsed.
    #[error("invalid print options: {0}")]
    InvalidPrintOptions(#[from] toml::de::Error),
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
