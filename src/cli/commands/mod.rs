//! CLI command handlers for `curriform`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod check;
pub mod config;
pub mod matrix;

use curriform::raw::RawProposal;
use std::fs;
use std::path::Path;

/// Load and deserialize a proposal JSON file.
///
/// # Errors
/// Returns an error message if the file cannot be read or is not valid JSON.
pub fn load_proposal(path: &Path) -> Result<RawProposal, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse '{}' as proposal JSON: {e}", path.display()))
}
