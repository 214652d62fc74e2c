//! Shared library for `curriform`
//! Validation and normalization engine for outcome-based curriculum proposals.

pub mod core;

pub use crate::core::get_version;
pub use crate::core::{
    completeness, config, dedupe, gate, models, normalize, raw, snapshot, textcheck,
};
