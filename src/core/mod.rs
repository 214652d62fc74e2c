//! Core module: the curriculum outcome validation and normalization engine

pub mod completeness;
pub mod config;
pub mod dedupe;
pub mod gate;
pub mod models;
pub mod normalize;
pub mod raw;
pub mod snapshot;
pub mod textcheck;

/// Returns the current version of the `curriform` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
