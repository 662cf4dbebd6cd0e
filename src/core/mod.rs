//! Core module for the degree-audit rules evaluator

pub mod aggregates;
pub mod error;
pub mod models;

/// Returns the current version of the `DegreeAudit` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
