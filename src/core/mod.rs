//! Core module: dataset model, analytics queries, and shared services

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod models;

/// Returns the current version of the `MoocAnalytics` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
