//! Scan configuration
//!
//! The [`ScanConfig`] struct and its typestate builder.

pub mod builder;
pub mod getters;
pub mod types;

pub use builder::ScanConfigBuilder;
pub use types::ScanConfig;
