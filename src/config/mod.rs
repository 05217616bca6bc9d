//! Configuration module for export runs
//!
//! This module provides the `ExportConfig` struct and its type-safe builder
//! for configuring an export with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{Complete, ExportConfigBuilder, WithApiToken};
pub use types::{ExportConfig, TraversalMode};
