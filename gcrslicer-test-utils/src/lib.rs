//! Test utilities for GCR Slicer
//!
//! This crate provides temporary directory tree builders and the sample
//! fixture layouts used across the workspace test suites.

pub mod builders;
pub mod fixtures;

// Re-export commonly used types
pub use builders::{TestTree, TestTreeBuilder};
pub use fixtures::{DATA2_FILES, DATA3_FILES, sample_library, sample_library_builder};
