//! Test utilities for the boot image inventory
//!
//! Fixture builders for temporary image trees and known-answer digest
//! vectors, shared by the core crate's tests.

pub mod digests;
pub mod fixtures;

// Re-export commonly used types
pub use fixtures::{ImageTree, ImageTreeBuilder};
