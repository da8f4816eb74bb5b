//! CLI library for `trtloc`.
//!
//! The binary in `main.rs` is the composition root; this crate holds the
//! argument parser and the report presentation so they stay testable.

#![deny(unused_crate_dependencies)]

// Used by the binary target only
use anyhow as _;
use serde_json as _;
use tracing_subscriber as _;

// Silence unused dev-dependency warnings for presentation tests
#[cfg(test)]
use tempfile as _;

pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use parser::Cli;
