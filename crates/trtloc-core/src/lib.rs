//! Discovery of an installed NVIDIA TensorRT SDK.
//!
//! This crate provides the canonical resolution pipeline for TensorRT
//! artifacts on the local filesystem:
//! - Candidate directory configuration (env overrides + conventional hints)
//! - First-match probes for the primary header and library
//! - Version extraction from `NvInferVersion.h`
//! - Optional component resolution (plugin, parsers, ...)
//! - Assembly into linkable target descriptors
//!
//! # Design
//!
//! - Resolution is a pure function of config + filesystem: no global state,
//!   no caching, identical inputs yield structurally equal results
//! - Absence of an artifact is a normal outcome represented by `found`
//!   flags, not an error; only configuration problems return `LocateError`
//! - Only the primary header + library pair is mandatory; version fields
//!   and components degrade gracefully when missing

#![deny(unused_crate_dependencies)]

// serde_json is exercised by the integration tests only
#[cfg(test)]
use serde_json as _;

mod cargo_emit;
mod components;
mod error;
mod hints;
mod probe;
mod resolution;
mod version;

#[cfg(test)]
mod test_utils;

// Re-export public API

// Error type
pub use error::LocateError;

// Candidate directory configuration
pub use hints::{
    ENV_INCLUDE_DIRS, ENV_LIB_DIRS, ENV_SDK_ROOT, HintSource, LocateConfig, default_include_dirs,
    default_lib_dirs, normalize_user_path,
};

// Filesystem probes
pub use probe::{DiscoveryResult, find_first_existing, library_file_name};

// Version extraction
pub use version::{TrtVersion, VERSION_HEADER, extract_version};

// Component resolution
pub use components::{ComponentHandle, physical_lib_stem, resolve_components};

// Assembled result
pub use resolution::{PRIMARY_HEADER, PRIMARY_LIB_STEM, Resolution, TargetDescriptor};

// Build-script directive emission
pub use cargo_emit::cargo_directives;
