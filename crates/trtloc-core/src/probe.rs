//! Read-only filesystem probes for headers and libraries.
//!
//! A probe walks an ordered candidate list and returns the first
//! directory in which the requested file exists. Not finding anything
//! is a normal outcome that callers branch on, never an error.

use std::path::PathBuf;

use serde::Serialize;

/// Outcome of a single first-match lookup.
///
/// Immutable once created; `path` is present iff `found` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryResult {
    /// Whether the file exists under any candidate directory.
    pub found: bool,
    /// The resolved path of the earliest match, if any.
    pub path: Option<PathBuf>,
}

impl DiscoveryResult {
    pub(crate) fn hit(path: PathBuf) -> Self {
        Self {
            found: true,
            path: Some(path),
        }
    }

    pub(crate) const fn miss() -> Self {
        Self {
            found: false,
            path: None,
        }
    }
}

/// Find the first candidate directory containing `filename`.
///
/// Directories are checked in the given order; the earliest existing
/// `dir/filename` pair wins. An empty candidate list always misses.
pub fn find_first_existing(candidate_dirs: &[PathBuf], filename: &str) -> DiscoveryResult {
    for dir in candidate_dirs {
        let candidate = dir.join(filename);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "probe hit");
            return DiscoveryResult::hit(candidate);
        }
    }
    tracing::debug!(filename, "probe miss");
    DiscoveryResult::miss()
}

/// Platform-shaped library filename for a link stem.
///
/// `nvinfer` becomes `libnvinfer.so` on Linux, `libnvinfer.dylib` on
/// macOS, and `nvinfer.lib` on Windows.
pub fn library_file_name(stem: &str) -> String {
    #[cfg(target_os = "windows")]
    {
        format!("{stem}.lib")
    }

    #[cfg(target_os = "macos")]
    {
        format!("lib{stem}.dylib")
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        format!("lib{stem}.so")
    }
}
