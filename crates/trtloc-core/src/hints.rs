//! Candidate directory configuration.
//!
//! The locate pipeline searches a fixed, ordered set of directories.
//! Order determines match priority: environment overrides come first,
//! then the conventional install locations.

use std::env;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::LocateError;

/// Root of a TensorRT install; `<root>/include` and `<root>/lib` are
/// searched ahead of everything else when set.
pub const ENV_SDK_ROOT: &str = "TENSORRT_DIR";

/// Colon-separated list of extra include directories.
pub const ENV_INCLUDE_DIRS: &str = "TRTLOC_INCLUDE_DIRS";

/// Colon-separated list of extra library directories.
pub const ENV_LIB_DIRS: &str = "TRTLOC_LIB_DIRS";

/// Conventional header locations, highest priority first.
const DEFAULT_INCLUDE_HINTS: &[&str] = &[
    "/usr/local/TensorRT/include",
    "/opt/tensorrt/include",
    "/usr/local/cuda/include",
    "/usr/include/x86_64-linux-gnu",
    "/usr/include/aarch64-linux-gnu",
    "/usr/local/include",
    "/usr/include",
];

/// Conventional library locations, highest priority first.
const DEFAULT_LIB_HINTS: &[&str] = &[
    "/usr/local/TensorRT/lib",
    "/opt/tensorrt/lib",
    "/usr/local/cuda/lib64",
    "/usr/lib/x86_64-linux-gnu",
    "/usr/lib/aarch64-linux-gnu",
    "/usr/local/lib",
    "/usr/lib",
];

/// How a candidate directory set was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HintSource {
    /// The caller passed explicit directories (CLI flags, API call).
    Explicit,
    /// Environment variables contributed the leading entries.
    EnvVar,
    /// Built-in conventional install locations only.
    Default,
}

/// Fixed configuration for one resolution run.
///
/// Immutable once built; the same config against an unchanged filesystem
/// resolves to an identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocateConfig {
    /// Ordered candidate directories for header lookups.
    pub include_dirs: Vec<PathBuf>,
    /// Ordered candidate directories for library lookups.
    pub lib_dirs: Vec<PathBuf>,
    /// Logical names of optional components to resolve.
    pub components: Vec<String>,
    /// How the candidate sets were derived.
    pub source: HintSource,
}

impl LocateConfig {
    /// Build a config from explicit directory lists.
    ///
    /// Used by callers that fully control the search space (tests, CLI
    /// flag overrides). No environment lookups are performed.
    pub fn with_dirs(include_dirs: Vec<PathBuf>, lib_dirs: Vec<PathBuf>) -> Self {
        Self {
            include_dirs,
            lib_dirs,
            components: Vec::new(),
            source: HintSource::Explicit,
        }
    }

    /// Build a config from the environment and conventional hints.
    ///
    /// Resolution order per category:
    /// 1. `TENSORRT_DIR` (`<root>/include`, `<root>/lib`)
    /// 2. `TRTLOC_INCLUDE_DIRS` / `TRTLOC_LIB_DIRS` (colon-separated)
    /// 3. Built-in conventional install locations
    pub fn from_environment() -> Result<Self, LocateError> {
        let mut include_dirs = Vec::new();
        let mut lib_dirs = Vec::new();
        let mut from_env = false;

        if let Ok(root) = env::var(ENV_SDK_ROOT) {
            if !root.trim().is_empty() {
                let root = normalize_user_path(&root)?;
                include_dirs.push(root.join("include"));
                lib_dirs.push(root.join("lib"));
                from_env = true;
            }
        }

        from_env |= push_env_list(ENV_INCLUDE_DIRS, &mut include_dirs)?;
        from_env |= push_env_list(ENV_LIB_DIRS, &mut lib_dirs)?;

        include_dirs.extend(DEFAULT_INCLUDE_HINTS.iter().map(PathBuf::from));
        lib_dirs.extend(DEFAULT_LIB_HINTS.iter().map(PathBuf::from));

        Ok(Self {
            include_dirs,
            lib_dirs,
            components: Vec::new(),
            source: if from_env {
                HintSource::EnvVar
            } else {
                HintSource::Default
            },
        })
    }

    /// Request optional components by logical name.
    #[must_use]
    pub fn with_components<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = names.into_iter().map(Into::into).collect();
        self
    }
}

/// The built-in header hint directories, in priority order.
pub fn default_include_dirs() -> Vec<PathBuf> {
    DEFAULT_INCLUDE_HINTS.iter().map(PathBuf::from).collect()
}

/// The built-in library hint directories, in priority order.
pub fn default_lib_dirs() -> Vec<PathBuf> {
    DEFAULT_LIB_HINTS.iter().map(PathBuf::from).collect()
}

/// Append the entries of a colon-separated env list, normalized.
///
/// Returns whether the variable contributed at least one entry.
fn push_env_list(var: &str, out: &mut Vec<PathBuf>) -> Result<bool, LocateError> {
    let Ok(raw) = env::var(var) else {
        return Ok(false);
    };

    let mut contributed = false;
    for entry in raw.split(':') {
        if entry.trim().is_empty() {
            continue;
        }
        out.push(normalize_user_path(entry)?);
        contributed = true;
    }
    Ok(contributed)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, LocateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LocateError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(LocateError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| LocateError::CurrentDirError(e.to_string()))
    }
}
