//! TensorRT version extraction from `NvInferVersion.h`.
//!
//! Best-effort by design: a missing header, unreadable file, or absent
//! macro never raises an error. Fields that cannot be extracted are
//! omitted, not zero-filled, so a partial header yields a shorter
//! dotted string.

use std::fmt;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

/// Name of the version header inside the include directory.
pub const VERSION_HEADER: &str = "NvInferVersion.h";

const MACRO_PREFIX: &str = "NV_TENSORRT";
const FIELD_NAMES: [&str; 4] = ["MAJOR", "MINOR", "PATCH", "BUILD"];

/// Extracted version fields, each independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrtVersion {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
    pub build: Option<u32>,
}

impl TrtVersion {
    /// Whether no field could be extracted.
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    fn fields(&self) -> impl Iterator<Item = u32> {
        [self.major, self.minor, self.patch, self.build]
            .into_iter()
            .flatten()
    }
}

impl fmt::Display for TrtVersion {
    /// Dot-joined present fields in MAJOR.MINOR.PATCH.BUILD order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .fields()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{joined}")
    }
}

/// Extract the TensorRT version from the header under `include_dir`.
///
/// Returns an empty version when the header is absent or unreadable;
/// per-field extraction takes the first match in the file.
pub fn extract_version(include_dir: &Path) -> TrtVersion {
    let header = include_dir.join(VERSION_HEADER);
    if !header.exists() {
        tracing::debug!(path = %header.display(), "version header absent");
        return TrtVersion::default();
    }

    let text = match fs::read_to_string(&header) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %header.display(), %err, "failed to read version header");
            return TrtVersion::default();
        }
    };

    let [major, minor, patch, build] = FIELD_NAMES.map(|field| extract_field(&text, field));
    TrtVersion {
        major,
        minor,
        patch,
        build,
    }
}

/// Match `#define NV_TENSORRT_<FIELD> <digits>`; first occurrence wins.
fn extract_field(text: &str, field: &str) -> Option<u32> {
    let pattern = format!(r"(?m)^\s*#\s*define\s+{MACRO_PREFIX}_{field}\s+(\d+)");
    let re = Regex::new(&pattern).ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}
