//! Optional component resolution.
//!
//! Components are separately-packaged libraries (plugin, parsers, ...)
//! discovered independently of the primary pair. A logical component
//! name maps to a physical library stem via a small override table,
//! falling back to a `nv` prefix for unrecognized names.
//!
//! Known limitation: a component whose physical name matches neither the
//! table nor the prefix convention will silently not be found.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::probe::{find_first_existing, library_file_name};

const COMPONENT_PREFIX: &str = "nv";

/// Logical names whose physical stems do not follow the prefix rule.
const NAME_OVERRIDES: &[(&str, &str)] = &[
    ("infer_plugin", "nvinfer_plugin"),
    ("onnx_parser", "nvonnxparser"),
];

/// Map a logical component name to its physical library stem.
pub fn physical_lib_stem(logical_name: &str) -> String {
    NAME_OVERRIDES
        .iter()
        .find(|(name, _)| *name == logical_name)
        .map_or_else(
            || format!("{COMPONENT_PREFIX}{logical_name}"),
            |(_, stem)| (*stem).to_string(),
        )
}

/// Per-component resolution outcome.
///
/// Recorded for every requested component, found or not, so callers can
/// distinguish "not requested" from "requested but absent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentHandle {
    /// Logical component name as requested.
    pub name: String,
    /// Whether the component library was found.
    pub found: bool,
    /// Resolved library path when found.
    pub library_path: Option<PathBuf>,
    /// Include directory shared with the primary resolution.
    pub include_path: PathBuf,
    /// Whether a linkable target is registered for this component.
    pub is_registered_target: bool,
}

/// Resolve each requested component against the library candidate dirs.
///
/// `include_dir` is the already-resolved primary include directory; a
/// missing component degrades to `found = false` without affecting the
/// others or the overall resolution.
pub fn resolve_components(
    requested: &[String],
    lib_dirs: &[PathBuf],
    include_dir: &Path,
) -> BTreeMap<String, ComponentHandle> {
    let mut handles = BTreeMap::new();

    for name in requested {
        let stem = physical_lib_stem(name);
        let probe = find_first_existing(lib_dirs, &library_file_name(&stem));
        if !probe.found {
            tracing::debug!(component = %name, stem = %stem, "component library not found");
        }

        handles.insert(
            name.clone(),
            ComponentHandle {
                name: name.clone(),
                found: probe.found,
                is_registered_target: probe.found,
                library_path: probe.path,
                include_path: include_dir.to_path_buf(),
            },
        );
    }

    handles
}
