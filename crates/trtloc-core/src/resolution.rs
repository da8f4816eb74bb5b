//! Top-level resolution pipeline and result assembly.
//!
//! One call captures everything: primary header/library probes, gated
//! version extraction and component resolution, and assembly into
//! linkable target descriptors. The result is the "golden truth" callers
//! consume - CLI report, JSON output, and cargo directive emission all
//! read from the same struct.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::components::{ComponentHandle, resolve_components};
use crate::hints::LocateConfig;
use crate::probe::{DiscoveryResult, find_first_existing, library_file_name};
use crate::version::{TrtVersion, extract_version};

/// The mandatory API header.
pub const PRIMARY_HEADER: &str = "NvInfer.h";

/// Link stem of the mandatory primary library.
pub const PRIMARY_LIB_STEM: &str = "nvinfer";

/// Linkable target metadata exported for one resolved artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDescriptor {
    /// On-disk location of the library file.
    pub imported_location: PathBuf,
    /// Include directories consumers must add.
    pub interface_include_dirs: BTreeSet<PathBuf>,
    /// Link stems of registered component targets, in component-name order.
    /// Genuinely empty when no components resolved - never a lone blank
    /// entry.
    pub interface_link_libraries: Vec<String>,
}

/// Aggregated outcome of one resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// True iff both the primary header and primary library resolved.
    pub found: bool,
    /// Extracted version; may be empty or partial regardless of `found`.
    pub version: TrtVersion,
    /// Primary header probe outcome.
    pub header: DiscoveryResult,
    /// Primary library probe outcome.
    pub library: DiscoveryResult,
    /// Resolved include directories.
    pub include_dirs: BTreeSet<PathBuf>,
    /// Resolved library files (primary + found components).
    pub libraries: BTreeSet<PathBuf>,
    /// Outcome per requested component, found or not.
    pub components: BTreeMap<String, ComponentHandle>,
    /// Primary target; `None` on hard failure.
    pub primary_target: Option<TargetDescriptor>,
    /// Targets for components that resolved.
    pub component_targets: BTreeMap<String, TargetDescriptor>,
}

impl Resolution {
    /// Run the full pipeline against the given config.
    ///
    /// Single-pass and idempotent: no state is carried between runs, so
    /// an unchanged filesystem yields a structurally equal result.
    pub fn resolve(config: &LocateConfig) -> Self {
        let header = find_first_existing(&config.include_dirs, PRIMARY_HEADER);
        let library =
            find_first_existing(&config.lib_dirs, &library_file_name(PRIMARY_LIB_STEM));

        let include_dir = header
            .path
            .as_deref()
            .and_then(|p| p.parent())
            .map(PathBuf::from);

        // No include dir gates both version extraction and component
        // resolution: a component handle must never carry an undefined
        // include path.
        let (version, components) = match include_dir.as_deref() {
            Some(dir) => (
                extract_version(dir),
                resolve_components(&config.components, &config.lib_dirs, dir),
            ),
            None => (TrtVersion::default(), BTreeMap::new()),
        };

        Self::assemble(header, library, include_dir, version, components)
    }

    fn assemble(
        header: DiscoveryResult,
        library: DiscoveryResult,
        include_dir: Option<PathBuf>,
        version: TrtVersion,
        components: BTreeMap<String, ComponentHandle>,
    ) -> Self {
        let found = header.found && library.found;

        let include_dirs: BTreeSet<PathBuf> = include_dir.iter().cloned().collect();

        let mut libraries = BTreeSet::new();
        if let Some(path) = &library.path {
            libraries.insert(path.clone());
        }
        for handle in components.values() {
            if let Some(path) = &handle.library_path {
                libraries.insert(path.clone());
            }
        }

        let registered: Vec<String> = components
            .values()
            .filter(|handle| handle.is_registered_target)
            .map(|handle| crate::components::physical_lib_stem(&handle.name))
            .collect();

        let primary_target = if found {
            library.path.clone().map(|location| TargetDescriptor {
                imported_location: location,
                interface_include_dirs: include_dirs.clone(),
                interface_link_libraries: registered,
            })
        } else {
            None
        };

        let component_targets: BTreeMap<String, TargetDescriptor> = components
            .values()
            .filter(|handle| handle.found)
            .filter_map(|handle| {
                handle.library_path.clone().map(|location| {
                    (
                        handle.name.clone(),
                        TargetDescriptor {
                            imported_location: location,
                            interface_include_dirs: include_dirs.clone(),
                            interface_link_libraries: Vec::new(),
                        },
                    )
                })
            })
            .collect();

        Self {
            found,
            version,
            header,
            library,
            include_dirs,
            libraries,
            components,
            primary_target,
            component_targets,
        }
    }

    /// Names of the mandatory artifacts that did not resolve.
    ///
    /// Empty when `found` is true; otherwise feeds the caller's
    /// "dependency not satisfied" diagnostic.
    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if !self.header.found {
            missing.push(PRIMARY_HEADER.to_string());
        }
        if !self.library.found {
            missing.push(library_file_name(PRIMARY_LIB_STEM));
        }
        missing
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "version = {}", self.version)?;
        for dir in &self.include_dirs {
            writeln!(f, "include_dir = {}", dir.display())?;
        }
        for lib in &self.libraries {
            writeln!(f, "library = {}", lib.display())?;
        }
        for (name, handle) in &self.components {
            match &handle.library_path {
                Some(path) => writeln!(f, "component.{name} = {}", path.display())?,
                None => writeln!(f, "component.{name} = not found")?,
            }
        }
        write!(f, "found = {}", self.found)
    }
}
