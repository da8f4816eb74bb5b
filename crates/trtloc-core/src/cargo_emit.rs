//! Build-script directive emission.
//!
//! Renders a resolution as the `cargo:` lines a consuming `build.rs`
//! prints to link against TensorRT. Nothing is emitted on hard failure
//! so a consumer can fall back to its own diagnostics.

use std::collections::BTreeSet;

use crate::components::physical_lib_stem;
use crate::resolution::{PRIMARY_LIB_STEM, Resolution};

/// Render `cargo:rustc-link-search` / `cargo:rustc-link-lib` lines.
///
/// Search paths are deduplicated parent directories of every resolved
/// library; link-lib lines cover the primary library and each registered
/// component, in that order.
pub fn cargo_directives(resolution: &Resolution) -> Vec<String> {
    if !resolution.found {
        return Vec::new();
    }

    let mut lines = Vec::new();

    let mut seen = BTreeSet::new();
    for library in &resolution.libraries {
        if let Some(dir) = library.parent() {
            if seen.insert(dir.to_path_buf()) {
                lines.push(format!("cargo:rustc-link-search=native={}", dir.display()));
            }
        }
    }

    lines.push(format!("cargo:rustc-link-lib=dylib={PRIMARY_LIB_STEM}"));
    for handle in resolution.components.values() {
        if handle.is_registered_target {
            lines.push(format!(
                "cargo:rustc-link-lib=dylib={}",
                physical_lib_stem(&handle.name)
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::LocateConfig;
    use crate::probe::library_file_name;
    use crate::resolution::PRIMARY_HEADER;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn emits_search_and_link_lines_for_full_install() {
        let include = TempDir::new().unwrap();
        let lib = TempDir::new().unwrap();
        fs::write(include.path().join(PRIMARY_HEADER), "// api").unwrap();
        fs::write(lib.path().join(library_file_name("nvinfer")), b"").unwrap();
        fs::write(lib.path().join(library_file_name("nvinfer_plugin")), b"").unwrap();

        let config = LocateConfig::with_dirs(
            vec![include.path().to_path_buf()],
            vec![lib.path().to_path_buf()],
        )
        .with_components(["infer_plugin"]);
        let resolution = Resolution::resolve(&config);

        let lines = cargo_directives(&resolution);
        assert_eq!(
            lines,
            vec![
                format!("cargo:rustc-link-search=native={}", lib.path().display()),
                "cargo:rustc-link-lib=dylib=nvinfer".to_string(),
                "cargo:rustc-link-lib=dylib=nvinfer_plugin".to_string(),
            ]
        );
    }

    #[test]
    fn emits_nothing_on_hard_failure() {
        let include = TempDir::new().unwrap();
        let lib = TempDir::new().unwrap();

        let config = LocateConfig::with_dirs(
            vec![include.path().to_path_buf()],
            vec![lib.path().to_path_buf()],
        );
        let resolution = Resolution::resolve(&config);

        assert!(cargo_directives(&resolution).is_empty());
    }

    #[test]
    fn unresolved_components_are_not_linked() {
        let include = TempDir::new().unwrap();
        let lib = TempDir::new().unwrap();
        fs::write(include.path().join(PRIMARY_HEADER), "// api").unwrap();
        fs::write(lib.path().join(library_file_name("nvinfer")), b"").unwrap();

        let config = LocateConfig::with_dirs(
            vec![include.path().to_path_buf()],
            vec![lib.path().to_path_buf()],
        )
        .with_components(["onnx_parser"]);
        let resolution = Resolution::resolve(&config);

        let lines = cargo_directives(&resolution);
        assert!(lines.iter().all(|line| !line.contains("nvonnxparser")));
    }
}
