//! End-to-end resolution against a fake on-disk SDK tree.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use trtloc_core::{
    LocateConfig, PRIMARY_HEADER, Resolution, cargo_directives, library_file_name,
};

const VERSION_HEADER_TEXT: &str = "\
#ifndef NV_INFER_VERSION_H\n\
#define NV_INFER_VERSION_H\n\
#define NV_TENSORRT_MAJOR 8 //!< TensorRT major version.\n\
#define NV_TENSORRT_MINOR 6 //!< TensorRT minor version.\n\
#define NV_TENSORRT_PATCH 1 //!< TensorRT patch version.\n\
#define NV_TENSORRT_BUILD 6 //!< TensorRT build number.\n\
#endif\n";

/// Lay out a plausible install: include/ with headers, lib/ with the
/// primary library and the requested component stems.
fn fake_sdk(components: &[&str]) -> TempDir {
    let root = TempDir::new().unwrap();
    let include = root.path().join("include");
    let lib = root.path().join("lib");
    fs::create_dir_all(&include).unwrap();
    fs::create_dir_all(&lib).unwrap();

    fs::write(include.join(PRIMARY_HEADER), "// TensorRT API\n").unwrap();
    fs::write(include.join("NvInferVersion.h"), VERSION_HEADER_TEXT).unwrap();
    fs::write(lib.join(library_file_name("nvinfer")), b"").unwrap();
    for stem in components {
        fs::write(lib.join(library_file_name(stem)), b"").unwrap();
    }

    root
}

fn config_for(root: &Path) -> LocateConfig {
    LocateConfig::with_dirs(vec![root.join("include")], vec![root.join("lib")])
}

#[test]
fn full_install_resolves_with_version_and_components() {
    let sdk = fake_sdk(&["nvinfer_plugin", "nvonnxparser"]);
    let config = config_for(sdk.path()).with_components(["infer_plugin", "onnx_parser"]);

    let resolution = Resolution::resolve(&config);

    assert!(resolution.found);
    assert_eq!(resolution.version.to_string(), "8.6.1.6");
    assert!(resolution.include_dirs.contains(&sdk.path().join("include")));
    assert!(
        resolution
            .libraries
            .contains(&sdk.path().join("lib").join(library_file_name("nvinfer")))
    );

    assert!(resolution.components["infer_plugin"].found);
    assert!(resolution.components["onnx_parser"].found);
    assert!(resolution.component_targets.contains_key("infer_plugin"));

    let primary = resolution.primary_target.expect("primary target");
    assert_eq!(
        primary.interface_link_libraries,
        vec!["nvinfer_plugin".to_string(), "nvonnxparser".to_string()]
    );
}

#[test]
fn missing_component_degrades_without_failing_resolution() {
    // Plugin library deliberately absent.
    let sdk = fake_sdk(&[]);
    let config = config_for(sdk.path()).with_components(["infer_plugin"]);

    let resolution = Resolution::resolve(&config);

    assert!(resolution.found, "primary pair present, overall must succeed");
    let handle = &resolution.components["infer_plugin"];
    assert!(!handle.found);
    assert!(!handle.is_registered_target);
    assert!(resolution.component_targets.is_empty());

    let primary = resolution.primary_target.expect("primary target");
    assert!(primary.interface_link_libraries.is_empty());
}

#[test]
fn missing_primary_library_is_a_hard_failure() {
    let sdk = fake_sdk(&[]);
    fs::remove_file(sdk.path().join("lib").join(library_file_name("nvinfer"))).unwrap();

    let resolution = Resolution::resolve(&config_for(sdk.path()));

    assert!(!resolution.found);
    assert!(resolution.primary_target.is_none());
    // Version extraction is independent of the hard-failure gate.
    assert_eq!(resolution.version.to_string(), "8.6.1.6");
}

#[test]
fn missing_header_skips_version_and_components() {
    let sdk = fake_sdk(&["nvinfer_plugin"]);
    fs::remove_file(sdk.path().join("include").join(PRIMARY_HEADER)).unwrap();

    let config = config_for(sdk.path()).with_components(["infer_plugin"]);
    let resolution = Resolution::resolve(&config);

    assert!(!resolution.found);
    assert!(resolution.version.is_empty());
    assert!(resolution.components.is_empty());
}

#[test]
fn resolution_is_idempotent() {
    let sdk = fake_sdk(&["nvinfer_plugin"]);
    let config = config_for(sdk.path()).with_components(["infer_plugin", "onnx_parser"]);

    let first = Resolution::resolve(&config);
    let second = Resolution::resolve(&config);

    assert_eq!(first, second);
}

#[test]
fn earlier_candidate_directory_shadows_later_one() {
    let preferred = fake_sdk(&[]);
    let fallback = fake_sdk(&[]);

    let config = LocateConfig::with_dirs(
        vec![
            preferred.path().join("include"),
            fallback.path().join("include"),
        ],
        vec![preferred.path().join("lib"), fallback.path().join("lib")],
    );
    let resolution = Resolution::resolve(&config);

    assert!(resolution.found);
    assert!(
        resolution
            .include_dirs
            .contains(&preferred.path().join("include"))
    );
    assert!(
        !resolution
            .include_dirs
            .contains(&fallback.path().join("include"))
    );
}

#[test]
fn resolution_serializes_to_json() {
    let sdk = fake_sdk(&["nvinfer_plugin"]);
    let config = config_for(sdk.path()).with_components(["infer_plugin"]);
    let resolution = Resolution::resolve(&config);

    let json = serde_json::to_value(&resolution).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["version"]["major"], 8);
    assert_eq!(json["components"]["infer_plugin"]["found"], true);
}

#[test]
fn cargo_directives_cover_the_whole_install() {
    let sdk = fake_sdk(&["nvinfer_plugin"]);
    let config = config_for(sdk.path()).with_components(["infer_plugin"]);
    let resolution = Resolution::resolve(&config);

    let lines = cargo_directives(&resolution);
    let lib_dir = sdk.path().join("lib");
    assert!(lines.contains(&format!("cargo:rustc-link-search=native={}", lib_dir.display())));
    assert!(lines.contains(&"cargo:rustc-link-lib=dylib=nvinfer".to_string()));
    assert!(lines.contains(&"cargo:rustc-link-lib=dylib=nvinfer_plugin".to_string()));
}
