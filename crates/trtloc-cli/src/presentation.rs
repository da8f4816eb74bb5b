//! Report rendering for resolution results.
//!
//! Displays the key = value dump plus per-component status lines and a
//! found/missing summary in a formatted, user-friendly way.

use trtloc_core::Resolution;

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render the human-readable report.
pub fn render_report(resolution: &Resolution) -> String {
    let mut out = String::new();

    out.push_str(&resolution.to_string());
    out.push('\n');

    for (name, handle) in &resolution.components {
        if handle.found {
            out.push_str(&format!("{GREEN}✓{RESET} component {name}\n"));
        } else {
            out.push_str(&format!("{RED}✗{RESET} component {name} (not found)\n"));
        }
    }

    if resolution.found {
        let version = resolution.version.to_string();
        if version.is_empty() {
            out.push_str(&format!("{BOLD}{GREEN}✓ TensorRT found{RESET} (version unknown)\n"));
        } else {
            out.push_str(&format!("{BOLD}{GREEN}✓ TensorRT {version} found{RESET}\n"));
        }
    } else {
        out.push_str(&format!(
            "{BOLD}{RED}✗ TensorRT not found{RESET} (missing: {})\n",
            resolution.missing().join(", ")
        ));
    }

    out
}
