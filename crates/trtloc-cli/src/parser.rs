//! CLI argument definition.

use clap::Parser;

/// Command-line interface for the TensorRT locator.
///
/// A single-purpose tool: probe the filesystem, report what resolved,
/// exit non-zero when the mandatory header + library pair is missing.
#[derive(Parser, Debug)]
#[command(name = "trtloc")]
#[command(about = "Locate an installed TensorRT SDK and report linkable targets")]
#[command(version)]
pub struct Cli {
    /// Search these include directories instead of env/default hints (repeatable, ordered)
    #[arg(long = "include-dir", value_name = "DIR")]
    pub include_dirs: Vec<String>,

    /// Search these library directories instead of env/default hints (repeatable, ordered)
    #[arg(long = "lib-dir", value_name = "DIR")]
    pub lib_dirs: Vec<String>,

    /// Optional component to resolve, by logical name (repeatable)
    #[arg(short = 'c', long = "component", value_name = "NAME")]
    pub components: Vec<String>,

    /// Print the full resolution as JSON
    #[arg(long)]
    pub json: bool,

    /// Print cargo build-script directives instead of a report
    #[arg(long)]
    pub cargo: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
