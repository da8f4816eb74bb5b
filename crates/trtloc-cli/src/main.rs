//! CLI entry point - the composition root.
//!
//! Builds the locate configuration from flags or the environment, runs
//! the resolution once, and renders it in the requested format. Exits
//! non-zero when the mandatory header + library pair is unsatisfied.

use clap::Parser;

use trtloc_cli::{Cli, presentation};
use trtloc_core::{LocateConfig, Resolution, cargo_directives, normalize_user_path};

fn build_config(cli: &Cli) -> anyhow::Result<LocateConfig> {
    let config = if cli.include_dirs.is_empty() && cli.lib_dirs.is_empty() {
        LocateConfig::from_environment()?
    } else {
        let include_dirs = cli
            .include_dirs
            .iter()
            .map(|raw| normalize_user_path(raw))
            .collect::<Result<Vec<_>, _>>()?;
        let lib_dirs = cli
            .lib_dirs
            .iter()
            .map(|raw| normalize_user_path(raw))
            .collect::<Result<Vec<_>, _>>()?;
        LocateConfig::with_dirs(include_dirs, lib_dirs)
    };

    Ok(config.with_components(cli.components.iter().cloned()))
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    let resolution = Resolution::resolve(&config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else if cli.cargo {
        for line in cargo_directives(&resolution) {
            println!("{line}");
        }
    } else {
        print!("{}", presentation::render_report(&resolution));
    }

    if !resolution.found {
        anyhow::bail!(
            "TensorRT not found (missing: {})",
            resolution.missing().join(", ")
        );
    }

    Ok(())
}
