//! Diagnostics for the `kiln` binary.
//!
//! Generation itself reports through [`OutputManager`](crate::output::OutputManager);
//! this module only wires the `tracing` events raised while staging and
//! committing files to stderr. The library crates never install a
//! subscriber of their own.
//!
//! `-v` raises the level one step per flag starting from `warn`, `--quiet`
//! drops it to `error`, and a set `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events reach the terminal.
const KILN_TARGETS: [&str; 3] = ["kiln", "kiln_core", "kiln_adapters"];

/// Install the stderr subscriber for this run.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(derive_level(args))));

    // Staging reports can be piped as JSON; keep escape codes out of them.
    let use_ansi = !args.no_color
        && args.output_format != OutputFormat::Json
        && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `kiln=<level>,kiln_core=<level>,...`
fn filter_directives(level: &str) -> String {
    KILN_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
