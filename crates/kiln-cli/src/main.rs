//! # Kiln CLI
//!
//! Staged code generation for namespaced classes.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber.
//! 3. Resolve the project root and load configuration.
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    match run(cli) {
        Ok(()) => {
            info!("Kiln completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the command handler.
///
/// The project root and config are loaded per command. `init` skips the
/// config and completions need neither.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let global = &cli.global;
    let context = || -> CliResult<(PathBuf, AppConfig, OutputManager)> {
        let project_root = global
            .project_root()
            .with_cli_context(|| "resolving the project root")?;
        let config = AppConfig::load(&project_root, global.config.as_deref())?;
        debug!(root = %project_root.display(), "Configuration loaded");
        let output = OutputManager::new(global, &config);
        Ok((project_root, config, output))
    };

    match cli.command {
        Commands::Make(cmd) => {
            let (root, config, output) = context()?;
            commands::make::execute(cmd, &root, config, output)
        }
        Commands::File(cmd) => {
            let (root, config, output) = context()?;
            commands::file::execute(cmd, &root, config, output)
        }
        Commands::List(cmd) => {
            let (_, config, output) = context()?;
            commands::list::execute(cmd, &config, output)
        }
        Commands::Init(cmd) => {
            // Must work even when the existing config does not parse.
            let root = global
                .project_root()
                .with_cli_context(|| "resolving the project root")?;
            let output = OutputManager::new(global, &AppConfig::default());
            commands::init::execute(cmd, &root, output)
        }
        Commands::Config(cmd) => {
            let (root, config, output) = context()?;
            commands::config::execute(cmd, &root, global.config.as_deref(), config, output)
        }
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// The single place where a `CliError` becomes stderr output and an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
