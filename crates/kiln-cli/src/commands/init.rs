//! `kiln init` - write a default configuration file.

use std::path::Path;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, project_root: &Path, output: OutputManager) -> CliResult<()> {
    let config_path = if args.global {
        AppConfig::global_config_path().ok_or_else(|| CliError::ConfigError {
            message: "no home directory to place the global config in".into(),
            source: None,
        })?
    } else {
        AppConfig::project_config_path(project_root)
    };

    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    let toml = AppConfig::default().to_toml()?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating config directory '{}'", parent.display()))?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("writing config to '{}'", config_path.display()))?;

    output.success(&format!("Configuration created at {}", config_path.display()))?;
    Ok(())
}
