//! `kiln config` - inspect configuration values.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    project_root: &Path,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current configuration:")?;
            output.data(&config.to_toml()?)?;
        }

        ConfigCommands::Path => {
            let project = config_file
                .map(Path::to_path_buf)
                .unwrap_or_else(|| AppConfig::project_config_path(project_root));
            output.data(&format!("project: {}", project.display()))?;
            if let Some(global) = AppConfig::global_config_path() {
                output.data(&format!("global:  {}", global.display()))?;
            }
        }
    }

    Ok(())
}

/// Look up a dotted key such as `generator.root_namespace`.
///
/// Strings print bare; tables and arrays print as TOML.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let root = toml::Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let unknown = || CliError::UnknownConfigKey { key: key.to_string() };
    let mut value = &root;
    for part in key.split('.') {
        value = value.get(part).ok_or_else(unknown)?;
    }

    Ok(match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(table) => toml::to_string_pretty(table).map_err(|e| {
            CliError::ConfigError {
                message: format!("Failed to serialise '{key}': {e}"),
                source: Some(Box::new(e)),
            }
        })?,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_string_value_is_bare() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "generator.root_namespace").unwrap(), "App");
        assert_eq!(get_config_value(&cfg, "autoload.extension").unwrap(), "php");
    }

    #[test]
    fn get_bool_value() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_table_renders_toml() {
        let cfg = AppConfig::default();
        let out = get_config_value(&cfg, "output").unwrap();
        assert!(out.contains("no_color = false"));
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }
}
