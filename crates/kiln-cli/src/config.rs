//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the
//! [`GeneratorSettings`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `KILN__GENERATOR__ROOT_NAMESPACE=Shop`
//! 3. Project file: `<root>/kiln.toml`, or the `--config` file
//! 4. Global file under the user config directory
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use kiln_adapters::{NamespaceMap, NamespaceMapping, discover_skeleton_dir};
use kiln_core::domain::{ElementTable, GeneratorSettings};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Project configuration file name.
pub const CONFIG_FILE_NAME: &str = "kiln.toml";

/// Source directory for the root namespace when no mapping is configured.
const DEFAULT_SOURCE_DIR: &str = "src";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Naming and template settings.
    pub generator: GeneratorConfig,
    /// Namespace to directory mapping.
    pub autoload: AutoloadConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub root_namespace: String,
    pub separator: char,
    /// Discovered when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton_dir: Option<PathBuf>,
    pub header: Vec<String>,
    pub elements: ElementTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoloadConfig {
    /// Source file extension, without the dot.
    pub extension: String,
    /// Empty means `<root_namespace> → src`.
    pub mappings: Vec<NamespaceMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let settings = GeneratorSettings::default();
        Self {
            root_namespace: settings.root_namespace,
            separator: settings.separator,
            skeleton_dir: None,
            header: settings.header,
            elements: settings.elements,
        }
    }
}

impl Default for AutoloadConfig {
    fn default() -> Self {
        Self {
            extension: "php".into(),
            mappings: Vec::new(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            autoload: AutoloadConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration for the project at `project_root`.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. The
    /// default project and global files are optional.
    pub fn load(project_root: &Path, config_file: Option<&Path>) -> CliResult<Self> {
        let mut builder = Config::builder();

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder
                .add_source(File::from(Self::project_config_path(project_root)).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("KILN")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize::<AppConfig>())
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load configuration: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// `<root>/kiln.toml`.
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// User-wide config file, when a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "kiln", "kiln")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Generator settings for a project rooted at `project_root`.
    ///
    /// A relative `skeleton_dir` is resolved against the root.
    pub fn generator_settings(&self, project_root: &Path) -> GeneratorSettings {
        let skeleton_dir = match &self.generator.skeleton_dir {
            Some(dir) => project_root.join(dir),
            None => discover_skeleton_dir(project_root),
        };

        GeneratorSettings::default()
            .with_root_namespace(self.generator.root_namespace.clone())
            .with_separator(self.generator.separator)
            .with_skeleton_dir(skeleton_dir)
            .with_header(self.generator.header.clone())
            .with_elements(self.generator.elements.clone())
    }

    /// Namespace map from `[autoload]`, falling back to mapping the root
    /// namespace onto `src`.
    pub fn namespace_map(&self) -> NamespaceMap {
        let map = NamespaceMap::new(self.generator.separator, self.autoload.extension.clone());
        if self.autoload.mappings.is_empty() {
            map.with_mapping(self.generator.root_namespace.clone(), DEFAULT_SOURCE_DIR)
        } else {
            map.with_mappings(self.autoload.mappings.iter().cloned())
        }
    }

    /// TOML rendering, used by `init` and `config list`.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}
