//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into calls on the core [`Generator`] and
//! report the result. No naming or staging rules live here.

use std::path::Path;

use chrono::{DateTime, Utc};
use kiln_adapters::{LocalFileManager, SimpleRenderer};
use kiln_core::prelude::{Generator, Variables};
use serde::Serialize;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod config;
pub mod file;
pub mod init;
pub mod list;
pub mod make;

/// Generator wired to the local filesystem of `project_root`.
pub fn build_generator(project_root: &Path, config: &AppConfig) -> CliResult<Generator> {
    let files = LocalFileManager::new(project_root, config.namespace_map());
    let generator = Generator::new(
        config.generator_settings(project_root),
        Box::new(files),
        Box::new(SimpleRenderer::new()),
    )?;
    Ok(generator)
}

/// Parse repeated `--var KEY=VALUE` arguments. Later keys win.
pub fn parse_vars(raw: &[String]) -> CliResult<Variables> {
    raw.iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(CliError::InvalidInput {
                message: format!("expected KEY=VALUE, got '{pair}'"),
                source: None,
            }),
        })
        .collect()
}

/// Machine-readable summary of a `make` or `file` run.
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl GenerationReport {
    pub fn new(dry_run: bool, files: Vec<FileReport>) -> Self {
        Self {
            dry_run,
            files,
            generated_at: Utc::now(),
        }
    }
}

/// Print staged contents instead of writing them, then drop the queue.
pub fn preview(
    generator: &mut Generator,
    output: &crate::output::OutputManager,
) -> CliResult<Vec<FileReport>> {
    let mut reports = Vec::new();
    for op in generator.pending_operations() {
        let path = op.target_path().display().to_string();
        let content = generator.pending_content(op.target_path())?;
        reports.push(FileReport {
            path,
            content: Some(content),
        });
    }
    generator.reset();

    if !output.is_json() {
        for report in &reports {
            output.file("would create", &report.path)?;
            if let Some(content) = &report.content {
                output.print(content)?;
            }
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_pairs() {
        let vars = parse_vars(&["a=1".into(), "b=x=y".into(), "a=2".into()]).unwrap();
        assert_eq!(vars.get("a"), Some("2"));
        assert_eq!(vars.get("b"), Some("x=y"));
    }

    #[test]
    fn empty_value_is_allowed() {
        let vars = parse_vars(&["title=".into()]).unwrap();
        assert_eq!(vars.get("title"), Some(""));
    }

    #[test]
    fn missing_equals_is_invalid_input() {
        assert!(matches!(
            parse_vars(&["nokey".into()]),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_vars(&["=value".into()]),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn report_serialises_without_empty_content() {
        let report = GenerationReport::new(
            false,
            vec![FileReport {
                path: "src/Foo.php".into(),
                content: None,
            }],
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["files"][0]["path"], "src/Foo.php");
        assert!(json["files"][0].get("content").is_none());
        assert!(json["generated_at"].is_string());
    }
}
