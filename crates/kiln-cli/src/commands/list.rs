//! Implementation of the `kiln list` command.

use kiln_core::domain::ElementKind;
use serde::Serialize;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ElementRow<'a> {
    kind: ElementKind,
    namespace: &'a str,
    suffix: &'a str,
}

fn rows(config: &AppConfig) -> Vec<ElementRow<'_>> {
    let elements = &config.generator.elements;
    ElementKind::ALL
        .into_iter()
        .map(|kind| ElementRow {
            kind,
            namespace: elements.namespace_for(kind),
            suffix: elements.suffix_for(kind),
        })
        .collect()
}

pub fn execute(args: ListArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let rows = rows(config);

    // --output-format json wins over --format
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!(
                "Element kinds (root namespace: {}):",
                config.generator.root_namespace
            ))?;
            output.print(&format!("  {:<12} {:<14} {}", "KIND", "NAMESPACE", "SUFFIX"))?;
            for row in &rows {
                output.print(&format!(
                    "  {:<12} {:<14} {}",
                    row.kind.as_str(),
                    row.namespace,
                    if row.suffix.is_empty() { "-" } else { row.suffix }
                ))?;
            }
        }
        ListFormat::List => {
            for row in &rows {
                output.data(row.kind.as_str())?;
            }
        }
        ListFormat::Json => output.json(&rows)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use kiln_core::domain::{ElementOverride, ElementTable};

    use super::*;

    #[test]
    fn one_row_per_kind() {
        assert_eq!(rows(&AppConfig::default()).len(), ElementKind::ALL.len());
    }

    #[test]
    fn rows_reflect_overrides() {
        let mut config = AppConfig::default();
        config.generator.elements = ElementTable::new().with_override(
            ElementKind::Controller,
            ElementOverride {
                namespace: Some("Http".into()),
                suffix: Some("Action".into()),
            },
        );

        let rows = rows(&config);
        let controller = rows.iter().find(|r| r.kind == ElementKind::Controller).unwrap();
        assert_eq!(controller.namespace, "Http");
        assert_eq!(controller.suffix, "Action");
    }
}
