//! `kiln make` - stage and write a single class.

use std::path::Path;

use kiln_core::domain::{ClassNameDetails, ElementKind};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    cli::MakeArgs,
    commands::{FileReport, GenerationReport, build_generator, parse_vars, preview},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct MakeReport<'a> {
    kind: ElementKind,
    class: &'a ClassNameDetails,
    #[serde(flatten)]
    report: GenerationReport,
}

#[instrument(skip_all, fields(kind = ?args.kind, name = %args.name))]
pub fn execute(
    args: MakeArgs,
    project_root: &Path,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let kind = ElementKind::from(args.kind);
    let variables = parse_vars(&args.vars)?;
    let mut generator = build_generator(project_root, &config)?;

    let details = generator.class_name_details_for(&args.name, kind)?;
    debug!(class = %details.full_name(), "Class name resolved");

    let target = match &args.template {
        Some(template) => {
            generator.generate_class(details.full_name(), template.as_str(), variables)?
        }
        None => generator.generate_class_declaration(&details, variables)?,
    };

    let files = if args.dry_run {
        preview(&mut generator, &output)?
    } else {
        let written = generator.write_changes()?;
        info!(count = written.len(), "Class generated");
        written
            .iter()
            .map(|path| FileReport {
                path: path.display().to_string(),
                content: None,
            })
            .collect()
    };

    if output.is_json() {
        return output.json(&MakeReport {
            kind,
            class: &details,
            report: GenerationReport::new(args.dry_run, files),
        });
    }

    if !args.dry_run {
        for file in &files {
            output.file("created", &file.path)?;
        }
        output.success(&format!(
            "{} {} at {}",
            kind,
            details.full_name(),
            target.display()
        ))?;
    }
    Ok(())
}
