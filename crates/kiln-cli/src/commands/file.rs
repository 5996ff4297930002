//! `kiln file` - stage and write an arbitrary file.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    cli::FileArgs,
    commands::{FileReport, GenerationReport, build_generator, parse_vars, preview},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(
    args: FileArgs,
    project_root: &Path,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut generator = build_generator(project_root, &config)?;

    match (&args.template, args.content) {
        (Some(template), _) => {
            let variables = parse_vars(&args.vars)?;
            generator.generate_file(&args.path, template.as_str(), variables)?;
        }
        (None, Some(content)) => generator.dump_file(&args.path, content)?,
        (None, None) => {
            return Err(CliError::InvalidInput {
                message: "either --template or --content is required".into(),
                source: None,
            });
        }
    }

    let files = if args.dry_run {
        preview(&mut generator, &output)?
    } else {
        let written = generator.write_changes()?;
        info!(count = written.len(), "File generated");
        written
            .iter()
            .map(|path| FileReport {
                path: path.display().to_string(),
                content: None,
            })
            .collect()
    };

    if output.is_json() {
        return output.json(&GenerationReport::new(args.dry_run, files));
    }

    if !args.dry_run {
        for file in &files {
            output.file("created", &file.path)?;
        }
    }
    Ok(())
}
