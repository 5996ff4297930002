//! Simple variable substitution renderer.

use std::{
    collections::BTreeSet,
    path::Path,
    sync::LazyLock,
};

use kiln_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::Variables,
    error::KilnResult,
};
use regex::{Captures, Regex};
use tracing::instrument;

use crate::error::AdapterError;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// Renders template files by replacing `{{ name }}` placeholders.
///
/// Every placeholder must have a value; text outside placeholders is copied
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Substitute placeholders in `source`.
    ///
    /// Returns the sorted names of placeholders without a value on failure.
    pub fn render_str(source: &str, variables: &Variables) -> Result<String, Vec<String>> {
        let mut missing = BTreeSet::new();
        let rendered = PLACEHOLDER.replace_all(source, |caps: &Captures| {
            match variables.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => {
                    missing.insert(caps[1].to_string());
                    String::new()
                }
            }
        });

        if missing.is_empty() {
            Ok(rendered.into_owned())
        } else {
            Err(missing.into_iter().collect())
        }
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, variables), fields(template = %template.display()))]
    fn render(&self, template: &Path, variables: &Variables) -> KilnResult<String> {
        let source = std::fs::read_to_string(template)
            .map_err(|e| AdapterError::io(template, "read template", e))?;

        Self::render_str(&source, variables).map_err(|missing| {
            ApplicationError::RenderingFailed {
                template: template.display().to_string(),
                reason: format!("no value for {}", missing.join(", ")),
            }
            .into()
        })
    }

    fn has_template(&self, template: &Path) -> bool {
        template.is_file()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use kiln_core::error::KilnError;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn substitutes_with_or_without_spaces() {
        let vars = Variables::new()
            .with("class_name", "FooController")
            .with("namespace", "App.Controller");

        let out = SimpleRenderer::render_str(
            "namespace {{namespace}};\nclass {{ class_name }} {}",
            &vars,
        )
        .unwrap();
        assert_eq!(out, "namespace App.Controller;\nclass FooController {}");
    }

    #[test]
    fn reports_every_missing_placeholder_once() {
        let err = SimpleRenderer::render_str("{{ a }} {{ b }} {{ a }}", &Variables::new()).unwrap_err();
        assert_eq!(err, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn non_placeholder_braces_are_kept() {
        let out = SimpleRenderer::render_str("fn main() { {{x}} }", &Variables::new().with("x", "1")).unwrap();
        assert_eq!(out, "fn main() { 1 }");
    }

    #[test]
    fn renders_template_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Hello {{{{ name }}}}").unwrap();

        let out = SimpleRenderer
            .render(file.path(), &Variables::new().with("name", "kiln"))
            .unwrap();
        assert_eq!(out, "Hello kiln");
        assert!(SimpleRenderer.has_template(file.path()));
    }

    #[test]
    fn missing_variable_is_rendering_failure() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{{{ ghost }}}}").unwrap();

        let err = SimpleRenderer.render(file.path(), &Variables::new()).unwrap_err();
        assert!(matches!(
            err,
            KilnError::Application(ApplicationError::RenderingFailed { ref reason, .. })
                if reason.contains("ghost")
        ));
    }

    #[test]
    fn directories_are_not_templates() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!SimpleRenderer.has_template(dir.path()));
        assert!(!SimpleRenderer.has_template(&dir.path().join("absent.tpl")));
    }
}
