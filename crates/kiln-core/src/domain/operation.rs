use std::path::{Path, PathBuf};

use crate::domain::{template::TemplateHandle, variables::Variables};

/// Where a staged file's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationSource {
    /// Render `template` with `variables` at commit time.
    Template {
        template: TemplateHandle,
        variables: Variables,
    },
    /// Literal content, written verbatim.
    Raw { content: String },
}

/// One staged file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    target_path: PathBuf,
    source: OperationSource,
    class_name: Option<String>,
}

impl PendingOperation {
    /// A templated write. The class-name hint is taken from the
    /// `class_name` variable when present.
    pub fn from_template(
        target_path: impl Into<PathBuf>,
        template: TemplateHandle,
        variables: Variables,
    ) -> Self {
        let class_name = variables.get(Variables::CLASS_NAME).map(str::to_string);
        Self {
            target_path: target_path.into(),
            source: OperationSource::Template { template, variables },
            class_name,
        }
    }

    pub fn raw(target_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            target_path: target_path.into(),
            source: OperationSource::Raw {
                content: content.into(),
            },
            class_name: None,
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn source(&self) -> &OperationSource {
        &self.source
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn is_raw(&self) -> bool {
        matches!(self.source, OperationSource::Raw { .. })
    }

    pub fn variables(&self) -> Option<&Variables> {
        match &self.source {
            OperationSource::Template { variables, .. } => Some(variables),
            OperationSource::Raw { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_operation_takes_class_hint_from_variables() {
        let op = PendingOperation::from_template(
            "src/Foo.txt",
            TemplateHandle::File("skeleton/class.tpl".into()),
            Variables::new().with(Variables::CLASS_NAME, "Foo"),
        );
        assert_eq!(op.class_name(), Some("Foo"));
        assert!(!op.is_raw());
    }

    #[test]
    fn raw_operation_has_no_hint_or_variables() {
        let op = PendingOperation::raw("README.md", "# hi");
        assert_eq!(op.class_name(), None);
        assert!(op.variables().is_none());
        assert!(op.is_raw());
    }
}
