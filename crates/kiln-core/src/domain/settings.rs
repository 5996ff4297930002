use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{element::ElementTable, error::DomainError};

/// Read-only generator configuration for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Root namespace every short name is qualified under, e.g. `App`.
    pub root_namespace: String,
    /// Namespace delimiter used in qualified names.
    pub separator: char,
    /// Directory searched for template identifiers that are not readable
    /// as given.
    pub skeleton_dir: PathBuf,
    /// Header comment lines for generated declarations.
    pub header: Vec<String>,
    /// Per-element namespace/suffix overrides.
    pub elements: ElementTable,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            root_namespace: "App".into(),
            separator: '.',
            skeleton_dir: PathBuf::from("skeleton"),
            header: Vec::new(),
            elements: ElementTable::default(),
        }
    }
}

impl GeneratorSettings {
    pub fn with_root_namespace(mut self, root: impl Into<String>) -> Self {
        self.root_namespace = root.into();
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_skeleton_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skeleton_dir = dir.into();
        self
    }

    pub fn with_header<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_elements(mut self, elements: ElementTable) -> Self {
        self.elements = elements;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.separator.is_alphanumeric() || self.separator.is_whitespace() || self.separator == '_' {
            return Err(DomainError::InvalidSeparator(self.separator));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.root_namespace, "App");
        assert_eq!(settings.separator, '.');
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_identifier_characters_as_separator() {
        for sep in ['a', '_', ' ', '7'] {
            let settings = GeneratorSettings::default().with_separator(sep);
            assert_eq!(settings.validate(), Err(DomainError::InvalidSeparator(sep)));
        }
    }

    #[test]
    fn backslash_separator_is_valid() {
        assert!(GeneratorSettings::default().with_separator('\\').validate().is_ok());
    }
}
