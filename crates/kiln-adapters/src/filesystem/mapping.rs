//! Namespace prefix to directory mapping.
//!
//! Works like PSR-4 autoloading: a class `App.Controller.FooController`
//! under the mapping `App → src` lives at `src/Controller/FooController.<ext>`.
//! When several prefixes match, the longest wins.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One `prefix → directory` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceMapping {
    pub prefix: String,
    pub directory: PathBuf,
}

impl NamespaceMapping {
    pub fn new(prefix: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            directory: directory.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMap {
    mappings: Vec<NamespaceMapping>,
    separator: char,
    extension: String,
}

impl NamespaceMap {
    pub fn new(separator: char, extension: impl Into<String>) -> Self {
        Self {
            mappings: Vec::new(),
            separator,
            extension: extension.into().trim_start_matches('.').to_string(),
        }
    }

    pub fn with_mapping(self, prefix: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        self.with_mappings([NamespaceMapping::new(prefix, directory)])
    }

    /// Add entries; trailing separators on a prefix (`App\\`) are dropped.
    pub fn with_mappings(mut self, mappings: impl IntoIterator<Item = NamespaceMapping>) -> Self {
        let separator = self.separator;
        self.mappings.extend(mappings.into_iter().map(|mut m| {
            let trimmed = m.prefix.trim_end_matches(separator).len();
            m.prefix.truncate(trimmed);
            m
        }));
        self
    }

    pub fn mappings(&self) -> &[NamespaceMapping] {
        &self.mappings
    }

    /// Longest mapping whose prefix covers `class_name`.
    ///
    /// An empty prefix covers every class.
    pub fn mapping_for(&self, class_name: &str) -> Option<&NamespaceMapping> {
        self.mappings
            .iter()
            .filter(|m| self.covers(&m.prefix, class_name))
            .max_by_key(|m| m.prefix.len())
    }

    /// Matched prefix, or an empty string when nothing covers the class.
    pub fn namespace_prefix_for(&self, class_name: &str) -> String {
        self.mapping_for(class_name)
            .map(|m| m.prefix.clone())
            .unwrap_or_default()
    }

    /// Source path for `class_name`, relative to the project root.
    pub fn path_for_class(&self, class_name: &str) -> Option<PathBuf> {
        let mapping = self.mapping_for(class_name)?;
        let rest = class_name
            .strip_prefix(mapping.prefix.as_str())?
            .trim_start_matches(self.separator);
        if rest.is_empty() {
            return None;
        }

        let mut path = mapping.directory.clone();
        path.extend(rest.split(self.separator));
        if !self.extension.is_empty() {
            path.set_extension(&self.extension);
        }
        Some(path)
    }

    fn covers(&self, prefix: &str, class_name: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        class_name
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with(self.separator))
    }
}
