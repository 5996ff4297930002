use std::fmt;

use serde::Serialize;

use crate::domain::naming;

/// A resolved, fully-qualified class name.
///
/// Immutable once constructed. Everything except the three stored fields is
/// derived from `full_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassNameDetails {
    full_name: String,
    namespace_prefix: String,
    suffix: String,
    #[serde(skip)]
    separator: char,
}

impl ClassNameDetails {
    pub fn new(
        full_name: impl Into<String>,
        namespace_prefix: impl Into<String>,
        suffix: impl Into<String>,
        separator: char,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            namespace_prefix: namespace_prefix.into(),
            suffix: suffix.into(),
            separator,
        }
    }

    /// e.g. `App.Controller.Admin.FooController`
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// e.g. `App.Controller`
    pub fn namespace_prefix(&self) -> &str {
        &self.namespace_prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// e.g. `FooController`
    pub fn short_name(&self) -> &str {
        naming::short_name(&self.full_name, self.separator)
    }

    /// e.g. `App.Controller.Admin`
    pub fn full_namespace(&self) -> &str {
        naming::namespace_of(&self.full_name, self.separator)
    }

    /// Full name relative to the namespace prefix, e.g. `Admin.FooController`.
    pub fn relative_name(&self) -> &str {
        let Some(rest) = self.full_name.strip_prefix(self.namespace_prefix.as_str()) else {
            return &self.full_name;
        };
        match rest.strip_prefix(self.separator) {
            Some(rest) if !rest.is_empty() => rest,
            _ => &self.full_name,
        }
    }

    /// Relative name without the suffix, e.g. `Admin.Foo`.
    pub fn relative_name_without_suffix(&self) -> &str {
        let relative = self.relative_name();
        if self.suffix.is_empty() {
            return relative;
        }
        relative.strip_suffix(self.suffix.as_str()).unwrap_or(relative)
    }
}

impl fmt::Display for ClassNameDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}
