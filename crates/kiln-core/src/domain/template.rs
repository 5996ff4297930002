//! Template references and in-memory declaration documents.
//!
//! A caller hands the generator a [`TemplateSource`]; the locator turns it
//! into a [`TemplateHandle`] that the commit path can render without any
//! further lookup.

use std::{fmt, path::PathBuf};

use crate::domain::class_name::ClassNameDetails;

/// What the caller asked to render from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A template identifier: either a readable path or a name relative to
    /// the skeleton directory.
    File(String),
    /// An already-built document; needs no lookup.
    Document(Document),
}

impl From<&str> for TemplateSource {
    fn from(id: &str) -> Self {
        Self::File(id.to_string())
    }
}

impl From<String> for TemplateSource {
    fn from(id: String) -> Self {
        Self::File(id)
    }
}

impl From<Document> for TemplateSource {
    fn from(doc: Document) -> Self {
        Self::Document(doc)
    }
}

/// A resolved template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateHandle {
    /// A template file the renderer can read.
    File(PathBuf),
    /// An in-memory document, printed as-is.
    Document(Document),
}

impl fmt::Display for TemplateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Document(doc) => write!(f, "<declaration of {}>", doc.class_name),
        }
    }
}

/// In-memory class declaration.
///
/// Printed as a header comment, a namespace statement and an empty class
/// body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    header: Vec<String>,
    namespace: String,
    class_name: String,
}

impl Document {
    /// Declaration skeleton for the given class.
    pub fn class(details: &ClassNameDetails) -> Self {
        Self {
            header: Vec::new(),
            namespace: details.full_namespace().to_string(),
            class_name: details.short_name().to_string(),
        }
    }

    pub fn with_header<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn print(&self) -> String {
        let mut out = String::new();

        for line in &self.header {
            if line.is_empty() {
                out.push_str("//\n");
            } else {
                out.push_str(&format!("// {line}\n"));
            }
        }
        if !self.header.is_empty() {
            out.push('\n');
        }

        if !self.namespace.is_empty() {
            out.push_str(&format!("namespace {};\n\n", self.namespace));
        }

        out.push_str(&format!("class {}\n{{\n}}\n", self.class_name));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ClassNameDetails {
        ClassNameDetails::new("App.Controller.FooController", "App.Controller", "Controller", '.')
    }

    #[test]
    fn prints_bare_declaration() {
        let doc = Document::class(&details());
        assert_eq!(
            doc.print(),
            "namespace App.Controller;\n\nclass FooController\n{\n}\n"
        );
    }

    #[test]
    fn prints_header_lines_as_comments() {
        let doc = Document::class(&details())
            .with_header(["This file is part of Acme.", "", "(c) Acme"]);

        assert_eq!(
            doc.print(),
            "// This file is part of Acme.\n//\n// (c) Acme\n\n\
             namespace App.Controller;\n\nclass FooController\n{\n}\n"
        );
    }

    #[test]
    fn bare_class_has_no_namespace_statement() {
        let doc = Document::class(&ClassNameDetails::new("Foo", "", "", '.'));
        assert_eq!(doc.print(), "class Foo\n{\n}\n");
    }

    #[test]
    fn handle_display() {
        let handle = TemplateHandle::Document(Document::class(&details()));
        assert_eq!(handle.to_string(), "<declaration of FooController>");
    }
}
