//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generator needs from external systems.
//! The `kiln-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{DomainError, DomainValidator, Variables};
use crate::error::KilnResult;

/// Port for filesystem access and the class-to-path mapping.
///
/// Implemented by:
/// - `kiln_adapters::filesystem::LocalFileManager` (production)
/// - `kiln_adapters::filesystem::MemoryFileManager` (testing)
///
/// Paths handed to `exists` and `write` are the staged target paths, either
/// absolute or relative to `root_directory`.
#[cfg_attr(test, mockall::automock)]
pub trait FileManager: Send + Sync {
    /// Check if a file exists on the real filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Write content, creating parent directories as needed.
    ///
    /// `class_name` is the short class name of the file being written, when
    /// it was generated from a class.
    fn write<'a>(&self, path: &Path, content: &str, class_name: Option<&'a str>) -> KilnResult<()>;

    /// Path relative to the project root, for display and the
    /// `relative_path` template variable.
    fn relativize(&self, path: &Path) -> String;

    /// Project root directory.
    fn root_directory(&self) -> PathBuf;

    /// Configured namespace prefix under which `class_name` falls.
    fn namespace_prefix_for(&self, class_name: &str) -> String;

    /// Where the source file for `class_name` would live, if any mapping
    /// covers it.
    fn path_for_class(&self, class_name: &str) -> Option<PathBuf>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `kiln_adapters::renderer::SimpleRenderer` (`{{ name }}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the template file at `template` with `variables`.
    fn render(&self, template: &Path, variables: &Variables) -> KilnResult<String>;

    /// Whether `template` names a readable template file.
    fn has_template(&self, template: &Path) -> bool;
}

/// Port for class-name legality checks.
#[cfg_attr(test, mockall::automock)]
pub trait NameValidator: Send + Sync {
    /// Validate a fully-qualified class name.
    ///
    /// `custom_message` replaces the generic failure message when given.
    fn validate_class_name<'a>(
        &self,
        name: &str,
        separator: char,
        custom_message: Option<&'a str>,
    ) -> Result<(), DomainError>;
}

/// Default validator: identifier pattern plus reserved words.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierValidator;

impl NameValidator for IdentifierValidator {
    fn validate_class_name(
        &self,
        name: &str,
        separator: char,
        custom_message: Option<&str>,
    ) -> Result<(), DomainError> {
        DomainValidator::validate_class_name(name, separator, custom_message)
    }
}
