//! Application layer errors.
//!
//! These errors represent failures in staging and committing, not naming
//! rules. Naming errors are `DomainError` from `crate::domain`.

use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::error::ErrorCategory;

/// Why a target path cannot be staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// Another operation for the same path is already pending.
    AlreadyStaged,
    /// The path exists on the real filesystem.
    AlreadyExists,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyStaged => f.write_str("it is already staged for writing"),
            Self::AlreadyExists => f.write_str("it already exists"),
        }
    }
}

/// Errors that occur while staging or committing generated files.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Target path already staged or already on disk.
    #[error("The file \"{path}\" can't be generated because {reason}", path = path.display())]
    Conflict { path: PathBuf, reason: ConflictReason },

    /// Neither the literal path nor the skeleton directory holds the template.
    #[error("Cannot find template \"{id}\"")]
    TemplateNotFound { id: String, searched: Vec<PathBuf> },

    /// Inspection requested for a path with no staged operation.
    #[error("File \"{path}\" is not in the generator's pending operations", path = path.display())]
    NotPending { path: PathBuf },

    /// No target path could be derived for a class.
    #[error(
        "Could not determine where to locate the new class \"{class_name}\", \
         maybe try with a full namespace like \"\\My\\Full\\Namespace\\{short_name}\""
    )]
    UnlocatableClass {
        class_name: String,
        short_name: String,
    },

    /// Template rendering failed.
    #[error("Template rendering failed for {template}: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}", path = path.display())]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Conflict {
                path,
                reason: ConflictReason::AlreadyExists,
            } => vec![
                format!("Remove or rename {} first", path.display()),
                "Or choose a different class name".into(),
            ],
            Self::Conflict {
                reason: ConflictReason::AlreadyStaged,
                ..
            } => vec!["Each file can only be generated once per run".into()],
            Self::TemplateNotFound { searched, .. } => {
                let mut out = vec!["Searched:".to_string()];
                out.extend(searched.iter().map(|p| format!("  • {}", p.display())));
                out.push("Check the skeleton_dir setting in kiln.toml".into());
                out
            }
            Self::NotPending { .. } => vec!["Stage the file before inspecting it".into()],
            Self::UnlocatableClass { .. } => vec![
                "Add a namespace mapping for this prefix in kiln.toml".into(),
                "Or pass a fully-qualified name with a leading '\\'".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "Check the template for placeholders without a value".into(),
                "Pass missing values with --var key=value".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Re-run to resume: files already written are not written again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::TemplateNotFound { .. } | Self::NotPending { .. } => ErrorCategory::NotFound,
            Self::UnlocatableClass { .. } => ErrorCategory::Configuration,
            Self::RenderingFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
