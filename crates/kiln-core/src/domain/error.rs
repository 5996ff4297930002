// ============================================================================
// domain/error.rs - NAMING AND SETTINGS ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may keep them around while retrying with new input)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// A qualified class name failed identifier/namespace legality.
    ///
    /// `message` is either the caller-supplied validation message or a
    /// generic one naming the offending value.
    #[error("{message}")]
    InvalidName { name: String, message: String },

    #[error("Class name cannot be empty")]
    EmptyName,

    #[error("Invalid namespace separator '{0}': must be a single non-alphanumeric character")]
    InvalidSeparator(char),

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown element kind '{0}'")]
    UnknownElement(String),
}

impl DomainError {
    /// Build an [`DomainError::InvalidName`], preferring the caller's message.
    pub fn invalid_name(name: impl Into<String>, custom_message: Option<&str>) -> Self {
        let name = name.into();
        let message = match custom_message {
            Some(msg) if !msg.trim().is_empty() => msg.to_string(),
            _ => format!("\"{name}\" is not valid as a class name"),
        };
        Self::InvalidName { name, message }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => vec![
                format!("Rejected name: {name}"),
                "Each namespace segment must start with a letter or '_'".into(),
                "Reserved words (class, namespace, new, ...) cannot be used as segments".into(),
            ],
            Self::EmptyName => vec!["Provide a non-empty class name, e.g. 'FeaturedProduct'".into()],
            Self::InvalidSeparator(_) => vec![
                "Use '.' or '\\' as the namespace separator in your configuration".into(),
            ],
            Self::UnknownElement(kind) => vec![
                format!("'{kind}' is not a known element kind"),
                "Try: kiln list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::EmptyName => ErrorCategory::Validation,
            Self::InvalidSeparator(_) => ErrorCategory::Configuration,
            Self::UnknownElement(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
}
