//! Adapter-level failures, folded into `KilnError` at the port boundary.

use std::{io, path::PathBuf};

use kiln_core::{
    application::{ApplicationError, ConflictReason},
    error::KilnError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to {operation}: {source}")]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{path} appeared after it was staged", path = path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Write refused for {path}", path = path.display())]
    InjectedFailure { path: PathBuf },

    #[error("In-memory file store lock poisoned")]
    LockPoisoned,
}

impl AdapterError {
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }
}

impl From<AdapterError> for KilnError {
    fn from(err: AdapterError) -> Self {
        match &err {
            AdapterError::AlreadyExists { path } => ApplicationError::Conflict {
                path: path.clone(),
                reason: ConflictReason::AlreadyExists,
            }
            .into(),
            AdapterError::Io { path, .. } | AdapterError::InjectedFailure { path } => {
                ApplicationError::FilesystemError {
                    path: path.clone(),
                    reason: err.to_string(),
                }
                .into()
            }
            AdapterError::LockPoisoned => KilnError::Internal {
                message: err.to_string(),
            },
        }
    }
}
