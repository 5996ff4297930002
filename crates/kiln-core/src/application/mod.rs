//! Application layer for Kiln.
//!
//! This layer contains:
//! - **Services**: the staging pipeline (`NameResolver`, `TemplateLocator`,
//!   `OperationQueue`, `CommitEngine`) behind the `Generator` façade
//! - **Ports**: traits for the filesystem, rendering and name validation
//! - **Errors**: staging and commit error types
//!
//! Naming rules live in `crate::domain`; this layer only sequences them
//! against the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{CommitEngine, Generator, NameResolver, OperationQueue, TemplateLocator};

pub use ports::{FileManager, IdentifierValidator, NameValidator, TemplateRenderer};

pub use error::{ApplicationError, ConflictReason};
