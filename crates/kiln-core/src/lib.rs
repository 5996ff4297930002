//! Kiln Core - staged code generation
//!
//! This crate provides the domain and application layers for the Kiln
//! generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             kiln-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │               Generator                 │
//! │  NameResolver → TemplateLocator →       │
//! │  OperationQueue → CommitEngine          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ FileManager, TemplateRenderer, Validator│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      kiln-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiln_core::prelude::*;
//!
//! let mut generator = Generator::new(GeneratorSettings::default(), files, renderer)?;
//!
//! let details = generator.class_name_details_for("featured product", ElementKind::Entity)?;
//! generator.generate_class(details.full_name(), "entity/Entity.tpl", Variables::new())?;
//!
//! // Nothing is on disk yet.
//! let written = generator.write_changes()?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, CommitEngine, ConflictReason, Generator, NameResolver, OperationQueue,
        TemplateLocator,
        ports::{FileManager, IdentifierValidator, NameValidator, TemplateRenderer},
    };
    pub use crate::domain::{
        ClassNameDetails, Document, DomainError, ElementKind, ElementOverride, ElementTable,
        GeneratorSettings, OperationSource, PendingOperation, TemplateHandle, TemplateSource,
        Variables,
    };
    pub use crate::error::{Context, ErrorCategory, KilnError, KilnResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
