//! Application ports (traits) for external dependencies.
//!
//! Adapters in `kiln-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the generator, implemented by infrastructure
//!   - `FileManager`: path mapping, existence checks and writes
//!   - `TemplateRenderer`: template rendering
//!   - `NameValidator`: class-name legality

pub mod output;

pub use output::{FileManager, IdentifierValidator, NameValidator, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFileManager, MockNameValidator, MockTemplateRenderer};
