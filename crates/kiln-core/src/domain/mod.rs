// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kiln.
//!
//! Pure naming and staging data with no I/O. Everything that touches disk
//! or renders templates goes through the ports in `crate::application`.
//!
//! - **No I/O**: no filesystem or template access
//! - **Immutable values**: `ClassNameDetails`, `Document`, `GeneratorSettings`
//! - **Closed sets as enums**: `ElementKind`, `TemplateSource`, `OperationSource`
//!
pub mod class_name;
pub mod element;
pub mod error;
pub mod naming;
pub mod operation;
pub mod settings;
pub mod template;
pub mod variables;

mod validation;

pub use class_name::ClassNameDetails;
pub use element::{ElementKind, ElementOverride, ElementTable};
pub use error::{DomainError, ErrorCategory};
pub use operation::{OperationSource, PendingOperation};
pub use settings::GeneratorSettings;
pub use template::{Document, TemplateHandle, TemplateSource};
pub use validation::DomainValidator;
pub use variables::Variables;
