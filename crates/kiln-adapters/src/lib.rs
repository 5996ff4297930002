//! Infrastructure adapters for Kiln.
//!
//! This crate implements the ports defined in `kiln-core::application::ports`.
//! It contains all filesystem access and template rendering.

pub mod error;
pub mod filesystem;
pub mod renderer;
pub mod skeletons;

// Re-export commonly used adapters
pub use error::AdapterError;
pub use filesystem::{LocalFileManager, MemoryFileManager, NamespaceMap, NamespaceMapping};
pub use renderer::SimpleRenderer;
pub use skeletons::discover_skeleton_dir;
