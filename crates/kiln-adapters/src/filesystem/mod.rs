//! File manager adapters.

mod local;
mod mapping;
mod memory;

pub use local::LocalFileManager;
pub use mapping::{NamespaceMap, NamespaceMapping};
pub use memory::MemoryFileManager;
