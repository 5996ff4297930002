//! Application services.
//!
//! The four stages of a generation run, and the façade that wires them to
//! the ports:
//!
//! - [`NameResolver`]: user input to fully-qualified class names
//! - [`TemplateLocator`]: template identifiers to readable templates
//! - [`OperationQueue`]: staged writes, one per target path
//! - [`CommitEngine`]: ordered, resumable flush to disk
//! - [`Generator`]: owns the ports and the queue

pub mod commit_engine;
pub mod generator;
pub mod name_resolver;
pub mod operation_queue;
pub mod template_locator;

pub use commit_engine::CommitEngine;
pub use generator::{CLASS_NAME_KEBAB, CLASS_NAME_SNAKE, Generator};
pub use name_resolver::NameResolver;
pub use operation_queue::OperationQueue;
pub use template_locator::TemplateLocator;
