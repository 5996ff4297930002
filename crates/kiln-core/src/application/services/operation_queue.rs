//! Insertion-ordered set of staged file writes.

use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    application::{
        ApplicationError, ConflictReason,
        ports::{FileManager, TemplateRenderer},
    },
    domain::{OperationSource, PendingOperation, TemplateHandle, Variables},
    error::KilnResult,
};

/// Pending operations keyed by target path.
///
/// At most one operation per target; iteration follows staging order.
/// Relative targets are keyed by their location under `root`, so
/// `src/a.txt` and `<root>/src/a.txt` are the same target.
#[derive(Debug, Default)]
pub struct OperationQueue {
    root: PathBuf,
    operations: IndexMap<PathBuf, PendingOperation>,
}

impl OperationQueue {
    /// Queue keying relative targets as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue keying relative targets under `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            operations: IndexMap::new(),
        }
    }

    /// Lexical key for `target`: joined onto the root, `.` segments dropped.
    fn key(&self, target: &Path) -> PathBuf {
        self.root
            .join(target)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }

    /// Fail if `target` is already staged or already exists.
    pub fn check_target(&self, files: &dyn FileManager, target: &Path) -> KilnResult<()> {
        let reason = if self.operations.contains_key(&self.key(target)) {
            ConflictReason::AlreadyStaged
        } else if files.exists(target) {
            ConflictReason::AlreadyExists
        } else {
            return Ok(());
        };

        Err(ApplicationError::Conflict {
            path: target.to_path_buf(),
            reason,
        }
        .into())
    }

    /// Stage a templated write. `relative_path` is added to `variables`.
    pub fn add(
        &mut self,
        files: &dyn FileManager,
        target: impl Into<PathBuf>,
        template: TemplateHandle,
        mut variables: Variables,
    ) -> KilnResult<()> {
        let target = target.into();
        self.check_target(files, &target)?;

        variables.insert(Variables::RELATIVE_PATH, files.relativize(&target));
        debug!(path = %target.display(), template = %template, "Staged templated file");

        let key = self.key(&target);
        let operation = PendingOperation::from_template(target, template, variables);
        self.operations.insert(key, operation);
        Ok(())
    }

    /// Stage a literal-content write.
    pub fn add_raw(
        &mut self,
        files: &dyn FileManager,
        target: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> KilnResult<()> {
        let target = target.into();
        self.check_target(files, &target)?;

        debug!(path = %target.display(), "Staged raw file");
        let key = self.key(&target);
        let operation = PendingOperation::raw(target, content);
        self.operations.insert(key, operation);
        Ok(())
    }

    pub fn has_pending(&self) -> bool {
        !self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn get(&self, target: &Path) -> Option<&PendingOperation> {
        self.operations.get(&self.key(target))
    }

    /// Operations in staging order.
    pub fn iter(&self) -> impl Iterator<Item = &PendingOperation> {
        self.operations.values()
    }

    /// Content the staged operation for `target` would write.
    ///
    /// Side-effect free; templates are rendered on every call.
    pub fn peek_content(
        &self,
        target: &Path,
        renderer: &dyn TemplateRenderer,
    ) -> KilnResult<String> {
        let operation = self
            .operations
            .get(&self.key(target))
            .ok_or_else(|| ApplicationError::NotPending {
                path: target.to_path_buf(),
            })?;
        render_content(operation, renderer)
    }

    /// Drop every pending operation, returning how many were dropped.
    pub fn reset(&mut self) -> usize {
        let dropped = self.operations.len();
        self.operations.clear();
        dropped
    }

    pub(crate) fn front(&self) -> Option<&PendingOperation> {
        self.operations.first().map(|(_, operation)| operation)
    }

    pub(crate) fn pop_front(&mut self) -> Option<PendingOperation> {
        self.operations
            .shift_remove_index(0)
            .map(|(_, operation)| operation)
    }
}

/// Produce the bytes an operation writes.
pub fn render_content(
    operation: &PendingOperation,
    renderer: &dyn TemplateRenderer,
) -> KilnResult<String> {
    match operation.source() {
        OperationSource::Raw { content } => Ok(content.clone()),
        OperationSource::Template {
            template: TemplateHandle::Document(document),
            ..
        } => Ok(document.print()),
        OperationSource::Template {
            template: TemplateHandle::File(path),
            variables,
        } => renderer.render(path, variables),
    }
}
