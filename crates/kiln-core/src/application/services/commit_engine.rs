//! Writes staged operations to disk.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{FileManager, TemplateRenderer},
        services::operation_queue::{OperationQueue, render_content},
    },
    error::KilnResult,
};

/// Flushes an [`OperationQueue`] in staging order.
pub struct CommitEngine<'a> {
    files: &'a dyn FileManager,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> CommitEngine<'a> {
    pub fn new(files: &'a dyn FileManager, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { files, renderer }
    }

    /// Render and write every pending operation, oldest first.
    ///
    /// Each operation leaves the queue only once its write succeeded. On the
    /// first failure the error is returned and the failing operation plus
    /// everything after it stay queued, so a later flush resumes there.
    /// Files already written are not rolled back.
    #[instrument(skip_all, fields(pending = queue.len()))]
    pub fn flush(&self, queue: &mut OperationQueue) -> KilnResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(queue.len());

        while let Some(operation) = queue.front() {
            let outcome = render_content(operation, self.renderer).and_then(|content| {
                self.files
                    .write(operation.target_path(), &content, operation.class_name())
            });

            if let Err(err) = outcome {
                warn!(
                    path = %operation.target_path().display(),
                    error = %err,
                    remaining = queue.len(),
                    "Write failed; remaining operations stay queued"
                );
                return Err(err);
            }

            if let Some(done) = queue.pop_front() {
                debug!(path = %done.target_path().display(), "Written");
                written.push(done.target_path().to_path_buf());
            }
        }

        info!(files = written.len(), "Pending operations written");
        Ok(written)
    }
}
