//! Generator - the façade callers stage and commit through.
//!
//! Workflow:
//! 1. Resolve a class name (`create_class_name_details`)
//! 2. Stage one or more files (`generate_class`, `generate_file`, `dump_file`)
//! 3. Inspect what would be written (`pending_content`)
//! 4. Commit (`write_changes`)

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{FileManager, IdentifierValidator, NameValidator, TemplateRenderer},
        services::{
            commit_engine::CommitEngine, name_resolver::NameResolver,
            operation_queue::OperationQueue, template_locator::TemplateLocator,
        },
    },
    domain::{
        ClassNameDetails, Document, ElementKind, GeneratorSettings, PendingOperation,
        TemplateSource, Variables, naming,
    },
    error::KilnResult,
};

/// Template variable holding the `snake_case` short class name.
pub const CLASS_NAME_SNAKE: &str = "class_name_snake";
/// Template variable holding the `kebab-case` short class name.
pub const CLASS_NAME_KEBAB: &str = "class_name_kebab";

/// Staged code generator.
///
/// Owns the ports and the queue of pending writes. Nothing touches disk
/// until [`Generator::write_changes`].
pub struct Generator {
    settings: GeneratorSettings,
    files: Box<dyn FileManager>,
    renderer: Box<dyn TemplateRenderer>,
    validator: Box<dyn NameValidator>,
    queue: OperationQueue,
}

impl Generator {
    /// Create a generator with the default identifier validator.
    pub fn new(
        settings: GeneratorSettings,
        files: Box<dyn FileManager>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> KilnResult<Self> {
        settings.validate()?;
        let queue = OperationQueue::rooted(files.root_directory());
        Ok(Self {
            settings,
            files,
            renderer,
            validator: Box::new(IdentifierValidator),
            queue,
        })
    }

    /// Replace the name validator.
    pub fn with_validator(mut self, validator: Box<dyn NameValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn root_namespace(&self) -> &str {
        &self.settings.root_namespace
    }

    pub fn root_directory(&self) -> PathBuf {
        self.files.root_directory()
    }

    /// Namespace hint configured for an element kind.
    pub fn namespace_for(&self, kind: ElementKind) -> &str {
        self.settings.elements.namespace_for(kind)
    }

    /// Suffix configured for an element kind.
    pub fn suffix_for(&self, kind: ElementKind) -> &str {
        self.settings.elements.suffix_for(kind)
    }

    /// Resolve a user-typed name into a fully-qualified class name.
    pub fn create_class_name_details(
        &self,
        name: &str,
        namespace_hint: &str,
        suffix: &str,
        validation_message: Option<&str>,
    ) -> KilnResult<ClassNameDetails> {
        NameResolver::new(&self.settings, self.files.as_ref(), self.validator.as_ref()).resolve(
            name,
            namespace_hint,
            suffix,
            validation_message,
        )
    }

    /// Resolve a name using the namespace and suffix configured for `kind`.
    pub fn class_name_details_for(
        &self,
        name: &str,
        kind: ElementKind,
    ) -> KilnResult<ClassNameDetails> {
        self.create_class_name_details(name, self.namespace_for(kind), self.suffix_for(kind), None)
    }

    /// Stage a class file and return its target path.
    ///
    /// `class_name` must be fully qualified. `class_name`, `namespace` and
    /// the snake/kebab variants are added to `variables`, overriding any
    /// caller values with the same keys.
    #[instrument(skip(self, template, variables))]
    pub fn generate_class(
        &mut self,
        class_name: &str,
        template: impl Into<TemplateSource>,
        variables: Variables,
    ) -> KilnResult<PathBuf> {
        let sep = self.settings.separator;
        let short = naming::short_name(class_name, sep);

        let target = self.files.path_for_class(class_name).ok_or_else(|| {
            ApplicationError::UnlocatableClass {
                class_name: class_name.to_string(),
                short_name: short.to_string(),
            }
        })?;

        let mut variables = variables;
        variables.extend(
            Variables::new()
                .with(Variables::CLASS_NAME, short)
                .with(Variables::NAMESPACE, naming::namespace_of(class_name, sep))
                .with(CLASS_NAME_SNAKE, naming::snake_variant(short))
                .with(CLASS_NAME_KEBAB, naming::kebab_variant(short)),
        );

        self.stage(target.clone(), template.into(), variables)?;
        Ok(target)
    }

    /// Stage an empty class declaration for `details`, using the configured
    /// header comment.
    pub fn generate_class_declaration(
        &mut self,
        details: &ClassNameDetails,
        variables: Variables,
    ) -> KilnResult<PathBuf> {
        let document = Document::class(details).with_header(self.settings.header.clone());
        self.generate_class(details.full_name(), document, variables)
    }

    /// Stage an arbitrary file from a template.
    #[instrument(skip_all, fields(target = %target.as_ref().display()))]
    pub fn generate_file(
        &mut self,
        target: impl AsRef<Path>,
        template: impl Into<TemplateSource>,
        variables: Variables,
    ) -> KilnResult<()> {
        self.stage(target.as_ref().to_path_buf(), template.into(), variables)
    }

    /// Stage a file with literal contents.
    pub fn dump_file(
        &mut self,
        target: impl AsRef<Path>,
        contents: impl Into<String>,
    ) -> KilnResult<()> {
        self.queue
            .add_raw(self.files.as_ref(), target.as_ref(), contents)
    }

    /// Content a pending operation would write.
    pub fn pending_content(&self, target: impl AsRef<Path>) -> KilnResult<String> {
        self.queue
            .peek_content(target.as_ref(), self.renderer.as_ref())
    }

    pub fn has_pending_operations(&self) -> bool {
        self.queue.has_pending()
    }

    /// Pending operations in staging order.
    pub fn pending_operations(&self) -> impl Iterator<Item = &PendingOperation> {
        self.queue.iter()
    }

    /// Discard every pending operation.
    pub fn reset(&mut self) -> usize {
        let dropped = self.queue.reset();
        if dropped > 0 {
            info!(dropped, "Pending operations discarded");
        }
        dropped
    }

    /// Write all pending operations and return the paths written.
    pub fn write_changes(&mut self) -> KilnResult<Vec<PathBuf>> {
        CommitEngine::new(self.files.as_ref(), self.renderer.as_ref()).flush(&mut self.queue)
    }

    fn stage(
        &mut self,
        target: PathBuf,
        template: TemplateSource,
        variables: Variables,
    ) -> KilnResult<()> {
        self.queue.check_target(self.files.as_ref(), &target)?;

        let handle =
            TemplateLocator::new(&self.settings.skeleton_dir, self.renderer.as_ref()).locate(template)?;

        self.queue
            .add(self.files.as_ref(), target, handle, variables)
    }
}
