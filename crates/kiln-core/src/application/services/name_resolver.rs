//! Turns user-typed names into validated, fully-qualified class names.

use tracing::{debug, instrument};

use crate::{
    application::ports::{FileManager, NameValidator},
    domain::{ClassNameDetails, DomainError, GeneratorSettings, naming},
    error::KilnResult,
};

/// Resolves short or absolute names against the root namespace.
pub struct NameResolver<'a> {
    settings: &'a GeneratorSettings,
    files: &'a dyn FileManager,
    validator: &'a dyn NameValidator,
}

impl<'a> NameResolver<'a> {
    pub fn new(
        settings: &'a GeneratorSettings,
        files: &'a dyn FileManager,
        validator: &'a dyn NameValidator,
    ) -> Self {
        Self {
            settings,
            files,
            validator,
        }
    }

    /// Resolve `name` into a [`ClassNameDetails`].
    ///
    /// Relative names are qualified under `<root>.<namespace_hint>` with each
    /// segment capitalised and `suffix` guaranteed on the last one. Absolute
    /// names (leading `\`, `/` or separator) skip the root and hint and keep
    /// their segments as typed, but still get the suffix guarantee.
    ///
    /// The namespace prefix is the expected `<root>.<hint>` when the result
    /// lives under it; otherwise the file manager is asked which configured
    /// prefix applies.
    #[instrument(skip(self, validation_message), fields(root = %self.settings.root_namespace))]
    pub fn resolve(
        &self,
        name: &str,
        namespace_hint: &str,
        suffix: &str,
        validation_message: Option<&str>,
    ) -> KilnResult<ClassNameDetails> {
        let sep = self.settings.separator;
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyName.into());
        }

        let expected_prefix =
            naming::join_namespace([self.settings.root_namespace.as_str(), namespace_hint], sep);

        let class_name = if naming::is_absolute(name, sep) {
            naming::as_absolute_class_name(name, suffix, sep)
        } else {
            let relative = naming::as_class_name(name, suffix, sep);
            if relative.is_empty() {
                return Err(DomainError::invalid_name(name, validation_message).into());
            }
            naming::join_namespace([expected_prefix.as_str(), relative.as_str()], sep)
        };

        self.validator
            .validate_class_name(&class_name, sep, validation_message)?;

        let namespace_prefix = if lives_under(&class_name, &expected_prefix, sep) {
            expected_prefix
        } else {
            let prefix = self.files.namespace_prefix_for(&class_name);
            debug!(class = %class_name, prefix = %prefix, "Prefix taken from namespace mapping");
            prefix
        };

        Ok(ClassNameDetails::new(class_name, namespace_prefix, suffix, sep))
    }
}

/// Segment-aware prefix test: `App.Foo` lives under `App` but `AppFoo` does not.
fn lives_under(class_name: &str, prefix: &str, separator: char) -> bool {
    if prefix.is_empty() {
        return true;
    }
    class_name
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(separator))
}
