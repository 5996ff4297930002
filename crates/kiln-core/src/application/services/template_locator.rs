//! Resolves template identifiers to concrete template handles.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{TemplateHandle, TemplateSource},
    error::KilnResult,
};

/// Looks a template up as given, then under the skeleton directory.
pub struct TemplateLocator<'a> {
    skeleton_dir: &'a Path,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> TemplateLocator<'a> {
    pub fn new(skeleton_dir: &'a Path, renderer: &'a dyn TemplateRenderer) -> Self {
        Self {
            skeleton_dir,
            renderer,
        }
    }

    /// Locate a template.
    ///
    /// In-memory documents pass through unchanged. File identifiers are tried
    /// literally, then as `<skeleton_dir>/<id>`; the first readable one wins.
    pub fn locate(&self, source: TemplateSource) -> KilnResult<TemplateHandle> {
        let id = match source {
            TemplateSource::Document(document) => return Ok(TemplateHandle::Document(document)),
            TemplateSource::File(id) => id,
        };

        let candidates = [PathBuf::from(&id), self.skeleton_dir.join(&id)];
        for candidate in &candidates {
            if self.renderer.has_template(candidate) {
                trace!(template = %candidate.display(), "Template located");
                return Ok(TemplateHandle::File(candidate.clone()));
            }
        }

        Err(ApplicationError::TemplateNotFound {
            id,
            searched: candidates.into(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::MockTemplateRenderer,
        domain::{ClassNameDetails, Document},
        error::KilnError,
    };

    fn renderer_with(readable: &'static [&'static str]) -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_has_template()
            .returning(move |path| readable.iter().any(|r| path == Path::new(r)));
        renderer
    }

    #[test]
    fn literal_path_wins() {
        let renderer = renderer_with(&["custom/controller.tpl", "skeleton/custom/controller.tpl"]);
        let locator = TemplateLocator::new(Path::new("skeleton"), &renderer);

        let handle = locator.locate("custom/controller.tpl".into()).unwrap();
        assert_eq!(handle, TemplateHandle::File(PathBuf::from("custom/controller.tpl")));
    }

    #[test]
    fn falls_back_to_skeleton_dir() {
        let renderer = renderer_with(&["skeleton/controller/Controller.tpl"]);
        let locator = TemplateLocator::new(Path::new("skeleton"), &renderer);

        let handle = locator.locate("controller/Controller.tpl".into()).unwrap();
        assert_eq!(
            handle,
            TemplateHandle::File(PathBuf::from("skeleton/controller/Controller.tpl"))
        );
    }

    #[test]
    fn missing_template_reports_both_candidates() {
        let renderer = renderer_with(&[]);
        let locator = TemplateLocator::new(Path::new("skeleton"), &renderer);

        let err = locator.locate("nope.tpl".into()).unwrap_err();
        let KilnError::Application(ApplicationError::TemplateNotFound { id, searched }) = err else {
            panic!("expected TemplateNotFound");
        };
        assert_eq!(id, "nope.tpl");
        assert_eq!(
            searched,
            vec![PathBuf::from("nope.tpl"), PathBuf::from("skeleton/nope.tpl")]
        );
    }

    #[test]
    fn empty_identifier_is_not_found() {
        let renderer = renderer_with(&[]);
        let locator = TemplateLocator::new(Path::new("skeleton"), &renderer);
        assert!(locator.locate("".into()).is_err());
    }

    #[test]
    fn documents_pass_through_without_lookup() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_has_template().never();
        let locator = TemplateLocator::new(Path::new("skeleton"), &renderer);

        let details = ClassNameDetails::new("App.Entity.Foo", "App.Entity", "", '.');
        let document = Document::class(&details);
        let handle = locator.locate(document.clone().into()).unwrap();
        assert_eq!(handle, TemplateHandle::Document(document));
    }
}
