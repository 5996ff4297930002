//! Generator behaviour through the public API, with hand-rolled port fakes.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use kiln_core::prelude::*;

#[derive(Clone, Default)]
struct FakeFiles {
    disk: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl FileManager for FakeFiles {
    fn exists(&self, path: &Path) -> bool {
        self.disk.lock().unwrap().contains_key(path)
    }

    fn write(&self, path: &Path, content: &str, _class_name: Option<&str>) -> KilnResult<()> {
        self.disk
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn relativize(&self, path: &Path) -> String {
        path.display().to_string()
    }

    fn root_directory(&self) -> PathBuf {
        PathBuf::from("/work")
    }

    fn namespace_prefix_for(&self, _class_name: &str) -> String {
        String::new()
    }

    fn path_for_class(&self, class_name: &str) -> Option<PathBuf> {
        let rest = class_name.strip_prefix("App.")?;
        Some(PathBuf::from(format!("src/{}.txt", rest.replace('.', "/"))))
    }
}

/// Treats every `*.tpl` path as a template whose body lists the variables.
struct EchoRenderer;

impl TemplateRenderer for EchoRenderer {
    fn render(&self, template: &Path, variables: &Variables) -> KilnResult<String> {
        let body: Vec<String> = variables.iter().map(|(k, v)| format!("{k}={v}")).collect();
        Ok(format!("{}\n{}", template.display(), body.join("\n")))
    }

    fn has_template(&self, template: &Path) -> bool {
        template.extension().is_some_and(|ext| ext == "tpl")
    }
}

fn generator(files: &FakeFiles) -> Generator {
    Generator::new(
        GeneratorSettings::default(),
        Box::new(files.clone()),
        Box::new(EchoRenderer),
    )
    .unwrap()
}

#[test]
fn nothing_touches_disk_until_write_changes() {
    let files = FakeFiles::default();
    let mut generator = generator(&files);

    let details = generator
        .class_name_details_for("order placed", ElementKind::Event)
        .unwrap();
    let path = generator
        .generate_class(details.full_name(), "event.tpl", Variables::new().with("topic", "orders"))
        .unwrap();

    assert!(files.disk.lock().unwrap().is_empty());
    let preview = generator.pending_content(&path).unwrap();

    generator.write_changes().unwrap();
    let disk = files.disk.lock().unwrap();
    assert_eq!(disk.get(&path), Some(&preview));
    assert!(preview.contains("class_name=OrderPlacedEvent"));
    assert!(preview.contains("namespace=App.Event"));
    assert!(preview.contains("topic=orders"));
}

#[test]
fn generated_file_cannot_be_staged_again_after_commit() {
    let files = FakeFiles::default();
    let mut generator = generator(&files);

    generator.dump_file("notes.txt", "first").unwrap();
    generator.write_changes().unwrap();

    let err = generator.dump_file("notes.txt", "second").unwrap_err();
    assert_eq!(
        err,
        KilnError::Application(ApplicationError::Conflict {
            path: PathBuf::from("notes.txt"),
            reason: ConflictReason::AlreadyExists,
        })
    );
}

#[test]
fn unknown_template_leaves_queue_untouched() {
    let files = FakeFiles::default();
    let mut generator = generator(&files);

    let err = generator
        .generate_file("out.txt", "out.mustache", Variables::new())
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(!generator.has_pending_operations());
    assert!(generator.pending_content("out.txt").is_err());
}

#[test]
fn each_element_kind_resolves_under_its_namespace() {
    let files = FakeFiles::default();
    let generator = generator(&files);

    for kind in ElementKind::ALL {
        let details = generator.class_name_details_for("sample", kind).unwrap();
        let expected_ns = format!("App.{}", kind.default_namespace());
        assert_eq!(details.full_namespace(), expected_ns, "{kind}");
        assert!(details.short_name().ends_with(kind.default_suffix()));
    }
}
