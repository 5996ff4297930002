//! Local filesystem adapter using std::fs.

use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write as _},
    path::{Path, PathBuf},
};

use kiln_core::{application::ports::FileManager, error::KilnResult};
use tracing::debug;

use crate::{error::AdapterError, filesystem::NamespaceMap};

/// Production file manager rooted at a project directory.
///
/// Relative paths are resolved against the root. Writes never replace an
/// existing file.
#[derive(Debug, Clone)]
pub struct LocalFileManager {
    root: PathBuf,
    map: NamespaceMap,
}

impl LocalFileManager {
    pub fn new(root: impl Into<PathBuf>, map: NamespaceMap) -> Self {
        Self {
            root: root.into(),
            map,
        }
    }

    pub fn namespace_map(&self) -> &NamespaceMap {
        &self.map
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl FileManager for LocalFileManager {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn write(&self, path: &Path, content: &str, class_name: Option<&str>) -> KilnResult<()> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AdapterError::io(&full, "create directory", e))?;
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => AdapterError::AlreadyExists { path: full.clone() },
                _ => AdapterError::io(&full, "create file", e),
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| AdapterError::io(&full, "write file", e))?;

        debug!(path = %full.display(), class = class_name.unwrap_or("-"), bytes = content.len(), "File written");
        Ok(())
    }

    fn relativize(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn root_directory(&self) -> PathBuf {
        self.root.clone()
    }

    fn namespace_prefix_for(&self, class_name: &str) -> String {
        self.map.namespace_prefix_for(class_name)
    }

    fn path_for_class(&self, class_name: &str) -> Option<PathBuf> {
        self.map.path_for_class(class_name)
    }
}

#[cfg(test)]
mod tests {
    use kiln_core::{
        application::{ApplicationError, ConflictReason},
        error::KilnError,
    };
    use tempfile::TempDir;

    use super::*;

    fn manager(dir: &TempDir) -> LocalFileManager {
        LocalFileManager::new(dir.path(), NamespaceMap::new('.', "php").with_mapping("App", "src"))
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let files = manager(&dir);

        files
            .write(Path::new("src/Controller/FooController.php"), "x", Some("FooController"))
            .unwrap();

        let written = dir.path().join("src/Controller/FooController.php");
        assert_eq!(std::fs::read_to_string(written).unwrap(), "x");
        assert!(files.exists(Path::new("src/Controller/FooController.php")));
    }

    #[test]
    fn write_never_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("late.txt"), "theirs").unwrap();
        let files = manager(&dir);

        let err = files.write(Path::new("late.txt"), "ours", None).unwrap_err();

        assert!(matches!(
            err,
            KilnError::Application(ApplicationError::Conflict {
                reason: ConflictReason::AlreadyExists,
                ..
            })
        ));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("late.txt")).unwrap(),
            "theirs"
        );
    }

    #[test]
    fn relativize_strips_root() {
        let dir = TempDir::new().unwrap();
        let files = manager(&dir);

        let absolute = dir.path().join("src").join("Foo.php");
        assert_eq!(files.relativize(&absolute), Path::new("src").join("Foo.php").display().to_string());
        assert_eq!(files.relativize(Path::new("README.md")), "README.md");
    }

    #[test]
    fn class_paths_come_from_namespace_map() {
        let dir = TempDir::new().unwrap();
        let files = manager(&dir);

        assert_eq!(
            files.path_for_class("App.Entity.Product"),
            Some(PathBuf::from("src/Entity/Product.php"))
        );
        assert_eq!(files.namespace_prefix_for("App.Entity.Product"), "App");
        assert_eq!(files.root_directory(), dir.path());
    }

    #[test]
    fn write_failure_is_filesystem_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("blocker"), "").unwrap();
        let files = manager(&dir);

        let err = files
            .write(Path::new("blocker/inner.txt"), "x", None)
            .unwrap_err();
        assert!(err.is_retryable());
    }
}
