//! In-memory file manager for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kiln_core::{application::ports::FileManager, error::KilnResult};

use crate::{error::AdapterError, filesystem::NamespaceMap};

/// In-memory file manager.
///
/// Records every write in order, can be seeded with pre-existing files and
/// told to refuse writes to given paths. Like the local adapter, never
/// replaces a file.
#[derive(Debug, Clone)]
pub struct MemoryFileManager {
    root: PathBuf,
    map: NamespaceMap,
    inner: Arc<RwLock<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    files: HashMap<PathBuf, String>,
    writes: Vec<(PathBuf, Option<String>)>,
    failing: HashSet<PathBuf>,
}

impl MemoryFileManager {
    pub fn new(map: NamespaceMap) -> Self {
        Self {
            root: PathBuf::from("/project"),
            map,
            inner: Arc::new(RwLock::new(MemoryInner::default())),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Pretend `path` already exists.
    pub fn seed(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let key = self.resolve(path.as_ref());
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(key, content.into());
        }
    }

    /// Make writes to `path` fail until [`Self::heal`] is called.
    pub fn fail_on(&self, path: impl AsRef<Path>) {
        let key = self.resolve(path.as_ref());
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(key);
        }
    }

    /// Stop injecting failures.
    pub fn heal(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.clear();
        }
    }

    /// Read a file's content (testing helper).
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        let key = self.resolve(path.as_ref());
        let inner = self.inner.read().ok()?;
        inner.files.get(&key).cloned()
    }

    /// Paths written so far, in write order.
    pub fn written(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.writes.iter().map(|(path, _)| path.clone()).collect())
            .unwrap_or_default()
    }

    /// Class-name hints passed with each write, in write order.
    pub fn class_hints(&self) -> Vec<Option<String>> {
        self.inner
            .read()
            .map(|inner| inner.writes.iter().map(|(_, hint)| hint.clone()).collect())
            .unwrap_or_default()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for MemoryFileManager {
    fn default() -> Self {
        Self::new(NamespaceMap::new('.', "php").with_mapping("App", "src"))
    }
}

impl FileManager for MemoryFileManager {
    fn exists(&self, path: &Path) -> bool {
        let key = self.resolve(path);
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(&key))
            .unwrap_or(false)
    }

    fn write(&self, path: &Path, content: &str, class_name: Option<&str>) -> KilnResult<()> {
        let key = self.resolve(path);
        let mut inner = self.inner.write().map_err(|_| AdapterError::LockPoisoned)?;

        if inner.failing.contains(&key) {
            return Err(AdapterError::InjectedFailure { path: key }.into());
        }
        if inner.files.contains_key(&key) {
            return Err(AdapterError::AlreadyExists { path: key }.into());
        }

        inner.files.insert(key.clone(), content.to_string());
        inner.writes.push((key, class_name.map(str::to_string)));
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
    use super::*;

    #[test]
    fn seeded_files_exist() {
        let files = MemoryFileManager::default();
        files.seed("src/Entity/Product.php", "<existing>");

        assert!(files.exists(Path::new("src/Entity/Product.php")));
        assert!(files.exists(Path::new("/project/src/Entity/Product.php")));
        assert!(!files.exists(Path::new("src/Entity/Other.php")));
    }

    #[test]
    fn writes_are_recorded_in_order_with_hints() {
        let files = MemoryFileManager::default();
        files.write(Path::new("b"), "B", None).unwrap();
        files.write(Path::new("a"), "A", Some("A")).unwrap();

        assert_eq!(
            files.written(),
            vec![PathBuf::from("/project/b"), PathBuf::from("/project/a")]
        );
        assert_eq!(files.class_hints(), vec![None, Some("A".to_string())]);
        assert_eq!(files.read("a").as_deref(), Some("A"));
    }

    #[test]
    fn injected_failures_until_healed() {
        let files = MemoryFileManager::default();
        files.fail_on("broken.txt");

        assert!(files.write(Path::new("broken.txt"), "x", None).is_err());
        assert!(files.written().is_empty());

        files.heal();
        files.write(Path::new("broken.txt"), "x", None).unwrap();
        assert_eq!(files.written().len(), 1);
    }

    #[test]
    fn write_refuses_existing_file() {
        let files = MemoryFileManager::default();
        files.seed("taken.txt", "old");

        let err = files.write(Path::new("taken.txt"), "new", None).unwrap_err();

        assert!(!err.is_retryable());
        assert_eq!(files.read("taken.txt").as_deref(), Some("old"));
        assert!(files.written().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let files = MemoryFileManager::default();
        let handle = files.clone();
        files.write(Path::new("shared"), "s", None).unwrap();
        assert_eq!(handle.read("shared").as_deref(), Some("s"));
    }
}
