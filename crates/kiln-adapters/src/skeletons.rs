//! Skeleton directory discovery.
//!
//! The skeleton directory holds the template files that `--template`
//! identifiers fall back to.
//!
//! # Resolution order
//!
//! The first candidate that is an existing directory wins:
//!
//! 1. **`$KILN_SKELETON_DIR`**: environment variable override, also read
//!    from `.env`.
//! 2. **`<project root>/skeleton`**
//! 3. **`<executable-dir>/skeleton`**: sibling to the installed `kiln` binary.
//!
//! When none exists, `<project root>/skeleton` is returned so that error
//! messages name the conventional location.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

/// Environment variable overriding the skeleton directory.
pub const SKELETON_DIR_ENV: &str = "KILN_SKELETON_DIR";

const SKELETON_DIR_NAME: &str = "skeleton";

/// Find the skeleton directory for a project rooted at `project_root`.
#[instrument]
pub fn discover_skeleton_dir(project_root: &Path) -> PathBuf {
    let env_dir = std::env::var_os(SKELETON_DIR_ENV).map(PathBuf::from);
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    resolve_skeleton_dir(env_dir, project_root, exe_dir.as_deref())
}

/// Pure form of [`discover_skeleton_dir`] with the environment passed in.
pub fn resolve_skeleton_dir(
    env_dir: Option<PathBuf>,
    project_root: &Path,
    exe_dir: Option<&Path>,
) -> PathBuf {
    let fallback = project_root.join(SKELETON_DIR_NAME);

    for candidate in candidate_paths(env_dir, project_root, exe_dir) {
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "Using skeleton directory");
            return candidate;
        }
        debug!(path = %candidate.display(), "Skeleton candidate missing, skipping");
    }

    debug!(
        path = %fallback.display(),
        "No skeleton directory found; checked $KILN_SKELETON_DIR, <root>/skeleton and <exe>/skeleton"
    );
    fallback
}

fn candidate_paths(
    env_dir: Option<PathBuf>,
    project_root: &Path,
    exe_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    paths.extend(env_dir.filter(|p| !p.as_os_str().is_empty()));
    paths.push(project_root.join(SKELETON_DIR_NAME));
    paths.extend(exe_dir.map(|dir| dir.join(SKELETON_DIR_NAME)));
    paths
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn env_override_comes_first() {
        let custom = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::create_dir(project.path().join("skeleton")).unwrap();

        let found = resolve_skeleton_dir(Some(custom.path().to_path_buf()), project.path(), None);
        assert_eq!(found, custom.path());
    }

    #[test]
    fn project_skeleton_used_when_env_missing() {
        let project = TempDir::new().unwrap();
        fs::create_dir(project.path().join("skeleton")).unwrap();

        let found = resolve_skeleton_dir(
            Some(PathBuf::from("/definitely/not/here")),
            project.path(),
            None,
        );
        assert_eq!(found, project.path().join("skeleton"));
    }

    #[test]
    fn exe_sibling_is_last_resort() {
        let project = TempDir::new().unwrap();
        let install = TempDir::new().unwrap();
        fs::create_dir(install.path().join("skeleton")).unwrap();

        let found = resolve_skeleton_dir(None, project.path(), Some(install.path()));
        assert_eq!(found, install.path().join("skeleton"));
    }

    #[test]
    fn falls_back_to_project_skeleton() {
        let project = TempDir::new().unwrap();
        let found = resolve_skeleton_dir(None, project.path(), None);
        assert_eq!(found, project.path().join("skeleton"));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let paths = candidate_paths(Some(PathBuf::new()), Path::new("/p"), None);
        assert_eq!(paths, vec![PathBuf::from("/p/skeleton")]);
    }
}
