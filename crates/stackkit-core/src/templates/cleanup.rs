//! Post-copy cleanup

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories stripped from a generated service
const REMOVE_DIRS: &[&str] = &[".git"];

/// Remove version control directories anywhere under `dir`
pub fn remove_vcs_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut walker = WalkDir::new(dir).min_depth(1).into_iter();

    while let Some(entry) = walker.next() {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if REMOVE_DIRS.contains(&name.as_ref()) {
            found.push(entry.path().to_path_buf());
            walker.skip_current_dir();
        }
    }

    for path in &found {
        std::fs::remove_dir_all(path).map_err(ScaffoldError::io("Failed to remove", path))?;
        tracing::debug!(path = %path.display(), "removed");
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_nested_git_dirs_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        std::fs::create_dir_all(dir.path().join("vendor/lib/.git")).unwrap();
        std::fs::write(dir.path().join(".gitignore"), "").unwrap();
        std::fs::write(dir.path().join("vendor/lib/index.ts"), "").unwrap();

        let removed = remove_vcs_dirs(dir.path()).unwrap();
        assert_eq!(removed.len(), 2);
        assert!(!dir.path().join(".git").exists());
        assert!(!dir.path().join("vendor/lib/.git").exists());
        assert!(dir.path().join(".gitignore").exists());
        assert!(dir.path().join("vendor/lib/index.ts").exists());
    }
}
