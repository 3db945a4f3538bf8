//! Template file copying

use crate::error::{Result, ScaffoldError};
use std::path::Path;
use walkdir::WalkDir;

/// Copy every file under `template_dir` into `target_dir`
///
/// Existing files are overwritten. Returns the relative paths copied, in
/// walk order.
pub fn copy_template(template_dir: &Path, target_dir: &Path) -> Result<Vec<String>> {
    if !template_dir.is_dir() {
        return Err(ScaffoldError::Io {
            context: "Template directory not found:",
            path: template_dir.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
    }

    std::fs::create_dir_all(target_dir)
        .map_err(ScaffoldError::io("Failed to create directory", target_dir))?;

    let mut copied = Vec::new();

    for entry in WalkDir::new(template_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(template_dir).to_path_buf();
            ScaffoldError::Io {
                context: "Failed to walk",
                path,
                source: e.into(),
            }
        })?;

        let relative = match entry.path().strip_prefix(template_dir) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target_path = target_dir.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target_path)
                .map_err(ScaffoldError::io("Failed to create directory", &target_path))?;
            continue;
        }

        if let Some(parent) = target_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(ScaffoldError::io("Failed to create directory", parent))?;
        }
        std::fs::copy(entry.path(), &target_path)
            .map_err(ScaffoldError::io("Failed to copy", entry.path()))?;

        copied.push(relative.to_string_lossy().replace('\\', "/"));
    }

    tracing::debug!(from = %template_dir.display(), to = %target_dir.display(), files = copied.len(), "copied template");
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_nested_tree_including_dotfiles() {
        let src = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(src.path().join("src/lib")).unwrap();
        std::fs::write(src.path().join("main.ts"), "main").unwrap();
        std::fs::write(src.path().join(".gitignore"), "node_modules").unwrap();
        std::fs::write(src.path().join("src/lib/util.ts"), "util").unwrap();

        let dst = tempfile::tempdir().unwrap();
        let target = dst.path().join("services/api");
        let copied = copy_template(src.path(), &target).unwrap();

        assert_eq!(copied, vec![".gitignore", "main.ts", "src/lib/util.ts"]);
        assert_eq!(
            std::fs::read_to_string(target.join("src/lib/util.ts")).unwrap(),
            "util"
        );
    }

    #[test]
    fn test_missing_template_dir() {
        let dst = tempfile::tempdir().unwrap();
        let err = copy_template(&dst.path().join("nope"), dst.path()).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
