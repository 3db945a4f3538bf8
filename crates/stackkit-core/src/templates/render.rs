//! In-place rewriting of a freshly copied service

use crate::error::{Result, ScaffoldError};
use crate::manifest::JsonDocument;
use crate::props::Property;
use serde_json::Value;
use std::path::Path;
use walkdir::WalkDir;

/// Directories never rewritten
const SKIP_DIRS: &[&str] = &[".git", "node_modules"];

/// Replace every `{{NAME}}` placeholder with the property value
///
/// Non UTF-8 files are skipped. Returns the number of files changed.
pub fn replace_props(service_dir: &Path, props: &[Property]) -> Result<usize> {
    let mut changed = 0;

    let walker = WalkDir::new(service_dir).into_iter().filter_entry(|e| {
        !(e.file_type().is_dir() && SKIP_DIRS.contains(&e.file_name().to_string_lossy().as_ref()))
    });

    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Ok(content) = std::fs::read_to_string(path) else {
            continue;
        };

        let rendered = props.iter().fold(content.clone(), |acc, prop| {
            acc.replace(&format!("{{{{{}}}}}", prop.name), &prop.value)
        });
        if rendered != content {
            std::fs::write(path, rendered).map_err(ScaffoldError::io("Failed to write", path))?;
            changed += 1;
        }
    }

    tracing::debug!(dir = %service_dir.display(), files = changed, "substituted properties");
    Ok(changed)
}

/// Stamp the service name into `package.json` and blank the template's metadata
///
/// Returns false when the service has no `package.json`.
pub fn update_package_json(service_dir: &Path, service_name: &str) -> Result<bool> {
    let path = service_dir.join("package.json");
    if !path.exists() {
        return Ok(false);
    }

    let mut doc = JsonDocument::read(&path)?;
    let Some(root) = doc.value.as_object_mut() else {
        return Err(ScaffoldError::ManifestShape {
            path,
            key: "package.json".to_string(),
        });
    };
    root.insert("name".to_string(), Value::String(service_name.to_string()));
    for key in ["description", "author", "license"] {
        root.insert(key.to_string(), Value::String(String::new()));
    }
    doc.write()?;

    Ok(true)
}
