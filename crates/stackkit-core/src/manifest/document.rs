//! Read-modify-write JSON documents

use crate::error::{Result, ScaffoldError};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A JSON manifest loaded from disk
///
/// Key order is preserved so rewritten files diff cleanly against the
/// originals.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    path: PathBuf,
    pub value: Value,
}

impl JsonDocument {
    /// Read and parse a manifest; malformed JSON is fatal
    pub fn read(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(ScaffoldError::io("Failed to read", path))?;
        let value = serde_json::from_str(&content).map_err(|source| ScaffoldError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "read manifest");
        Ok(Self {
            path: path.to_path_buf(),
            value,
        })
    }

    /// Wrap an in-memory value that will be written to `path`
    pub fn from_value(path: PathBuf, value: Value) -> Self {
        Self { path, value }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level object section, created empty if missing
    pub fn section_mut(&mut self, key: &str) -> Result<&mut Map<String, Value>> {
        let shape_err = || ScaffoldError::ManifestShape {
            path: self.path.clone(),
            key: key.to_string(),
        };

        let root = match self.value.as_object_mut() {
            Some(root) => root,
            None => return Err(shape_err()),
        };
        root.entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(shape_err)
    }

    /// Pretty JSON with two-space indentation
    pub fn to_pretty(&self) -> String {
        to_pretty(&self.value)
    }

    /// Write the document back to where it was read from
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, self.to_pretty())
            .map_err(ScaffoldError::io("Failed to write", &self.path))?;
        tracing::debug!(path = %self.path.display(), "wrote manifest");
        Ok(())
    }
}

/// Two-space pretty printing used for every file this tool writes
pub fn to_pretty(value: &Value) -> String {
    // Serializing a `Value` to a String cannot fail.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> JsonDocument {
        JsonDocument {
            path: PathBuf::from("stack.json"),
            value,
        }
    }

    #[test]
    fn test_section_created_when_missing() {
        let mut d = doc(json!({"name": "shop"}));
        d.section_mut("clients").unwrap();
        assert_eq!(d.value, json!({"name": "shop", "clients": {}}));
    }

    #[test]
    fn test_section_must_be_object() {
        let mut d = doc(json!({"services": []}));
        let err = d.section_mut("services").unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestShape { ref key, .. } if key == "services"));

        let mut d = doc(json!([1, 2]));
        assert!(d.section_mut("services").is_err());
    }

    #[test]
    fn test_pretty_keeps_key_order() {
        let d = doc(serde_json::from_str(r#"{"z": 1, "a": {"y": true, "b": []}}"#).unwrap());
        assert_eq!(
            d.to_pretty(),
            "{\n  \"z\": 1,\n  \"a\": {\n    \"y\": true,\n    \"b\": []\n  }\n}"
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.json");
        std::fs::write(&path, "{ \"services\": ").unwrap();
        let err = JsonDocument::read(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
    }
}
