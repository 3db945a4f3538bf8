//! `KEY=VALUE` env files

use crate::error::{Result, ScaffoldError};
use serde_json::{Map, Value};
use std::path::Path;

/// String values are written raw, everything else as JSON text
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// One `KEY=VALUE` line per variable, in map order
pub fn env_lines(vars: &Map<String, Value>) -> Vec<String> {
    vars.iter()
        .map(|(key, value)| format!("{}={}", key, render_value(value)))
        .collect()
}

/// Write lines to `path`, replacing any existing file and creating parents
pub fn write_env_file(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(ScaffoldError::io("Failed to create directory", parent))?;
    }
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(path, content).map_err(ScaffoldError::io("Failed to write", path))?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "wrote env file");
    Ok(())
}
