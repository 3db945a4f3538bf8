//! Client usage code injection
//!
//! Usage snippets are split into import lines and body lines. Imports are
//! pooled and deduplicated across clients; each body is wrapped in its own
//! `{ ... }` block under a banner. Both blocks replace marker tokens in the
//! service entry point.

use crate::catalog::Client;
use crate::config::ProjectLayout;
use crate::error::{Result, ScaffoldError};
use std::path::Path;

/// Indentation inside a client's `{ ... }` block
const BLOCK_INDENT: &str = "  ";

/// Marker tokens the injector looks for
#[derive(Debug, Clone)]
pub struct Markers {
    /// Replaced (first occurrence) with the import block
    pub imports: String,
    /// Replaced, together with its leading indentation, by the body block
    pub usage: String,
    /// Snippet lines starting with this (after leading whitespace) are imports
    pub import_prefix: String,
}

/// Accumulated import and body lines for all selected clients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedCode {
    pub header: Vec<String>,
    pub body: Vec<String>,
}

impl GeneratedCode {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }

    /// Fold one client's snippet in
    pub fn add_snippet(&mut self, client_name: &str, snippet: &str, import_prefix: &str) {
        let mut body: Vec<&str> = Vec::new();

        for line in snippet.trim().lines() {
            if line.trim_start().starts_with(import_prefix) {
                if !self.header.iter().any(|h| h == line) {
                    self.header.push(line.to_string());
                }
            } else {
                body.push(line);
            }
        }

        if body.first().is_some_and(|l| l.trim().is_empty()) {
            body.remove(0);
        }

        self.body.push(String::new());
        self.body.push(format!("//========== {} ==========", client_name));
        self.body.push("{".to_string());
        self.body.extend(body.into_iter().map(|l| indent(BLOCK_INDENT, l)));
        self.body.push("}".to_string());
    }
}

/// Prefix every line, blank ones included
fn indent(prefix: &str, line: &str) -> String {
    format!("{}{}", prefix, line)
}

impl Markers {
    /// Splice generated code into `source`
    ///
    /// Returns `None` when the usage marker is absent; the caller leaves the
    /// file untouched in that case.
    pub fn splice(&self, source: &str, code: &GeneratedCode) -> Option<String> {
        let marker_line = source.lines().find(|l| l.contains(&self.usage))?;
        let marker_at = marker_line.find(&self.usage)?;
        let indent_prefix = &marker_line[..marker_at];

        let body: Vec<String> = code
            .body
            .iter()
            .map(|l| indent(indent_prefix, l))
            .collect();

        let spliced = source
            .replacen(&self.imports, &code.header.join("\n"), 1)
            .replacen(
                &format!("{}{}", indent_prefix, self.usage),
                &body.join("\n"),
                1,
            );
        Some(spliced)
    }
}

/// Collect snippets for the selected clients; missing snippet files are skipped
pub fn collect_snippets(
    layout: &ProjectLayout,
    clients: &[&Client],
    import_prefix: &str,
) -> Result<GeneratedCode> {
    let mut code = GeneratedCode::default();

    for client in clients {
        let path = layout.usage_snippet(&client.id);
        if !path.exists() {
            tracing::debug!(client = %client.id, path = %path.display(), "no usage snippet");
            continue;
        }
        let snippet =
            std::fs::read_to_string(&path).map_err(ScaffoldError::io("Failed to read", &path))?;
        code.add_snippet(&client.name, &snippet, import_prefix);
        tracing::debug!(client = %client.id, "collected usage snippet");
    }

    Ok(code)
}

/// Inject generated code into `target`; returns whether the file changed
pub fn inject_file(target: &Path, markers: &Markers, code: &GeneratedCode) -> Result<bool> {
    if code.is_empty() || !target.exists() {
        return Ok(false);
    }

    let source =
        std::fs::read_to_string(target).map_err(ScaffoldError::io("Failed to read", target))?;
    let Some(spliced) = markers.splice(&source, code) else {
        tracing::debug!(path = %target.display(), "usage marker not found");
        return Ok(false);
    };

    std::fs::write(target, spliced).map_err(ScaffoldError::io("Failed to write", target))?;
    tracing::info!(
        path = %target.display(),
        imports = code.header.len(),
        lines = code.body.len(),
        "injected client usage code"
    );
    Ok(true)
}
