//! Stack-wide env file reconciliation

use super::env_file::{env_lines, write_env_file};
use crate::error::Result;
use serde_json::Value;
use std::path::PathBuf;

/// Key inside a stack service entry holding its build variables
pub const BUILD_VARS_KEY: &str = "build_vars";

/// Regenerates derived files from the updated stack manifest
pub trait EnvReconciler {
    fn reconcile(&self, stack: &Value) -> Result<()>;
}

impl<R: EnvReconciler + ?Sized> EnvReconciler for &R {
    fn reconcile(&self, stack: &Value) -> Result<()> {
        (**self).reconcile(stack)
    }
}

/// Writes every service's `build_vars` into one local env file
///
/// Services are grouped under a `# <service>` comment in stack order. A key
/// already written by an earlier service is skipped.
#[derive(Debug, Clone)]
pub struct StackEnvFile {
    pub path: PathBuf,
}

impl StackEnvFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Lines of the env file for a stack document
    pub fn render(stack: &Value) -> Vec<String> {
        let mut lines = Vec::new();
        let mut seen: Vec<String> = Vec::new();

        let services = stack.get("services").and_then(Value::as_object);
        for (service, attrs) in services.into_iter().flatten() {
            let Some(vars) = attrs.get(BUILD_VARS_KEY).and_then(Value::as_object) else {
                continue;
            };
            if vars.is_empty() {
                continue;
            }

            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("# {}", service));
            for (key, line) in vars.keys().zip(env_lines(vars)) {
                if seen.contains(key) {
                    tracing::warn!(service = %service, key = %key, "duplicate build variable skipped");
                    continue;
                }
                seen.push(key.clone());
                lines.push(line);
            }
        }

        lines
    }
}

impl EnvReconciler for StackEnvFile {
    fn reconcile(&self, stack: &Value) -> Result<()> {
        let lines = Self::render(stack);
        write_env_file(&self.path, &lines)
    }
}
