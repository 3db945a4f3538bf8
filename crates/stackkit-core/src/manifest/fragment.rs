//! Template-bundled manifest fragment

use crate::error::{Result, ScaffoldError};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Environment variables a template declares for its service
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnvSpec {
    /// Present (even if empty) means the env manifest gets an entry
    #[serde(default)]
    pub vars: Option<Map<String, Value>>,

    /// Service-relative path of a local `KEY=VALUE` file to generate
    #[serde(default, rename = "debugEnvFile", alias = "debug_env_file")]
    pub debug_env_file: Option<String>,
}

/// Deploy-wide settings a template contributes
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeployAttrs {
    #[serde(default)]
    pub env: Map<String, Value>,
}

/// Defaults for a new service's stack, env and deploy entries
///
/// Consumed once at creation time; the carrier file is deleted after it is
/// read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManifestFragment {
    #[serde(default, alias = "smf-stack")]
    pub stack: Option<Map<String, Value>>,

    #[serde(default, alias = "smf-env")]
    pub env: Option<EnvSpec>,

    #[serde(default, alias = "smf-deploy")]
    pub deploy: Option<DeployAttrs>,
}

impl ManifestFragment {
    /// Read and delete the fragment file; a missing file yields an empty fragment
    pub fn take(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no template manifest");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(ScaffoldError::io("Failed to read", path))?;
        let fragment = serde_json::from_str(&content).map_err(|source| {
            ScaffoldError::ManifestParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        std::fs::remove_file(path).map_err(ScaffoldError::io("Failed to remove", path))?;
        tracing::debug!(path = %path.display(), "consumed template manifest");

        Ok(fragment)
    }

    /// Env vars, only when the template declared them
    pub fn env_vars(&self) -> Option<&Map<String, Value>> {
        self.env.as_ref().and_then(|env| env.vars.as_ref())
    }
}
