//! Service template catalog

use super::load_yaml;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A custom property a template asks for before the service is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateProp {
    /// Placeholder name, substituted as `{{NAME}}` in template files
    pub name: String,

    /// Question shown to the user
    pub prompt: String,

    /// Pre-filled answer
    #[serde(default)]
    pub default: Option<String>,

    /// When present the value is picked from this list instead of typed
    #[serde(default)]
    pub options: Vec<String>,
}

/// Shell command run inside the new service directory before files are copied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeforeCreate {
    pub cmd: String,

    /// Working directory relative to the service directory
    #[serde(default)]
    pub dir: Option<String>,
}

impl BeforeCreate {
    /// Working directory for this hook
    pub fn working_dir(&self, service_dir: &Path) -> std::path::PathBuf {
        match self.dir.as_deref().map(|d| d.trim_start_matches(['/', '\\'])) {
            Some(dir) if !dir.is_empty() => service_dir.join(dir),
            _ => service_dir.to_path_buf(),
        }
    }
}

/// One entry of the template catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Directory name under `templates/`
    pub id: String,

    /// Label shown in the selection menu
    pub name: String,

    #[serde(default)]
    pub props: Vec<TemplateProp>,

    /// Whether the user gets to attach clients to the service
    #[serde(default)]
    pub select_clients: bool,

    #[serde(default)]
    pub before_create: Vec<BeforeCreate>,
}

/// Ordered list of templates (`templates/catalog.yaml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateCatalog {
    pub templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let catalog: Self = load_yaml(path)?;
        tracing::debug!(path = %path.display(), count = catalog.templates.len(), "loaded template catalog");
        Ok(catalog)
    }

    /// Menu labels in catalog order
    pub fn labels(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.name.clone()).collect()
    }
}
