//! Client integration catalog

use super::load_yaml;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A third-party integration a service can be wired to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Key in the stack manifest and directory under `clients/`
    pub id: String,
    pub name: String,
    /// e.g. "broker", "database"
    pub category: String,
}

impl Client {
    /// Menu label: `(category) name`
    pub fn label(&self) -> String {
        format!("({}) {}", self.category, self.name)
    }
}

/// Ordered list of clients (`clients/catalog.yaml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientCatalog {
    pub clients: Vec<Client>,
}

impl ClientCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let catalog: Self = load_yaml(path)?;
        tracing::debug!(path = %path.display(), count = catalog.clients.len(), "loaded client catalog");
        Ok(catalog)
    }

    pub fn labels(&self) -> Vec<String> {
        self.clients.iter().map(Client::label).collect()
    }
}
