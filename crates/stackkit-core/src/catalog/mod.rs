//! Template and client catalogs
//!
//! Both catalogs are static YAML tables read once at startup and passed
//! around by reference afterwards.

pub mod client;
pub mod template;

pub use client::{Client, ClientCatalog};
pub use template::{BeforeCreate, Template, TemplateCatalog, TemplateProp};

use crate::error::{Result, ScaffoldError};
use serde::de::DeserializeOwned;
use std::path::Path;

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).map_err(ScaffoldError::io("Failed to read", path))?;
    serde_yaml::from_str(&content).map_err(|source| ScaffoldError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}
