//! Template tree handling
//!
//! This module provides:
//! - Copying a template tree into a new service directory
//! - Property substitution and package.json rewriting
//! - Removing version control metadata from the copied tree

pub mod cleanup;
pub mod copier;
pub mod render;

pub use cleanup::remove_vcs_dirs;
pub use copier::copy_template;
pub use render::{replace_props, update_package_json};
