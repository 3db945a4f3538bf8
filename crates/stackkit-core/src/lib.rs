//! Stackkit Core - add services to a multi-service project
//!
//! Creates a service directory from a template, wires the chosen client
//! integrations into it and keeps the project-wide manifests in step.
//!
//! # Architecture
//!
//! - **Catalogs** - static template and client tables loaded once from YAML
//! - **Selection** - numbered menus and property collection over a [`Prompter`]
//! - **Config synchronizer** - merges the service into the stack, env and
//!   deploy manifests ([`manifest`])
//! - **Code injector** - splices client usage snippets into the service
//!   entry point at marker tokens ([`inject`])
//! - **Orchestrator** - [`Scaffolder`] runs the pipeline end to end
//! - **CLI/TUI** - optional cliclack front-end (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Concurrency
//!
//! Everything runs sequentially. Manifests are read and rewritten whole with
//! no locking, so editing them from elsewhere during a run is unsafe.

pub mod catalog;
pub mod config;
pub mod error;
pub mod inject;
pub mod manifest;
pub mod product;
pub mod prompt;
pub mod props;
pub mod runtime;
pub mod scaffold;
pub mod selection;
pub mod templates;
pub mod validation;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Client, ClientCatalog, Template, TemplateCatalog};
pub use config::ProjectLayout;
pub use error::{Result, ScaffoldError};
pub use product::ProductConfig;
pub use prompt::Prompter;
pub use scaffold::{Catalogs, ScaffoldOptions, ScaffoldOutcome, Scaffolder};

#[cfg(feature = "tui")]
pub use tui::run;
