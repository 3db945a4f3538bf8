//! Project manifest synchronization
//!
//! Stack, env and deploy manifests are whole JSON documents that get
//! read, mutated and written back in one go. Nothing here is transactional:
//! a failure on a later file leaves earlier files written.

pub mod document;
pub mod env_file;
pub mod fragment;
pub mod reconcile;
pub mod sync;

pub use document::JsonDocument;
pub use fragment::{DeployAttrs, EnvSpec, ManifestFragment};
pub use reconcile::{EnvReconciler, StackEnvFile};
pub use sync::{ConfigSynchronizer, SyncReport, SyncRequest};
