//! Config synchronizer: merges a new service into the project manifests

use super::document::JsonDocument;
use super::env_file::{env_lines, write_env_file};
use super::fragment::{DeployAttrs, ManifestFragment};
use super::reconcile::EnvReconciler;
use crate::catalog::Client;
use crate::config::ProjectLayout;
use crate::error::Result;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

/// Everything the synchronizer needs about the new service
#[derive(Debug)]
pub struct SyncRequest<'a> {
    pub service_name: &'a str,
    pub service_dir: &'a Path,
    pub fragment: &'a ManifestFragment,
    pub clients: &'a [&'a Client],
}

/// What the synchronizer touched
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The stack manifest already had an entry for this service
    pub replaced_service: bool,
    pub env_synced: bool,
    pub debug_env_file: Option<PathBuf>,
    pub deploy_merged: bool,
}

/// Set `services[name]` and register every client
///
/// The service entry is replaced wholesale; top-level client entries are
/// reset to `{"external": false}`. Returns whether an entry was replaced.
pub fn merge_stack(
    doc: &mut JsonDocument,
    service_name: &str,
    attrs: Option<&Map<String, Value>>,
    clients: &[&Client],
) -> Result<bool> {
    let mut entry = attrs.cloned().unwrap_or_default();
    let service_clients: Map<String, Value> = clients
        .iter()
        .map(|client| (client.id.clone(), json!({})))
        .collect();
    entry.insert("clients".to_string(), Value::Object(service_clients));

    let replaced = doc
        .section_mut("services")?
        .insert(service_name.to_string(), Value::Object(entry))
        .is_some();

    let registry = doc.section_mut("clients")?;
    for client in clients {
        registry.insert(client.id.clone(), json!({ "external": false }));
    }

    Ok(replaced)
}

/// Set `services[name]` in the env manifest to the declared vars
pub fn merge_env(
    doc: &mut JsonDocument,
    service_name: &str,
    vars: &Map<String, Value>,
) -> Result<()> {
    doc.section_mut("services")?
        .insert(service_name.to_string(), Value::Object(vars.clone()));
    Ok(())
}

/// Shallow-merge deploy env into the existing `env` map; incoming keys win
pub fn merge_deploy(doc: &mut JsonDocument, attrs: &DeployAttrs) -> Result<()> {
    let env = doc.section_mut("env")?;
    for (key, value) in &attrs.env {
        env.insert(key.clone(), value.clone());
    }
    Ok(())
}

/// Service-relative debug env path; leading separators are ignored
fn debug_env_path(service_dir: &Path, rel: &str) -> PathBuf {
    service_dir.join(rel.trim_start_matches(['/', '\\']))
}

/// Applies a manifest fragment and client selection to the project manifests
pub struct ConfigSynchronizer<'a, R> {
    layout: &'a ProjectLayout,
    reconciler: R,
}

impl<'a, R: EnvReconciler> ConfigSynchronizer<'a, R> {
    pub fn new(layout: &'a ProjectLayout, reconciler: R) -> Self {
        Self { layout, reconciler }
    }

    /// Stack merge, then env sync, debug env file and deploy merge
    ///
    /// Each step writes its file before the next one starts.
    pub fn sync(&self, request: &SyncRequest<'_>) -> Result<SyncReport> {
        let mut report = SyncReport::default();
        let name = request.service_name;

        let mut stack = JsonDocument::read(&self.layout.stack_manifest)?;
        report.replaced_service =
            merge_stack(&mut stack, name, request.fragment.stack.as_ref(), request.clients)?;
        if report.replaced_service {
            tracing::warn!(
                service = %name,
                path = %stack.path().display(),
                "replacing existing stack manifest entry"
            );
        }
        stack.write()?;
        tracing::info!(service = %name, clients = request.clients.len(), "stack manifest updated");

        if let Some(vars) = request.fragment.env_vars() {
            // The reconciler must see the stack as just written.
            let stack = JsonDocument::read(&self.layout.stack_manifest)?;
            self.reconciler.reconcile(&stack.value)?;

            let mut env = JsonDocument::read(&self.layout.env_manifest)?;
            merge_env(&mut env, name, vars)?;
            env.write()?;
            report.env_synced = true;
            tracing::info!(service = %name, vars = vars.len(), "env manifest updated");

            let debug_file = request
                .fragment
                .env
                .as_ref()
                .and_then(|env| env.debug_env_file.as_deref());
            if let Some(rel) = debug_file {
                let path = debug_env_path(request.service_dir, rel);
                write_env_file(&path, &env_lines(vars))?;
                report.debug_env_file = Some(path);
            }
        }

        if let Some(deploy) = &request.fragment.deploy {
            let mut doc = JsonDocument::read(&self.layout.deploy_manifest)?;
            merge_deploy(&mut doc, deploy)?;
            doc.write()?;
            report.deploy_merged = true;
            tracing::info!(keys = deploy.env.len(), "deploy manifest updated");
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str) -> Client {
        Client {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: "broker".to_string(),
        }
    }

    fn doc(value: Value) -> JsonDocument {
        JsonDocument::from_value(PathBuf::from("stack.json"), value)
    }

    #[test]
    fn test_stack_merge_overwrites_service_entry() {
        let mut d = doc(json!({"services": {"foo": {"custom": 1}}, "clients": {}}));
        let attrs = json!({"x": 2});
        let nats = client("nats");
        let replaced = merge_stack(&mut d, "foo", attrs.as_object(), &[&nats]).unwrap();
        assert!(replaced);
        assert_eq!(
            d.value["services"]["foo"],
            json!({"x": 2, "clients": {"nats": {}}})
        );
    }

    #[test]
    fn test_stack_merge_resets_client_registry_entry() {
        let mut d = doc(json!({
            "services": {"other": {"clients": {"redis": {}}}},
            "clients": {"redis": {"external": true, "host": "cache"}, "kafka": {"external": true}}
        }));
        let redis = client("redis");
        merge_stack(&mut d, "api", None, &[&redis]).unwrap();
        assert_eq!(
            d.value["clients"],
            json!({"redis": {"external": false}, "kafka": {"external": true}})
        );
        assert_eq!(d.value["services"]["other"], json!({"clients": {"redis": {}}}));
        assert_eq!(d.value["services"]["api"], json!({"clients": {"redis": {}}}));
    }

    #[test]
    fn test_stack_merge_creates_clients_section() {
        let mut d = doc(json!({"services": {}}));
        let replaced = merge_stack(&mut d, "api", None, &[]).unwrap();
        assert!(!replaced);
        assert_eq!(d.value, json!({"services": {"api": {"clients": {}}}, "clients": {}}));
    }

    #[test]
    fn test_attrs_clients_key_is_replaced() {
        let mut d = doc(json!({"services": {}}));
        let attrs = json!({"clients": {"stale": {}}, "port": 1});
        merge_stack(&mut d, "api", attrs.as_object(), &[]).unwrap();
        assert_eq!(d.value["services"]["api"], json!({"clients": {}, "port": 1}));
    }

    #[test]
    fn test_deploy_merge_incoming_wins() {
        let mut d = doc(json!({"env": {"REGION": "us", "KEEP": "1"}, "name": "prod"}));
        let attrs = DeployAttrs {
            env: json!({"REGION": "eu", "NEW": "x"}).as_object().cloned().unwrap(),
        };
        merge_deploy(&mut d, &attrs).unwrap();
        assert_eq!(
            d.value["env"],
            json!({"REGION": "eu", "KEEP": "1", "NEW": "x"})
        );
    }

    #[test]
    fn test_debug_env_path() {
        let dir = Path::new("/p/services/api");
        assert_eq!(debug_env_path(dir, "/.env"), dir.join(".env"));
        assert_eq!(debug_env_path(dir, "cfg/dev.env"), dir.join("cfg/dev.env"));
    }
}
