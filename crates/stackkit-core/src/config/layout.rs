//! Absolute paths for one scaffolding run

use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

/// Default toolkit directory inside a project when neither flag nor env var is set
const DEFAULT_TOOLKIT_DIR: &str = ".stackkit";

/// Every path the engine reads or writes, resolved once at startup
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub toolkit_root: PathBuf,
    pub services_dir: PathBuf,
    pub stack_manifest: PathBuf,
    pub env_manifest: PathBuf,
    pub deploy_manifest: PathBuf,
    /// Local env file rendered from the stack manifest's `build_vars`
    pub stack_env_file: PathBuf,
    template_manifest: String,
    usage_example: String,
    service_main: String,
}

impl ProjectLayout {
    /// Resolve the layout; the toolkit root comes from the explicit argument,
    /// then the product's env var, then `<root>/.stackkit`
    pub fn resolve<C: ProductConfig>(
        config: &C,
        root: PathBuf,
        toolkit_root: Option<PathBuf>,
    ) -> Self {
        let toolkit_root = toolkit_root
            .or_else(|| std::env::var_os(config.toolkit_root_env()).map(PathBuf::from))
            .unwrap_or_else(|| root.join(DEFAULT_TOOLKIT_DIR));

        Self {
            services_dir: root.join(config.services_dir()),
            stack_manifest: root.join(config.stack_manifest()),
            env_manifest: root.join(config.env_manifest()),
            deploy_manifest: root.join(config.deploy_manifest()),
            stack_env_file: root.join(".env.stack"),
            template_manifest: config.template_manifest().to_string(),
            usage_example: config.usage_example().to_string(),
            service_main: config.service_main().to_string(),
            toolkit_root,
            root,
        }
    }

    /// Directory a new service is created in
    pub fn service_dir(&self, service_name: &str) -> PathBuf {
        self.services_dir.join(service_name)
    }

    pub fn templates_root(&self) -> PathBuf {
        self.toolkit_root.join("templates")
    }

    pub fn template_catalog(&self) -> PathBuf {
        self.templates_root().join("catalog.yaml")
    }

    /// Source tree of one template
    pub fn template_dir(&self, template_id: &str) -> PathBuf {
        self.templates_root().join(template_id)
    }

    pub fn clients_root(&self) -> PathBuf {
        self.toolkit_root.join("clients")
    }

    pub fn client_catalog(&self) -> PathBuf {
        self.clients_root().join("catalog.yaml")
    }

    /// `{clients-root}/{client-id}/{usage-example}`
    pub fn usage_snippet(&self, client_id: &str) -> PathBuf {
        self.clients_root().join(client_id).join(&self.usage_example)
    }

    /// Template manifest fragment inside a freshly copied service
    pub fn template_manifest_in(&self, service_dir: &Path) -> PathBuf {
        service_dir.join(&self.template_manifest)
    }

    /// Entry-point source file of a service
    pub fn service_main_in(&self, service_dir: &Path) -> PathBuf {
        service_dir.join(&self.service_main)
    }

    /// Project name, taken from the root directory name
    pub fn project_name(&self) -> String {
        self.root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone())
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::testing::TestProduct;

    #[test]
    fn test_explicit_toolkit_root_wins() {
        let layout = ProjectLayout::resolve(
            &TestProduct,
            PathBuf::from("/work/shop"),
            Some(PathBuf::from("/opt/toolkit")),
        );
        assert_eq!(layout.toolkit_root, PathBuf::from("/opt/toolkit"));
        assert_eq!(
            layout.usage_snippet("nats"),
            PathBuf::from("/opt/toolkit/clients/nats/usage-example.ts")
        );
        assert_eq!(
            layout.template_dir("ts-service"),
            PathBuf::from("/opt/toolkit/templates/ts-service")
        );
    }

    #[test]
    fn test_default_paths() {
        let layout = ProjectLayout::resolve(&TestProduct, PathBuf::from("/work/shop"), None);
        assert_eq!(layout.stack_manifest, PathBuf::from("/work/shop/stack.json"));
        assert_eq!(
            layout.service_dir("api"),
            PathBuf::from("/work/shop/services/api")
        );
        assert_eq!(
            layout.template_manifest_in(&layout.service_dir("api")),
            PathBuf::from("/work/shop/services/api/service-manifest.json")
        );
        assert_eq!(layout.project_name(), "shop");
    }
}
