//! Product configuration trait for CLI binaries
//!
//! Every file name and marker token the engine touches comes from here, so a
//! binary can rebrand the tool without touching the core.

use std::path::Path;

/// Configuration trait for a stack tooling product
///
/// Only identity and the toolkit env var are required; every project file
/// name has a default matching the sample toolkit shipped with the repo.
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable pointing at the toolkit root (templates + clients)
    fn toolkit_root_env(&self) -> &'static str;

    /// Directory (relative to the project root) holding all services
    fn services_dir(&self) -> &'static str {
        "services"
    }

    /// Stack manifest: services and their client wiring
    fn stack_manifest(&self) -> &'static str {
        "stack.json"
    }

    /// Environment manifest: per-service environment variables
    fn env_manifest(&self) -> &'static str {
        "stack-env.json"
    }

    /// Deploy manifest: deploy-wide environment
    fn deploy_manifest(&self) -> &'static str {
        "stack-deploy.json"
    }

    /// Manifest fragment bundled with a template, deleted after use
    fn template_manifest(&self) -> &'static str {
        "service-manifest.json"
    }

    /// Usage snippet file inside each client directory
    fn usage_example(&self) -> &'static str {
        "usage-example.ts"
    }

    /// Entry-point file of a generated service that receives client code
    fn service_main(&self) -> &'static str {
        "main.ts"
    }

    /// Token replaced with the collected import lines
    fn imports_marker(&self) -> &'static str {
        "// @stackkit:imports"
    }

    /// Token replaced with the scoped client usage blocks
    fn usage_marker(&self) -> &'static str {
        "// @stackkit:client-usage"
    }

    /// Lines of a usage snippet starting with this go to the import block
    fn import_prefix(&self) -> &'static str {
        "import"
    }

    /// Generate the "next steps" instructions after service creation
    fn next_steps(&self, service_dir: &Path) -> Vec<String>;
}
