//! Add-service orchestration
//!
//! Runs the whole pipeline for one new service:
//! validate -> pick template -> collect props -> pick clients -> create dir
//! -> before-create hooks -> copy -> render -> sync manifests -> inject
//! client code -> install -> cleanup.
//!
//! Every step finishes before the next starts. Nothing is rolled back on
//! failure; the error says how far the run got.

use crate::catalog::{Client, ClientCatalog, Template, TemplateCatalog};
use crate::config::{detect_install_command, ProjectLayout};
use crate::error::{Result, ScaffoldError};
use crate::inject::{collect_snippets, inject_file, Markers};
use crate::manifest::{ConfigSynchronizer, EnvReconciler, ManifestFragment, SyncReport, SyncRequest};
use crate::product::ProductConfig;
use crate::prompt::Prompter;
use crate::props::{collect_props, Property};
use crate::runtime::CommandRunner;
use crate::selection::{select_many, select_one};
use crate::templates::{copy_template, remove_vcs_dirs, replace_props, update_package_json};
use crate::validation::validate_service_name;
use std::path::PathBuf;

/// Knobs for one run
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Skip the dependency install step
    pub skip_install: bool,
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub service_dir: PathBuf,
    pub template_id: String,
    pub props: Vec<Property>,
    pub clients: Vec<Client>,
    pub sync: SyncReport,
    pub code_injected: bool,
    pub install_command: Option<&'static str>,
}

/// Static inputs shared by every run
pub struct Catalogs<'a> {
    pub templates: &'a TemplateCatalog,
    pub clients: &'a ClientCatalog,
}

/// Drives one add-service run against a project
pub struct Scaffolder<'a, C, P: ?Sized, X, R> {
    config: &'a C,
    layout: &'a ProjectLayout,
    catalogs: Catalogs<'a>,
    prompter: &'a mut P,
    runner: X,
    reconciler: R,
    options: ScaffoldOptions,
}

impl<'a, C, P, X, R> Scaffolder<'a, C, P, X, R>
where
    C: ProductConfig,
    P: Prompter + ?Sized,
    X: CommandRunner,
    R: EnvReconciler,
{
    pub fn new(
        config: &'a C,
        layout: &'a ProjectLayout,
        catalogs: Catalogs<'a>,
        prompter: &'a mut P,
        runner: X,
        reconciler: R,
    ) -> Self {
        Self {
            config,
            layout,
            catalogs,
            prompter,
            runner,
            reconciler,
            options: ScaffoldOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScaffoldOptions) -> Self {
        self.options = options;
        self
    }

    fn markers(&self) -> Markers {
        Markers {
            imports: self.config.imports_marker().to_string(),
            usage: self.config.usage_marker().to_string(),
            import_prefix: self.config.import_prefix().to_string(),
        }
    }

    fn select_template(&mut self) -> Result<&'a Template> {
        let templates = self.catalogs.templates;
        let idx = select_one(
            &mut *self.prompter,
            "Select service template:",
            &templates.labels(),
        )?;
        Ok(&templates.templates[idx])
    }

    fn select_clients(&mut self, service_name: &str) -> Result<Vec<&'a Client>> {
        let clients = self.catalogs.clients;
        let title = format!(
            "Select the clients \"{}\" connects to, one at a time \
             (pick a message broker if services should talk to each other):",
            service_name
        );
        let picked = select_many(&mut *self.prompter, &title, &clients.labels())?;
        Ok(picked.into_iter().map(|i| &clients.clients[i]).collect())
    }

    /// Run the pipeline for `service_name`
    pub async fn add_service(&mut self, service_name: &str) -> Result<ScaffoldOutcome> {
        validate_service_name(service_name)?;

        let service_dir = self.layout.service_dir(service_name);
        if service_dir.exists() {
            return Err(ScaffoldError::DirectoryExists(service_dir));
        }
        tracing::info!(service = %service_name, dir = %service_dir.display(), "adding service");

        let template = self.select_template()?;
        tracing::debug!(template = %template.id, "template selected");

        let props = collect_props(&mut *self.prompter, template, &self.layout.project_name())?;

        let clients = if template.select_clients {
            self.select_clients(service_name)?
        } else {
            Vec::new()
        };

        std::fs::create_dir_all(&service_dir)
            .map_err(ScaffoldError::io("Failed to create directory", &service_dir))?;

        if !template.before_create.is_empty() {
            self.prompter.step("Running before-create commands...")?;
            for hook in &template.before_create {
                let cwd = hook.working_dir(&service_dir);
                std::fs::create_dir_all(&cwd)
                    .map_err(ScaffoldError::io("Failed to create directory", &cwd))?;
                self.runner.run(&hook.cmd, &cwd).await?;
            }
        }

        self.prompter.step("Copying template files...")?;
        copy_template(&self.layout.template_dir(&template.id), &service_dir)?;
        update_package_json(&service_dir, service_name)?;

        self.prompter.step("Applying service properties...")?;
        replace_props(&service_dir, &props)?;

        self.prompter.step("Updating project manifests...")?;
        let fragment = ManifestFragment::take(&self.layout.template_manifest_in(&service_dir))?;
        let synchronizer = ConfigSynchronizer::new(self.layout, &self.reconciler);
        let sync = synchronizer.sync(&SyncRequest {
            service_name,
            service_dir: &service_dir,
            fragment: &fragment,
            clients: &clients,
        })?;
        if sync.replaced_service {
            self.prompter.warning(&format!(
                "\"{}\" was already registered in {}; its entry was replaced",
                service_name,
                self.config.stack_manifest()
            ))?;
        }

        self.prompter.step("Generating client usage code...")?;
        let markers = self.markers();
        let code = collect_snippets(self.layout, &clients, &markers.import_prefix)?;
        let code_injected = inject_file(
            &self.layout.service_main_in(&service_dir),
            &markers,
            &code,
        )?;

        let install_command = if self.options.skip_install {
            None
        } else {
            detect_install_command(&service_dir)
        };
        if let Some(cmd) = install_command {
            self.prompter.step(&format!("Running \"{}\"...", cmd))?;
            self.runner.run(cmd, &service_dir).await?;
        }

        self.prompter.step("Cleaning up...")?;
        remove_vcs_dirs(&service_dir)?;

        tracing::info!(service = %service_name, "service created");

        Ok(ScaffoldOutcome {
            service_dir,
            template_id: template.id.clone(),
            props,
            clients: clients.into_iter().cloned().collect(),
            sync,
            code_injected,
            install_command,
        })
    }
}
