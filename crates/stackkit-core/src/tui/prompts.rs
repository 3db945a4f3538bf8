//! Charm-style CLI prompts using cliclack

use crate::catalog::{ClientCatalog, TemplateCatalog};
use crate::config::ProjectLayout;
use crate::error::{Result as ScaffoldResult, ScaffoldError};
use crate::manifest::StackEnvFile;
use crate::product::ProductConfig;
use crate::prompt::Prompter;
use crate::runtime::ShellRunner;
use crate::scaffold::{Catalogs, ScaffoldOptions, ScaffoldOutcome, Scaffolder};
use anyhow::Result;
use std::io;
use std::path::PathBuf;

/// CLI arguments for the add-service command
#[derive(Debug, Clone, Default)]
pub struct AddServiceArgs {
    /// Name of the service to create
    pub service_name: String,

    /// Project root (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Toolkit root holding templates and clients
    pub toolkit_dir: Option<PathBuf>,

    /// Skip the dependency install step
    pub skip_install: bool,
}

/// Cancel (Esc / Ctrl+C) ends the run; anything else is a terminal failure
fn prompt_error(err: io::Error) -> ScaffoldError {
    if err.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::Cancelled
    } else {
        ScaffoldError::Terminal(err)
    }
}

/// [`Prompter`] backed by cliclack
///
/// Menu lines are collected and shown as one block right before the next
/// prompt.
#[derive(Debug, Default)]
pub struct ClackPrompter {
    pending: Vec<String>,
}

impl ClackPrompter {
    fn flush(&mut self) -> ScaffoldResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let block = self.pending.join("\n");
        self.pending.clear();
        cliclack::log::info(block).map_err(ScaffoldError::Terminal)
    }
}

impl Prompter for ClackPrompter {
    fn message(&mut self, text: &str) -> ScaffoldResult<()> {
        self.pending.push(text.to_string());
        Ok(())
    }

    fn step(&mut self, text: &str) -> ScaffoldResult<()> {
        self.flush()?;
        cliclack::log::step(text).map_err(ScaffoldError::Terminal)
    }

    fn warning(&mut self, text: &str) -> ScaffoldResult<()> {
        self.flush()?;
        cliclack::log::warning(text).map_err(ScaffoldError::Terminal)
    }

    fn number(&mut self, prompt: &str) -> ScaffoldResult<String> {
        self.flush()?;
        cliclack::input(prompt)
            .validate(|input: &String| {
                if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err("Digits only")
                }
            })
            .interact()
            .map_err(prompt_error)
    }

    fn text(&mut self, prompt: &str, default: Option<&str>) -> ScaffoldResult<String> {
        self.flush()?;
        let mut input = cliclack::input(prompt).required(false);
        if let Some(default) = default {
            input = input.placeholder(default).default_input(default);
        }
        input.interact().map_err(prompt_error)
    }
}

pub(crate) fn resolve_layout<C: ProductConfig>(
    config: &C,
    root: Option<PathBuf>,
    toolkit_dir: Option<PathBuf>,
) -> ProjectLayout {
    let root = root
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    ProjectLayout::resolve(config, root, toolkit_dir)
}

/// Load both catalogs; a toolkit without a client catalog offers no clients
pub(crate) fn load_catalogs(layout: &ProjectLayout) -> Result<(TemplateCatalog, ClientCatalog)> {
    let templates = TemplateCatalog::load(&layout.template_catalog())?;
    if templates.templates.is_empty() {
        anyhow::bail!(
            "No templates found in {}",
            layout.template_catalog().display()
        );
    }

    let client_catalog = layout.client_catalog();
    let clients = if client_catalog.exists() {
        ClientCatalog::load(&client_catalog)?
    } else {
        ClientCatalog::default()
    };

    Ok((templates, clients))
}

/// Run the add-service flow with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: AddServiceArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let layout = resolve_layout(config, args.root.clone(), args.toolkit_dir.clone());
    cliclack::log::info(format!("Using toolkit at {}", layout.toolkit_root.display()))?;

    let (templates, clients) = load_catalogs(&layout)?;

    cliclack::log::info(format!("Creating new service: {}", args.service_name))?;

    let mut prompter = ClackPrompter::default();
    let result = Scaffolder::new(
        config,
        &layout,
        Catalogs {
            templates: &templates,
            clients: &clients,
        },
        &mut prompter,
        ShellRunner,
        StackEnvFile::new(layout.stack_env_file.clone()),
    )
    .with_options(ScaffoldOptions {
        skip_install: args.skip_install,
    })
    .add_service(&args.service_name)
    .await;

    match result {
        Ok(outcome) => print_summary(config, &args.service_name, &outcome),
        Err(ScaffoldError::Cancelled) => {
            cliclack::outro_cancel("Cancelled. Nothing else was changed.")?;
            Ok(())
        }
        Err(err) if err.is_external() => {
            cliclack::log::error(format!("External command failed: {}", err))?;
            cliclack::outro_cancel("Files written so far were kept.")?;
            Err(err.into())
        }
        Err(err) if err.is_abort() => {
            cliclack::outro_cancel(format!("Aborted: {}", err))?;
            Err(err.into())
        }
        Err(err) => {
            cliclack::log::error(err.to_string())?;
            cliclack::outro_cancel("Aborted.")?;
            Err(err.into())
        }
    }
}

fn print_summary<C: ProductConfig>(
    config: &C,
    service_name: &str,
    outcome: &ScaffoldOutcome,
) -> Result<()> {
    let dir = outcome
        .service_dir
        .canonicalize()
        .unwrap_or_else(|_| outcome.service_dir.clone());

    cliclack::log::success(format!(
        "Created {} service in {}",
        service_name,
        dir.display()
    ))?;

    if !outcome.clients.is_empty() {
        let names: Vec<&str> = outcome.clients.iter().map(|c| c.name.as_str()).collect();
        cliclack::log::info(format!("Clients: {}", names.join(", ")))?;
    }
    if let Some(path) = &outcome.sync.debug_env_file {
        cliclack::log::info(format!("Debug env file: {}", path.display()))?;
    }

    let steps = config.next_steps(&outcome.service_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
