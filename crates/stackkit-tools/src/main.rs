//! stackkit CLI - add services to a multi-service stack

mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stackkit_core::tui::{AddServiceArgs, ListArgs};
use stackkit_core::ProductConfig;
use std::path::{Path, PathBuf};

/// stackkit product configuration
#[derive(Clone)]
pub struct StackkitConfig;

impl ProductConfig for StackkitConfig {
    fn name(&self) -> &'static str {
        "stackkit"
    }

    fn display_name(&self) -> &'static str {
        "stackkit"
    }

    fn cli_description(&self) -> &'static str {
        "Add services to a multi-service stack"
    }

    fn toolkit_root_env(&self) -> &'static str {
        "STACKKIT_ROOT"
    }

    fn next_steps(&self, service_dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();

        let relative = std::env::current_dir()
            .ok()
            .and_then(|cwd| service_dir.strip_prefix(cwd).ok().map(Path::to_path_buf))
            .unwrap_or_else(|| service_dir.to_path_buf());

        steps.push("Bring the stack up to see the demo client code running".to_string());
        steps.push(format!("cd {}", relative.display()));
        steps.push(format!(
            "Start coding: edit {} and add libraries as needed",
            self.service_main()
        ));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "stackkit")]
#[command(about = "Add services to a multi-service stack")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new service from a template
    AddService(CliAddServiceArgs),
    /// List available templates and clients
    List(CliListArgs),
}

#[derive(Parser, Debug)]
pub struct CliAddServiceArgs {
    /// Name of the new service
    pub name: String,

    /// Project root containing the manifests
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Toolkit directory with templates/ and clients/
    #[arg(long = "toolkit-dir", env = "STACKKIT_ROOT")]
    pub toolkit_dir: Option<PathBuf>,

    /// Skip installing the service's dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

impl From<CliAddServiceArgs> for AddServiceArgs {
    fn from(args: CliAddServiceArgs) -> Self {
        AddServiceArgs {
            service_name: args.name,
            root: args.root,
            toolkit_dir: args.toolkit_dir,
            skip_install: args.skip_install,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliListArgs {
    /// Project root containing the manifests
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Toolkit directory with templates/ and clients/
    #[arg(long = "toolkit-dir", env = "STACKKIT_ROOT")]
    pub toolkit_dir: Option<PathBuf>,
}

impl From<CliListArgs> for ListArgs {
    fn from(args: CliListArgs) -> Self {
        ListArgs {
            root: args.root,
            toolkit_dir: args.toolkit_dir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    logging::init(args.verbose)?;

    let config = StackkitConfig;

    match args.command {
        Command::AddService(add_args) => {
            let result = stackkit_core::run(&config, add_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Command::List(list_args) => stackkit_core::tui::list_catalogs(&config, list_args.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_add_service() {
        let args = Args::try_parse_from([
            "stackkit",
            "-vv",
            "add-service",
            "orders",
            "--toolkit-dir",
            "/opt/kit",
            "--skip-install",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::AddService(add) => {
                let add: AddServiceArgs = add.into();
                assert_eq!(add.service_name, "orders");
                assert_eq!(add.toolkit_dir, Some(PathBuf::from("/opt/kit")));
                assert!(add.skip_install);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_add_service_requires_name() {
        assert!(Args::try_parse_from(["stackkit", "add-service"]).is_err());
    }
}
