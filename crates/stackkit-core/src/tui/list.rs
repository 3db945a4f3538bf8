//! Catalog listing

use super::prompts::{load_catalogs, resolve_layout};
use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// CLI arguments for the list command
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub root: Option<PathBuf>,
    pub toolkit_dir: Option<PathBuf>,
}

/// Print available templates and clients
pub fn list_catalogs<C: ProductConfig>(config: &C, args: ListArgs) -> Result<()> {
    let layout = resolve_layout(config, args.root, args.toolkit_dir);
    let (templates, clients) = load_catalogs(&layout)?;

    println!("{}", "Templates".cyan().bold());
    for template in &templates.templates {
        let clients_hint = if template.select_clients {
            " (clients)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {} - {}{}",
            "->".blue(),
            template.id,
            template.name,
            clients_hint
        );
    }

    println!();
    println!("{}", "Clients".cyan().bold());
    if clients.clients.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for client in &clients.clients {
        println!("  {} {} - {}", "->".blue(), client.id, client.label());
    }

    Ok(())
}
