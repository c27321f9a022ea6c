use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use prscat_core::store::SqliteCatalogStore;
use prscat_core::{AncestryIdsParam, CatalogConfig, PrsCatalog};
use tracing::info;

use crate::cli::{Cli, Commands};

mod web;

use self::web::{WebServeOptions, serve};

pub(crate) fn run(config: CatalogConfig, cli: Cli) -> Result<()> {
    let db_path = resolve_db_path(cli.db, &config);

    match cli.command {
        Commands::Init => {
            SqliteCatalogStore::open(&db_path)
                .with_context(|| format!("failed to open catalog at {}", db_path.display()))?;
            print_json(&serde_json::json!({
                "status": "ok",
                "db_path": db_path.display().to_string(),
            }))?;
        }
        Commands::Import(args) => {
            let store = SqliteCatalogStore::open(&db_path)
                .with_context(|| format!("failed to open catalog at {}", db_path.display()))?;
            let report = store
                .import_snapshot_file(&args.snapshot)
                .with_context(|| format!("failed to import {}", args.snapshot.display()))?;
            info!(
                snapshot = %args.snapshot.display(),
                categories = report.categories,
                traits = report.traits,
                prs_models = report.prs_models,
                "catalog snapshot imported"
            );
            print_json(&report)?;
        }
        Commands::Web(args) => {
            let catalog = open_catalog(&db_path)?;
            let host = args.host.unwrap_or(config.web_host);
            let port = args.port.unwrap_or(config.web_port);
            serve(
                catalog,
                WebServeOptions {
                    host: &host,
                    port,
                },
            )?;
        }
        command => run_query(&open_catalog(&db_path)?, command)?,
    }
    Ok(())
}

fn run_query(catalog: &PrsCatalog, command: Commands) -> Result<()> {
    match command {
        Commands::Categories(args) => {
            let ancestry = AncestryIdsParam::from_values(args.ancestry);
            print_json(&catalog.trait_categories(&ancestry)?)
        }
        Commands::Traits(args) => {
            let ancestry = AncestryIdsParam::from_values(args.filter.ancestry);
            print_json(&catalog.traits_by_category(args.category_id, &ancestry)?)
        }
        Commands::Trait(args) => print_json(&catalog.trait_details(args.trait_id)?),
        Commands::ModelsByTraits(args) => {
            print_json(&catalog.prs_models_by_traits(&args.trait_ids)?)
        }
        Commands::ModelsByAncestry(args) => {
            print_json(&catalog.prs_models_by_ancestry_id(args.ancestry_id)?)
        }
        Commands::ModelsByAncestryLabel(args) => {
            print_json(&catalog.prs_models_by_ancestry_label(&args.raw)?)
        }
        Commands::Populations => print_json(&catalog.ancestry_populations()?),
        Commands::AncestryLabel(args) => {
            let broad_ancestry = catalog.broad_ancestry_label(&args.raw)?;
            print_json(&serde_json::json!({
                "raw": args.raw,
                "broadAncestry": broad_ancestry,
            }))
        }
        Commands::Init | Commands::Import(_) | Commands::Web(_) => {
            anyhow::bail!("command does not query the catalog")
        }
    }
}

fn resolve_db_path(flag: Option<PathBuf>, config: &CatalogConfig) -> PathBuf {
    flag.unwrap_or_else(|| config.db_path.clone())
}

fn open_catalog(db_path: &Path) -> Result<PrsCatalog> {
    PrsCatalog::open(db_path)
        .with_context(|| format!("failed to open catalog at {}", db_path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests;
