use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;


pub use args::{
    AncestryFilterArgs, AncestryLabelArgs, ImportArgs, ModelsByAncestryArgs, ModelsByTraitsArgs,
    TraitArgs, TraitsArgs, WebArgs,
};

#[derive(Debug, Parser)]
#[command(name = "prscat")]
#[command(about = "Polygenic risk score catalog queries", version)]
pub struct Cli {
    /// SQLite catalog file. Defaults to `PRSCAT_DB_PATH`, then `prscat.sqlite3`.
    #[arg(long)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the catalog schema.
    Init,
    /// Replace the catalog contents with a JSON snapshot.
    Import(ImportArgs),
    /// Categories with their distinct PRS model ids.
    Categories(AncestryFilterArgs),
    /// Trait summaries of one category.
    Traits(TraitsArgs),
    /// Details of one trait.
    Trait(TraitArgs),
    ModelsByTraits(ModelsByTraitsArgs),
    ModelsByAncestry(ModelsByAncestryArgs),
    /// PRS models developed on the population with this exact label.
    ModelsByAncestryLabel(AncestryLabelArgs),
    /// All ancestry populations.
    Populations,
    /// Map a free-text ancestry description to its broad category.
    AncestryLabel(AncestryLabelArgs),
    Web(WebArgs),
}
