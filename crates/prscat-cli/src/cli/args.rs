use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Snapshot file (`ancestry_populations`, `prs_models`, `traits`, `categories`, ...).
    pub snapshot: PathBuf,
}

#[derive(Debug, Args)]
pub struct AncestryFilterArgs {
    /// Ancestry population ids; accepts `1,2` and repeated flags. Invalid tokens are dropped.
    #[arg(long = "ancestry", value_name = "IDS")]
    pub ancestry: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TraitsArgs {
    pub category_id: i64,
    #[command(flatten)]
    pub filter: AncestryFilterArgs,
}

#[derive(Debug, Args)]
pub struct TraitArgs {
    pub trait_id: i64,
}

#[derive(Debug, Args)]
pub struct ModelsByTraitsArgs {
    #[arg(required = true, num_args = 1..)]
    pub trait_ids: Vec<i64>,
}

#[derive(Debug, Args)]
pub struct ModelsByAncestryArgs {
    pub ancestry_id: i64,
}

#[derive(Debug, Args)]
pub struct AncestryLabelArgs {
    #[arg(allow_hyphen_values = true)]
    pub raw: String,
}

#[derive(Debug, Args)]
pub struct WebArgs {
    /// Defaults to `PRSCAT_WEB_HOST`, then `127.0.0.1`.
    #[arg(long)]
    pub host: Option<String>,
    /// Defaults to `PRSCAT_WEB_PORT`, then 8080.
    #[arg(long)]
    pub port: Option<u16>,
}
