use serde::{Deserialize, Serialize};

/// Per-trait row of a category listing. `pgss` is the number of distinct PRS
/// models linked to the trait, after the ancestry filter when one is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSummary {
    pub id: i64,
    pub name: String,
    pub pgss: usize,
    pub description: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub onto_id: Option<String>,
}

/// Per-category roll-up.
///
/// The wire field `traits` is a legacy name: it carries the distinct PRS model
/// ids of the category, in first-seen order, not trait ids. Clients depend on
/// the name, so it only changes together with an interface version bump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitCategorySummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "traits")]
    pub prs_model_ids: Vec<i64>,
    pub pgss: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrsModelLookupResult<T> {
    pub prs_models: Vec<T>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub ancestry_populations: usize,
    pub evaluation_samples: usize,
    pub prs_models: usize,
    pub traits: usize,
    pub categories: usize,
    pub trait_links: usize,
}
