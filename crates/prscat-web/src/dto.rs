use serde::{Deserialize, Serialize};

use prscat_core::models::{TraitCategorySummary, TraitSummary};

#[derive(Debug, Serialize)]
pub struct TraitCategoriesResponse {
    pub categories: Vec<TraitCategorySummary>,
}

#[derive(Debug, Serialize)]
pub struct TraitsByCategoryResponse {
    pub traits: Vec<TraitSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrsModelsByTraitsRequest {
    #[serde(default)]
    pub trait_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrsModelsByAncestryLabelRequest {
    #[serde(default)]
    pub ancestry_label: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrsModelsByAncestryQuery {
    pub broad_ancestry_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BroadLabelQuery {
    #[serde(default)]
    pub raw: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadLabelResponse {
    pub raw: String,
    pub broad_ancestry: &'static str,
}
