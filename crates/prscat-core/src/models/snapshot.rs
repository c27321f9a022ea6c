//! JSON document used to load a catalog into the SQLite store.

use serde::{Deserialize, Serialize};

use super::OntologyRefs;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub ancestry_populations: Vec<super::AncestryPopulation>,
    #[serde(default)]
    pub evaluation_samples: Vec<SnapshotEvaluationSample>,
    #[serde(default)]
    pub prs_models: Vec<SnapshotPrsModel>,
    #[serde(default)]
    pub traits: Vec<SnapshotTrait>,
    #[serde(default)]
    pub categories: Vec<SnapshotCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotEvaluationSample {
    pub id: i64,
    pub ancestry_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotAncestryShare {
    pub ancestry_id: i64,
    #[serde(default)]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotPrsModel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub number_of_snp: Option<i64>,
    #[serde(default)]
    pub pgsc_id: Option<String>,
    #[serde(default)]
    pub pgsc_url: Option<String>,
    #[serde(default)]
    pub publication_id: Option<i64>,
    /// Development ancestries.
    #[serde(default)]
    pub developed_on: Vec<SnapshotAncestryShare>,
    /// Evaluation samples this model was validated on.
    #[serde(default)]
    pub evaluation_sample_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotTrait {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub ontology: OntologyRefs,
    /// One link record per entry; repeated ids produce repeated links.
    #[serde(default)]
    pub prs_model_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotCategory {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub trait_ids: Vec<i64>,
}
