//! Shapes returned by the nested category fetches. The aggregation engine works
//! on these directly; no counts are pre-computed by the store.

use serde::{Deserialize, Serialize};

use super::OntologyRefs;

/// One trait-to-model link record. A trait may hold several links to the same model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrsModelLink {
    pub link_id: i64,
    pub prs_model_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitWithLinks {
    pub id: i64,
    pub label: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub ontology: OntologyRefs,
    pub prs_links: Vec<PrsModelLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWithTraits {
    pub id: i64,
    pub label: String,
    pub traits: Vec<TraitWithLinks>,
}
