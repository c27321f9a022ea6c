use serde::{Deserialize, Serialize};

/// Cross-reference ontology ids of a trait. At most one is expected to be set,
/// but the catalog does not enforce that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyRefs {
    #[serde(default)]
    pub efo_id: Option<String>,
    #[serde(default)]
    pub mondo_id: Option<String>,
    #[serde(default)]
    pub hpo_id: Option<String>,
    #[serde(default)]
    pub orpha_id: Option<String>,
}

impl OntologyRefs {
    /// First non-empty id in EFO, MONDO, HPO, ORPHA order.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        [&self.efo_id, &self.mondo_id, &self.hpo_id, &self.orpha_id]
            .into_iter()
            .filter_map(Option::as_deref)
            .find(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDetails {
    pub id: i64,
    pub label: String,
    pub description: Option<String>,
    #[serde(rename = "ontologyUrl")]
    pub ontology_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrsModel {
    pub id: i64,
    pub name: String,
    #[serde(rename = "numberOfSNP")]
    pub number_of_snp: Option<i64>,
    pub pgsc_id: Option<String>,
    #[serde(rename = "pgscURL")]
    pub pgsc_url: Option<String>,
    pub publication_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryPopulation {
    pub id: i64,
    pub label: String,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryRef {
    pub id: i64,
    pub label: String,
}

/// Share of a model's development sample drawn from one ancestry population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AncestryShare {
    pub percentage: Option<f64>,
    pub label: String,
    pub symbol: Option<String>,
}

/// A model developed on one requested ancestry, carrying only that ancestry's share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AncestryScopedPrsModel {
    pub id: i64,
    pub name: String,
    pub pgsc_id: Option<String>,
    #[serde(rename = "pgscURL")]
    pub pgsc_url: Option<String>,
    pub broad_ancestry_categories: Vec<AncestryShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrsModelWithAncestries {
    #[serde(flatten)]
    pub model: PrsModel,
    pub broad_ancestry_categories: Vec<AncestryRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfoTrait {
    pub id: i64,
    pub efo_id: String,
    pub category_ids: Vec<i64>,
}
