use std::time::Instant;

use serde_json::json;
use uuid::Uuid;

use crate::ancestry::broad_ancestry_label;
use crate::error::{CatalogError, Result};
use crate::models::{
    AncestryPopulation, AncestryScopedPrsModel, EfoTrait, PrsModel, PrsModelLookupResult,
    PrsModelWithAncestries, TraitDetails,
};

use super::PrsCatalog;

impl PrsCatalog {
    pub fn trait_details(&self, trait_id: i64) -> Result<TraitDetails> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let output = self
            .store()
            .fetch_trait_details(trait_id)
            .map_err(|err| {
                CatalogError::data_access("trait_details", format!("trait {trait_id}"), err)
            })
            .and_then(|details| {
                details.ok_or_else(|| CatalogError::NotFound(format!("trait {trait_id}")))
            });
        self.finish_request(
            &request_id,
            "traits.details",
            started,
            json!({ "trait_id": trait_id }),
            output,
            |_| json!({}),
        )
    }

    /// Labels of the traits in a category, in membership order. An unknown
    /// category yields an empty list.
    pub fn trait_labels_by_category(&self, category_id: i64) -> Result<Vec<String>> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let output = self
            .store()
            .trait_labels_by_category(category_id)
            .map_err(|err| {
                CatalogError::data_access(
                    "trait_labels_by_category",
                    format!("category {category_id}"),
                    err,
                )
            });
        self.finish_request(
            &request_id,
            "trait_categories.trait_labels",
            started,
            json!({ "category_id": category_id }),
            output,
            |labels| json!({ "label_count": labels.len() }),
        )
    }

    /// Distinct PRS models linked to any of `trait_ids`.
    pub fn prs_models_by_traits(
        &self,
        trait_ids: &[i64],
    ) -> Result<PrsModelLookupResult<PrsModel>> {
        if trait_ids.is_empty() {
            return Err(CatalogError::Validation(
                "trait ids must not be empty".to_string(),
            ));
        }
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let output = self
            .store()
            .prs_models_by_traits(trait_ids)
            .map_err(|err| {
                CatalogError::data_access(
                    "prs_models_by_traits",
                    format!("trait ids {trait_ids:?}"),
                    err,
                )
            })
            .map(|prs_models| PrsModelLookupResult {
                message: format!(
                    "found {} PRS models linked to the selected traits",
                    prs_models.len()
                ),
                prs_models,
            });
        self.finish_request(
            &request_id,
            "prs_models.by_traits",
            started,
            json!({ "trait_ids": trait_ids }),
            output,
            |result| json!({ "model_count": result.prs_models.len() }),
        )
    }

    /// Models developed on one ancestry population, each carrying that
    /// population's share.
    pub fn prs_models_by_ancestry_id(
        &self,
        ancestry_id: i64,
    ) -> Result<Vec<AncestryScopedPrsModel>> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let output = self
            .store()
            .prs_models_by_ancestry_id(ancestry_id)
            .map_err(|err| {
                CatalogError::data_access(
                    "prs_models_by_ancestry_id",
                    format!("ancestry {ancestry_id}"),
                    err,
                )
            });
        self.finish_request(
            &request_id,
            "prs_models.by_ancestry",
            started,
            json!({ "ancestry_id": ancestry_id }),
            output,
            |models| json!({ "model_count": models.len() }),
        )
    }

    /// Models developed on the population with exactly this label. Finding
    /// none is reported as `NotFound`.
    pub fn prs_models_by_ancestry_label(
        &self,
        ancestry_label: &str,
    ) -> Result<PrsModelLookupResult<PrsModelWithAncestries>> {
        let label = ancestry_label.trim();
        if label.is_empty() {
            return Err(CatalogError::Validation(
                "ancestry label must not be empty".to_string(),
            ));
        }
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let output = self
            .store()
            .prs_models_by_ancestry_label(label)
            .map_err(|err| {
                CatalogError::data_access(
                    "prs_models_by_ancestry_label",
                    format!("ancestry label {label:?}"),
                    err,
                )
            })
            .and_then(|prs_models| {
                if prs_models.is_empty() {
                    return Err(CatalogError::NotFound(format!(
                        "no PRS models for ancestry \"{label}\""
                    )));
                }
                Ok(PrsModelLookupResult {
                    message: format!(
                        "found {} PRS models for ancestry \"{label}\"",
                        prs_models.len()
                    ),
                    prs_models,
                })
            });
        self.finish_request(
            &request_id,
            "prs_models.by_ancestry_label",
            started,
            json!({ "ancestry_label": label }),
            output,
            |result| json!({ "model_count": result.prs_models.len() }),
        )
    }

    pub fn traits_with_efo_id(&self) -> Result<Vec<EfoTrait>> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let output = self
            .store()
            .traits_with_efo_id()
            .map_err(|err| CatalogError::data_access("traits_with_efo_id", "all traits", err));
        self.finish_request(
            &request_id,
            "traits.efo",
            started,
            json!({}),
            output,
            |traits| json!({ "trait_count": traits.len() }),
        )
    }

    pub fn ancestry_populations(&self) -> Result<Vec<AncestryPopulation>> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let output = self.store().list_ancestry_populations().map_err(|err| {
            CatalogError::data_access("ancestry_populations", "all populations", err)
        });
        self.finish_request(
            &request_id,
            "ancestry_populations.list",
            started,
            json!({}),
            output,
            |populations| json!({ "population_count": populations.len() }),
        )
    }

    /// Broad ancestry category for a free-text ancestry description.
    pub fn broad_ancestry_label(&self, raw: &str) -> Result<&'static str> {
        broad_ancestry_label(raw).ok_or_else(|| {
            CatalogError::NotFound(format!("no broad ancestry for \"{}\"", raw.trim()))
        })
    }
}
