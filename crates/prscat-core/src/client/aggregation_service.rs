use std::time::Instant;

use serde_json::json;
use uuid::Uuid;

use crate::aggregation;
use crate::error::Result;
use crate::models::{TraitCategorySummary, TraitSummary};
use crate::params::AncestryIdsParam;

use super::PrsCatalog;

impl PrsCatalog {
    /// Trait summaries of one category, counted against the ancestry filter.
    pub fn traits_by_category(
        &self,
        category_id: i64,
        ancestry: &AncestryIdsParam,
    ) -> Result<Vec<TraitSummary>> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let ancestry_ids = ancestry.normalize();
        let output = aggregation::traits_by_category(self.store(), category_id, &ancestry_ids);
        self.finish_request(
            &request_id,
            "traits.by_category",
            started,
            json!({
                "category_id": category_id,
                "ancestry_ids": ancestry_ids,
            }),
            output,
            |traits| json!({ "trait_count": traits.len() }),
        )
    }

    /// Every category with its distinct PRS model ids.
    pub fn trait_categories(
        &self,
        ancestry: &AncestryIdsParam,
    ) -> Result<Vec<TraitCategorySummary>> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let ancestry_ids = ancestry.normalize();
        let output = aggregation::categories_with_counts(self.store(), &ancestry_ids);
        self.finish_request(
            &request_id,
            "trait_categories.list",
            started,
            json!({ "ancestry_ids": ancestry_ids }),
            output,
            |categories| json!({ "category_count": categories.len() }),
        )
    }
}
