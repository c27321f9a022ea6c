//! Trait and category roll-ups over the nested category fetch.
//!
//! The ancestry filter, when present, is resolved once before the category
//! read and reused for every membership test. Counting is by distinct PRS model
//! id, never by link record.

use std::collections::HashSet;

use crate::ancestry::{ValidPrsModels, resolve_ancestry_filter};
use crate::error::{CatalogError, Result};
use crate::models::{
    CategoryWithTraits, PrsModelLink, TraitCategorySummary, TraitSummary, TraitWithLinks,
};
use crate::store::CatalogStore;

/// Summaries for every trait of `category_id`, in fetch order. A missing
/// category yields an empty list.
pub fn traits_by_category(
    store: &dyn CatalogStore,
    category_id: i64,
    ancestry_ids: &[i64],
) -> Result<Vec<TraitSummary>> {
    let valid = resolve_ancestry_filter(store, ancestry_ids)?;
    let category = store.fetch_category_with_traits(category_id).map_err(|err| {
        CatalogError::data_access("traits_by_category", format!("category {category_id}"), err)
    })?;
    let Some(category) = category else {
        return Ok(Vec::new());
    };
    Ok(category
        .traits
        .iter()
        .map(|item| summarize_trait(item, valid.as_ref()))
        .collect())
}

/// One summary per category, in fetch order.
pub fn categories_with_counts(
    store: &dyn CatalogStore,
    ancestry_ids: &[i64],
) -> Result<Vec<TraitCategorySummary>> {
    let valid = resolve_ancestry_filter(store, ancestry_ids)?;
    let categories = store.fetch_categories_with_traits().map_err(|err| {
        CatalogError::data_access("categories_with_counts", "all categories", err)
    })?;
    Ok(categories
        .iter()
        .map(|category| summarize_category(category, valid.as_ref()))
        .collect())
}

#[must_use]
pub fn summarize_trait(item: &TraitWithLinks, valid: Option<&ValidPrsModels>) -> TraitSummary {
    TraitSummary {
        id: item.id,
        name: item.label.clone(),
        pgss: distinct_prs_model_ids(item.prs_links.iter(), valid).len(),
        description: item.description.clone(),
        url: item.url.clone(),
        onto_id: item.ontology.primary().map(ToString::to_string),
    }
}

#[must_use]
pub fn summarize_category(
    category: &CategoryWithTraits,
    valid: Option<&ValidPrsModels>,
) -> TraitCategorySummary {
    let links = category.traits.iter().flat_map(|item| item.prs_links.iter());
    let prs_model_ids = distinct_prs_model_ids(links, valid);
    TraitCategorySummary {
        id: category.id,
        name: category.label.clone(),
        pgss: prs_model_ids.len(),
        prs_model_ids,
    }
}

/// Distinct model ids in first-seen order, restricted to `valid` when given.
fn distinct_prs_model_ids<'a>(
    links: impl Iterator<Item = &'a PrsModelLink>,
    valid: Option<&ValidPrsModels>,
) -> Vec<i64> {
    let mut seen = HashSet::new();
    links
        .map(|link| link.prs_model_id)
        .filter(|id| valid.is_none_or(|valid| valid.contains(*id)))
        .filter(|id| seen.insert(*id))
        .collect()
}
