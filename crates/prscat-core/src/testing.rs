//! In-memory `CatalogStore` for unit tests, with per-read failure switches and
//! read counters.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{CatalogError, Result};
use crate::models::{
    AncestryPopulation, AncestryScopedPrsModel, CategoryWithTraits, EfoTrait, OntologyRefs,
    PrsModel, PrsModelLink, PrsModelWithAncestries, TraitDetails, TraitWithLinks,
};
use crate::store::CatalogStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailingRead {
    Categories,
    DevelopedOn,
    EvaluatedOn,
}

#[derive(Debug, Default)]
pub(crate) struct FakeCatalogStore {
    pub(crate) categories: Vec<CategoryWithTraits>,
    pub(crate) developed_on: Vec<(i64, i64)>,
    pub(crate) evaluated_on: Vec<(i64, i64)>,
    fail: Mutex<Option<FailingRead>>,
    pub(crate) category_reads: AtomicUsize,
    pub(crate) filter_reads: AtomicUsize,
}

pub(crate) fn link(link_id: i64, prs_model_id: i64) -> PrsModelLink {
    PrsModelLink {
        link_id,
        prs_model_id,
    }
}

pub(crate) fn trait_with(id: i64, label: &str, prs_model_ids: &[i64]) -> TraitWithLinks {
    TraitWithLinks {
        id,
        label: label.to_string(),
        description: Some(format!("{label} measurement")),
        url: Some(format!("http://example.com/{}", label.to_lowercase())),
        ontology: OntologyRefs::default(),
        prs_links: prs_model_ids
            .iter()
            .enumerate()
            .map(|(idx, prs_model_id)| link(id * 100 + idx as i64, *prs_model_id))
            .collect(),
    }
}

impl FakeCatalogStore {
    /// Category 1 "Body measurement": Height -> [101, 102], Weight -> [101, 103].
    /// Ancestry 1 developed model 101; ancestry 2 evaluated model 103.
    pub(crate) fn body_measurements() -> Self {
        let mut height = trait_with(1, "Height", &[101, 102]);
        height.ontology.efo_id = Some("EFO_0004339".to_string());
        let mut weight = trait_with(2, "Weight", &[101, 103]);
        weight.ontology.mondo_id = Some("MONDO_0000001".to_string());
        Self {
            categories: vec![CategoryWithTraits {
                id: 1,
                label: "Body measurement".to_string(),
                traits: vec![height, weight],
            }],
            developed_on: vec![(101, 1)],
            evaluated_on: vec![(103, 2)],
            ..Self::default()
        }
    }

    pub(crate) fn fail_on(&self, read: FailingRead) {
        if let Ok(mut guard) = self.fail.lock() {
            *guard = Some(read);
        }
    }

    fn check(&self, read: FailingRead) -> Result<()> {
        let failing = self.fail.lock().map(|guard| *guard).unwrap_or(None);
        if failing == Some(read) {
            return Err(CatalogError::Internal(format!("simulated {read:?} outage")));
        }
        Ok(())
    }

    fn models_for(pairs: &[(i64, i64)], ancestry_ids: &[i64]) -> Vec<i64> {
        let mut out = pairs
            .iter()
            .filter(|(_, ancestry_id)| ancestry_ids.contains(ancestry_id))
            .map(|(prs_model_id, _)| *prs_model_id)
            .collect::<Vec<_>>();
        out.sort_unstable();
        out.dedup();
        out
    }
}

impl CatalogStore for FakeCatalogStore {
    fn fetch_category_with_traits(&self, category_id: i64) -> Result<Option<CategoryWithTraits>> {
        self.category_reads.fetch_add(1, Ordering::SeqCst);
        self.check(FailingRead::Categories)?;
        Ok(self
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned())
    }

    fn fetch_categories_with_traits(&self) -> Result<Vec<CategoryWithTraits>> {
        self.category_reads.fetch_add(1, Ordering::SeqCst);
        self.check(FailingRead::Categories)?;
        Ok(self.categories.clone())
    }

    fn prs_model_ids_developed_on(&self, ancestry_ids: &[i64]) -> Result<Vec<i64>> {
        self.filter_reads.fetch_add(1, Ordering::SeqCst);
        self.check(FailingRead::DevelopedOn)?;
        Ok(Self::models_for(&self.developed_on, ancestry_ids))
    }

    fn prs_model_ids_evaluated_on(&self, ancestry_ids: &[i64]) -> Result<Vec<i64>> {
        self.filter_reads.fetch_add(1, Ordering::SeqCst);
        self.check(FailingRead::EvaluatedOn)?;
        Ok(Self::models_for(&self.evaluated_on, ancestry_ids))
    }

    fn fetch_trait_details(&self, trait_id: i64) -> Result<Option<TraitDetails>> {
        Ok(self
            .categories
            .iter()
            .flat_map(|category| category.traits.iter())
            .find(|item| item.id == trait_id)
            .map(|item| TraitDetails {
                id: item.id,
                label: item.label.clone(),
                description: item.description.clone(),
                ontology_url: item.url.clone(),
            }))
    }

    fn trait_labels_by_category(&self, category_id: i64) -> Result<Vec<String>> {
        Ok(self
            .categories
            .iter()
            .filter(|category| category.id == category_id)
            .flat_map(|category| category.traits.iter().map(|item| item.label.clone()))
            .collect())
    }

    fn prs_models_by_traits(&self, _trait_ids: &[i64]) -> Result<Vec<PrsModel>> {
        Ok(Vec::new())
    }

    fn prs_models_by_ancestry_id(&self, _ancestry_id: i64) -> Result<Vec<AncestryScopedPrsModel>> {
        Ok(Vec::new())
    }

    fn prs_models_by_ancestry_label(&self, _label: &str) -> Result<Vec<PrsModelWithAncestries>> {
        Ok(Vec::new())
    }

    fn traits_with_efo_id(&self) -> Result<Vec<EfoTrait>> {
        Ok(Vec::new())
    }

    fn list_ancestry_populations(&self) -> Result<Vec<AncestryPopulation>> {
        Ok(Vec::new())
    }
}
