use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::store::CatalogStore;

mod mapping;

pub use mapping::{BROAD_ANCESTRY_MAPPING, broad_ancestry_label, normalize_ancestry_text};

/// PRS model ids admitted by an ancestry filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidPrsModels {
    ids: HashSet<i64>,
}

impl ValidPrsModels {
    #[must_use]
    pub fn contains(&self, prs_model_id: i64) -> bool {
        self.ids.contains(&prs_model_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<i64> for ValidPrsModels {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Resolves the filter for `ancestry_ids`.
///
/// `None` means no filter (empty input). Otherwise the result is the union of
/// models developed on and models evaluated on any requested ancestry; an empty
/// set is a real answer that admits nothing. Both reads must succeed.
pub fn resolve_ancestry_filter(
    store: &dyn CatalogStore,
    ancestry_ids: &[i64],
) -> Result<Option<ValidPrsModels>> {
    if ancestry_ids.is_empty() {
        return Ok(None);
    }
    let requested = ancestry_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    let context = format!("ancestry ids {requested:?}");

    let developed = store
        .prs_model_ids_developed_on(&requested)
        .map_err(|err| CatalogError::data_access("resolve_ancestry_filter", &context, err))?;
    let evaluated = store
        .prs_model_ids_evaluated_on(&requested)
        .map_err(|err| CatalogError::data_access("resolve_ancestry_filter", &context, err))?;

    let valid = developed
        .iter()
        .chain(evaluated.iter())
        .copied()
        .collect::<ValidPrsModels>();
    debug!(
        ancestry_ids = ?requested,
        developed = developed.len(),
        evaluated = evaluated.len(),
        valid = valid.len(),
        "resolved ancestry filter"
    );
    Ok(Some(valid))
}
