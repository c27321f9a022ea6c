use std::path::Path;
use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::store::{CatalogStore, SqliteCatalogStore};

mod aggregation_service;
mod lookup_service;
mod request_log_service;

/// Entry point for catalog queries. Cheap to clone; every clone shares the
/// same store.
#[derive(Clone)]
pub struct PrsCatalog {
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for PrsCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrsCatalog").finish_non_exhaustive()
    }
}

impl PrsCatalog {
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let store = SqliteCatalogStore::open(db_path)?;
        Ok(Self::with_store(Arc::new(store)))
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::open(&config.db_path)
    }

    #[must_use]
    pub fn with_store(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &dyn CatalogStore {
        self.store.as_ref()
    }
}
