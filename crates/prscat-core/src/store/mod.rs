use std::path::Path;
#[cfg(unix)]
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::error::{CatalogError, Result};
use crate::models::{
    AncestryPopulation, AncestryScopedPrsModel, CategoryWithTraits, EfoTrait, PrsModel,
    PrsModelWithAncestries, TraitDetails,
};

mod ancestry;
mod categories;
mod import;
mod lookup;
mod schema;

#[cfg(test)]
mod tests;

/// Read access to the relational catalog.
///
/// Missing rows are reported as `None` or an empty list; `Err` is reserved for
/// failures of the store itself.
pub trait CatalogStore: Send + Sync {
    /// One category with its traits and each trait's PRS model links.
    fn fetch_category_with_traits(&self, category_id: i64) -> Result<Option<CategoryWithTraits>>;

    /// Every category with its traits and links, ordered by category id.
    fn fetch_categories_with_traits(&self) -> Result<Vec<CategoryWithTraits>>;

    /// Ids of models developed on any of `ancestry_ids`.
    fn prs_model_ids_developed_on(&self, ancestry_ids: &[i64]) -> Result<Vec<i64>>;

    /// Ids of models evaluated on a sample drawn from any of `ancestry_ids`.
    fn prs_model_ids_evaluated_on(&self, ancestry_ids: &[i64]) -> Result<Vec<i64>>;

    fn fetch_trait_details(&self, trait_id: i64) -> Result<Option<TraitDetails>>;

    fn trait_labels_by_category(&self, category_id: i64) -> Result<Vec<String>>;

    fn prs_models_by_traits(&self, trait_ids: &[i64]) -> Result<Vec<PrsModel>>;

    fn prs_models_by_ancestry_id(&self, ancestry_id: i64) -> Result<Vec<AncestryScopedPrsModel>>;

    fn prs_models_by_ancestry_label(&self, label: &str) -> Result<Vec<PrsModelWithAncestries>>;

    fn traits_with_efo_id(&self) -> Result<Vec<EfoTrait>>;

    fn list_ancestry_populations(&self) -> Result<Vec<AncestryPopulation>>;
}

#[derive(Clone)]
pub struct SqliteCatalogStore {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for SqliteCatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteCatalogStore").finish_non_exhaustive()
    }
}

impl SqliteCatalogStore {
    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| CatalogError::mutex_poisoned("sqlite"))?;
        f(&conn)
    }

    fn with_tx<T>(&self, f: impl FnOnce(&rusqlite::Transaction<'_>) -> Result<T>) -> Result<T> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| CatalogError::mutex_poisoned("sqlite"))?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        drop(conn);
        Ok(value)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.migrate()?;
        #[cfg(unix)]
        harden_sqlite_permissions(path)?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.migrate()?;
        Ok(store)
    }

    pub fn migrate(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute_batch(schema::CATALOG_SCHEMA)?;
            Ok(())
        })
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn fetch_category_with_traits(&self, category_id: i64) -> Result<Option<CategoryWithTraits>> {
        self.with_conn(|conn| {
            let mut categories = categories::load_categories(conn, Some(category_id))?;
            Ok(categories.pop())
        })
    }

    fn fetch_categories_with_traits(&self) -> Result<Vec<CategoryWithTraits>> {
        self.with_conn(|conn| categories::load_categories(conn, None))
    }

    fn prs_model_ids_developed_on(&self, ancestry_ids: &[i64]) -> Result<Vec<i64>> {
        self.with_conn(|conn| ancestry::developed_on(conn, ancestry_ids))
    }

    fn prs_model_ids_evaluated_on(&self, ancestry_ids: &[i64]) -> Result<Vec<i64>> {
        self.with_conn(|conn| ancestry::evaluated_on(conn, ancestry_ids))
    }

    fn fetch_trait_details(&self, trait_id: i64) -> Result<Option<TraitDetails>> {
        self.with_conn(|conn| lookup::trait_details(conn, trait_id))
    }

    fn trait_labels_by_category(&self, category_id: i64) -> Result<Vec<String>> {
        self.with_conn(|conn| lookup::trait_labels_by_category(conn, category_id))
    }

    fn prs_models_by_traits(&self, trait_ids: &[i64]) -> Result<Vec<PrsModel>> {
        self.with_conn(|conn| lookup::prs_models_by_traits(conn, trait_ids))
    }

    fn prs_models_by_ancestry_id(&self, ancestry_id: i64) -> Result<Vec<AncestryScopedPrsModel>> {
        self.with_conn(|conn| ancestry::models_by_ancestry_id(conn, ancestry_id))
    }

    fn prs_models_by_ancestry_label(&self, label: &str) -> Result<Vec<PrsModelWithAncestries>> {
        self.with_conn(|conn| ancestry::models_by_ancestry_label(conn, label))
    }

    fn traits_with_efo_id(&self) -> Result<Vec<EfoTrait>> {
        self.with_conn(lookup::traits_with_efo_id)
    }

    fn list_ancestry_populations(&self) -> Result<Vec<AncestryPopulation>> {
        self.with_conn(ancestry::list_populations)
    }
}

/// Upper bound on ids bound into one `IN (...)` query. Longer id lists are
/// queried in chunks and merged, staying below SQLite's variable limit.
pub(crate) const MAX_BOUND_IDS: usize = 500;

/// `?1, ?2, ...` for an `IN (...)` clause over `count` bound values.
pub(crate) fn in_placeholders(count: usize) -> String {
    (1..=count)
        .map(|idx| format!("?{idx}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(unix)]
fn harden_sqlite_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut targets = vec![path.to_path_buf()];
    for suffix in ["-wal", "-shm"] {
        let mut os = path.as_os_str().to_os_string();
        os.push(suffix);
        targets.push(PathBuf::from(os));
    }
    for target in targets {
        if target.exists() {
            std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o600))?;
        }
    }
    Ok(())
}
