use std::path::PathBuf;

use prscat_core::CatalogConfig;

use super::resolve_db_path;

#[test]
fn db_flag_overrides_configured_path() {
    let config = CatalogConfig {
        db_path: PathBuf::from("/srv/prscat/env.sqlite3"),
        ..CatalogConfig::default()
    };
    assert_eq!(
        resolve_db_path(Some(PathBuf::from("flag.sqlite3")), &config),
        PathBuf::from("flag.sqlite3")
    );
    assert_eq!(
        resolve_db_path(None, &config),
        PathBuf::from("/srv/prscat/env.sqlite3")
    );
}
