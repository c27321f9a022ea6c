use std::path::PathBuf;

mod env;

pub const DB_PATH_ENV: &str = "PRSCAT_DB_PATH";
pub const WEB_HOST_ENV: &str = "PRSCAT_WEB_HOST";
pub const WEB_PORT_ENV: &str = "PRSCAT_WEB_PORT";
pub const LOG_ENV: &str = "PRSCAT_LOG";

pub const DEFAULT_DB_PATH: &str = "prscat.sqlite3";
pub const DEFAULT_WEB_HOST: &str = "127.0.0.1";
pub const DEFAULT_WEB_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "prscat=info";

/// Runtime settings read from the process environment. Command-line flags
/// override these field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub db_path: PathBuf,
    pub web_host: String,
    pub web_port: u16,
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            web_host: DEFAULT_WEB_HOST.to_string(),
            web_port: DEFAULT_WEB_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env::read_non_empty_env)
    }

    /// Builds the config from a variable lookup that yields trimmed,
    /// non-empty values.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let web_port = lookup(WEB_PORT_ENV)
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(defaults.web_port);
        Self {
            db_path: lookup(DB_PATH_ENV).map_or(defaults.db_path, PathBuf::from),
            web_host: lookup(WEB_HOST_ENV).unwrap_or(defaults.web_host),
            web_port,
            log_filter: lookup(LOG_ENV).unwrap_or(defaults.log_filter),
        }
    }
}
