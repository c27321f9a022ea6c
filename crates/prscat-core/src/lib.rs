// Public fallible APIs in this crate share one error contract (`CatalogError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod aggregation;
pub mod ancestry;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod store;
#[cfg(test)]
pub(crate) mod testing;

pub use client::PrsCatalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use params::AncestryIdsParam;
