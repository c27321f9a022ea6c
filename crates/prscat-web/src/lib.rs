use anyhow::{Context, Result};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tracing::info;

use prscat_core::PrsCatalog;

mod dto;
mod error;
mod handlers;
mod security;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) catalog: PrsCatalog,
}

impl WebState {
    fn new(catalog: PrsCatalog) -> Self {
        Self { catalog }
    }
}

/// Start the catalog API server and block until ctrl-c.
///
/// # Errors
/// Returns an error when the runtime cannot be created, the socket cannot be
/// bound, or the server exits with a runtime failure.
pub fn serve_web(catalog: PrsCatalog, host: &str, port: u16) -> Result<()> {
    let state = WebState::new(catalog);
    let bind_addr = format!("{host}:{port}");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build web runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind web server at {bind_addr}"))?;
        info!(addr = %listener.local_addr()?, "catalog api listening");

        axum::serve(listener, app_router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await
            .context("web server failed")
    })
}

pub(crate) fn app_router(state: WebState) -> Router {
    Router::new()
        .route("/api/trait-categories", get(handlers::trait_categories))
        .route(
            "/api/trait-categories/{category_id}/trait-labels",
            get(handlers::trait_labels_by_category),
        )
        .route(
            "/api/traits-by-category/{category_id}",
            get(handlers::traits_by_category),
        )
        .route("/api/traits/efo", get(handlers::traits_with_efo_id))
        .route("/api/traits/{trait_id}", get(handlers::trait_details))
        .route(
            "/api/prs-models/by-traits",
            post(handlers::prs_models_by_traits),
        )
        .route(
            "/api/prs-models/by-ancestry",
            get(handlers::prs_models_by_ancestry_id),
        )
        .route(
            "/api/prs-models/by-ancestry-label",
            post(handlers::prs_models_by_ancestry_label),
        )
        .route(
            "/api/ancestry-populations",
            get(handlers::ancestry_populations),
        )
        .route(
            "/api/ancestry-populations/broad-label",
            get(handlers::broad_ancestry_label),
        )
        .layer(middleware::from_fn(security::security_headers_middleware))
        .with_state(state)
}
