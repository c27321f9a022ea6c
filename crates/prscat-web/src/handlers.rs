use axum::{
    Json,
    extract::{Path, Query, RawQuery, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use prscat_core::AncestryIdsParam;

use crate::WebState;
use crate::dto::{
    BroadLabelQuery, BroadLabelResponse, PrsModelsByAncestryLabelRequest,
    PrsModelsByAncestryQuery, PrsModelsByTraitsRequest, TraitCategoriesResponse,
    TraitsByCategoryResponse,
};
use crate::error::{catalog_error_response, validation_response};

const ANCESTRY_IDS_KEY: &str = "broadAncestryIds";

#[instrument(skip(state))]
pub async fn trait_categories(
    State(state): State<WebState>,
    RawQuery(query): RawQuery,
) -> Response {
    let ancestry = ancestry_ids_param(query.as_deref());
    match state.catalog.trait_categories(&ancestry) {
        Ok(categories) => {
            (StatusCode::OK, Json(TraitCategoriesResponse { categories })).into_response()
        }
        Err(err) => catalog_error_response(err, "trait_categories.list", None),
    }
}

#[instrument(skip(state))]
pub async fn traits_by_category(
    State(state): State<WebState>,
    Path(raw_category_id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let Some(category_id) = parse_path_id(&raw_category_id) else {
        return validation_response(
            format!("category id must be an integer: {raw_category_id}"),
            "traits.by_category",
        );
    };
    let ancestry = ancestry_ids_param(query.as_deref());
    match state.catalog.traits_by_category(category_id, &ancestry) {
        Ok(traits) => {
            (StatusCode::OK, Json(TraitsByCategoryResponse { traits })).into_response()
        }
        Err(err) => catalog_error_response(err, "traits.by_category", Some(category_id)),
    }
}

#[instrument(skip(state))]
pub async fn trait_labels_by_category(
    State(state): State<WebState>,
    Path(raw_category_id): Path<String>,
) -> Response {
    let Some(category_id) = parse_path_id(&raw_category_id) else {
        return validation_response(
            format!("category id must be an integer: {raw_category_id}"),
            "trait_categories.trait_labels",
        );
    };
    match state.catalog.trait_labels_by_category(category_id) {
        Ok(labels) => (StatusCode::OK, Json(labels)).into_response(),
        Err(err) => {
            catalog_error_response(err, "trait_categories.trait_labels", Some(category_id))
        }
    }
}

#[instrument(skip(state))]
pub async fn trait_details(
    State(state): State<WebState>,
    Path(raw_trait_id): Path<String>,
) -> Response {
    let Some(trait_id) = parse_path_id(&raw_trait_id) else {
        return validation_response(
            format!("trait id must be an integer: {raw_trait_id}"),
            "traits.details",
        );
    };
    match state.catalog.trait_details(trait_id) {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(err) => catalog_error_response(err, "traits.details", None),
    }
}

#[instrument(skip(state))]
pub async fn traits_with_efo_id(State(state): State<WebState>) -> Response {
    match state.catalog.traits_with_efo_id() {
        Ok(traits) => (StatusCode::OK, Json(traits)).into_response(),
        Err(err) => catalog_error_response(err, "traits.efo", None),
    }
}

#[instrument(skip(state, payload))]
pub async fn prs_models_by_traits(
    State(state): State<WebState>,
    payload: Result<Json<PrsModelsByTraitsRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            return validation_response(
                format!("traitIds must be a non-empty array of integers: {rejection}"),
                "prs_models.by_traits",
            );
        }
    };
    match state.catalog.prs_models_by_traits(&request.trait_ids) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => catalog_error_response(err, "prs_models.by_traits", None),
    }
}

#[instrument(skip(state))]
pub async fn prs_models_by_ancestry_id(
    State(state): State<WebState>,
    Query(query): Query<PrsModelsByAncestryQuery>,
) -> Response {
    let Some(ancestry_id) = query.broad_ancestry_id.as_deref().and_then(parse_path_id) else {
        return validation_response(
            "broadAncestryId must be a valid integer",
            "prs_models.by_ancestry",
        );
    };
    match state.catalog.prs_models_by_ancestry_id(ancestry_id) {
        Ok(models) => (StatusCode::OK, Json(models)).into_response(),
        Err(err) => catalog_error_response(err, "prs_models.by_ancestry", None),
    }
}

#[instrument(skip(state, payload))]
pub async fn prs_models_by_ancestry_label(
    State(state): State<WebState>,
    payload: Result<Json<PrsModelsByAncestryLabelRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            return validation_response(
                format!("ancestryLabel must be a string: {rejection}"),
                "prs_models.by_ancestry_label",
            );
        }
    };
    match state.catalog.prs_models_by_ancestry_label(&request.ancestry_label) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => catalog_error_response(err, "prs_models.by_ancestry_label", None),
    }
}

#[instrument(skip(state))]
pub async fn ancestry_populations(State(state): State<WebState>) -> Response {
    match state.catalog.ancestry_populations() {
        Ok(populations) => (StatusCode::OK, Json(populations)).into_response(),
        Err(err) => catalog_error_response(err, "ancestry_populations.list", None),
    }
}

#[instrument(skip(state))]
pub async fn broad_ancestry_label(
    State(state): State<WebState>,
    Query(query): Query<BroadLabelQuery>,
) -> Response {
    match state.catalog.broad_ancestry_label(&query.raw) {
        Ok(broad_ancestry) => (
            StatusCode::OK,
            Json(BroadLabelResponse {
                raw: query.raw,
                broad_ancestry,
            }),
        )
            .into_response(),
        Err(err) => catalog_error_response(err, "ancestry_populations.broad_label", None),
    }
}

/// Collects every `broadAncestryIds` value from the raw query string, so both
/// `?broadAncestryIds=1,2` and `?broadAncestryIds=1&broadAncestryIds=2` work.
pub(crate) fn ancestry_ids_param(query: Option<&str>) -> AncestryIdsParam {
    let values = query
        .map(|raw| {
            url::form_urlencoded::parse(raw.as_bytes())
                .filter(|(key, _)| key == ANCESTRY_IDS_KEY)
                .map(|(_, value)| value.into_owned())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    AncestryIdsParam::from_values(values)
}

fn parse_path_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
