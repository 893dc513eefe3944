// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::error::SearchError;
use crate::models::query::{GeoPoint, QuerySpec, RequestParams};
use crate::models::search::{FacetMap, HotelDoc, PageResult, SuggestionQuery};
use crate::models::version::VersionResponse;
use crate::services::hotel::HotelService;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::OpenApi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `HOTEL_SEARCH_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("HOTEL_SEARCH_VERSION");

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub hotel_service: Arc<HotelService>,
    /// Index name reported by `/version`
    pub index: String,
}

#[derive(OpenApi)]
#[openapi(components(schemas(
    RequestParams,
    GeoPoint,
    HotelDoc,
    PageResult,
    FacetMap,
    SuggestionQuery,
    VersionResponse
)))]
pub struct HotelApiDoc;

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

pub async fn version_handler(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "hotel-search".to_string(),
        version: VERSION.to_string(),
        index: state.index.clone(),
    })
}

/// POST /hotel/list - One page of hotels matching the request.
pub async fn list_handler(
    State(state): State<AppState>,
    payload: Result<Json<RequestParams>, JsonRejection>,
) -> Result<Json<PageResult>, SearchError> {
    let Json(payload) = payload?;
    let spec = QuerySpec::try_from(payload)?;
    state.hotel_service.search(&spec).await.map(Json)
}

/// POST /hotel/filters - Facet values for the filter panel, keyed by label.
pub async fn filters_handler(
    State(state): State<AppState>,
    payload: Result<Json<RequestParams>, JsonRejection>,
) -> Result<Json<BTreeMap<String, Vec<String>>>, SearchError> {
    let Json(payload) = payload?;
    let spec = QuerySpec::try_from(payload)?;
    let facets = state.hotel_service.filters(&spec).await?;
    Ok(Json(facets.labelled()))
}

/// GET /hotel/suggestion?key=... - Autocomplete for the search box.
pub async fn suggestion_handler(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<Vec<String>>, SearchError> {
    state.hotel_service.suggestion(&query.key).await.map(Json)
}

pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(HotelApiDoc::openapi())
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the Axum application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/version", get(version_handler))
        .route("/hotel/list", post(list_handler))
        .route("/hotel/filters", post(filters_handler))
        .route("/hotel/suggestion", get(suggestion_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .with_state(state)
}

