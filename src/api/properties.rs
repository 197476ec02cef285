use super::error::ApiError;
use super::AppState;
use crate::filters::types::{property_type_options, BEDROOM_OPTIONS, PRICE_RANGES};
use crate::filters::{FormOption, PropertyFilters, SearchForm};
use crate::models::Property;
use crate::validation;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/properties", get(list))
        .route("/properties/featured", get(featured))
        .route("/properties/search", get(search_form).post(search))
        .route("/properties/{id}", get(by_id))
        .route("/search-options", get(options))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Property>>, ApiError> {
    let properties = state
        .storage
        .properties()
        .await
        .map_err(ApiError::internal("Failed to fetch properties"))?;
    Ok(Json(properties))
}

async fn featured(State(state): State<AppState>) -> Result<Json<Vec<Property>>, ApiError> {
    let properties = state
        .storage
        .featured_properties()
        .await
        .map_err(ApiError::internal("Failed to fetch featured properties"))?;
    Ok(Json(properties))
}

async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, ApiError> {
    let id: i64 = id.parse().map_err(|_| ApiError::BadRequest("Invalid property ID"))?;

    state
        .storage
        .property(id)
        .await
        .map_err(ApiError::internal("Failed to fetch property"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Property not found"))
}

/// JSON search. Answers 400 with field detail when a filter has the wrong
/// type, a price bound is out of range, or `propertyType` is not one of the
/// known types. An unknown type is rejected rather than matching nothing.
async fn search(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<Property>>, ApiError> {
    const INVALID: &str = "Invalid search filters";

    let Json(body) = body.map_err(ApiError::malformed(INVALID))?;
    let filters: PropertyFilters = validation::decode(body).map_err(ApiError::validation(INVALID))?;

    run_search(&state, &filters).await
}

/// Plain form submission: raw selector tokens in the query string.
async fn search_form(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
) -> Result<Json<Vec<Property>>, ApiError> {
    run_search(&state, &form.to_filters()).await
}

async fn run_search(
    state: &AppState,
    filters: &PropertyFilters,
) -> Result<Json<Vec<Property>>, ApiError> {
    let properties = state
        .storage
        .search_properties(filters)
        .await
        .map_err(ApiError::internal("Failed to search properties"))?;
    Ok(Json(properties))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOptions {
    property_types: Vec<FormOption>,
    price_ranges: &'static [FormOption],
    bedrooms: &'static [FormOption],
}

async fn options() -> Json<SearchOptions> {
    Json(SearchOptions {
        property_types: property_type_options().collect(),
        price_ranges: &PRICE_RANGES,
        bedrooms: &BEDROOM_OPTIONS,
    })
}
