use super::error::ApiError;
use super::AppState;
use crate::models::{Inquiry, NewInquiry};
use crate::validation;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

pub fn router() -> Router<AppState> {
    Router::new().route("/inquiries", get(list).post(create))
}

async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Inquiry>), ApiError> {
    const INVALID: &str = "Invalid inquiry data";

    let Json(body) = body.map_err(ApiError::malformed(INVALID))?;
    let inquiry: NewInquiry = validation::parse(body).map_err(ApiError::validation(INVALID))?;

    let created = state
        .storage
        .create_inquiry(inquiry)
        .await
        .map_err(ApiError::internal("Failed to create inquiry"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Inquiry>>, ApiError> {
    let inquiries = state
        .storage
        .inquiries()
        .await
        .map_err(ApiError::internal("Failed to fetch inquiries"))?;
    Ok(Json(inquiries))
}
