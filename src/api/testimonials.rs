use super::error::ApiError;
use super::AppState;
use crate::models::Testimonial;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/testimonials", get(active))
}

async fn active(State(state): State<AppState>) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let testimonials = state
        .storage
        .active_testimonials()
        .await
        .map_err(ApiError::internal("Failed to fetch testimonials"))?;
    Ok(Json(testimonials))
}
