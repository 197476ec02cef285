pub mod error;
mod inquiries;
mod properties;
mod testimonials;

use crate::storage::Storage;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state, built once by `main`.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

/// The full HTTP surface, mounted under `/api`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(properties::router())
        .merge(testimonials::router())
        .merge(inquiries::router())
        .route("/health", get(health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::PropertyFilters;
    use crate::models::{Inquiry, NewInquiry, NewProperty, NewTestimonial, Property, Testimonial};
    use crate::storage::MemStorage;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Arc::new(MemStorage::seeded())))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    fn titles(body: &Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn lists_available_properties() {
        let (status, body) = get(app(), "/api/properties").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["id"], 1);
        assert_eq!(body[0]["price"], "4200000");
        assert_eq!(body[0]["propertyType"], "villa");
    }

    #[tokio::test]
    async fn lists_featured_properties() {
        let (status, body) = get(app(), "/api/properties/featured").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().iter().all(|p| p["isFeatured"] == true));
    }

    #[tokio::test]
    async fn fetches_one_property() {
        let (status, body) = get(app(), "/api/properties/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Oceanfront Estate");
    }

    #[tokio::test]
    async fn missing_property_is_not_found() {
        let (status, body) = get(app(), "/api/properties/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Property not found");
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let (status, body) = get(app(), "/api/properties/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid property ID");
    }

    #[tokio::test]
    async fn search_by_type() {
        let (status, body) =
            post(app(), "/api/properties/search", json!({ "propertyType": "villa" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), ["Modern Hillside Villa", "Smart Home Paradise"]);
    }

    #[tokio::test]
    async fn search_by_location_and_price() {
        let (_, body) =
            post(app(), "/api/properties/search", json!({ "location": "malibu" })).await;
        assert_eq!(titles(&body), ["Oceanfront Estate"]);

        let (_, body) = post(
            app(),
            "/api/properties/search",
            json!({ "minPrice": 5000000, "maxPrice": 10000000 }),
        )
        .await;
        assert!(titles(&body).contains(&"Oceanfront Estate"));
        assert!(!titles(&body).contains(&"Modern Hillside Villa"));
    }

    #[tokio::test]
    async fn search_by_bedrooms() {
        let (_, body) = post(app(), "/api/properties/search", json!({ "minBedrooms": 6 })).await;
        assert_eq!(titles(&body), ["Oceanfront Estate"]);
    }

    #[tokio::test]
    async fn empty_search_matches_listing() {
        let app = app();
        let (_, all) = get(app.clone(), "/api/properties").await;
        let (status, found) = post(app, "/api/properties/search", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found, all);
    }

    #[tokio::test]
    async fn no_matches_is_an_empty_array() {
        let (status, body) =
            post(app(), "/api/properties/search", json!({ "location": "Atlantis" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn malformed_filters_are_rejected() {
        let (status, body) =
            post(app(), "/api/properties/search", json!({ "minPrice": "cheap" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid search filters");
        assert_eq!(body["errors"][0]["path"], json!(["minPrice"]));
        assert_eq!(
            body["errors"][0]["message"],
            "invalid type: string \"cheap\", expected a number"
        );
    }

    #[tokio::test]
    async fn out_of_range_price_keeps_its_field() {
        let (status, body) =
            post(app(), "/api/properties/search", json!({ "maxPrice": 1e300 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["errors"],
            json!([{ "path": ["maxPrice"], "message": "number out of range for a price" }])
        );
    }

    #[tokio::test]
    async fn unparsable_body_is_rejected() {
        let request = Request::post("/api/properties/search")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid search filters");
    }

    #[tokio::test]
    async fn form_search_uses_raw_tokens() {
        let uri = concat!(
            "/api/properties/search",
            "?location=&propertyType=all&priceRange=5000000-10000000&bedrooms=any",
        );
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            titles(&body),
            ["Sky Tower Penthouse", "Oceanfront Estate", "Glass House Modern"]
        );
    }

    #[tokio::test]
    async fn search_options_expose_catalogs() {
        let (status, body) = get(app(), "/api/search-options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["propertyTypes"].as_array().unwrap().len(), 5);
        assert_eq!(body["priceRanges"][3]["value"], "10000000-");
        assert_eq!(body["bedrooms"][0]["label"], "1+ Bedrooms");
    }

    #[tokio::test]
    async fn lists_active_testimonials() {
        let (status, body) = get(app(), "/api/testimonials").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["name"], "Sarah Johnson");
    }

    #[tokio::test]
    async fn creates_and_lists_inquiries() {
        let app = app();
        let (status, created) = post(
            app.clone(),
            "/api/inquiries",
            json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@example.com",
                "phone": "555-0100",
                "message": "I'd like a private tour.",
                "propertyId": 2
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["propertyInterest"], Value::Null);

        let (status, all) = get(app, "/api/inquiries").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all, json!([created]));
    }

    #[tokio::test]
    async fn invalid_inquiry_is_rejected() {
        let (status, body) = post(app(), "/api/inquiries", json!({ "firstName": "Jane" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid inquiry data");
        assert_eq!(body["errors"], json!([{ "path": ["lastName"], "message": "Required" }]));

        let (status, body) = post(
            app(),
            "/api/inquiries",
            json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane at example",
                "phone": "555-0100",
                "message": "Hello"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["errors"],
            json!([{ "path": ["email"], "message": "Invalid email address" }])
        );
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get(app(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    /// Store whose every call fails
    struct Broken;

    #[async_trait]
    impl Storage for Broken {
        async fn properties(&self) -> anyhow::Result<Vec<Property>> {
            anyhow::bail!("connection reset")
        }
        async fn featured_properties(&self) -> anyhow::Result<Vec<Property>> {
            anyhow::bail!("connection reset")
        }
        async fn property(&self, _id: i64) -> anyhow::Result<Option<Property>> {
            anyhow::bail!("connection reset")
        }
        async fn search_properties(
            &self,
            _filters: &PropertyFilters,
        ) -> anyhow::Result<Vec<Property>> {
            anyhow::bail!("connection reset")
        }
        async fn create_property(&self, _property: NewProperty) -> anyhow::Result<Property> {
            anyhow::bail!("connection reset")
        }
        async fn active_testimonials(&self) -> anyhow::Result<Vec<Testimonial>> {
            anyhow::bail!("connection reset")
        }
        async fn create_testimonial(
            &self,
            _testimonial: NewTestimonial,
        ) -> anyhow::Result<Testimonial> {
            anyhow::bail!("connection reset")
        }
        async fn create_inquiry(&self, _inquiry: NewInquiry) -> anyhow::Result<Inquiry> {
            anyhow::bail!("connection reset")
        }
        async fn inquiries(&self) -> anyhow::Result<Vec<Inquiry>> {
            anyhow::bail!("connection reset")
        }
    }

    #[tokio::test]
    async fn storage_failures_hide_details() {
        let app = router(AppState::new(Arc::new(Broken)));

        let (status, body) = get(app.clone(), "/api/properties").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Failed to fetch properties" }));

        let (status, body) = get(app.clone(), "/api/properties/1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to fetch property");

        let (status, body) = post(app, "/api/properties/search", json!({})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to search properties");
    }
}
