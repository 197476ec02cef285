use crate::filters::PropertyFilters;
use crate::models::{
    Inquiry, NewInquiry, NewProperty, NewTestimonial, Property, Testimonial,
};
use anyhow::Result;
use async_trait::async_trait;

/// Backing store for listings, testimonials and inquiries.
/// Handlers only ever see this trait, so another backend can replace the
/// in-memory one without touching the API layer.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Every available property
    async fn properties(&self) -> Result<Vec<Property>>;

    /// Available properties flagged as featured
    async fn featured_properties(&self) -> Result<Vec<Property>>;

    /// Direct lookup by id. `Ok(None)` when no such property exists.
    async fn property(&self, id: i64) -> Result<Option<Property>>;

    async fn search_properties(&self, filters: &PropertyFilters) -> Result<Vec<Property>>;

    async fn create_property(&self, property: NewProperty) -> Result<Property>;

    async fn active_testimonials(&self) -> Result<Vec<Testimonial>>;

    async fn create_testimonial(&self, testimonial: NewTestimonial) -> Result<Testimonial>;

    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry>;

    async fn inquiries(&self) -> Result<Vec<Inquiry>>;
}
