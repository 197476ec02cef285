use crate::filters::{self, PropertyFilters};
use crate::models::{
    Inquiry, NewInquiry, NewProperty, NewTestimonial, Property, Testimonial,
};
use crate::storage::fixtures;
use crate::storage::traits::Storage;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Volatile store. Contents are lost when the process exits.
///
/// Records are keyed by id in ordered maps, so iteration order is creation
/// order. Counters and maps share one lock: an id is taken and its record
/// inserted in the same write section, so concurrent creates never collide.
#[derive(Debug, Default)]
pub struct MemStorage {
    inner: RwLock<Tables>,
}

#[derive(Debug)]
struct Tables {
    properties: BTreeMap<i64, Property>,
    testimonials: BTreeMap<i64, Testimonial>,
    inquiries: BTreeMap<i64, Inquiry>,
    next_property_id: i64,
    next_testimonial_id: i64,
    next_inquiry_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            properties: BTreeMap::new(),
            testimonials: BTreeMap::new(),
            inquiries: BTreeMap::new(),
            next_property_id: 1,
            next_testimonial_id: 1,
            next_inquiry_id: 1,
        }
    }
}

impl Tables {
    fn insert_property(&mut self, new: NewProperty) -> Property {
        let id = self.next_property_id;
        self.next_property_id += 1;
        let property = new.into_property(id, Utc::now());
        self.properties.insert(id, property.clone());
        property
    }

    fn insert_testimonial(&mut self, new: NewTestimonial) -> Testimonial {
        let id = self.next_testimonial_id;
        self.next_testimonial_id += 1;
        let testimonial = new.into_testimonial(id, Utc::now());
        self.testimonials.insert(id, testimonial.clone());
        testimonial
    }
}

impl MemStorage {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store loaded with the fixture portfolio and testimonials
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        for property in fixtures::properties() {
            tables.insert_property(property);
        }
        for testimonial in fixtures::testimonials() {
            tables.insert_testimonial(testimonial);
        }

        info!(
            properties = tables.properties.len(),
            testimonials = tables.testimonials.len(),
            "Seeded in-memory store"
        );

        Self {
            inner: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn properties(&self) -> Result<Vec<Property>> {
        let tables = self.inner.read().await;
        Ok(filters::evaluate(tables.properties.values(), &PropertyFilters::default()))
    }

    async fn featured_properties(&self) -> Result<Vec<Property>> {
        let tables = self.inner.read().await;
        Ok(filters::evaluate_featured(tables.properties.values()))
    }

    async fn property(&self, id: i64) -> Result<Option<Property>> {
        let tables = self.inner.read().await;
        Ok(tables.properties.get(&id).cloned())
    }

    async fn search_properties(&self, filters: &PropertyFilters) -> Result<Vec<Property>> {
        let tables = self.inner.read().await;
        let found = filters::evaluate(tables.properties.values(), filters);
        debug!(
            constrained = !filters.is_empty(),
            scanned = tables.properties.len(),
            matched = found.len(),
            "Property search"
        );
        Ok(found)
    }

    async fn create_property(&self, property: NewProperty) -> Result<Property> {
        let mut tables = self.inner.write().await;
        let property = tables.insert_property(property);
        info!(id = property.id, title = %property.title, "Created property");
        Ok(property)
    }

    async fn active_testimonials(&self) -> Result<Vec<Testimonial>> {
        let tables = self.inner.read().await;
        Ok(tables.testimonials.values().filter(|t| t.is_active).cloned().collect())
    }

    async fn create_testimonial(&self, testimonial: NewTestimonial) -> Result<Testimonial> {
        let mut tables = self.inner.write().await;
        let testimonial = tables.insert_testimonial(testimonial);
        info!(id = testimonial.id, "Created testimonial");
        Ok(testimonial)
    }

    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry> {
        let mut tables = self.inner.write().await;
        let id = tables.next_inquiry_id;
        tables.next_inquiry_id += 1;
        let inquiry = inquiry.into_inquiry(id, Utc::now());
        tables.inquiries.insert(id, inquiry.clone());
        info!(id, property_id = ?inquiry.property_id, "Recorded inquiry");
        Ok(inquiry)
    }

    async fn inquiries(&self) -> Result<Vec<Inquiry>> {
        let tables = self.inner.read().await;
        Ok(tables.inquiries.values().cloned().collect())
    }
}
