mod price;

pub use price::Price;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

/// Kind of residence a listing offers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Villa,
    Apartment,
    Penthouse,
    Mansion,
    Loft,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown property type: {0:?}")]
pub struct UnknownPropertyType(String);

impl PropertyType {
    /// Every type, in the order the search form lists them.
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Villa,
        PropertyType::Apartment,
        PropertyType::Penthouse,
        PropertyType::Mansion,
        PropertyType::Loft,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PropertyType::Villa => "villa",
            PropertyType::Apartment => "apartment",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Mansion => "mansion",
            PropertyType::Loft => "loft",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::Apartment => "Apartment",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Mansion => "Mansion",
            PropertyType::Loft => "Loft",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPropertyType(s.to_string()))
    }
}

/// A listed property. Never mutated once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Exact decimal text, see [`Price`]
    pub price: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// `None` when the stored price text is not a valid decimal.
    pub fn parsed_price(&self) -> Option<Price> {
        self.price.parse().ok()
    }
}

/// Insert shape for a property; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl NewProperty {
    pub(crate) fn into_property(self, id: i64, created_at: DateTime<Utc>) -> Property {
        Property {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            location: self.location,
            city: self.city,
            state: self.state,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            sqft: self.sqft,
            images: self.images,
            features: self.features,
            is_available: self.is_available,
            is_featured: self.is_featured,
            created_at,
        }
    }
}

/// Client quote shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl NewTestimonial {
    pub(crate) fn into_testimonial(self, id: i64, created_at: DateTime<Utc>) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            role: self.role,
            content: self.content,
            rating: self.rating,
            avatar: self.avatar,
            is_active: self.is_active,
            created_at,
        }
    }
}

/// Contact request submitted from the site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub property_interest: Option<String>,
    pub message: String,
    pub property_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Inquiry as posted by the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    #[serde(default)]
    pub property_interest: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[serde(default)]
    pub property_id: Option<i64>,
}

impl NewInquiry {
    pub(crate) fn into_inquiry(self, id: i64, created_at: DateTime<Utc>) -> Inquiry {
        Inquiry {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            property_interest: self.property_interest,
            message: self.message,
            property_id: self.property_id,
            created_at,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_rating() -> u8 {
    5
}
