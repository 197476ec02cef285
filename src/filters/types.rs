use crate::models::{Price, PropertyType};
use serde::{Deserialize, Serialize};

/// Search constraints shared by the search form and the evaluator.
/// Every field is optional; `None` leaves that dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilters {
    /// Case-insensitive substring of the listing's location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    /// Inclusive lower price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Price>,
    /// Inclusive upper price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bedrooms: Option<i64>,
}

impl PropertyFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A selectable token in the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PRICE_RANGES: [FormOption; 4] = [
    option("1000000-2000000", "$1M - $2M"),
    option("2000000-5000000", "$2M - $5M"),
    option("5000000-10000000", "$5M - $10M"),
    option("10000000-", "$10M+"),
];

pub const BEDROOM_OPTIONS: [FormOption; 5] = [
    option("1", "1+ Bedrooms"),
    option("2", "2+ Bedrooms"),
    option("3", "3+ Bedrooms"),
    option("4", "4+ Bedrooms"),
    option("5", "5+ Bedrooms"),
];

const fn option(value: &'static str, label: &'static str) -> FormOption {
    FormOption { value, label }
}

pub fn property_type_options() -> impl Iterator<Item = FormOption> {
    PropertyType::ALL
        .into_iter()
        .map(|t| option(t.as_str(), t.label()))
}
