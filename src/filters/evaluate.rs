use super::types::PropertyFilters;
use crate::models::Property;

/// Properties that are available and satisfy every present constraint,
/// in the order `properties` yields them.
pub fn evaluate<'a, I>(properties: I, filters: &PropertyFilters) -> Vec<Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    scan(properties, |p| matches(p, filters))
}

/// Available properties flagged as featured.
pub fn evaluate_featured<'a, I>(properties: I) -> Vec<Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    scan(properties, |p| p.is_featured)
}

fn scan<'a, I, F>(properties: I, predicate: F) -> Vec<Property>
where
    I: IntoIterator<Item = &'a Property>,
    F: Fn(&Property) -> bool,
{
    properties
        .into_iter()
        .filter(|p| p.is_available && predicate(p))
        .cloned()
        .collect()
}

/// Whether `property` satisfies every constraint in `filters`.
/// Availability is not checked here.
pub fn matches(property: &Property, filters: &PropertyFilters) -> bool {
    if let Some(location) = &filters.location {
        if !property.location.to_lowercase().contains(&location.to_lowercase()) {
            return false;
        }
    }

    if let Some(kind) = filters.property_type {
        if property.property_type != kind {
            return false;
        }
    }

    if filters.min_price.is_some() || filters.max_price.is_some() {
        // an unreadable price can't satisfy a bound
        let Some(price) = property.parsed_price() else {
            return false;
        };
        if filters.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if filters.max_price.is_some_and(|max| price > max) {
            return false;
        }
    }

    let bedrooms = i64::from(property.bedrooms);
    if filters.min_bedrooms.is_some_and(|min| bedrooms < min) {
        return false;
    }
    if filters.max_bedrooms.is_some_and(|max| bedrooms > max) {
        return false;
    }

    true
}
