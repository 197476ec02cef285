use super::types::PropertyFilters;
use crate::models::Price;
use serde::Deserialize;
use tracing::debug;

/// Type selector value meaning "no constraint"
pub const ALL_TYPES: &str = "all";
/// Price and bedroom selector value meaning "no constraint"
pub const ANY: &str = "any";

const RANGE_SEPARATOR: char = '-';

/// Raw state of the search form, exactly as the user left it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchForm {
    pub location: String,
    /// A property type token or [`ALL_TYPES`]
    pub property_type: String,
    /// `"min-max"`, `"min-"` or [`ANY`]
    pub price_range: String,
    /// Minimum bedroom count token or [`ANY`]
    pub bedrooms: String,
}

impl SearchForm {
    /// Turn the form into filters, keeping only what the user constrained.
    ///
    /// Tokens that do not parse are dropped rather than rejected: the
    /// selectors only ever offer fixed values, so anything else is noise.
    pub fn to_filters(&self) -> PropertyFilters {
        let mut filters = PropertyFilters::default();

        if !self.location.is_empty() {
            filters.location = Some(self.location.clone());
        }

        if is_constrained(&self.property_type, ALL_TYPES) {
            match self.property_type.parse() {
                Ok(kind) => filters.property_type = Some(kind),
                Err(e) => debug!(error = %e, "Ignoring property type selection"),
            }
        }

        if is_constrained(&self.price_range, ANY) {
            let (min, max) = parse_price_range(&self.price_range);
            filters.min_price = min;
            filters.max_price = max;
        }

        if is_constrained(&self.bedrooms, ANY) {
            filters.min_bedrooms = self.bedrooms.parse().ok();
        }

        filters
    }
}

fn is_constrained(selection: &str, sentinel: &str) -> bool {
    !selection.is_empty() && selection != sentinel
}

/// Split a `"min-max"` token into bounds. A missing or unparsable half is
/// `None`, so `"10000000-"` has no upper bound rather than an upper bound of 0.
pub fn parse_price_range(token: &str) -> (Option<Price>, Option<Price>) {
    let (min, max) = token.split_once(RANGE_SEPARATOR).unwrap_or((token, ""));
    (parse_bound(min), parse_bound(max))
}

fn parse_bound(half: &str) -> Option<Price> {
    if half.is_empty() {
        return None;
    }
    half.parse::<i64>().ok().and_then(Price::from_units)
}
