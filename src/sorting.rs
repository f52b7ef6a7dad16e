//! Listing Sort
//!
//! Ordering of marketplace listings by price or date.

use std::cmp::Ordering;

use crate::models::{ListingKeys, SortMode};

/// Ascending comparison that places unparsable (NaN) keys last.
fn ascending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Descending comparison; NaN keys still go last.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => ascending(b, a),
        _ => ascending(a, b),
    }
}

/// Compare two listings for the given mode
pub fn compare(mode: SortMode, a: &ListingKeys, b: &ListingKeys) -> Ordering {
    match mode {
        SortMode::PriceLow => ascending(a.price, b.price),
        SortMode::PriceHigh => descending(a.price, b.price),
        SortMode::Newest => descending(a.date, b.date),
    }
}

/// Stable sort of `(keys, payload)` pairs; equal keys keep their order.
pub fn sort_listings<T>(listings: &mut [(ListingKeys, T)], mode: SortMode) {
    listings.sort_by(|(a, _), (b, _)| compare(mode, a, b));
}
