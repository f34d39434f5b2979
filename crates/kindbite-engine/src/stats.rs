//! Aggregate statistics derived from the visible food listings.

use kindbite_types::FoodListing;
use serde::Serialize;

/// Snapshot of aggregate facts about the currently visible listings.
///
/// Recomputed on demand from the listing collection; always well-formed,
/// degrading to zeros and empties when the collection is empty. Derivation
/// never mutates or reorders the input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingStats {
    /// Count of visible listings.
    pub total: usize,
    /// Count of listings with a zero discounted price.
    pub free: usize,
    /// `round(free / total * 100)`, zero when there are no listings.
    pub free_percentage: u32,
    /// First listing with the maximum rating, in original collection order.
    pub top_rated: Option<FoodListing>,
    /// Category values, deduplicated in order of first occurrence.
    pub categories: Vec<String>,
    /// Restaurant names, deduplicated in order of first occurrence.
    pub restaurants: Vec<String>,
    /// Mean rating, zero when there are no listings.
    pub avg_rating: f64,
}

impl ListingStats {
    /// Derive a snapshot from the current listing collection.
    pub fn from_listings(listings: &[FoodListing]) -> Self {
        let total = listings.len();
        let free = listings.iter().filter(|l| l.is_free()).count();
        let free_percentage = if total == 0 {
            0
        } else {
            ((free as f64 / total as f64) * 100.0).round() as u32
        };

        // Strict comparison keeps the first maximum on ties.
        let mut top: Option<&FoodListing> = None;
        for listing in listings {
            if top.map_or(true, |best| listing.rating > best.rating) {
                top = Some(listing);
            }
        }

        let mut categories = Vec::new();
        let mut restaurants = Vec::new();
        for listing in listings {
            if !categories.contains(&listing.category) {
                categories.push(listing.category.clone());
            }
            if !restaurants.contains(&listing.restaurant) {
                restaurants.push(listing.restaurant.clone());
            }
        }

        let avg_rating = if total == 0 {
            0.0
        } else {
            listings.iter().map(|l| l.rating).sum::<f64>() / total as f64
        };

        Self {
            total,
            free,
            free_percentage,
            top_rated: top.cloned(),
            categories,
            restaurants,
            avg_rating,
        }
    }

    /// Average rating rendered to one decimal. This is the only place the
    /// mean is rounded; reply templates use this form verbatim.
    pub fn avg_rating_display(&self) -> String {
        format!("{:.1}", self.avg_rating)
    }
}
