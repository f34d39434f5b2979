//! Food listing data as published by the listing service.

use serde::{Deserialize, Serialize};

/// A surplus food listing.
///
/// The engine consumes listings read-only; the upstream service publishes
/// them in camelCase, so the serde form follows that wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodListing {
    pub name: String,
    pub restaurant: String,
    pub category: String,
    /// Provider type tag, e.g. "restaurant" or "bakery".
    #[serde(default)]
    pub provider: String,
    pub rating: f64,
    /// Price after discount; zero means the item is free.
    pub discounted_price: f64,
}

impl FoodListing {
    /// Create a listing with an empty provider tag.
    pub fn new(
        name: impl Into<String>,
        restaurant: impl Into<String>,
        category: impl Into<String>,
        rating: f64,
        discounted_price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            restaurant: restaurant.into(),
            category: category.into(),
            provider: String::new(),
            rating,
            discounted_price,
        }
    }

    /// Set the provider type tag.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Whether the listing costs nothing.
    pub fn is_free(&self) -> bool {
        self.discounted_price == 0.0
    }
}
