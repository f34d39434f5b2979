//! Listing snapshot loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kindbite_types::FoodListing;

/// Load a listing snapshot from a JSON file in the upstream camelCase form.
pub fn load(path: &Path) -> Result<Vec<FoodListing>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading listings file {}", path.display()))?;
    let listings: Vec<FoodListing> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing listings file {}", path.display()))?;
    tracing::debug!(count = listings.len(), "loaded listing snapshot");
    Ok(listings)
}
