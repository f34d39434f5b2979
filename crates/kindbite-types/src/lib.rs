//! Shared types for the KindBite assistant engine.

pub mod listing;
pub mod message;

pub use listing::FoodListing;
pub use message::{Message, Sender};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Unique identifier used across the workspace.
pub type Id = Uuid;

/// Instant used for ordering messages and memory entries.
pub type Timestamp = DateTime<Utc>;

/// Create a new random id.
pub fn new_id() -> Id {
    Uuid::new_v4()
}

/// Current instant.
pub fn now() -> Timestamp {
    Utc::now()
}
