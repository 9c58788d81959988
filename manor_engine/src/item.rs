//! Item module
//!
//! Items are immutable once created; they only ever move into an [`Inventory`](crate::Inventory).
use serde::{Deserialize, Serialize};

/// A collectible thing the player can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: String,
    name: String,
    description: String,
    points: u32,
}
impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>, points: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            points,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// True if `key` matches this item's id or display name, ignoring case.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.id.to_lowercase() == key || self.name.to_lowercase() == key
    }
}
