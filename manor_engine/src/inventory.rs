//! Inventory -- an ordered collection of items, unique by case-insensitive id.
use crate::Item;

use log::info;

/// Shown by [`Inventory::list_all`] when nothing has been collected.
pub const EMPTY_INVENTORY_MESSAGE: &str = "You have no keys yet!";

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}
impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `item` unless one with the same id (ignoring case) is already held.
    /// Returns whether the item was inserted.
    pub fn add(&mut self, item: Item) -> bool {
        let new_id = item.id().to_lowercase();
        if self.items.iter().any(|held| held.id().to_lowercase() == new_id) {
            info!("inventory already holds an item with id '{}'", item.id());
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the first item matching `name_or_id`. Returns the removed item, if any.
    pub fn remove(&mut self, name_or_id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.matches(name_or_id))?;
        Some(self.items.remove(index))
    }

    pub fn has(&self, name_or_id: &str) -> bool {
        self.find(name_or_id).is_some()
    }

    /// Look up an item by id or display name, ignoring case.
    pub fn find(&self, name_or_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(name_or_id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Sum of the point values of everything held.
    pub fn total_points(&self) -> u32 {
        self.items.iter().map(Item::points).sum()
    }

    /// Human-readable listing, or [`EMPTY_INVENTORY_MESSAGE`] when empty.
    pub fn list_all(&self) -> String {
        if self.items.is_empty() {
            return EMPTY_INVENTORY_MESSAGE.to_string();
        }
        let lines: Vec<String> = self
            .items
            .iter()
            .map(|item| format!("- \"{}\": {}", item.name(), item.description()))
            .collect();
        format!("Inventory:\n{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle() -> Item {
        Item::new("candle", "Tallow Candle", "Half melted.", 2)
    }

    #[test]
    fn duplicate_id_is_rejected_ignoring_case() {
        let mut inv = Inventory::new();
        assert!(inv.add(candle()));
        assert!(!inv.add(Item::new("CANDLE", "Another Candle", "Also melted.", 9)));
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.find("candle").map(Item::name), Some("Tallow Candle"));
    }

    #[test]
    fn has_matches_name_or_id() {
        let mut inv = Inventory::new();
        inv.add(candle());
        assert!(inv.has("tallow candle"));
        assert!(inv.has("Candle"));
        assert!(!inv.has("match"));
    }

    #[test]
    fn remove_takes_item_out() {
        let mut inv = Inventory::new();
        inv.add(candle());
        let removed = inv.remove("TALLOW CANDLE");
        assert_eq!(removed.as_ref().map(Item::id), Some("candle"));
        assert!(inv.is_empty());
        assert!(inv.remove("candle").is_none());
    }

    #[test]
    fn listing_has_distinct_empty_message() {
        let mut inv = Inventory::new();
        assert_eq!(inv.list_all(), EMPTY_INVENTORY_MESSAGE);
        inv.add(candle());
        inv.add(Item::new("key", "Iron Key", "Heavy.", 3));
        assert_eq!(
            inv.list_all(),
            "Inventory:\n- \"Tallow Candle\": Half melted.\n- \"Iron Key\": Heavy."
        );
        assert_eq!(inv.total_points(), 5);
    }
}
