//! Player -- the terminal-side player's collected items and cards.
use crate::card::{CARD_TOTAL, Card};
use crate::{Inventory, Item};

use std::collections::BTreeSet;

/// Fresh for every session; nothing here outlives the process.
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub inventory: Inventory,
    cards: BTreeSet<Card>,
}
impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the item was new to the inventory.
    pub fn give_item(&mut self, item: Item) -> bool {
        self.inventory.add(item)
    }

    pub fn has_item(&self, name_or_id: &str) -> bool {
        self.inventory.has(name_or_id)
    }

    /// Adds `card` to the collection. Returns false if it was already held.
    pub fn add_card(&mut self, card: Card) -> bool {
        self.cards.insert(card)
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn has_all_cards(&self) -> bool {
        self.cards.len() >= CARD_TOTAL
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// One-line card listing, e.g. `Cards: Beetle, Rat` or `Cards: (none)`.
    pub fn cards_listing(&self) -> String {
        if self.cards.is_empty() {
            return "Cards: (none)".to_string();
        }
        let names: Vec<&str> = self.cards.iter().map(|card| card.name()).collect();
        format!("Cards: {}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_a_set() {
        let mut player = Player::new();
        assert!(player.add_card(Card::Rat));
        assert!(!player.add_card(Card::Rat));
        assert_eq!(player.card_count(), 1);
        assert!(player.has_card(Card::Rat));
        assert!(!player.has_card(Card::Snake));
    }

    #[test]
    fn card_listing_is_ordered_and_has_empty_form() {
        let mut player = Player::new();
        assert_eq!(player.cards_listing(), "Cards: (none)");
        player.add_card(Card::Snake);
        player.add_card(Card::Beetle);
        assert_eq!(player.cards_listing(), "Cards: Beetle, Snake");
    }

    #[test]
    fn all_four_cards_completes_the_set() {
        let mut player = Player::new();
        for card in Card::ALL {
            assert!(!player.has_all_cards());
            player.add_card(card);
        }
        assert!(player.has_all_cards());
    }

    #[test]
    fn items_go_through_inventory() {
        let mut player = Player::new();
        assert!(player.give_item(Item::new("note", "Greasy Note", "Smudged.", 1)));
        assert!(!player.give_item(Item::new("NOTE", "Copy", "Also smudged.", 1)));
        assert!(player.has_item("greasy note"));
        assert_eq!(player.inventory.len(), 1);
    }
}
