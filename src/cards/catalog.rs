//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores the card definitions for a world. It is
//! supplied externally at duel start and never mutated by the engine.
//!
//! Decks are validated against the catalog before a duel begins; an
//! unresolvable identifier fails fast with `UnknownCard` rather than
//! being silently skipped during play.

use rustc_hash::FxHashMap;

use crate::core::{DuelError, DuelResult};

use super::definition::{CardDefinition, CardId};

/// Read-only lookup of card definitions.
///
/// ## Example
///
/// ```
/// use duelforge::cards::{CardCatalog, CardDefinition, CardId, CardType};
///
/// let mut catalog = CardCatalog::new();
///
/// let bolt = CardDefinition::new(CardId::new(1), "Fire Bolt", CardType::Spell, 2)
///     .with_text("Deal 3 Damage to opponent.");
///
/// catalog.register(bolt);
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Fire Bolt");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Use only for identifiers behind a validated deck; a miss here is
    /// an invariant violation, not a runtime condition.
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &CardDefinition {
        self.cards.get(&id).expect("Card not found in catalog")
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Validate that every identifier in a deck resolves.
    ///
    /// Returns the first unresolvable identifier as `UnknownCard`.
    pub fn validate_deck(&self, deck: &[CardId]) -> DuelResult<()> {
        for &id in deck {
            if !self.contains(id) {
                return Err(DuelError::UnknownCard(id));
            }
        }
        Ok(())
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}
