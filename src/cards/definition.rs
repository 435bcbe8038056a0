//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a forged card: cost,
//! type, combat stats, and the abilities parsed from its rules text. For
//! example, a "Fire Bolt" spell costing 2 with text "Deal 3 Damage" keeps
//! those values for the lifetime of the catalog.
//!
//! Instance-specific data (current health, tapped flag, zone) is stored
//! separately in `BoardUnit`.

use serde::{Deserialize, Serialize};

use crate::effects::{parse_rules_text, Ability, AbilityList};

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card (e.g., "Fire Bolt"), not a specific
/// instance in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card type.
///
/// The type determines board placement and effect triggering:
/// UNIT/ARTIFACT/LAND cards enter the board as units; SPELL cards resolve
/// and go straight to the graveyard. LAND cards never trigger effects but
/// grow the mana-ramp economy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Unit,
    Spell,
    Artifact,
    Land,
}

impl CardType {
    /// Whether playing a card of this type creates a board unit.
    #[must_use]
    pub const fn enters_board(self) -> bool {
        !matches!(self, CardType::Spell)
    }

    /// Whether this type triggers its abilities when played.
    /// LAND cards have an economic effect instead.
    #[must_use]
    pub const fn triggers_abilities(self) -> bool {
        !matches!(self, CardType::Land)
    }
}

/// Static card definition.
///
/// Rules text is parsed into the closed ability vocabulary when the
/// definition is built; resolution never re-parses the text.
///
/// ## Example
///
/// ```
/// use duelforge::cards::{CardDefinition, CardId, CardType};
/// use duelforge::effects::Ability;
///
/// let bolt = CardDefinition::new(CardId::new(1), "Fire Bolt", CardType::Spell, 2)
///     .with_text("Deal 3 Damage to opponent.");
///
/// assert_eq!(bolt.abilities.as_slice(), &[Ability::Damage { amount: 3 }]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Card type.
    pub card_type: CardType,

    /// Resource cost to play.
    pub cost: u32,

    /// Base attack (units only).
    pub attack: Option<i32>,

    /// Base health (units only).
    pub health: Option<i32>,

    /// Author-supplied rules text.
    pub rules_text: String,

    /// Abilities parsed from the rules text.
    pub abilities: AbilityList,
}

impl CardDefinition {
    /// Create a new card definition with the default "No ability." text.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            cost,
            attack: None,
            health: None,
            rules_text: "No ability.".to_string(),
            abilities: AbilityList::new(),
        }
    }

    /// Set base combat stats (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, attack: i32, health: i32) -> Self {
        self.attack = Some(attack);
        self.health = Some(health);
        self
    }

    /// Set the rules text, parsing it into abilities.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.rules_text = text.into();
        self.abilities = parse_rules_text(&self.rules_text);
        self
    }

    /// Base attack, defaulting to 0 for statless cards.
    #[must_use]
    pub fn base_attack(&self) -> i32 {
        self.attack.unwrap_or(0)
    }

    /// Base health, defaulting to 0 for statless cards.
    #[must_use]
    pub fn base_health(&self) -> i32 {
        self.health.unwrap_or(0)
    }

    /// Whether the card grants immediate readiness to its unit.
    #[must_use]
    pub fn has_haste(&self) -> bool {
        self.abilities.contains(&Ability::Haste)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_type_board_placement() {
        assert!(CardType::Unit.enters_board());
        assert!(CardType::Artifact.enters_board());
        assert!(CardType::Land.enters_board());
        assert!(!CardType::Spell.enters_board());
    }

    #[test]
    fn test_card_type_triggers() {
        assert!(CardType::Unit.triggers_abilities());
        assert!(CardType::Spell.triggers_abilities());
        assert!(CardType::Artifact.triggers_abilities());
        assert!(!CardType::Land.triggers_abilities());
    }

    #[test]
    fn test_definition_defaults() {
        let card = CardDefinition::new(CardId::new(1), "Wall", CardType::Unit, 2);

        assert_eq!(card.rules_text, "No ability.");
        assert!(card.abilities.is_empty());
        assert_eq!(card.base_attack(), 0);
        assert_eq!(card.base_health(), 0);
        assert!(!card.has_haste());
    }

    #[test]
    fn test_definition_builder() {
        let card = CardDefinition::new(CardId::new(1), "Raider", CardType::Unit, 3)
            .with_stats(3, 2)
            .with_text("Haste.");

        assert_eq!(card.cost, 3);
        assert_eq!(card.base_attack(), 3);
        assert_eq!(card.base_health(), 2);
        assert!(card.has_haste());
    }

    #[test]
    fn test_text_parsed_once_at_build() {
        let card = CardDefinition::new(CardId::new(2), "Bolt", CardType::Spell, 2)
            .with_text("Damage 4.");

        assert_eq!(card.abilities.as_slice(), &[Ability::Damage { amount: 4 }]);
    }

    #[test]
    fn test_definition_serialization() {
        let card = CardDefinition::new(CardId::new(1), "Raider", CardType::Unit, 3)
            .with_stats(3, 2)
            .with_text("Haste.");

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
