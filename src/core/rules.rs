//! Duel rule configuration.
//!
//! Worlds configure a duel at startup by providing a `DuelRules` value:
//! starting health, resource economy, draw rate, and hand size. The rules
//! are immutable for the lifetime of a duel.

use serde::{Deserialize, Serialize};

/// Resource economy mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceMode {
    /// Maximum resource grows by one each turn up to the cap, then refills
    /// (the "land/mana" economy). LAND cards permanently raise the maximum.
    ManaRamp,
    /// Maximum resource is constant at the cap and refills every turn
    /// (the "energy" economy). LAND cards have no economic effect.
    FixedEnergy,
}

/// Immutable rule set supplied at duel start.
///
/// ## Example
///
/// ```
/// use duelforge::core::{DuelRules, ResourceMode};
///
/// let rules = DuelRules::new()
///     .with_initial_health(30)
///     .with_resource_mode(ResourceMode::FixedEnergy)
///     .with_max_resource(3);
///
/// assert_eq!(rules.initial_health, 30);
/// assert_eq!(rules.max_resource, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelRules {
    /// Starting health for both sides.
    pub initial_health: i32,

    /// Resource economy mode.
    pub resource_mode: ResourceMode,

    /// Hard cap on the resource maximum.
    pub max_resource: u32,

    /// Starting resource under `ManaRamp` (ignored under `FixedEnergy`,
    /// where both values start at `max_resource`).
    pub starting_resource: u32,

    /// Cards drawn at the start of each turn.
    pub cards_per_turn: usize,

    /// Cards dealt to each hand at duel start.
    pub starting_hand_size: usize,

    /// Whether a side that must draw from an empty library loses the duel.
    /// `false` preserves the silent short-draw behavior.
    pub deck_out_loss: bool,
}

impl Default for DuelRules {
    fn default() -> Self {
        Self {
            initial_health: 20,
            resource_mode: ResourceMode::ManaRamp,
            max_resource: 10,
            starting_resource: 1,
            cards_per_turn: 1,
            starting_hand_size: 5,
            deck_out_loss: false,
        }
    }
}

impl DuelRules {
    /// Create rules with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting health.
    #[must_use]
    pub fn with_initial_health(mut self, health: i32) -> Self {
        assert!(health > 0, "Initial health must be positive");
        self.initial_health = health;
        self
    }

    /// Set the resource economy mode.
    #[must_use]
    pub fn with_resource_mode(mut self, mode: ResourceMode) -> Self {
        self.resource_mode = mode;
        self
    }

    /// Set the resource cap.
    #[must_use]
    pub fn with_max_resource(mut self, max: u32) -> Self {
        self.max_resource = max;
        self
    }

    /// Set the starting resource (ManaRamp only).
    #[must_use]
    pub fn with_starting_resource(mut self, starting: u32) -> Self {
        self.starting_resource = starting;
        self
    }

    /// Set the cards drawn per turn.
    #[must_use]
    pub fn with_cards_per_turn(mut self, count: usize) -> Self {
        self.cards_per_turn = count;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Enable or disable the deck-out loss condition.
    #[must_use]
    pub fn with_deck_out_loss(mut self, enabled: bool) -> Self {
        self.deck_out_loss = enabled;
        self
    }
}
