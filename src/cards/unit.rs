//! Board units - runtime card state.
//!
//! `BoardUnit` represents one played card on the board. The same card may
//! be played multiple times; each play is a distinct instance with its own
//! `UnitId`, distinct from the source `CardId`.

use serde::{Deserialize, Serialize};

use crate::core::Side;

use super::definition::{CardDefinition, CardId};

/// Unique identifier for a board unit instance, allocated per play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a new unit ID.
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

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// A unit on the board.
///
/// Created when a UNIT/LAND/ARTIFACT card is played; moved to the
/// graveyard when current health drops to 0 or below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardUnit {
    /// Unique instance ID for this play.
    pub id: UnitId,

    /// Owning side.
    pub owner: Side,

    /// Source card identifier.
    pub card: CardId,

    /// Current attack.
    pub attack: i32,

    /// Current health.
    pub health: i32,

    /// Has acted this turn.
    pub tapped: bool,

    /// Played this turn; cannot attack until the owner's next untap step.
    pub summoning_sick: bool,

    /// Damage taken since the owner's last untap step (display only).
    pub pending_damage: i32,
}

impl BoardUnit {
    /// Create a unit from its source definition.
    ///
    /// The unit enters with the card's base stats and summoning sickness,
    /// unless the card grants haste.
    #[must_use]
    pub fn summon(id: UnitId, owner: Side, def: &CardDefinition) -> Self {
        Self {
            id,
            owner,
            card: def.id,
            attack: def.base_attack(),
            health: def.base_health(),
            tapped: false,
            summoning_sick: !def.has_haste(),
            pending_damage: 0,
        }
    }

    /// Whether this unit may declare an attack.
    #[must_use]
    pub fn can_attack(&self) -> bool {
        !self.tapped && !self.summoning_sick
    }

    /// Apply combat or effect damage.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        self.pending_damage += amount;
    }

    /// Whether this unit must leave the board.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Untap step: clear tapped, sickness, and the damage indicator.
    pub fn ready(&mut self) {
        self.tapped = false;
        self.summoning_sick = false;
        self.pending_damage = 0;
    }

    /// Permanently raise attack and health.
    pub fn buff(&mut self, attack: i32, health: i32) {
        self.attack += attack;
        self.health += health;
    }
}
