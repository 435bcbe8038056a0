//! Action log entries.
//!
//! Every mutation the engine performs is appended to the duel's action
//! log with its turn and sequence number. The log is the engine's
//! observability surface: the presentation layer replays it (with
//! whatever cosmetic pacing it likes) to animate what happened, and
//! tests use it to assert ordering.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, UnitId};
use crate::core::Side;

/// A single logged mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelAction {
    /// A card left the hand and resolved.
    PlayCard {
        card: CardId,
        /// The unit created, for board-entering card types.
        unit: Option<UnitId>,
    },

    /// A unit attacked the opposing side directly.
    AttackFace { attacker: UnitId, damage: i32 },

    /// A unit attacked an opposing unit.
    AttackUnit { attacker: UnitId, defender: UnitId },

    /// Cards were drawn (start of turn or a Draw directive).
    Draw { count: usize },

    /// The human ended their turn.
    PassTurn,

    /// A side began its turn (untap, resource refill).
    TurnStart,

    /// The duel ended.
    Finished { winner: Side },
}

/// A recorded action with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted (or was acted for).
    pub side: Side,

    /// The action taken.
    pub action: DuelAction,

    /// Turn number when the action happened.
    pub turn: u32,

    /// Sequence number within the duel (monotonic, for ordering).
    pub sequence: u32,
}
