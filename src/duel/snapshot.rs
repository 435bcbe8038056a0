//! Read-only duel views for the presentation layer.
//!
//! The engine exposes no callbacks; observers request a `DuelSnapshot`
//! after each mutating call and render from it. A snapshot is a plain
//! serializable value with no references back into the engine, so it can
//! cross any boundary (UI thread, JSON to a renderer) freely.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, UnitId};
use crate::core::Side;
use crate::resources::ResourcePool;

use super::state::{DuelState, Phase};

/// One board unit as seen by an observer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub card: CardId,
    pub attack: i32,
    pub health: i32,
    pub tapped: bool,
    pub summoning_sick: bool,
    pub pending_damage: i32,
}

/// One side of the duel as seen by an observer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideView {
    pub health: i32,
    pub resource: ResourcePool,
    pub hand: Vec<CardId>,
    pub library_count: usize,
    pub graveyard: Vec<CardId>,
    pub board: Vec<UnitView>,
}

/// Full read-only view of a duel.
///
/// Hiding the CPU's hand is a presentation decision; the snapshot
/// carries both hands and lets the renderer choose what to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelSnapshot {
    pub turn_number: u32,
    pub phase: Phase,
    pub winner: Option<Side>,
    pub player: SideView,
    pub cpu: SideView,
}

impl DuelSnapshot {
    /// Capture the current state.
    #[must_use]
    pub fn capture(state: &DuelState) -> Self {
        Self {
            turn_number: state.turn_number,
            phase: state.phase,
            winner: state.winner(),
            player: Self::side_view(state, Side::Player),
            cpu: Self::side_view(state, Side::Cpu),
        }
    }

    /// View of one side.
    #[must_use]
    pub fn side(&self, side: Side) -> &SideView {
        match side {
            Side::Player => &self.player,
            Side::Cpu => &self.cpu,
        }
    }

    fn side_view(state: &DuelState, side: Side) -> SideView {
        let zones = state.zones.side(side);
        SideView {
            health: state.health(side),
            resource: state.resources.pool(side),
            hand: zones.hand().to_vec(),
            library_count: zones.library().len(),
            graveyard: zones.graveyard().to_vec(),
            board: zones
                .board()
                .iter()
                .map(|u| UnitView {
                    id: u.id,
                    card: u.card,
                    attack: u.attack,
                    health: u.health,
                    tapped: u.tapped,
                    summoning_sick: u.summoning_sick,
                    pending_damage: u.pending_damage,
                })
                .collect(),
        }
    }
}
