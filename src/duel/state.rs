//! Duel state: the single mutable value every component operates on.
//!
//! `DuelState` owns both sides' zones, resources, and health, plus the
//! turn counter, phase, winner, and the append-only action log. All
//! mutation goes through explicitly scoped methods; there is no ambient
//! or global state, and each duel instance is fully independent.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::UnitId;
use crate::core::{DuelRules, Side, SideMap};
use crate::resources::ResourceTracker;
use crate::zones::ZoneManager;

use super::action::{ActionRecord, DuelAction};

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The human may play cards, attack, and end the turn.
    PlayerMain,
    /// The scripted CPU sequence is running (never observable between
    /// engine calls; the script is atomic).
    CpuTurn,
    /// A winner has been decided; no further mutations are accepted.
    Finished,
}

/// Complete state of one duel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelState {
    /// Both sides' zones.
    pub zones: ZoneManager,

    /// Both sides' resource pools.
    pub resources: ResourceTracker,

    /// Per-side health, floored at 0.
    health: SideMap<i32>,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Current phase.
    pub phase: Phase,

    /// Winner, once decided.
    winner: Option<Side>,

    /// Next unit instance ID to allocate.
    next_unit_id: u32,

    /// Monotonic sequence counter for the action log.
    sequence: u32,

    /// Append-only action log.
    log: Vector<ActionRecord>,
}

impl DuelState {
    /// Create the duel-start state (empty zones; the engine seeds them).
    #[must_use]
    pub fn new(rules: &DuelRules) -> Self {
        Self {
            zones: ZoneManager::new(),
            resources: ResourceTracker::new(rules),
            health: SideMap::with_value(rules.initial_health),
            turn_number: 1,
            phase: Phase::PlayerMain,
            winner: None,
            next_unit_id: 0,
            sequence: 0,
            log: Vector::new(),
        }
    }

    /// A side's current health.
    #[must_use]
    pub fn health(&self, side: Side) -> i32 {
        self.health[side]
    }

    /// Increase a side's health (no upper cap).
    pub fn heal(&mut self, side: Side, amount: i32) {
        self.health[side] += amount;
    }

    /// Reduce a side's health, floored at 0. Returns the new value.
    pub fn damage(&mut self, side: Side, amount: i32) -> i32 {
        self.health[side] = (self.health[side] - amount).max(0);
        self.health[side]
    }

    /// Whether the duel has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Transition to `Finished` with the given winner.
    ///
    /// Idempotent: once a winner is recorded, later calls are ignored, so
    /// the first lethal mutation in a multi-step sequence decides.
    pub fn finish(&mut self, winner: Side) {
        if self.winner.is_none() {
            self.winner = Some(winner);
            self.phase = Phase::Finished;
            self.record(winner, DuelAction::Finished { winner });
        }
    }

    /// Check both healths and finish the duel if either hit 0.
    ///
    /// Returns true when the duel is (now) finished. Called after every
    /// health-mutating operation.
    pub fn update_outcome(&mut self) -> bool {
        if self.winner.is_some() {
            return true;
        }
        for side in Side::both() {
            if self.health[side] <= 0 {
                self.finish(side.opponent());
                return true;
            }
        }
        false
    }

    /// Allocate a fresh unit instance ID.
    pub fn alloc_unit_id(&mut self) -> UnitId {
        let id = UnitId::new(self.next_unit_id);
        self.next_unit_id += 1;
        id
    }

    /// Append an action to the log.
    pub fn record(&mut self, side: Side, action: DuelAction) {
        let record = ActionRecord {
            side,
            action,
            turn: self.turn_number,
            sequence: self.sequence,
        };
        self.sequence += 1;
        self.log.push_back(record);
    }

    /// The append-only action log.
    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    /// Unit IDs on a side's board that may currently attack, in play
    /// order. Snapshotted by the CPU attack step before it mutates.
    #[must_use]
    pub fn attackers(&self, side: Side) -> Vec<UnitId> {
        self.zones
            .side(side)
            .board()
            .iter()
            .filter(|u| u.can_attack())
            .map(|u| u.id)
            .collect()
    }
}
