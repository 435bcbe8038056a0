//! Combat resolution.
//!
//! Two attack shapes exist: a face attack (unit hits the opposing side's
//! health directly, no retaliation) and a unit attack (both units deal
//! their attack to each other simultaneously). An attacker taps when it
//! attacks and cannot act again until its owner's next turn start.
//!
//! Validation happens here; zone movement for the dead goes through the
//! zone manager so the graveyard stays consistent. Win detection after a
//! face attack is the caller's job.

use crate::cards::UnitId;
use crate::core::{DuelError, DuelResult, Side};
use crate::duel::{DuelAction, DuelState};

/// Resolves attack declarations against the duel state.
pub struct CombatResolver;

impl CombatResolver {
    /// Attack the opposing side directly with `attacker`.
    ///
    /// Returns the damage dealt. Fails with `IllegalTarget` when the
    /// attacker is not on `side`'s board, and `IllegalState` when it is
    /// tapped or summoning sick.
    pub fn attack_face(state: &mut DuelState, side: Side, attacker: UnitId) -> DuelResult<i32> {
        let damage = Self::ready_attacker(state, side, attacker)?;

        state.damage(side.opponent(), damage);
        if let Some(unit) = state.zones.side_mut(side).unit_mut(attacker) {
            unit.tapped = true;
        }
        state.record(side, DuelAction::AttackFace { attacker, damage });

        Ok(damage)
    }

    /// Attack an opposing unit with `attacker`.
    ///
    /// Damage is simultaneous: each unit takes the other's attack value.
    /// Units reduced to 0 health or less leave the board and their card
    /// identifiers go to their owner's graveyard. Fails with
    /// `IllegalTarget` when the defender is not on the opponent's board
    /// (including friendly-fire declarations).
    pub fn attack_unit(
        state: &mut DuelState,
        side: Side,
        attacker: UnitId,
        defender: UnitId,
    ) -> DuelResult<()> {
        let attack = Self::ready_attacker(state, side, attacker)?;

        let foe = side.opponent();
        if state.zones.side(foe).unit(defender).is_none() {
            if state.zones.side(side).unit(defender).is_some() {
                return Err(DuelError::illegal_target(format!(
                    "Unit {} is friendly and cannot be attacked",
                    defender
                )));
            }
            return Err(DuelError::illegal_target(format!(
                "No opposing unit {} to attack",
                defender
            )));
        }

        let retaliation = state
            .zones
            .side(foe)
            .unit(defender)
            .map(|u| u.attack)
            .unwrap_or(0);

        if let Some(unit) = state.zones.side_mut(side).unit_mut(attacker) {
            unit.tapped = true;
            unit.take_damage(retaliation);
        }
        if let Some(unit) = state.zones.side_mut(foe).unit_mut(defender) {
            unit.take_damage(attack);
        }

        state.record(side, DuelAction::AttackUnit { attacker, defender });

        Self::bury_if_dead(state, side, attacker);
        Self::bury_if_dead(state, foe, defender);

        Ok(())
    }

    /// Validate that `attacker` exists on `side`'s board and may attack,
    /// returning its attack value.
    fn ready_attacker(state: &DuelState, side: Side, attacker: UnitId) -> DuelResult<i32> {
        let unit = state
            .zones
            .side(side)
            .unit(attacker)
            .ok_or_else(|| DuelError::illegal_target(format!("No unit {} on the attacking board", attacker)))?;

        if unit.tapped {
            return Err(DuelError::illegal_state(format!("Unit {} is tapped", attacker)));
        }
        if unit.summoning_sick {
            return Err(DuelError::illegal_state(format!("Unit {} is summoning sick", attacker)));
        }

        Ok(unit.attack)
    }

    /// Remove a unit from the board if its health is gone and send its
    /// card to the owner's graveyard.
    fn bury_if_dead(state: &mut DuelState, side: Side, id: UnitId) {
        let dead = state
            .zones
            .side(side)
            .unit(id)
            .map(|u| u.is_dead())
            .unwrap_or(false);

        if dead {
            if let Some(unit) = state.zones.remove_unit(side, id) {
                state.zones.send_to_graveyard(side, unit.card);
            }
        }
    }
}
