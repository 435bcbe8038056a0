//! The scripted CPU turn.
//!
//! Triggered by the human's pass, the whole CPU turn runs synchronously
//! as one atomic sequence and returns its ordered step list. The
//! presentation layer replays the steps with whatever cosmetic delays it
//! likes; the engine never sleeps.
//!
//! The script is a pure face-rush heuristic: untap, refill, draw, every
//! ready unit attacks the human's face, then one card play. Win
//! detection runs after every health mutation, and a lethal result
//! aborts the remainder of the script immediately.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId, UnitId};
use crate::core::{DuelRules, Side};

use super::action::DuelAction;
use super::engine::play_from_hand;
use super::state::{DuelState, Phase};

/// One step of the scripted CPU turn, in execution order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuStep {
    /// CPU units untapped and shed summoning sickness.
    Ready,

    /// CPU resources refilled to the shown values.
    TurnStart { current: u32, maximum: u32 },

    /// CPU drew this many cards (may be short of `cards_per_turn`).
    Draw { count: usize },

    /// A CPU unit hit the human's face.
    AttackFace { attacker: UnitId, damage: i32 },

    /// The CPU played a card (`unit` set when it entered the board).
    PlayCard { card: CardId, unit: Option<UnitId> },

    /// A side hit 0 health; the script stopped here.
    Lethal { winner: Side },

    /// Control returned to the human at the given turn number.
    HandBack { turn: u32 },
}

/// Run the entire CPU turn against `state`, returning the step list.
///
/// The caller has already validated the phase; on entry the state is in
/// `CpuTurn`. On exit it is either `PlayerMain` (next turn) or
/// `Finished`.
pub fn run_cpu_turn(
    state: &mut DuelState,
    catalog: &CardCatalog,
    rules: &DuelRules,
) -> Vec<CpuStep> {
    let mut steps = Vec::new();

    // Untap, refill, draw.
    steps.push(CpuStep::Ready);
    if !begin_turn(state, rules, Side::Cpu, &mut steps) {
        return steps;
    }

    // Attack step: every ready unit rushes the face, in play order.
    // The attacker list is snapshotted up front; units the play step
    // would later add never attack this turn.
    for attacker in state.attackers(Side::Cpu) {
        let damage = match state.zones.side(Side::Cpu).unit(attacker) {
            Some(unit) => unit.attack,
            None => continue,
        };
        state.damage(Side::Player, damage);
        if let Some(unit) = state.zones.side_mut(Side::Cpu).unit_mut(attacker) {
            unit.tapped = true;
        }
        state.record(Side::Cpu, DuelAction::AttackFace { attacker, damage });
        steps.push(CpuStep::AttackFace { attacker, damage });

        if state.update_outcome() {
            steps.push(CpuStep::Lethal {
                winner: state.winner().unwrap_or(Side::Cpu),
            });
            return steps;
        }
    }

    // Play step: the first affordable card in hand order, if any.
    if let Some(index) = first_affordable(state, catalog) {
        let card = state.zones.side(Side::Cpu).hand()[index];
        if let Ok(unit) = play_from_hand(state, catalog, Side::Cpu, index) {
            steps.push(CpuStep::PlayCard { card, unit });
        }
        if state.is_finished() {
            steps.push(CpuStep::Lethal {
                winner: state.winner().unwrap_or(Side::Cpu),
            });
            return steps;
        }
    }

    // Hand control back to the human.
    state.turn_number += 1;
    state.phase = Phase::PlayerMain;
    if !begin_turn(state, rules, Side::Player, &mut steps) {
        return steps;
    }
    steps.push(CpuStep::HandBack {
        turn: state.turn_number,
    });

    steps
}

/// Start-of-turn routine for either side: untap the board, refill
/// resources, draw. Returns false when a deck-out loss ended the duel.
fn begin_turn(
    state: &mut DuelState,
    rules: &DuelRules,
    side: Side,
    steps: &mut Vec<CpuStep>,
) -> bool {
    for unit in state.zones.side_mut(side).board_mut() {
        unit.ready();
    }

    state.resources.start_turn(side);
    state.record(side, DuelAction::TurnStart);
    if side == Side::Cpu {
        let pool = state.resources.pool(side);
        steps.push(CpuStep::TurnStart {
            current: pool.current,
            maximum: pool.maximum,
        });
    }

    let drawn = state.zones.draw_cards(side, rules.cards_per_turn).len();
    state.record(side, DuelAction::Draw { count: drawn });
    if side == Side::Cpu {
        steps.push(CpuStep::Draw { count: drawn });
    }

    if rules.deck_out_loss && drawn < rules.cards_per_turn {
        state.finish(side.opponent());
        steps.push(CpuStep::Lethal {
            winner: side.opponent(),
        });
        return false;
    }

    true
}

/// Index of the first card in the CPU's hand it can pay for.
fn first_affordable(state: &DuelState, catalog: &CardCatalog) -> Option<usize> {
    let available = state.resources.pool(Side::Cpu).current;
    state
        .zones
        .side(Side::Cpu)
        .hand()
        .iter()
        .position(|card| catalog.get_unchecked(*card).cost <= available)
}
