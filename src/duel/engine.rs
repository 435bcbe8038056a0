//! The duel engine: composition root and public entry point.
//!
//! `DuelEngine` owns one duel: the catalog, rules, state, and RNG. The
//! human drives it through `play_card`, `attack_face`, `attack_unit`,
//! and `pass_turn`; the last runs the entire scripted CPU turn and hands
//! control back. Observers read through `snapshot`.
//!
//! Terminal behavior: once the duel is `Finished`, every mutating call
//! is rejected with `IllegalState`.

use serde::{Deserialize, Serialize};

use crate::cards::{BoardUnit, CardCatalog, CardId, CardType, UnitId};
use crate::combat::CombatResolver;
use crate::core::{DuelError, DuelResult, DuelRng, DuelRules, Side};
use crate::effects::EffectResolver;

use super::action::DuelAction;
use super::cpu::{run_cpu_turn, CpuStep};
use super::snapshot::DuelSnapshot;
use super::state::{DuelState, Phase};

/// Everything a resumed duel needs, minus the catalog (static data the
/// caller re-supplies).
#[derive(Serialize, Deserialize)]
struct DuelCheckpoint {
    rules: DuelRules,
    state: DuelState,
    rng: DuelRng,
}

/// One running duel.
///
/// ## Example
///
/// ```
/// use duelforge::cards::{CardCatalog, CardDefinition, CardId, CardType};
/// use duelforge::core::DuelRules;
/// use duelforge::duel::DuelEngine;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     CardDefinition::new(CardId::new(1), "Raider", CardType::Unit, 1).with_stats(2, 1),
/// );
///
/// let deck = vec![CardId::new(1); 20];
/// let mut engine =
///     DuelEngine::start(&deck, &deck, DuelRules::new(), catalog, 42).unwrap();
///
/// engine.play_card(0).unwrap();
/// let steps = engine.pass_turn().unwrap();
/// assert!(!steps.is_empty());
/// ```
#[derive(Debug)]
pub struct DuelEngine {
    catalog: CardCatalog,
    rules: DuelRules,
    state: DuelState,
    rng: DuelRng,
}

impl DuelEngine {
    /// Start a duel: validate both decks, shuffle them, deal opening
    /// hands, and enter `PlayerMain` at turn 1.
    ///
    /// Deck legality (size limits, copy limits) is the deck builder's
    /// concern; the engine only requires that every identifier resolves.
    pub fn start(
        player_deck: &[CardId],
        cpu_deck: &[CardId],
        rules: DuelRules,
        catalog: CardCatalog,
        seed: u64,
    ) -> DuelResult<Self> {
        catalog.validate_deck(player_deck)?;
        catalog.validate_deck(cpu_deck)?;

        let mut state = DuelState::new(&rules);
        let mut rng = DuelRng::new(seed);

        for (side, deck) in [(Side::Player, player_deck), (Side::Cpu, cpu_deck)] {
            let mut library = deck.to_vec();
            rng.shuffle(&mut library);
            state.zones.set_library(side, library);

            let drawn = state.zones.draw_cards(side, rules.starting_hand_size).len();
            state.record(side, DuelAction::Draw { count: drawn });
        }

        Ok(Self {
            catalog,
            rules,
            state,
            rng,
        })
    }

    /// Play the card at `hand_index` from the human's hand.
    ///
    /// Returns the created unit's ID for board-entering card types.
    pub fn play_card(&mut self, hand_index: usize) -> DuelResult<Option<UnitId>> {
        self.ensure_player_main()?;
        play_from_hand(&mut self.state, &self.catalog, Side::Player, hand_index)
    }

    /// Attack the CPU's face with one of the human's units.
    ///
    /// Returns the damage dealt. The duel may finish as a result.
    pub fn attack_face(&mut self, attacker: UnitId) -> DuelResult<i32> {
        self.ensure_player_main()?;
        let damage = CombatResolver::attack_face(&mut self.state, Side::Player, attacker)?;
        self.state.update_outcome();
        Ok(damage)
    }

    /// Attack a CPU unit with one of the human's units.
    pub fn attack_unit(&mut self, attacker: UnitId, defender: UnitId) -> DuelResult<()> {
        self.ensure_player_main()?;
        CombatResolver::attack_unit(&mut self.state, Side::Player, attacker, defender)
    }

    /// End the human's turn and run the scripted CPU turn.
    ///
    /// Returns the ordered CPU step list for presentation replay. On
    /// return the duel is back in `PlayerMain` at the next turn, or
    /// `Finished`.
    pub fn pass_turn(&mut self) -> DuelResult<Vec<CpuStep>> {
        self.ensure_player_main()?;

        self.state.record(Side::Player, DuelAction::PassTurn);
        self.state.phase = Phase::CpuTurn;

        Ok(run_cpu_turn(&mut self.state, &self.catalog, &self.rules))
    }

    /// Capture a read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DuelSnapshot {
        DuelSnapshot::capture(&self.state)
    }

    /// The duel state (read-only).
    #[must_use]
    pub fn state(&self) -> &DuelState {
        &self.state
    }

    /// The rules this duel runs under.
    #[must_use]
    pub fn rules(&self) -> &DuelRules {
        &self.rules
    }

    /// The card catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Serialize the full duel (rules, state, RNG position) to bytes.
    pub fn checkpoint(&self) -> DuelResult<Vec<u8>> {
        let checkpoint = DuelCheckpoint {
            rules: self.rules.clone(),
            state: self.state.clone(),
            rng: self.rng.clone(),
        };
        bincode::serialize(&checkpoint).map_err(|e| DuelError::Checkpoint(e.to_string()))
    }

    /// Restore a duel from checkpoint bytes and a catalog.
    ///
    /// Every card identifier in the restored zones must resolve against
    /// the supplied catalog.
    pub fn resume(bytes: &[u8], catalog: CardCatalog) -> DuelResult<Self> {
        let checkpoint: DuelCheckpoint =
            bincode::deserialize(bytes).map_err(|e| DuelError::Checkpoint(e.to_string()))?;

        for side in Side::both() {
            let zones = checkpoint.state.zones.side(side);
            catalog.validate_deck(zones.library())?;
            catalog.validate_deck(zones.hand())?;
            catalog.validate_deck(zones.graveyard())?;
            let board: Vec<CardId> = zones.board().iter().map(|u| u.card).collect();
            catalog.validate_deck(&board)?;
        }

        Ok(Self {
            catalog,
            rules: checkpoint.rules,
            state: checkpoint.state,
            rng: checkpoint.rng,
        })
    }

    fn ensure_player_main(&self) -> DuelResult<()> {
        match self.state.phase {
            Phase::PlayerMain => Ok(()),
            Phase::CpuTurn => Err(DuelError::illegal_state("The CPU turn is running")),
            Phase::Finished => Err(DuelError::illegal_state("The duel is finished")),
        }
    }
}

/// Play the card at `index` from `side`'s hand against the state.
///
/// Shared by the human path and the CPU play step. Order matters: the
/// spend is validated before the hand mutates, so a rejected play leaves
/// every zone untouched.
pub(crate) fn play_from_hand(
    state: &mut DuelState,
    catalog: &CardCatalog,
    side: Side,
    index: usize,
) -> DuelResult<Option<UnitId>> {
    let card = *state
        .zones
        .side(side)
        .hand()
        .get(index)
        .ok_or_else(|| DuelError::illegal_target(format!("No card at hand index {index}")))?;

    // The deck was validated at duel start; a miss here is a defect.
    let def = catalog.get_unchecked(card).clone();

    state.resources.spend(side, def.cost)?;
    state.zones.remove_from_hand(side, index);

    let unit = if def.card_type.enters_board() {
        let id = state.alloc_unit_id();
        state.zones.add_unit(BoardUnit::summon(id, side, &def));
        Some(id)
    } else {
        state.zones.send_to_graveyard(side, card);
        None
    };

    if def.card_type == CardType::Land {
        state.resources.gain_max_and_current(side, 1);
    }

    state.record(side, DuelAction::PlayCard { card, unit });

    if def.card_type.triggers_abilities() {
        EffectResolver::resolve(state, side, &def.abilities, unit);
    }

    state.update_outcome();
    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog.register(
            CardDefinition::new(CardId::new(1), "Raider", CardType::Unit, 1).with_stats(2, 1),
        );
        catalog.register(
            CardDefinition::new(CardId::new(2), "Fire Bolt", CardType::Spell, 1)
                .with_text("Deal 3 Damage to opponent."),
        );
        catalog.register(CardDefinition::new(CardId::new(3), "Plains", CardType::Land, 0));
        catalog
    }

    fn deck(id: u32) -> Vec<CardId> {
        vec![CardId::new(id); 20]
    }

    fn start(seed: u64) -> DuelEngine {
        DuelEngine::start(&deck(1), &deck(1), DuelRules::new(), catalog(), seed).unwrap()
    }

    #[test]
    fn test_start_deals_opening_hands() {
        let engine = start(42);
        let snapshot = engine.snapshot();

        for view in [&snapshot.player, &snapshot.cpu] {
            assert_eq!(view.hand.len(), 5);
            assert_eq!(view.library_count, 15);
            assert_eq!(view.health, 20);
            assert!(view.board.is_empty());
            assert!(view.graveyard.is_empty());
        }
        assert_eq!(snapshot.turn_number, 1);
        assert_eq!(snapshot.phase, Phase::PlayerMain);
    }

    #[test]
    fn test_start_rejects_unknown_card() {
        let err = DuelEngine::start(
            &[CardId::new(1), CardId::new(99)],
            &deck(1),
            DuelRules::new(),
            catalog(),
            42,
        )
        .unwrap_err();

        assert_eq!(err, DuelError::UnknownCard(CardId::new(99)));
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let a = start(7);
        let b = start(7);
        assert_eq!(a.snapshot(), b.snapshot());

        let c = start(8);
        assert_ne!(a.snapshot().player.hand, c.snapshot().player.hand);
    }

    #[test]
    fn test_play_unit_spends_and_places() {
        let mut engine = start(42);

        let unit = engine.play_card(0).unwrap().unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.player.hand.len(), 4);
        assert_eq!(snapshot.player.board.len(), 1);
        assert_eq!(snapshot.player.board[0].id, unit);
        assert!(snapshot.player.board[0].summoning_sick);
        assert_eq!(snapshot.player.resource.current, 0);
    }

    #[test]
    fn test_insufficient_resource_leaves_state_unchanged() {
        let mut engine = start(42);
        engine.play_card(0).unwrap(); // spends the single starting mana

        let before = engine.snapshot();
        let err = engine.play_card(0).unwrap_err();

        assert_eq!(err, DuelError::InsufficientResource { cost: 1, available: 0 });
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_spell_goes_to_graveyard_and_damages() {
        let mut engine =
            DuelEngine::start(&deck(2), &deck(1), DuelRules::new(), catalog(), 42).unwrap();

        let unit = engine.play_card(0).unwrap();

        assert!(unit.is_none());
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.player.graveyard, vec![CardId::new(2)]);
        assert!(snapshot.player.board.is_empty());
        assert_eq!(snapshot.cpu.health, 17);
    }

    #[test]
    fn test_land_grows_the_ramp() {
        let mut engine =
            DuelEngine::start(&deck(3), &deck(1), DuelRules::new(), catalog(), 42).unwrap();

        engine.play_card(0).unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.player.resource.maximum, 2);
        assert_eq!(snapshot.player.resource.current, 2);
        // Lands enter the board but trigger nothing.
        assert_eq!(snapshot.player.board.len(), 1);
    }

    #[test]
    fn test_out_of_range_hand_index() {
        let mut engine = start(42);
        let err = engine.play_card(9).unwrap_err();
        assert!(matches!(err, DuelError::IllegalTarget(_)));
    }

    #[test]
    fn test_pass_turn_advances() {
        let mut engine = start(42);

        let steps = engine.pass_turn().unwrap();

        assert_eq!(steps[0], CpuStep::Ready);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.phase, Phase::PlayerMain);
        assert_eq!(snapshot.turn_number, 2);
        // The human drew back up on hand-back.
        assert_eq!(snapshot.player.hand.len(), 6);
        assert_eq!(snapshot.player.resource.maximum, 2);
    }

    #[test]
    fn test_finished_duel_rejects_mutations() {
        let mut engine = start(42);
        // Passive player: CPU Raiders grind the human down.
        while !engine.state().is_finished() {
            engine.pass_turn().unwrap_or_default();
            if engine.state().turn_number > 60 {
                break;
            }
        }
        assert!(engine.state().is_finished());

        assert!(matches!(engine.play_card(0), Err(DuelError::IllegalState(_))));
        assert!(matches!(engine.pass_turn(), Err(DuelError::IllegalState(_))));
        assert!(matches!(
            engine.attack_face(UnitId::new(0)),
            Err(DuelError::IllegalState(_))
        ));
    }

    #[test]
    fn test_checkpoint_round_trip() {
        let mut engine = start(42);
        engine.play_card(0).unwrap();
        engine.pass_turn().unwrap();

        let bytes = engine.checkpoint().unwrap();
        let resumed = DuelEngine::resume(&bytes, catalog()).unwrap();

        assert_eq!(engine.snapshot(), resumed.snapshot());
        assert_eq!(engine.state().log(), resumed.state().log());
    }

    #[test]
    fn test_resume_rejects_garbage() {
        let err = DuelEngine::resume(&[1, 2, 3], catalog()).unwrap_err();
        assert!(matches!(err, DuelError::Checkpoint(_)));
    }

    #[test]
    fn test_resume_validates_catalog() {
        let engine = start(42);
        let bytes = engine.checkpoint().unwrap();

        let err = DuelEngine::resume(&bytes, CardCatalog::new()).unwrap_err();
        assert!(matches!(err, DuelError::UnknownCard(_)));
    }
}
