//! Checkpoint and resume integration tests.
//!
//! A checkpointed duel must resume to an identical state, including the
//! RNG position, so a resumed duel and the original stay in lockstep.

use duelforge::cards::{CardCatalog, CardDefinition, CardId, CardType};
use duelforge::core::{DuelError, DuelRules};
use duelforge::duel::DuelEngine;

fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    catalog.register(
        CardDefinition::new(CardId::new(1), "Raider", CardType::Unit, 1).with_stats(2, 1),
    );
    catalog.register(
        CardDefinition::new(CardId::new(2), "Fire Bolt", CardType::Spell, 1)
            .with_text("Deal 3 Damage to opponent."),
    );
    catalog
}

fn start() -> DuelEngine {
    let deck: Vec<CardId> = (0..20)
        .map(|i| CardId::new(1 + i % 2))
        .collect();
    DuelEngine::start(&deck, &deck, DuelRules::new(), catalog(), 99).unwrap()
}

#[test]
fn test_mid_duel_round_trip() {
    let mut engine = start();
    engine.play_card(0).unwrap_or_default();
    engine.pass_turn().unwrap();
    engine.play_card(0).unwrap_or_default();

    let bytes = engine.checkpoint().unwrap();
    let resumed = DuelEngine::resume(&bytes, catalog()).unwrap();

    assert_eq!(engine.snapshot(), resumed.snapshot());
    assert_eq!(engine.state().log(), resumed.state().log());
    assert_eq!(engine.state().turn_number, resumed.state().turn_number);
}

#[test]
fn test_resumed_duel_stays_in_lockstep() {
    let mut engine = start();
    engine.pass_turn().unwrap();

    let bytes = engine.checkpoint().unwrap();
    let mut resumed = DuelEngine::resume(&bytes, catalog()).unwrap();

    for _ in 0..3 {
        let a = engine.pass_turn();
        let b = resumed.pass_turn();
        assert_eq!(a.is_ok(), b.is_ok());
        assert_eq!(engine.snapshot(), resumed.snapshot());
        if engine.state().is_finished() {
            break;
        }
    }
}

#[test]
fn test_finished_duel_round_trips() {
    let mut engine = start();
    for _ in 0..60 {
        if engine.pass_turn().is_err() {
            break;
        }
    }
    assert!(engine.state().is_finished());

    let bytes = engine.checkpoint().unwrap();
    let resumed = DuelEngine::resume(&bytes, catalog()).unwrap();

    assert_eq!(resumed.state().winner(), engine.state().winner());
    assert!(matches!(
        resumed.snapshot().phase,
        duelforge::duel::Phase::Finished
    ));
}

#[test]
fn test_resume_rejects_corrupt_bytes() {
    let engine = start();
    let mut bytes = engine.checkpoint().unwrap();
    bytes.truncate(bytes.len() / 2);

    let err = DuelEngine::resume(&bytes, catalog()).unwrap_err();
    assert!(matches!(err, DuelError::Checkpoint(_)));
}

#[test]
fn test_resume_requires_matching_catalog() {
    let engine = start();
    let bytes = engine.checkpoint().unwrap();

    let mut sparse = CardCatalog::new();
    sparse.register(
        CardDefinition::new(CardId::new(1), "Raider", CardType::Unit, 1).with_stats(2, 1),
    );

    let err = DuelEngine::resume(&bytes, sparse).unwrap_err();
    assert_eq!(err, DuelError::UnknownCard(CardId::new(2)));
}
