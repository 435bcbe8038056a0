//! Effect resolution - applying abilities to duel state.
//!
//! Resolution fires when a UNIT/ARTIFACT enters the board (on-play
//! trigger, with the new unit as the source) or when a SPELL is cast
//! (no source unit). LAND cards never reach the resolver.
//!
//! All of a card's abilities apply in one resolution call, in the order
//! they were parsed. Win detection is the engine's job; the resolver only
//! mutates health, hands, and units.

use crate::cards::UnitId;
use crate::core::Side;
use crate::duel::DuelState;

use super::ability::Ability;

/// Applies a card's abilities against the duel state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a list of abilities for `caster`.
    ///
    /// `source` is the board unit created by the play, when one exists;
    /// `Buff` silently does nothing without a source (and when the source
    /// died mid-resolution). `Haste` is consumed at unit creation and is
    /// a no-op here.
    pub fn resolve(
        state: &mut DuelState,
        caster: Side,
        abilities: &[Ability],
        source: Option<UnitId>,
    ) {
        for ability in abilities {
            match *ability {
                Ability::Draw { count } => {
                    state.zones.draw_cards(caster, count);
                }
                Ability::Heal { amount } => {
                    state.heal(caster, amount);
                }
                Ability::Damage { amount } => {
                    state.damage(caster.opponent(), amount);
                }
                Ability::Buff { attack, health } => {
                    if let Some(id) = source {
                        if let Some(unit) = state.zones.side_mut(caster).unit_mut(id) {
                            unit.buff(attack, health);
                        }
                    }
                }
                Ability::Haste => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{BoardUnit, CardDefinition, CardId, CardType};
    use crate::core::DuelRules;
    use crate::effects::parse_rules_text;

    fn state_with_library(side: Side, cards: u32) -> DuelState {
        let mut state = DuelState::new(&DuelRules::new());
        let library: Vec<_> = (0..cards).map(CardId::new).collect();
        state.zones.set_library(side, library);
        state
    }

    #[test]
    fn test_draw_directive() {
        let mut state = state_with_library(Side::Player, 5);

        EffectResolver::resolve(&mut state, Side::Player, &[Ability::Draw { count: 2 }], None);

        assert_eq!(state.zones.side(Side::Player).hand().len(), 2);
        assert_eq!(state.zones.side(Side::Player).library().len(), 3);
    }

    #[test]
    fn test_draw_from_short_library_is_silent() {
        let mut state = state_with_library(Side::Player, 1);

        EffectResolver::resolve(&mut state, Side::Player, &[Ability::Draw { count: 4 }], None);

        assert_eq!(state.zones.side(Side::Player).hand().len(), 1);
    }

    #[test]
    fn test_heal_directive() {
        let mut state = DuelState::new(&DuelRules::new());
        state.damage(Side::Cpu, 5);

        EffectResolver::resolve(&mut state, Side::Cpu, &[Ability::Heal { amount: 3 }], None);

        assert_eq!(state.health(Side::Cpu), 18);
    }

    #[test]
    fn test_damage_hits_opponent_floored() {
        let mut state = DuelState::new(&DuelRules::new());

        EffectResolver::resolve(&mut state, Side::Player, &[Ability::Damage { amount: 50 }], None);

        assert_eq!(state.health(Side::Cpu), 0);
        assert_eq!(state.health(Side::Player), 20);
    }

    #[test]
    fn test_buff_with_source() {
        let mut state = DuelState::new(&DuelRules::new());
        let def = CardDefinition::new(CardId::new(1), "Raider", CardType::Unit, 1).with_stats(2, 2);
        let id = state.alloc_unit_id();
        state.zones.add_unit(BoardUnit::summon(id, Side::Player, &def));

        EffectResolver::resolve(
            &mut state,
            Side::Player,
            &[Ability::Buff { attack: 1, health: 1 }],
            Some(id),
        );

        let unit = state.zones.side(Side::Player).unit(id).unwrap();
        assert_eq!(unit.attack, 3);
        assert_eq!(unit.health, 3);
    }

    #[test]
    fn test_buff_without_source_is_noop() {
        let mut state = DuelState::new(&DuelRules::new());

        // No source unit (spell play) - nothing to buff, nothing breaks.
        EffectResolver::resolve(
            &mut state,
            Side::Player,
            &[Ability::Buff { attack: 1, health: 1 }],
            None,
        );
    }

    #[test]
    fn test_all_parsed_directives_fire() {
        let mut state = state_with_library(Side::Player, 3);
        let abilities = parse_rules_text("Heal 2, Damage 4, and draw 1 card.");

        EffectResolver::resolve(&mut state, Side::Player, &abilities, None);

        assert_eq!(state.health(Side::Player), 22);
        assert_eq!(state.health(Side::Cpu), 16);
        assert_eq!(state.zones.side(Side::Player).hand().len(), 1);
    }
}
