//! Abilities: the closed directive vocabulary parsed from card text, and
//! the resolver that applies them to the duel state.

pub mod ability;
pub mod resolver;

pub use ability::{
    parse_rules_text, Ability, AbilityList, DEFAULT_DAMAGE, DEFAULT_DRAW, DEFAULT_HEAL,
};
pub use resolver::EffectResolver;
