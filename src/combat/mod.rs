//! Combat: attack validation and simultaneous damage.

pub mod resolver;

pub use resolver::CombatResolver;
