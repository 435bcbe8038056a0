//! # duelforge
//!
//! A turn-based card duel engine: one human player against a scripted
//! CPU opponent.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Core**: Randomness is consumed only for deck
//!    shuffling at duel start, from a seeded ChaCha8 stream. Everything
//!    after setup is a pure function of the action sequence.
//!
//! 2. **Configuration Over Convention**: Worlds configure a duel via
//!    `DuelRules` (health, economy mode, draw rate, hand size) instead
//!    of modifying the engine.
//!
//! 3. **Rejected, Never Corrupted**: Illegal actions return errors and
//!    leave state untouched. The duel state machine has no unrecoverable
//!    runtime condition; invariant violations panic as defects.
//!
//! ## Architecture
//!
//! - **Synchronous Engine**: No callbacks, no timers. The CPU turn runs
//!   atomically and returns its step list; presentation pacing is the
//!   renderer's concern.
//!
//! - **Parsed-Once Abilities**: Card rules text is interpreted into a
//!   closed directive vocabulary when the definition is built, never at
//!   resolution time.
//!
//! - **Checkpointable**: The full duel (including RNG position) round-
//!   trips through `bincode` for persistence of in-progress games.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, rules, errors
//! - `cards`: Card definitions, the catalog, board unit instances
//! - `effects`: The ability vocabulary, text parsing, and resolution
//! - `zones`: Library/hand/graveyard/board movement primitives
//! - `resources`: Mana-ramp and fixed-energy economies
//! - `combat`: Face and unit attack adjudication
//! - `duel`: State, the CPU turn script, snapshots, and `DuelEngine`

pub mod cards;
pub mod combat;
pub mod core;
pub mod duel;
pub mod effects;
pub mod resources;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    DuelError, DuelResult, DuelRng, DuelRngState, DuelRules, ResourceMode, Side, SideMap,
};

pub use crate::cards::{BoardUnit, CardCatalog, CardDefinition, CardId, CardType, UnitId};

pub use crate::effects::{parse_rules_text, Ability, AbilityList, EffectResolver};

pub use crate::zones::{ZoneManager, ZoneSet};

pub use crate::resources::{ResourcePool, ResourceTracker};

pub use crate::combat::CombatResolver;

pub use crate::duel::{
    ActionRecord, CpuStep, DuelAction, DuelEngine, DuelSnapshot, DuelState, Phase, SideView,
    UnitView,
};
