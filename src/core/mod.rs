//! Core engine types: sides, RNG, rules, errors.
//!
//! This module contains the fundamental building blocks shared by every
//! other component. Worlds configure a duel via `DuelRules` rather than
//! modifying the core.

pub mod error;
pub mod rng;
pub mod rules;
pub mod side;

pub use error::{DuelError, DuelResult};
pub use rng::{DuelRng, DuelRngState};
pub use rules::{DuelRules, ResourceMode};
pub use side::{Side, SideMap};
