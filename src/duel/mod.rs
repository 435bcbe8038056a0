//! The duel layer: state, turn script, snapshots, and the engine.

pub mod action;
pub mod cpu;
pub mod engine;
pub mod snapshot;
pub mod state;

pub use action::{ActionRecord, DuelAction};
pub use cpu::CpuStep;
pub use engine::DuelEngine;
pub use snapshot::{DuelSnapshot, SideView, UnitView};
pub use state::{DuelState, Phase};
