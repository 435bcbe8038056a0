//! Resource economy: per-side pools under one of two accrual modes.

pub mod tracker;

pub use tracker::{ResourcePool, ResourceTracker};
