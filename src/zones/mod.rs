//! Zone system for card locations.
//!
//! Every card identifier a side owns lives in exactly one of four zones:
//! library, hand, graveyard, or (as a unit instance) the board. All
//! movement between zones goes through `ZoneManager`, which preserves the
//! conservation invariant: zone transfers never duplicate or lose a card.

pub mod manager;

pub use manager::{ZoneManager, ZoneSet};
