//! Card system: definitions, board units, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardType`: UNIT | SPELL | ARTIFACT | LAND
//! - `CardDefinition`: Static card data with pre-parsed abilities
//! - `BoardUnit` / `UnitId`: Runtime unit state, one instance per play
//! - `CardCatalog`: Read-only definition lookup, supplied externally

pub mod catalog;
pub mod definition;
pub mod unit;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, CardType};
pub use unit::{BoardUnit, UnitId};
