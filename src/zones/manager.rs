//! Zone manager for card locations and movement.
//!
//! Each side owns four zones: library (ordered, top of the deck is the
//! end of the vec), hand, graveyard, and board. The `ZoneManager` holds
//! both sides' zones and provides the movement primitives.
//!
//! Failure semantics: every primitive is a precondition-checked no-op
//! (drawing from an empty library yields fewer cards, removing an
//! out-of-range hand index returns `None`). Legality checks belong to the
//! turn controller, not here.

use serde::{Deserialize, Serialize};

use crate::cards::{BoardUnit, CardId, UnitId};
use crate::core::{Side, SideMap};

/// One side's zones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSet {
    /// Ordered library; index 0 is the bottom, the last element is the
    /// next draw.
    library: Vec<CardId>,

    /// Hand, in draw order.
    hand: Vec<CardId>,

    /// Graveyard; order is irrelevant.
    graveyard: Vec<CardId>,

    /// Units on the board, in play order.
    board: Vec<BoardUnit>,
}

impl ZoneSet {
    /// Cards remaining in the library.
    #[must_use]
    pub fn library(&self) -> &[CardId] {
        &self.library
    }

    /// Cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    /// Cards in the graveyard.
    #[must_use]
    pub fn graveyard(&self) -> &[CardId] {
        &self.graveyard
    }

    /// Units on the board.
    #[must_use]
    pub fn board(&self) -> &[BoardUnit] {
        &self.board
    }

    /// Units on the board, mutably. Used by the untap step.
    pub fn board_mut(&mut self) -> &mut [BoardUnit] {
        &mut self.board
    }

    /// Find a board unit by instance ID.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&BoardUnit> {
        self.board.iter().find(|u| u.id == id)
    }

    /// Find a board unit mutably by instance ID.
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut BoardUnit> {
        self.board.iter_mut().find(|u| u.id == id)
    }
}

/// Manages both sides' zones and all movement between them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    sides: SideMap<ZoneSet>,
}

impl ZoneManager {
    /// Create a zone manager with all zones empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sides: SideMap::with_default(),
        }
    }

    /// Get a side's zones.
    #[must_use]
    pub fn side(&self, side: Side) -> &ZoneSet {
        &self.sides[side]
    }

    /// Get a side's zones mutably.
    pub fn side_mut(&mut self, side: Side) -> &mut ZoneSet {
        &mut self.sides[side]
    }

    /// Seed a side's library.
    ///
    /// `cards` is stored bottom-to-top: the last element is drawn first.
    pub fn set_library(&mut self, side: Side, cards: Vec<CardId>) {
        self.sides[side].library = cards;
    }

    /// Move up to `count` cards from the top of the library to the hand.
    ///
    /// Returns the identifiers actually drawn; an empty library yields a
    /// short (possibly empty) draw with no error.
    pub fn draw_cards(&mut self, side: Side, count: usize) -> Vec<CardId> {
        let zones = &mut self.sides[side];
        let mut drawn = Vec::with_capacity(count.min(zones.library.len()));

        for _ in 0..count {
            match zones.library.pop() {
                Some(card) => {
                    zones.hand.push(card);
                    drawn.push(card);
                }
                None => break,
            }
        }

        drawn
    }

    /// Remove the card at `index` from a side's hand.
    ///
    /// Returns `None` (no-op) when the index is out of range.
    pub fn remove_from_hand(&mut self, side: Side, index: usize) -> Option<CardId> {
        let hand = &mut self.sides[side].hand;
        if index < hand.len() {
            Some(hand.remove(index))
        } else {
            None
        }
    }

    /// Place a unit on its owner's board.
    pub fn add_unit(&mut self, unit: BoardUnit) {
        self.sides[unit.owner].board.push(unit);
    }

    /// Remove a unit from a side's board.
    ///
    /// Returns `None` (no-op) when no unit with that ID is present.
    pub fn remove_unit(&mut self, side: Side, id: UnitId) -> Option<BoardUnit> {
        let board = &mut self.sides[side].board;
        let pos = board.iter().position(|u| u.id == id)?;
        Some(board.remove(pos))
    }

    /// Append a card identifier to a side's graveyard.
    pub fn send_to_graveyard(&mut self, side: Side, card: CardId) {
        self.sides[side].graveyard.push(card);
    }

    /// Total copies of `card` a side holds across library, hand, board
    /// instances, and graveyard. Used by the zone-conservation invariant.
    #[must_use]
    pub fn count_copies(&self, side: Side, card: CardId) -> usize {
        let zones = &self.sides[side];
        zones.library.iter().filter(|&&c| c == card).count()
            + zones.hand.iter().filter(|&&c| c == card).count()
            + zones.board.iter().filter(|u| u.card == card).count()
            + zones.graveyard.iter().filter(|&&c| c == card).count()
    }
}
