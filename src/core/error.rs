//! Error taxonomy for rejected duel actions.
//!
//! Every variant is a local, recoverable condition reported synchronously
//! to the caller. A rejected action never corrupts duel state and never
//! aborts an in-progress CPU script. Internal invariant violations (a
//! board unit whose source card cannot be resolved behind a validated
//! deck) are programming defects and panic instead.
//!
//! Drawing from an empty library is deliberately NOT an error: short
//! draws are silent unless the deck-out loss rule is enabled.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Result alias for fallible duel operations.
pub type DuelResult<T> = Result<T, DuelError>;

/// A rejected duel action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelError {
    /// Attempted spend exceeds the current resource pool.
    InsufficientResource {
        /// Cost of the attempted action.
        cost: u32,
        /// Resource available when the action was attempted.
        available: u32,
    },

    /// A combat or play action named an invalid target (friendly fire,
    /// an already-dead instance, an out-of-range hand index).
    IllegalTarget(String),

    /// An action was attempted outside its legal phase (acting during the
    /// CPU turn, acting after the duel finished, attacking with a tapped
    /// or summoning-sick unit).
    IllegalState(String),

    /// A deck referenced a card identifier absent from the catalog.
    /// Raised at duel start; decks are validated before any state exists.
    UnknownCard(CardId),

    /// A checkpoint byte stream could not be decoded.
    Checkpoint(String),
}

impl std::fmt::Display for DuelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuelError::InsufficientResource { cost, available } => {
                write!(f, "insufficient resource: cost {cost}, available {available}")
            }
            DuelError::IllegalTarget(reason) => write!(f, "illegal target: {reason}"),
            DuelError::IllegalState(reason) => write!(f, "illegal state: {reason}"),
            DuelError::UnknownCard(id) => write!(f, "unknown card: {id}"),
            DuelError::Checkpoint(reason) => write!(f, "invalid checkpoint: {reason}"),
        }
    }
}

impl std::error::Error for DuelError {}

impl DuelError {
    /// Shorthand for an `IllegalTarget` with a reason.
    #[must_use]
    pub fn illegal_target(reason: impl Into<String>) -> Self {
        DuelError::IllegalTarget(reason.into())
    }

    /// Shorthand for an `IllegalState` with a reason.
    #[must_use]
    pub fn illegal_state(reason: impl Into<String>) -> Self {
        DuelError::IllegalState(reason.into())
    }
}
