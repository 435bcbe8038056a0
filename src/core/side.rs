//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A duel is strictly two-sided: the human player and the scripted CPU.
//! `Side` replaces a general N-player identifier - every operation in the
//! engine is phrased in terms of a side and its opponent.
//!
//! ## SideMap
//!
//! Per-side data storage backed by a fixed two-element array for O(1)
//! access. Supports iteration and indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two agents in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The scripted CPU opponent.
    Cpu,
}

impl Side {
    /// Get the opposing side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }

    /// Get the raw side index (Player = 0, Cpu = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Cpu => 1,
        }
    }

    /// Iterate over both sides, player first.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::Player, Side::Cpu].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Cpu => write!(f, "CPU"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// Backed by a two-element array, one entry per side.
/// Use `SideMap::new()` to create with a factory function,
/// or `SideMap::with_value()` to initialize both entries to the same value.
///
/// ## Example
///
/// ```
/// use duelforge::core::{Side, SideMap};
///
/// let mut health: SideMap<i32> = SideMap::with_value(20);
///
/// assert_eq!(health[Side::Player], 20);
///
/// health[Side::Cpu] = 15;
/// assert_eq!(health[Side::Cpu], 15);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    ///
    /// The factory receives the `Side` for each entry.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Cpu)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new SideMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::both().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::both().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
