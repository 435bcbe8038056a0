//! Resource accrual and spend validation.
//!
//! Each side has a current/maximum pool governed by one of two economy
//! modes. The tracker owns the invariant
//! `0 <= current <= maximum <= cap` for both sides at all times.

use serde::{Deserialize, Serialize};

use crate::core::{DuelError, DuelResult, DuelRules, ResourceMode, Side, SideMap};

/// One side's resource pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    /// Resource available to spend this turn.
    pub current: u32,
    /// Pool size restored at the start of each turn.
    pub maximum: u32,
}

/// Tracks both sides' resource pools.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTracker {
    mode: ResourceMode,
    cap: u32,
    pools: SideMap<ResourcePool>,
}

impl ResourceTracker {
    /// Create the tracker in its duel-start state.
    ///
    /// ManaRamp: `current = maximum = starting_resource`.
    /// FixedEnergy: `current = maximum = max_resource`.
    #[must_use]
    pub fn new(rules: &DuelRules) -> Self {
        let initial = match rules.resource_mode {
            ResourceMode::ManaRamp => rules.starting_resource.min(rules.max_resource),
            ResourceMode::FixedEnergy => rules.max_resource,
        };

        Self {
            mode: rules.resource_mode,
            cap: rules.max_resource,
            pools: SideMap::with_value(ResourcePool {
                current: initial,
                maximum: initial,
            }),
        }
    }

    /// Get a side's pool.
    #[must_use]
    pub fn pool(&self, side: Side) -> ResourcePool {
        self.pools[side]
    }

    /// Start-of-turn accrual.
    ///
    /// ManaRamp: grow the maximum by one (capped), then refill.
    /// FixedEnergy: maximum stays at the cap, refill.
    pub fn start_turn(&mut self, side: Side) {
        let pool = &mut self.pools[side];
        match self.mode {
            ResourceMode::ManaRamp => {
                pool.maximum = (pool.maximum + 1).min(self.cap);
            }
            ResourceMode::FixedEnergy => {
                pool.maximum = self.cap;
            }
        }
        pool.current = pool.maximum;
    }

    /// Spend from a side's current pool.
    ///
    /// Fails with `InsufficientResource` when `amount` exceeds the
    /// current value; the pool is unchanged on failure.
    pub fn spend(&mut self, side: Side, amount: u32) -> DuelResult<()> {
        let pool = &mut self.pools[side];
        if amount > pool.current {
            return Err(DuelError::InsufficientResource {
                cost: amount,
                available: pool.current,
            });
        }
        pool.current -= amount;
        Ok(())
    }

    /// Permanently raise the maximum and top up current by the same
    /// amount, both capped. Used by LAND plays under ManaRamp; a no-op
    /// under FixedEnergy.
    pub fn gain_max_and_current(&mut self, side: Side, amount: u32) {
        if self.mode != ResourceMode::ManaRamp {
            return;
        }
        let pool = &mut self.pools[side];
        pool.maximum = (pool.maximum + amount).min(self.cap);
        pool.current = (pool.current + amount).min(pool.maximum);
    }
}
