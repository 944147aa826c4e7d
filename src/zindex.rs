//! Z-index assignment policies.
//!
//! Every live box carries a z-index that is both its paint order and its
//! on-box label. Two policies are supported:
//!
//! - [`ZIndexPolicy::Monotonic`]: last-assigned + 1. Deterministic and
//!   unbounded.
//! - [`ZIndexPolicy::RandomProbe`]: draw uniformly from
//!   [`RANDOM_Z_MIN`]..=[`RANDOM_Z_MAX`] until an unused value comes up.
//!   Used values stay reserved after delete unless `reclaim_on_delete` is
//!   set, so a session can hand out at most 99 labels by default.

#[cfg(test)]
#[path = "zindex_test.rs"]
mod zindex_test;

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::consts::{RANDOM_Z_MAX, RANDOM_Z_MIN};
use crate::doc::BoxError;

/// Which z-index generator a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ZIndexPolicy {
    /// `next = last + 1`.
    #[default]
    Monotonic,
    /// Uniform random draw in `[1, 99]`, retried until unused.
    RandomProbe {
        /// Return a deleted box's z-index to the pool.
        #[serde(default)]
        reclaim_on_delete: bool,
    },
}

/// Stateful generator for one session.
#[derive(Debug, Clone)]
pub struct ZIndexAllocator {
    policy: ZIndexPolicy,
    last_used: i64,
    used: HashSet<i64>,
    rng: SmallRng,
}

impl ZIndexAllocator {
    /// Create an allocator. `seed` only matters for the random-probe policy.
    #[must_use]
    pub fn new(policy: ZIndexPolicy, seed: u64) -> Self {
        Self {
            policy,
            last_used: 0,
            used: HashSet::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Produce the next z-index.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::ZIndexExhausted`] when the random-probe pool is
    /// empty, or the monotonic counter would overflow.
    pub fn allocate(&mut self) -> Result<i64, BoxError> {
        match self.policy {
            ZIndexPolicy::Monotonic => {
                let z = self.last_used.checked_add(1).ok_or(BoxError::ZIndexExhausted)?;
                self.last_used = z;
                Ok(z)
            }
            ZIndexPolicy::RandomProbe { .. } => {
                if self.used.len() >= Self::pool_size() {
                    return Err(BoxError::ZIndexExhausted);
                }
                loop {
                    let z = self.rng.random_range(RANDOM_Z_MIN..=RANDOM_Z_MAX);
                    if self.used.insert(z) {
                        self.last_used = z;
                        return Ok(z);
                    }
                }
            }
        }
    }

    /// Notify the allocator that a box holding `z` was deleted.
    pub fn release(&mut self, z: i64) {
        if let ZIndexPolicy::RandomProbe { reclaim_on_delete: true } = self.policy {
            self.used.remove(&z);
        }
    }

    /// Number of values the random-probe policy still has available.
    #[cfg(test)]
    fn remaining(&self) -> Option<usize> {
        match self.policy {
            ZIndexPolicy::Monotonic => None,
            ZIndexPolicy::RandomProbe { .. } => Some(Self::pool_size().saturating_sub(self.used.len())),
        }
    }

    fn pool_size() -> usize {
        usize::try_from(RANDOM_Z_MAX - RANDOM_Z_MIN + 1).unwrap_or(0)
    }
}
