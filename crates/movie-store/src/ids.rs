//! Id sources for newly created movies.
//!
//! The store asks an `IdSource` for a number and formats it as a decimal
//! string. Collision checking happens in the store, under its lock, so an
//! id source only has to produce candidates.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

/// Upper bound (exclusive) of the legacy random id range.
pub const RANDOM_ID_UPPER_BOUND: u64 = 100_000;

/// Produces candidate ids for new records.
pub trait IdSource: Send + Sync {
    /// Draw the next candidate id.
    fn next_id(&self) -> u64;

    /// Name of this source, for logging.
    fn name(&self) -> &'static str;
}

/// Uniform random ids in `[0, upper_bound)`.
#[derive(Debug, Clone)]
pub struct RandomIds {
    upper_bound: u64,
}

impl RandomIds {
    pub fn new() -> Self {
        Self::with_upper_bound(RANDOM_ID_UPPER_BOUND)
    }

    /// A zero bound is treated as 1, so the source always yields `0`.
    pub fn with_upper_bound(upper_bound: u64) -> Self {
        Self {
            upper_bound: upper_bound.max(1),
        }
    }

    pub fn upper_bound(&self) -> u64 {
        self.upper_bound
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for RandomIds {
    fn next_id(&self) -> u64 {
        rand::rng().random_range(0..self.upper_bound)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Strictly increasing ids starting at `start`.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
