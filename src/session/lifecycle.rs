//! Generation counter guarding async writes against a torn-down shell.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Value of the lifecycle counter captured when an operation starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Shared generation counter. Clones observe the same counter.
#[derive(Clone, Debug, Default)]
pub struct Lifecycle {
    generation: Arc<AtomicU64>,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Generation {
        Generation(self.generation.load(Ordering::Acquire))
    }

    /// Move to a new generation; everything captured earlier becomes stale.
    pub fn advance(&self) -> Generation {
        Generation(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }
}
