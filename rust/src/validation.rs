//! Validation and debugging utilities for PriorityQueue.
//!
//! Invariant checks call the comparator directly and leave the instrumentation
//! counters untouched.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::types::PriorityQueue;

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Check if the queue maintains the heap-order property.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if self.items.len() > self.capacity {
            return Err(format!(
                "Queue holds {} items but capacity is {}",
                self.items.len(),
                self.capacity
            ));
        }

        for child in 1..self.items.len() {
            let parent = (child - 1) / 2;
            let ordering = (self.comparator)(&self.items[parent], &self.items[child]);
            if !self.orientation.permits_parent(ordering) {
                return Err(format!(
                    "Heap order violated: parent {} ranks below child {} in a {}-heap",
                    parent, child, self.orientation
                ));
            }
        }

        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<T, C> PriorityQueue<T, C> {
    /// Returns a copy of the backing array in heap layout (for testing/debugging).
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Emits the backing array, level by level, at debug level.
    pub fn log_layout(&self)
    where
        T: Debug,
    {
        tracing::debug!(
            len = self.items.len(),
            capacity = self.capacity,
            orientation = %self.orientation,
            "heap layout"
        );
        let mut start = 0;
        let mut width = 1;
        let mut depth = 0;
        while start < self.items.len() {
            let end = (start + width).min(self.items.len());
            tracing::debug!(depth, items = ?&self.items[start..end]);
            start = end;
            width *= 2;
            depth += 1;
        }
    }
}
