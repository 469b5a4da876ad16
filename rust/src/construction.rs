//! Construction logic for PriorityQueue.
//!
//! A queue is either created empty or bulk-loaded from an unordered vector.
//! The construction mode only matters for the bulk load: `Incremental` sifts
//! every element up as it arrives, `Floyd` places everything first and then
//! repairs the heap bottom-up.

use std::cmp::Ordering;

use crate::error::{InitResult, PriorityQueueError};
use crate::types::{ConstructionMode, HeapStats, Orientation, PriorityQueue, MIN_CAPACITY};

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty priority queue.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of elements (at least 1)
    /// * `orientation` - Whether the root is the minimum or the maximum
    /// * `mode` - Bulk-construction strategy
    /// * `comparator` - Total order over `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use pqbench::{ConstructionMode, Orientation, PriorityQueue};
    ///
    /// let pq = PriorityQueue::new(8, Orientation::Max, ConstructionMode::Floyd, |a: &i32, b: &i32| a.cmp(b)).unwrap();
    /// assert!(pq.is_empty());
    /// assert_eq!(pq.capacity(), 8);
    /// ```
    pub fn new(
        capacity: usize,
        orientation: Orientation,
        mode: ConstructionMode,
        comparator: C,
    ) -> InitResult<Self> {
        validation::validate_capacity(capacity)?;

        Ok(Self {
            capacity,
            items: Vec::with_capacity(capacity),
            orientation,
            mode,
            comparator,
            stats: HeapStats::default(),
        })
    }

    /// Create a priority queue pre-loaded with `items`.
    ///
    /// Fails with `Overflow` if there are more items than `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pqbench::{ConstructionMode, Orientation, PriorityQueue};
    ///
    /// let pq = PriorityQueue::from_items(
    ///     5,
    ///     vec![5, 3, 4, 1, 2],
    ///     Orientation::Min,
    ///     ConstructionMode::Floyd,
    ///     |a: &i32, b: &i32| a.cmp(b),
    /// )
    /// .unwrap();
    /// assert_eq!(pq.peek(), Ok(&1));
    /// ```
    pub fn from_items(
        capacity: usize,
        items: Vec<T>,
        orientation: Orientation,
        mode: ConstructionMode,
        comparator: C,
    ) -> InitResult<Self> {
        if items.len() > capacity {
            validation::validate_capacity(capacity)?;
            return Err(PriorityQueueError::overflow(capacity));
        }

        let mut pq = Self::new(capacity, orientation, mode, comparator)?;
        match mode {
            ConstructionMode::Incremental => pq.build_incremental(items),
            ConstructionMode::Floyd => pq.build_floyd(items),
        }
        Ok(pq)
    }

    /// Sift each element up as it is appended.
    fn build_incremental(&mut self, items: Vec<T>) {
        for item in items {
            let k = self.items.len();
            self.items.push(item);
            self.sift_up(k);
        }
    }

    /// Place all elements, then sift down every internal node from the
    /// deepest one back to the root.
    fn build_floyd(&mut self, items: Vec<T>) {
        self.items.extend(items);
        let n = self.items.len();
        for k in (0..n / 2).rev() {
            self.sift_down(k, n);
        }
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that a capacity is usable for a priority queue.
    pub fn validate_capacity(capacity: usize) -> InitResult<()> {
        if capacity < MIN_CAPACITY {
            Err(PriorityQueueError::invalid_capacity(capacity, MIN_CAPACITY))
        } else {
            Ok(())
        }
    }
}
