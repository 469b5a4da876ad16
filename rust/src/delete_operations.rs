//! DELETE operations for PriorityQueue.
//!
//! Extraction moves the last element into the root slot and sifts it down.
//! The same sift-down primitive drives Floyd bulk construction.

use std::cmp::Ordering;

use crate::error::{ModifyResult, PeekResult, PriorityQueueError};
use crate::types::PriorityQueue;

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Remove and return the root element.
    ///
    /// Fails with `Underflow` on an empty queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use pqbench::{ConstructionMode, PriorityQueue};
    ///
    /// let mut pq = PriorityQueue::min_heap_from(3, vec![2, 3, 1], ConstructionMode::Floyd).unwrap();
    /// assert_eq!(pq.extract(), Ok(1));
    /// assert_eq!(pq.extract(), Ok(2));
    /// assert_eq!(pq.extract(), Ok(3));
    /// assert!(pq.extract().unwrap_err().is_underflow());
    /// ```
    pub fn extract(&mut self) -> ModifyResult<T> {
        if self.items.is_empty() {
            return Err(PriorityQueueError::Underflow);
        }

        let last = self.items.len() - 1;
        if last > 0 {
            self.swap(0, last);
        }
        let root = self.items.pop().ok_or(PriorityQueueError::Underflow)?;
        self.sift_down(0, last);
        Ok(root)
    }

    /// Return the root element without removing it.
    pub fn peek(&self) -> PeekResult<&T> {
        self.items.first().ok_or(PriorityQueueError::Underflow)
    }

    /// Move the element at `k` down within `[0, n)` while one of its
    /// children ranks above it, always descending into the better child.
    pub(crate) fn sift_down(&mut self, mut k: usize, n: usize) {
        loop {
            let left = 2 * k + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.ranks_above(right, left) {
                right
            } else {
                left
            };
            if !self.ranks_above(child, k) {
                break;
            }
            self.swap(k, child);
            k = child;
        }
    }
}
