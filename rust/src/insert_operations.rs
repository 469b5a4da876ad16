//! INSERT operations for PriorityQueue.
//!
//! New elements are appended at the first free slot and sifted up towards
//! the root until their parent ranks no lower than they do.

use std::cmp::Ordering;

use crate::error::{ModifyResult, PriorityQueueError};
use crate::types::PriorityQueue;

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Insert an element.
    ///
    /// Fails with `Overflow` when the queue is full; the queue is left
    /// unchanged and `item` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pqbench::{ConstructionMode, PriorityQueue};
    ///
    /// let mut pq = PriorityQueue::max_heap(2, ConstructionMode::Incremental).unwrap();
    /// pq.insert(1).unwrap();
    /// pq.insert(7).unwrap();
    /// assert!(pq.insert(3).unwrap_err().is_overflow());
    /// assert_eq!(pq.peek(), Ok(&7));
    /// ```
    pub fn insert(&mut self, item: T) -> ModifyResult<()> {
        if self.is_full() {
            return Err(PriorityQueueError::overflow(self.capacity));
        }

        let k = self.items.len();
        self.items.push(item);
        self.sift_up(k);
        Ok(())
    }

    /// Move the element at `k` up while it ranks above its parent.
    pub(crate) fn sift_up(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.ranks_above(k, parent) {
                break;
            }
            self.swap(k, parent);
            k = parent;
        }
    }
}
