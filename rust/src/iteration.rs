//! Draining iteration for PriorityQueue.
//!
//! Elements leave the queue only through `extract`, so draining yields them
//! in priority order and keeps the counters meaningful.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::types::PriorityQueue;

/// Iterator that extracts elements until the queue is empty.
pub struct DrainOrdered<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    queue: &'a mut PriorityQueue<T, C>,
}

impl<'a, T, C> Iterator for DrainOrdered<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.extract().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len();
        (remaining, Some(remaining))
    }
}

impl<'a, T, C> ExactSizeIterator for DrainOrdered<'a, T, C> where C: Fn(&T, &T) -> Ordering {}

impl<'a, T, C> FusedIterator for DrainOrdered<'a, T, C> where C: Fn(&T, &T) -> Ordering {}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Returns an iterator that extracts every element in priority order.
    ///
    /// Elements not consumed before the iterator is dropped stay in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use pqbench::{ConstructionMode, PriorityQueue};
    ///
    /// let mut pq = PriorityQueue::max_heap_from(4, vec![2, 9, 4, 7], ConstructionMode::Floyd).unwrap();
    /// let top_two: Vec<_> = pq.drain_ordered().take(2).collect();
    /// assert_eq!(top_two, vec![9, 7]);
    /// assert_eq!(pq.len(), 2);
    /// ```
    pub fn drain_ordered(&mut self) -> DrainOrdered<'_, T, C> {
        DrainOrdered { queue: self }
    }

    /// Consume the queue, returning its elements in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        sorted.extend(self.drain_ordered());
        sorted
    }
}
