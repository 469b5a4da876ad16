//! Core types and data structures for PriorityQueue.
//!
//! This module contains the queue itself, its orientation and construction
//! mode enumerations, and the instrumentation counters.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum capacity for any priority queue
pub(crate) const MIN_CAPACITY: usize = 1;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Comparator used by the natural-order constructors.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Which end of the comparator's order sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Root holds the smallest element.
    Min,
    /// Root holds the largest element.
    Max,
}

impl Orientation {
    /// Returns true if an element comparing as `ordering` against another
    /// belongs above it in the heap.
    #[inline]
    pub(crate) fn ranks_above(self, ordering: Ordering) -> bool {
        match self {
            Orientation::Min => ordering == Ordering::Less,
            Orientation::Max => ordering == Ordering::Greater,
        }
    }

    /// Returns true if a parent comparing as `ordering` against its child
    /// satisfies the heap-order property.
    #[inline]
    pub(crate) fn permits_parent(self, ordering: Ordering) -> bool {
        match self {
            Orientation::Min => ordering != Ordering::Greater,
            Orientation::Max => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Min => write!(f, "min"),
            Orientation::Max => write!(f, "max"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Orientation::Min),
            "max" => Ok(Orientation::Max),
            _ => Err(ConfigError::unknown_value("orientation", s)),
        }
    }
}

/// Bulk-construction strategy, fixed for the lifetime of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructionMode {
    /// Every element is sifted up one at a time: O(n log n).
    Incremental,
    /// Bottom-up heapify by sifting down every internal node: O(n).
    Floyd,
}

impl fmt::Display for ConstructionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionMode::Incremental => write!(f, "incremental"),
            ConstructionMode::Floyd => write!(f, "floyd"),
        }
    }
}

impl FromStr for ConstructionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "incremental" => Ok(ConstructionMode::Incremental),
            "floyd" => Ok(ConstructionMode::Floyd),
            _ => Err(ConfigError::unknown_value("construction mode", s)),
        }
    }
}

/// Comparison and swap counters.
///
/// Both only ever grow; they are reset by constructing a new queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
    /// Number of comparator invocations.
    pub compares: u64,
    /// Number of element exchanges.
    pub swaps: u64,
}

impl HeapStats {
    /// Component-wise sum, used when aggregating over runs.
    pub fn merged(self, other: HeapStats) -> HeapStats {
        HeapStats {
            compares: self.compares + other.compares,
            swaps: self.swaps + other.swaps,
        }
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Bounded binary-heap priority queue.
///
/// Elements live in a single array; the prefix `[0, len)` is heap-ordered so
/// that the parent `(i - 1) / 2` of every slot `i` is never ranked below it.
/// Ordering comes exclusively from the injected comparator, combined with
/// the [`Orientation`].
///
/// # Type Parameters
///
/// * `T` - Element type
/// * `C` - Comparator, any `Fn(&T, &T) -> Ordering`
///
/// # Examples
///
/// ```
/// use pqbench::{ConstructionMode, PriorityQueue};
///
/// let mut pq = PriorityQueue::min_heap_from(5, vec![5, 3, 4, 1, 2], ConstructionMode::Floyd).unwrap();
/// assert_eq!(pq.extract(), Ok(1));
/// assert_eq!(pq.extract(), Ok(2));
/// assert_eq!(pq.len(), 3);
/// ```
///
/// # Performance Characteristics
///
/// - **Insert**: O(log n)
/// - **Extract**: O(log n)
/// - **Peek**: O(1)
/// - **Bulk construction**: O(n) with Floyd, O(n log n) incremental
pub struct PriorityQueue<T, C = NaturalOrder<T>> {
    /// Fixed maximum number of elements.
    pub(crate) capacity: usize,
    /// Heap-ordered elements; `items.len()` is the current size.
    pub(crate) items: Vec<T>,
    pub(crate) orientation: Orientation,
    pub(crate) mode: ConstructionMode,
    pub(crate) comparator: C,
    pub(crate) stats: HeapStats,
}

impl<T, C> fmt::Debug for PriorityQueue<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .field("orientation", &self.orientation)
            .field("mode", &self.mode)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if another insert would overflow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn construction_mode(&self) -> ConstructionMode {
        self.mode
    }

    /// Returns the comparison and swap counters accumulated so far.
    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    #[inline]
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.stats.swaps += 1;
        self.items.swap(i, j);
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Counted comparison: true if slot `i` belongs above slot `j`.
    #[inline]
    pub(crate) fn ranks_above(&mut self, i: usize, j: usize) -> bool {
        let ordering = (self.comparator)(&self.items[i], &self.items[j]);
        self.stats.compares += 1;
        self.orientation.ranks_above(ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_ranking() {
        assert!(Orientation::Min.ranks_above(Ordering::Less));
        assert!(!Orientation::Min.ranks_above(Ordering::Equal));
        assert!(Orientation::Max.ranks_above(Ordering::Greater));
        assert!(!Orientation::Max.ranks_above(Ordering::Less));
    }

    #[test]
    fn test_orientation_permits_equal_parent() {
        assert!(Orientation::Min.permits_parent(Ordering::Equal));
        assert!(Orientation::Max.permits_parent(Ordering::Equal));
        assert!(!Orientation::Min.permits_parent(Ordering::Greater));
        assert!(!Orientation::Max.permits_parent(Ordering::Less));
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("MIN".parse::<Orientation>().unwrap(), Orientation::Min);
        assert_eq!(" max ".parse::<Orientation>().unwrap(), Orientation::Max);
        assert!("middle".parse::<Orientation>().is_err());
        assert_eq!("Floyd".parse::<ConstructionMode>().unwrap(), ConstructionMode::Floyd);
        assert_eq!(
            "incremental".parse::<ConstructionMode>().unwrap(),
            ConstructionMode::Incremental
        );
    }

    #[test]
    fn test_stats_merge() {
        let a = HeapStats { compares: 3, swaps: 1 };
        let b = HeapStats { compares: 4, swaps: 2 };
        assert_eq!(a.merged(b), HeapStats { compares: 7, swaps: 3 });
    }
}
