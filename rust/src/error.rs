//! Error handling and result types for PriorityQueue operations.
//!
//! The queue itself only fails in two ways at runtime: inserting into a full
//! queue and removing from an empty one. Construction can additionally reject
//! an unusable capacity.

use thiserror::Error;

/// Error type for priority queue operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriorityQueueError {
    /// Insert attempted while `len() == capacity()`.
    #[error("Priority queue overflow: capacity {capacity} reached")]
    Overflow { capacity: usize },
    /// Extract or peek attempted on an empty queue.
    #[error("Priority queue is empty")]
    Underflow,
    /// Invalid capacity specified at construction.
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
}

impl PriorityQueueError {
    /// Create an Overflow error for a queue of the given capacity
    pub fn overflow(capacity: usize) -> Self {
        Self::Overflow { capacity }
    }

    /// Create an InvalidCapacity error with context
    pub fn invalid_capacity(capacity: usize, min_required: usize) -> Self {
        Self::InvalidCapacity(format!(
            "Capacity {} is invalid (minimum required: {})",
            capacity, min_required
        ))
    }

    /// Check if this error is an overflow
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Check if this error is an underflow
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow)
    }

    /// Check if this error is a capacity error
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, Self::InvalidCapacity(_))
    }
}

/// Public result type for queue operations that may fail
pub type HeapResult<T> = Result<T, PriorityQueueError>;

/// Result type for insert and extract
pub type ModifyResult<T> = Result<T, PriorityQueueError>;

/// Result type for peek
pub type PeekResult<T> = Result<T, PriorityQueueError>;

/// Result type for queue construction
pub type InitResult<T> = Result<T, PriorityQueueError>;

/// Result extension trait for callers that treat queue errors as recoverable
pub trait HeapResultExt<T> {
    /// Log the error at debug level and turn it into `None`.
    fn log_and_skip(self, context: &str) -> Option<T>;

    /// Log error and continue with default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> HeapResultExt<T> for Result<T, PriorityQueueError> {
    fn log_and_skip(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(context, error = %e, "skipping queue step");
                None
            }
        }
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Priority queue operation failed, using default: {}", e);
                T::default()
            }
        }
    }
}
