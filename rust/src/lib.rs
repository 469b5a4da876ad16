//! Bounded binary-heap priority queue with a workload benchmark driver.
//!
//! [`PriorityQueue`] is a fixed-capacity, array-backed heap ordered by an
//! injected comparator, in either min or max orientation. Bulk construction
//! uses either incremental sift-up or Floyd's bottom-up heapify. The driver
//! feeds randomized mixed insert/extract workloads through the queue and
//! reports timings normalised against `n log n`.

mod construction;
mod delete_operations;
mod error;
mod insert_operations;
mod iteration;
mod macros;
mod types;
mod validation;

pub mod config;
pub mod driver;
pub mod input;
pub mod logging;
pub mod report;
pub mod timer;

pub use construction::validation::validate_capacity;
pub use error::{
    HeapResult, HeapResultExt, InitResult, ModifyResult, PeekResult, PriorityQueueError,
};
pub use iteration::DrainOrdered;
pub use types::{ConstructionMode, HeapStats, NaturalOrder, Orientation, PriorityQueue};

pub use config::{BenchmarkConfig, ConfigError};
pub use driver::{
    run_bulk_workload, run_mixed_workload, DriverError, DriverState, WorkloadConfig,
    WorkloadDriver, WorkloadRun, WorkloadShape,
};
pub use input::ElementKind;
pub use report::{min_comparisons, WorkloadReport};
