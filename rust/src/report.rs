//! Benchmark reporting: raw and normalised timings.
//!
//! Normalisation divides by the information-theoretic minimum number of
//! comparisons needed to sort `n` elements. It is a reference scale for
//! comparing configurations, not a bound on heap operations.

use std::f64::consts::E;
use std::fmt;

use crate::driver::WorkloadShape;
use crate::input::ElementKind;
use crate::types::{ConstructionMode, HeapStats, Orientation};

/// Lower bound on comparisons to sort `n` random elements, based on lg(n!).
///
/// Clamped to at least 1 so that tiny inputs still normalise.
pub fn min_comparisons(n: usize) -> f64 {
    if n < 2 {
        return 1.0;
    }
    let n = n as f64;
    let lg_n = n.log2();
    (n * (lg_n - E.log2()) + lg_n / 2.0 + 1.33).max(1.0)
}

/// One line of a timing report.
#[derive(Clone, Copy)]
pub struct TimeLogger {
    pub label: &'static str,
    pub normalise: fn(f64, usize) -> f64,
}

impl TimeLogger {
    pub fn value(&self, mean_millis: f64, n: usize) -> f64 {
        (self.normalise)(mean_millis, n)
    }
}

impl fmt::Debug for TimeLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeLogger").field("label", &self.label).finish()
    }
}

/// Raw milliseconds per run, and time normalised against `n log n`.
///
/// The factor 6 approximates array accesses per comparison, so with
/// primitive elements the normalised figure is roughly nanoseconds per
/// array access.
pub const LINEARITHMIC_LOGGERS: [TimeLogger; 2] = [
    TimeLogger {
        label: "Raw time per run (mSec)",
        normalise: |time, _n| time,
    },
    TimeLogger {
        label: "Normalized time per run (n log n)",
        normalise: |time, n| time / min_comparisons(n) / 6.0 * 1e6,
    },
];

/// Final output of one benchmark configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadReport {
    pub description: String,
    pub element_kind: ElementKind,
    pub orientation: Orientation,
    pub mode: ConstructionMode,
    pub shape: WorkloadShape,
    pub size: usize,
    pub runs: usize,
    pub mean_millis: f64,
    pub normalized: f64,
    /// Extractions performed across all measured runs.
    pub extractions: u64,
    /// Steps skipped because of overflow or underflow.
    pub skipped_steps: u64,
    /// Counters summed over all measured runs.
    pub stats: HeapStats,
}

impl WorkloadReport {
    /// Write each time logger line through `tracing`.
    pub fn log(&self) {
        for logger in LINEARITHMIC_LOGGERS.iter() {
            tracing::info!(
                benchmark = %self.description,
                n = self.size,
                "{}: {:.4}",
                logger.label,
                logger.value(self.mean_millis, self.size)
            );
        }
        tracing::info!(
            benchmark = %self.description,
            runs = self.runs,
            extractions = self.extractions,
            skipped = self.skipped_steps,
            compares = self.stats.compares,
            swaps = self.stats.swaps,
            "workload totals"
        );
    }
}

impl fmt::Display for WorkloadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({} {} {}-heap, {} workload, n={}, runs={})",
            self.description,
            self.element_kind,
            self.mode,
            self.orientation,
            self.shape,
            self.size,
            self.runs
        )?;
        for logger in LINEARITHMIC_LOGGERS.iter() {
            writeln!(
                f,
                "  {}: {:.4}",
                logger.label,
                logger.value(self.mean_millis, self.size)
            )?;
        }
        write!(
            f,
            "  extractions={} skipped={} compares={} swaps={}",
            self.extractions, self.skipped_steps, self.stats.compares, self.stats.swaps
        )
    }
}
