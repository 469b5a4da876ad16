//! Workload driver for priority queue benchmarks.
//!
//! A mixed workload inserts every input element in order and, after each
//! insert, flips a biased coin to decide whether to extract once. A bulk
//! workload loads the whole input through the bulk constructor and drains it,
//! which is where Floyd and incremental construction differ.
//!
//! A [`WorkloadDriver`] runs one configuration through
//! `Configured -> GeneratingInput -> ExecutingRun (xN) -> Reporting`.
//! There is no way back; each configuration needs a fresh driver.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;
use thiserror::Error;

use crate::config::ConfigError;
use crate::error::{HeapResultExt, PriorityQueueError};
use crate::input::ElementKind;
use crate::report::{WorkloadReport, LINEARITHMIC_LOGGERS};
use crate::timer::BenchmarkTimer;
use crate::types::{ConstructionMode, HeapStats, Orientation, PriorityQueue};

/// Errors raised by the driver itself. Queue overflow and underflow inside a
/// workload step are not errors here; they are logged and the step skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriverError {
    #[error("Invalid driver transition from {from} to {to}")]
    InvalidTransition { from: DriverState, to: DriverState },
    #[error("Invalid extract probability: {0}")]
    InvalidProbability(f64),
    #[error(transparent)]
    Queue(#[from] PriorityQueueError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Shape of the work done per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadShape {
    /// Insert each element, extracting with a fixed probability after each.
    Mixed,
    /// Bulk-construct from all elements, then drain.
    Bulk,
}

impl fmt::Display for WorkloadShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadShape::Mixed => write!(f, "mixed"),
            WorkloadShape::Bulk => write!(f, "bulk"),
        }
    }
}

impl FromStr for WorkloadShape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" => Ok(WorkloadShape::Mixed),
            "bulk" => Ok(WorkloadShape::Bulk),
            _ => Err(ConfigError::unknown_value("workload", s)),
        }
    }
}

/// One benchmark configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadConfig {
    pub description: String,
    pub element_kind: ElementKind,
    pub size: usize,
    pub runs: usize,
    pub extract_probability: f64,
    pub orientation: Orientation,
    pub mode: ConstructionMode,
    pub shape: WorkloadShape,
    pub warm_up: bool,
}

/// Outcome of a single pass over the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkloadRun {
    /// Wall-clock time of the pass, excluding queue allocation.
    pub elapsed: Duration,
    pub inserted: u64,
    pub extracted: u64,
    pub skipped_inserts: u64,
    pub skipped_extractions: u64,
    /// Elements left in the queue when the pass ended.
    pub remaining: usize,
    pub stats: HeapStats,
}

impl WorkloadRun {
    pub fn skipped_steps(&self) -> u64 {
        self.skipped_inserts + self.skipped_extractions
    }
}

/// Insert every element into a fresh queue, extracting once after an insert
/// with probability `extract_probability`.
///
/// The queue's capacity is `elements.len()` (at least 1). Overflow and
/// underflow in a step are logged at debug level and the step is skipped.
pub fn run_mixed_workload<T, C, R>(
    elements: Vec<T>,
    extract_probability: f64,
    orientation: Orientation,
    mode: ConstructionMode,
    comparator: C,
    rng: &mut R,
) -> Result<WorkloadRun, DriverError>
where
    C: Fn(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    let coin = Bernoulli::new(extract_probability)
        .map_err(|_| DriverError::InvalidProbability(extract_probability))?;
    let mut pq = PriorityQueue::new(elements.len().max(1), orientation, mode, comparator)?;
    let mut run = WorkloadRun::default();

    let start = Instant::now();
    for element in elements {
        match pq.insert(element).log_and_skip("mixed workload insert") {
            Some(()) => run.inserted += 1,
            None => run.skipped_inserts += 1,
        }
        if coin.sample(&mut *rng) {
            match pq.extract().log_and_skip("mixed workload extract") {
                Some(item) => {
                    std::hint::black_box(item);
                    run.extracted += 1;
                }
                None => run.skipped_extractions += 1,
            }
        }
    }
    run.elapsed = start.elapsed();

    run.remaining = pq.len();
    run.stats = pq.stats();
    Ok(run)
}

/// Bulk-construct a queue from every element with the given mode, then
/// extract until empty.
pub fn run_bulk_workload<T, C>(
    elements: Vec<T>,
    orientation: Orientation,
    mode: ConstructionMode,
    comparator: C,
) -> Result<WorkloadRun, DriverError>
where
    C: Fn(&T, &T) -> Ordering,
{
    let capacity = elements.len().max(1);
    let start = Instant::now();
    let mut pq = PriorityQueue::from_items(capacity, elements, orientation, mode, comparator)?;
    let inserted = pq.len() as u64;
    let mut extracted = 0;
    for item in pq.drain_ordered() {
        std::hint::black_box(item);
        extracted += 1;
    }
    let elapsed = start.elapsed();

    Ok(WorkloadRun {
        elapsed,
        inserted,
        extracted,
        skipped_inserts: 0,
        skipped_extractions: 0,
        remaining: pq.len(),
        stats: pq.stats(),
    })
}

/// Phase of a [`WorkloadDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Configured,
    GeneratingInput,
    ExecutingRun { completed: usize },
    Reporting,
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverState::Configured => write!(f, "CONFIGURED"),
            DriverState::GeneratingInput => write!(f, "GENERATING_INPUT"),
            DriverState::ExecutingRun { completed } => {
                write!(f, "EXECUTING_RUN({} completed)", completed)
            }
            DriverState::Reporting => write!(f, "REPORTING"),
        }
    }
}

/// Runs one benchmark configuration against its own queues and RNG.
pub struct WorkloadDriver<T, C, R> {
    config: WorkloadConfig,
    comparator: C,
    rng: R,
    state: DriverState,
    input: Vec<T>,
    runs: Vec<WorkloadRun>,
    mean_millis: f64,
}

impl<T, C, R> WorkloadDriver<T, C, R>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering + Clone,
    R: Rng,
{
    pub fn new(config: WorkloadConfig, comparator: C, rng: R) -> Self {
        Self {
            config,
            comparator,
            rng,
            state: DriverState::Configured,
            input: Vec::new(),
            runs: Vec::new(),
            mean_millis: 0.0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Generated input, empty until `generate_input` has run.
    pub fn input(&self) -> &[T] {
        &self.input
    }

    fn enter(&mut self, next: DriverState) -> Result<(), DriverError> {
        let allowed = match (self.state, next) {
            (DriverState::Configured, DriverState::GeneratingInput) => true,
            (DriverState::GeneratingInput, DriverState::ExecutingRun { completed: 0 }) => true,
            (DriverState::ExecutingRun { completed }, DriverState::Reporting) => {
                completed == self.config.runs
            }
            _ => false,
        };
        if !allowed {
            return Err(DriverError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::debug!(benchmark = %self.config.description, from = %self.state, to = %next, "driver transition");
        self.state = next;
        Ok(())
    }

    /// Produce the input sequence with `generate(rng, size)`.
    pub fn generate_input<G>(&mut self, generate: G) -> Result<(), DriverError>
    where
        G: FnOnce(&mut R, usize) -> Vec<T>,
    {
        self.enter(DriverState::GeneratingInput)?;
        self.input = generate(&mut self.rng, self.config.size);
        tracing::debug!(benchmark = %self.config.description, n = self.input.len(), "input generated");
        Ok(())
    }

    /// Perform the warm-up and measured runs, each on a fresh queue.
    #[tracing::instrument(skip_all, fields(benchmark = %self.config.description))]
    pub fn execute_runs(&mut self) -> Result<(), DriverError> {
        let p = self.config.extract_probability;
        if Bernoulli::new(p).is_err() {
            return Err(DriverError::InvalidProbability(p));
        }
        self.enter(DriverState::ExecutingRun { completed: 0 })?;

        let timer = BenchmarkTimer::new(self.config.description.clone(), self.config.warm_up);
        let config = &self.config;
        let input = &self.input;
        let comparator = &self.comparator;
        let rng = &mut self.rng;

        let timing = timer.run(
            config.runs,
            || input.clone(),
            |elements| match config.shape {
                WorkloadShape::Mixed => run_mixed_workload(
                    elements,
                    config.extract_probability,
                    config.orientation,
                    config.mode,
                    comparator.clone(),
                    &mut *rng,
                ),
                WorkloadShape::Bulk => {
                    run_bulk_workload(elements, config.orientation, config.mode, comparator.clone())
                }
            },
        );

        self.mean_millis = timing.mean_millis();
        self.runs = timing.outputs.into_iter().collect::<Result<Vec<_>, _>>()?;
        self.state = DriverState::ExecutingRun {
            completed: self.runs.len(),
        };
        tracing::info!(runs = self.runs.len(), mean_millis = self.mean_millis, "runs complete");
        Ok(())
    }

    /// Summarise the measured runs and log the report.
    pub fn report(&mut self) -> Result<WorkloadReport, DriverError> {
        self.enter(DriverState::Reporting)?;

        let size = self.input.len();
        let (extractions, skipped_steps, stats) = self.runs.iter().fold(
            (0, 0, HeapStats::default()),
            |(extracted, skipped, stats), run| {
                (
                    extracted + run.extracted,
                    skipped + run.skipped_steps(),
                    stats.merged(run.stats),
                )
            },
        );

        let report = WorkloadReport {
            description: self.config.description.clone(),
            element_kind: self.config.element_kind,
            orientation: self.config.orientation,
            mode: self.config.mode,
            shape: self.config.shape,
            size,
            runs: self.runs.len(),
            mean_millis: self.mean_millis,
            normalized: LINEARITHMIC_LOGGERS[1].value(self.mean_millis, size),
            extractions,
            skipped_steps,
            stats,
        };
        report.log();
        Ok(report)
    }

    /// Run every phase in order, consuming the driver.
    pub fn run<G>(mut self, generate: G) -> Result<WorkloadReport, DriverError>
    where
        G: FnOnce(&mut R, usize) -> Vec<T>,
    {
        self.generate_input(generate)?;
        self.execute_runs()?;
        self.report()
    }
}
