//! Wall-clock benchmark timer.
//!
//! A run is split into an untimed `prepare` step (e.g. copying the input)
//! and a timed `body`. Optional warm-up iterations execute both but are not
//! recorded.

use std::time::{Duration, Instant};

/// Warm-up iterations performed before measuring, when enabled.
pub const WARM_UP_RUNS: usize = 2;

/// Result of a timed batch of runs.
#[derive(Debug, Clone)]
pub struct Timing<O> {
    pub runs: usize,
    /// Sum of the timed body durations.
    pub total: Duration,
    /// Body output of every measured run, in order.
    pub outputs: Vec<O>,
}

impl<O> Timing<O> {
    /// Mean milliseconds per measured run.
    pub fn mean_millis(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() * 1e3 / self.runs as f64
    }
}

#[derive(Debug, Clone)]
pub struct BenchmarkTimer {
    description: String,
    warm_up: bool,
}

impl BenchmarkTimer {
    pub fn new(description: impl Into<String>, warm_up: bool) -> Self {
        Self {
            description: description.into(),
            warm_up,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Execute `runs` measured iterations of `body`, each fed by a fresh
    /// `prepare()`.
    pub fn run<I, O, P, F>(&self, runs: usize, mut prepare: P, mut body: F) -> Timing<O>
    where
        P: FnMut() -> I,
        F: FnMut(I) -> O,
    {
        if self.warm_up {
            let warm_up_runs = WARM_UP_RUNS.min(runs);
            tracing::debug!(benchmark = %self.description, warm_up_runs, "warming up");
            for _ in 0..warm_up_runs {
                let input = prepare();
                std::hint::black_box(body(input));
            }
        }

        let mut total = Duration::ZERO;
        let mut outputs = Vec::with_capacity(runs);
        for _ in 0..runs {
            let input = prepare();
            let start = Instant::now();
            let output = body(input);
            total += start.elapsed();
            outputs.push(output);
        }

        Timing { runs, total, outputs }
    }
}
