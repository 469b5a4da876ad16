//! Benchmark configuration loaded from environment variables.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::driver::{WorkloadConfig, WorkloadShape};
use crate::input::ElementKind;
use crate::types::{ConstructionMode, Orientation};

pub const DEFAULT_SIZE: usize = 10_000;
pub const DEFAULT_RUNS: usize = 1_000;
pub const DEFAULT_EXTRACT_PROBABILITY: f64 = 0.5;

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown {field}: '{value}'")]
    UnknownValue { field: &'static str, value: String },
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn unknown_value(field: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            field,
            value: value.to_string(),
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Settings shared by every configuration of one benchmark invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub size: usize,
    pub runs: usize,
    pub extract_probability: f64,
    pub orientation: Orientation,
    pub shape: WorkloadShape,
    pub warm_up: bool,
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            runs: DEFAULT_RUNS,
            extract_probability: DEFAULT_EXTRACT_PROBABILITY,
            orientation: Orientation::Max,
            shape: WorkloadShape::Mixed,
            warm_up: true,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    /// Load from `PQ_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            size: parse_or(&lookup, "PQ_SIZE", defaults.size),
            runs: parse_or(&lookup, "PQ_RUNS", defaults.runs),
            extract_probability: parse_or(
                &lookup,
                "PQ_EXTRACT_PROBABILITY",
                defaults.extract_probability,
            ),
            orientation: parse_or(&lookup, "PQ_ORIENTATION", defaults.orientation),
            shape: parse_or(&lookup, "PQ_WORKLOAD", defaults.shape),
            warm_up: parse_or(&lookup, "PQ_WARM_UP", defaults.warm_up),
            seed: lookup("PQ_SEED").and_then(|v| parse_logged("PQ_SEED", &v)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::invalid("size", "must be greater than 0"));
        }
        if self.runs == 0 {
            return Err(ConfigError::invalid("runs", "must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&self.extract_probability) {
            return Err(ConfigError::invalid(
                "extract probability",
                format!("{} is outside [0, 1]", self.extract_probability),
            ));
        }
        Ok(())
    }

    /// Derive the driver configuration for one element kind and mode.
    pub fn workload(&self, element_kind: ElementKind, mode: ConstructionMode) -> WorkloadConfig {
        WorkloadConfig {
            description: format!("{} with {}", element_kind, mode),
            element_kind,
            size: self.size,
            runs: self.runs,
            extract_probability: self.extract_probability,
            orientation: self.orientation,
            mode,
            shape: self.shape,
            warm_up: self.warm_up,
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| parse_logged(key, &v))
        .unwrap_or(default)
}

fn parse_logged<T>(key: &str, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Ignoring malformed {}={:?}: {}", key, value, e);
            None
        }
    }
}
