//! Random input generation for workloads.
//!
//! Every generator draws from a caller-supplied RNG so that a seeded run is
//! reproducible.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::config::ConfigError;

/// Element type fed to the queue by a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Integer,
    Text,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Integer => write!(f, "Int"),
            ElementKind::Text => write!(f, "String"),
        }
    }
}

impl FromStr for ElementKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(ElementKind::Integer),
            "string" | "text" => Ok(ElementKind::Text),
            _ => Err(ConfigError::unknown_value("element kind", s)),
        }
    }
}

/// `n` integers drawn uniformly from `[0, n)`.
pub fn random_integers<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i32> {
    let upper = i32::try_from(n).unwrap_or(i32::MAX).max(1);
    (0..n).map(|_| rng.gen_range(0..upper)).collect()
}

/// `n` strings of the form `A<x>` where `x` is uniform in `[0, 26)`.
pub fn random_strings<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| format!("A{}", rng.gen::<f64>() * 26.0))
        .collect()
}
