use pqbench::input::{random_integers, random_strings};
use pqbench::logging::init_tracing;
use pqbench::{BenchmarkConfig, ConstructionMode, DriverError, ElementKind, WorkloadDriver};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Insert/extract benchmark comparing Floyd and incremental construction.
// Configure through PQ_SIZE, PQ_RUNS, PQ_EXTRACT_PROBABILITY, PQ_ORIENTATION,
// PQ_WORKLOAD, PQ_WARM_UP and PQ_SEED. Run in release mode.
fn main() {
    init_tracing();

    let config = BenchmarkConfig::from_env();
    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }
    tracing::info!(
        size = config.size,
        runs = config.runs,
        extract_probability = config.extract_probability,
        orientation = %config.orientation,
        workload = %config.shape,
        "PQBenchmark"
    );

    let configurations = [
        (ElementKind::Integer, ConstructionMode::Floyd),
        (ElementKind::Integer, ConstructionMode::Incremental),
        (ElementKind::Text, ConstructionMode::Floyd),
        (ElementKind::Text, ConstructionMode::Incremental),
    ];

    for (kind, mode) in configurations {
        match run_configuration(&config, kind, mode) {
            Ok(mean_millis) => println!("{} with {}: {:.4}", kind, mode, mean_millis),
            Err(e) => {
                tracing::error!("{} with {} failed: {}", kind, mode, e);
                std::process::exit(1);
            }
        }
    }
}

fn rng_for(config: &BenchmarkConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run_configuration(
    config: &BenchmarkConfig,
    kind: ElementKind,
    mode: ConstructionMode,
) -> Result<f64, DriverError> {
    let workload = config.workload(kind, mode);
    let report = match kind {
        ElementKind::Integer => {
            WorkloadDriver::new(workload, |a: &i32, b: &i32| a.cmp(b), rng_for(config))
                .run(|rng, n| random_integers(rng, n))?
        }
        ElementKind::Text => {
            WorkloadDriver::new(workload, |a: &String, b: &String| a.cmp(b), rng_for(config))
                .run(|rng, n| random_strings(rng, n))?
        }
    };
    Ok(report.mean_millis)
}
