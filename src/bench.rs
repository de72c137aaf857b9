//! Benchmark harness: seeded input generation and labeled timings.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use crate::error::Result;

/// One timed run, emitted as a JSON line by the `bench-sum` binary.
#[derive(Debug, Clone, Serialize)]
pub struct Timing {
    pub label: String,
    pub n: usize,
    pub secs: f64,
    pub result: f64,
}

/// `n` uniform values in `[0, 1)`, reproducible for a given seed.
pub fn random_input(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

/// Time a single call of `f`.
pub fn time_it<F: FnOnce() -> f64>(label: &str, n: usize, f: F) -> Timing {
    let it = Instant::now();
    let result = f();
    let secs = it.elapsed().as_secs_f64();

    info!(label, n, secs, result, "benchmark finished");
    Timing {
        label: label.to_string(),
        n,
        secs,
        result,
    }
}

/// Time a single call of a fallible `f`.
pub fn try_time_it<F: FnOnce() -> Result<f64>>(label: &str, n: usize, f: F) -> Result<Timing> {
    let it = Instant::now();
    let result = f()?;
    let secs = it.elapsed().as_secs_f64();

    info!(label, n, secs, result, "benchmark finished");
    Ok(Timing {
        label: label.to_string(),
        n,
        secs,
        result,
    })
}
