//! Sine-series workload: `sum(sin(i * SERIES_STEP))` for `i` in `0..n`.
//!
//! A compute-bound companion to the array sum. The same series is evaluated
//! three ways so the threading strategies can be compared against one
//! sequential reference:
//!
//! - `Sequential`: one accumulator, indices in order.
//! - `Chunked`: each worker takes one contiguous index range.
//! - `Strided`: worker `t` takes indices `t, t + threads, t + 2 * threads, ...`
//!   and writes its private accumulator into its own slot.

use std::fmt::{Display, Formatter};
use std::ops::Range;

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::error::{BenchError, Result};
use crate::pool::build_pool;
use crate::reduce::parallel::chunk_range;
use crate::reduce::sum_array;

/// Spacing between consecutive sine arguments.
pub const SERIES_STEP: f64 = 0.0001;

/// How the series is split across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStrategy {
    Sequential,
    Chunked,
    Strided,
}

impl SeriesStrategy {
    pub const ALL: [SeriesStrategy; 3] = [
        SeriesStrategy::Sequential,
        SeriesStrategy::Chunked,
        SeriesStrategy::Strided,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SeriesStrategy::Sequential => "sequential",
            SeriesStrategy::Chunked => "chunked",
            SeriesStrategy::Strided => "strided",
        }
    }
}

impl Display for SeriesStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn term(i: usize) -> f64 {
    (i as f64 * SERIES_STEP).sin()
}

fn sine_range(range: Range<usize>) -> f64 {
    range.fold(0.0, |acc, i| acc + term(i))
}

fn sine_strided(start: usize, n: usize, stride: usize) -> f64 {
    (start..n).step_by(stride).fold(0.0, |acc, i| acc + term(i))
}

/// Sequential reference evaluation.
pub fn sine_series(n: usize) -> f64 {
    sine_range(0..n)
}

/// One contiguous index range per worker, partials combined in worker order.
/// Builds a pool per call; see [`sine_series_chunked_in`].
pub fn sine_series_chunked(n: usize, threads: usize) -> Result<f64> {
    if threads == 0 {
        return Err(BenchError::ZeroThreads);
    }

    let pool = build_pool(threads)?;
    Ok(sine_series_chunked_in(&pool, n))
}

pub fn sine_series_chunked_in(pool: &ThreadPool, n: usize) -> f64 {
    let threads = pool.current_num_threads();
    let partials: Vec<f64> = pool.install(|| {
        (0..threads)
            .into_par_iter()
            .map(|t| sine_range(chunk_range(n, threads, t)))
            .collect()
    });

    sum_array(&partials)
}

/// Strided indices per worker, each with a private accumulator slot.
/// Builds a pool per call; see [`sine_series_strided_in`].
pub fn sine_series_strided(n: usize, threads: usize) -> Result<f64> {
    if threads == 0 {
        return Err(BenchError::ZeroThreads);
    }

    let pool = build_pool(threads)?;
    Ok(sine_series_strided_in(&pool, n))
}

pub fn sine_series_strided_in(pool: &ThreadPool, n: usize) -> f64 {
    let threads = pool.current_num_threads();
    let mut slots = vec![0.0; threads];
    pool.install(|| {
        slots
            .par_iter_mut()
            .enumerate()
            .for_each(|(t, slot)| *slot = sine_strided(t, n, threads));
    });

    sum_array(&slots)
}

/// Evaluate the series with `strategy`. `threads` is ignored for `Sequential`.
pub fn run_series(strategy: SeriesStrategy, n: usize, threads: usize) -> Result<f64> {
    match strategy {
        SeriesStrategy::Sequential => Ok(sine_series(n)),
        SeriesStrategy::Chunked => sine_series_chunked(n, threads),
        SeriesStrategy::Strided => sine_series_strided(n, threads),
    }
}

/// Evaluate the series with `strategy` on an existing pool.
pub fn run_series_in(pool: &ThreadPool, strategy: SeriesStrategy, n: usize) -> f64 {
    match strategy {
        SeriesStrategy::Sequential => sine_series(n),
        SeriesStrategy::Chunked => sine_series_chunked_in(pool, n),
        SeriesStrategy::Strided => sine_series_strided_in(pool, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_empty() {
        for strategy in SeriesStrategy::ALL {
            assert_eq!(run_series(strategy, 0, 4).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_series_first_terms() {
        assert_eq!(sine_series(1), 0.0);
        assert_eq!(sine_series(2), SERIES_STEP.sin());
    }

    #[test]
    fn test_series_close_to_integral() {
        // sum ~ (1 - cos(n * step)) / step for small step
        let n = 100_000;
        let expected = (1.0 - (n as f64 * SERIES_STEP).cos()) / SERIES_STEP;
        assert_relative_eq!(sine_series(n), expected, max_relative = 1e-3);
    }

    #[test]
    fn test_strategies_agree() {
        let n = 200_000;
        let reference = sine_series(n);
        for threads in [1, 2, 4, 5] {
            let chunked = sine_series_chunked(n, threads).unwrap();
            let strided = sine_series_strided(n, threads).unwrap();
            assert_relative_eq!(chunked, reference, max_relative = 1e-9);
            assert_relative_eq!(strided, reference, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_single_thread_chunked_matches_reference() {
        assert_eq!(sine_series_chunked(10_000, 1).unwrap(), sine_series(10_000));
    }

    #[test]
    fn test_more_threads_than_terms() {
        assert_relative_eq!(
            sine_series_strided(3, 8).unwrap(),
            sine_series(3),
            max_relative = 1e-15
        );
        assert_relative_eq!(
            sine_series_chunked(3, 8).unwrap(),
            sine_series(3),
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_shared_pool_matches_per_call_pool() {
        let n = 50_000;
        let pool = build_pool(3).unwrap();
        for strategy in SeriesStrategy::ALL {
            let expected = run_series(strategy, n, 3).unwrap();
            assert_eq!(run_series_in(&pool, strategy, n), expected);
            assert_eq!(run_series_in(&pool, strategy, n), expected);
        }
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert_eq!(
            run_series(SeriesStrategy::Chunked, 10, 0).unwrap_err(),
            BenchError::ZeroThreads
        );
        assert_eq!(
            run_series(SeriesStrategy::Strided, 10, 0).unwrap_err(),
            BenchError::ZeroThreads
        );
        assert!(run_series(SeriesStrategy::Sequential, 10, 0).is_ok());
    }

    #[test]
    fn test_strategy_names() {
        let names: Vec<String> = SeriesStrategy::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["sequential", "chunked", "strided"]);
    }
}
