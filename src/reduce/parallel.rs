//! Chunked parallel summation.
//!
//! Each worker sums one contiguous chunk into a private accumulator. The
//! partials are then combined in chunk order, so the result only depends on
//! the input and the thread count, never on scheduling.

use std::ops::Range;

use rayon::prelude::*;
use rayon::ThreadPool;

use super::sequential::sum_array;
use crate::error::{BenchError, Result};
use crate::pool::build_pool;

/// Index range of chunk `index` when `len` items are split into `parts` chunks.
/// The last chunk absorbs the remainder.
pub(crate) fn chunk_range(len: usize, parts: usize, index: usize) -> Range<usize> {
    let chunk = len / parts;
    let start = index * chunk;
    let end = if index + 1 == parts { len } else { start + chunk };
    start..end
}

/// Sum `values` on `threads` workers.
///
/// With one thread this is exactly [`sum_array`]. With more, the result can
/// differ from the sequential sum in the last bits. A pool is built per call;
/// use [`sum_array_in`] to reuse one.
pub fn sum_array_parallel(values: &[f64], threads: usize) -> Result<f64> {
    if threads == 0 {
        return Err(BenchError::ZeroThreads);
    }
    if threads == 1 || values.is_empty() {
        return Ok(sum_array(values));
    }

    let pool = build_pool(threads)?;
    Ok(sum_array_in(&pool, values))
}

/// Sum `values` on an existing pool, one chunk per pool thread.
pub fn sum_array_in(pool: &ThreadPool, values: &[f64]) -> f64 {
    let threads = pool.current_num_threads();
    let partials: Vec<f64> = pool.install(|| {
        (0..threads)
            .into_par_iter()
            .map(|t| sum_array(&values[chunk_range(values.len(), threads, t)]))
            .collect()
    });

    sum_array(&partials)
}
