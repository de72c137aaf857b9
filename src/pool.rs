//! Rayon thread pool construction for the parallel workloads.

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use crate::error::{BenchError, Result};

/// Build a thread pool with `threads` workers.
///
/// Falls back to a single-thread pool if the requested size cannot be built.
pub fn build_pool(threads: usize) -> Result<ThreadPool> {
    if threads == 0 {
        return Err(BenchError::ZeroThreads);
    }

    match ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => {
            debug!(threads, "built thread pool");
            Ok(pool)
        }
        Err(err) => {
            warn!(threads, %err, "thread pool build failed, falling back to one thread");
            ThreadPoolBuilder::new()
                .num_threads(1)
                .build()
                .map_err(|err| BenchError::ThreadPool(err.to_string()))
        }
    }
}
