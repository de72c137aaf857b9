//! Error type for the parallel reductions and the benchmark harness.
//! The sequential summation routine has no failure mode and never returns it.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while setting up parallel work.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchError {
    /// A parallel routine was asked to run on zero worker threads.
    ZeroThreads,

    /// Rayon could not build a thread pool, not even the single-thread fallback.
    ThreadPool(String),
}

impl Display for BenchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchError::ZeroThreads => {
                write!(f, "thread count must be at least 1")
            }
            BenchError::ThreadPool(message) => {
                write!(f, "failed to build thread pool: {message}")
            }
        }
    }
}

impl Error for BenchError {}

pub type Result<T> = std::result::Result<T, BenchError>;
