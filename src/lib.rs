//! Bench Kernels - Array Summation Library
//!
//! This library provides a plain-Rust summation kernel plus thin bindings for
//! host runtimes: a C ABI, and the `bench_cpp` Python extension module when
//! built with the `python` feature.
//!
//! The `series` module and the `bench-sum` binary hold the companion
//! threading benchmarks.

pub mod bench;
pub mod error;
pub mod ffi;
pub mod pool;
pub mod reduce;
pub mod series;


pub use error::{BenchError, Result};
pub use pool::build_pool;
pub use reduce::{sum_array, sum_array_in, sum_array_parallel};
pub use series::{
    run_series, run_series_in, sine_series, sine_series_chunked, sine_series_chunked_in,
    sine_series_strided, sine_series_strided_in, SeriesStrategy,
};
