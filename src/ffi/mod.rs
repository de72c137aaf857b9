//! Binding layer for host runtimes.
//!
//! `sum` exports C ABI functions for any FFI-capable host.
//! `python` (behind the `python` feature) registers the `bench_cpp` extension module.
//!
//! The actual logic is in `reduce` and `series`. These functions are thin wrappers
//! that handle null checks, input coercion, and host-to-Rust conversions.

#[cfg(feature = "python")]
pub mod python;
pub mod sum;

pub use sum::{bk_sum_array, bk_sum_array_parallel};
