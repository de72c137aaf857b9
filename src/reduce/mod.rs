//! Summation kernels.
//!
//! `sequential` holds the reference routine exposed to the host runtime.
//! `parallel` splits the same reduction across a rayon pool.

pub mod parallel;
pub mod sequential;

pub use parallel::{sum_array_in, sum_array_parallel};
pub use sequential::sum_array;
