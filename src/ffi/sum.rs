//! C ABI entry points for array summation.

use std::slice;

use crate::reduce::{sum_array, sum_array_parallel};

/// Sum `len` contiguous doubles starting at `data`.
///
/// # Safety
/// - `data` must point to `len` initialized `f64` values, or be null
/// - the memory must not be mutated for the duration of the call
///
/// # Returns
/// The sum, or 0.0 if `data` is null or `len` is 0.
#[no_mangle]
pub unsafe extern "C" fn bk_sum_array(data: *const f64, len: usize) -> f64 {
    if data.is_null() || len == 0 {
        return 0.0;
    }

    sum_array(slice::from_raw_parts(data, len))
}

/// Sum `len` contiguous doubles on `threads` worker threads.
///
/// # Safety
/// Same requirements as `bk_sum_array()`.
///
/// # Returns
/// The sum, 0.0 for null or empty input, or NaN if `threads` is 0 or no
/// thread pool could be built.
#[no_mangle]
pub unsafe extern "C" fn bk_sum_array_parallel(
    data: *const f64,
    len: usize,
    threads: usize,
) -> f64 {
    if threads == 0 {
        return f64::NAN;
    }
    if data.is_null() || len == 0 {
        return 0.0;
    }

    sum_array_parallel(slice::from_raw_parts(data, len), threads).unwrap_or(f64::NAN)
}
