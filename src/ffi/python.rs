//! Python bindings: the `bench_cpp` extension module.

use std::fmt::Display;

use numpy::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::reduce::{sum_array, sum_array_parallel};
use crate::series::{run_series, SeriesStrategy};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a crate error to a PyErr
fn to_py_error(e: impl Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Parse series strategy from string
fn parse_series_strategy(name: &str) -> PyResult<SeriesStrategy> {
    match name.to_lowercase().as_str() {
        "sequential" | "serial" => Ok(SeriesStrategy::Sequential),
        "chunked" | "threading" => Ok(SeriesStrategy::Chunked),
        "strided" | "private" => Ok(SeriesStrategy::Strided),
        _ => Err(PyValueError::new_err(format!(
            "Unknown series strategy: {}. Valid options: sequential, chunked, strided",
            name
        ))),
    }
}

/// Borrow `arr` as a read-only 1-D float64 array.
///
/// float64 vectors are borrowed as-is. Anything else (lists, other dtypes)
/// goes through `numpy.asarray(arr, "float64")` first, which keeps the
/// dimension count so scalars and 0-d arrays are rejected. Strided input is
/// left to `with_contiguous`.
fn as_readonly_1d<'py>(arr: &Bound<'py, PyAny>) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(array) = arr.downcast::<PyArray1<f64>>() {
        return Ok(array.try_readonly()?);
    }

    let numpy = arr.py().import("numpy")?;
    let coerced = numpy.call_method1("asarray", (arr, "float64"))?;
    let ndim: usize = coerced.getattr("ndim")?.extract()?;
    if ndim != 1 {
        return Err(PyValueError::new_err(format!(
            "Expected a one-dimensional array, got {} dimensions",
            ndim
        )));
    }

    let array = coerced.downcast_into::<PyArray1<f64>>()?;
    Ok(array.try_readonly()?)
}

/// Copy strided input into a contiguous buffer; contiguous input is not copied.
fn with_contiguous<T>(array: &PyReadonlyArray1<'_, f64>, f: impl FnOnce(&[f64]) -> T) -> T {
    match array.as_slice() {
        Ok(values) => f(values),
        Err(_) => {
            let values: Vec<f64> = array.as_array().iter().copied().collect();
            f(&values)
        }
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Sum elements of numpy array
#[pyfunction(name = "sum_array")]
fn py_sum_array(py: Python<'_>, arr: &Bound<'_, PyAny>) -> PyResult<f64> {
    let array = as_readonly_1d(arr)?;
    Ok(with_contiguous(&array, |values| {
        py.allow_threads(|| sum_array(values))
    }))
}

/// Sum elements of numpy array on several threads
#[pyfunction(name = "sum_array_parallel")]
#[pyo3(signature = (arr, threads = 4))]
fn py_sum_array_parallel(py: Python<'_>, arr: &Bound<'_, PyAny>, threads: usize) -> PyResult<f64> {
    let array = as_readonly_1d(arr)?;
    with_contiguous(&array, |values| {
        py.allow_threads(|| sum_array_parallel(values, threads))
    })
    .map_err(to_py_error)
}

/// Sum sin(i * 0.0001) for i in range(n)
#[pyfunction(name = "sine_series")]
#[pyo3(signature = (n, strategy = "sequential", threads = 1))]
fn py_sine_series(py: Python<'_>, n: usize, strategy: &str, threads: usize) -> PyResult<f64> {
    let strategy = parse_series_strategy(strategy)?;
    py.allow_threads(|| run_series(strategy, n, threads))
        .map_err(to_py_error)
}

// ============================================================================
// Module Registration
// ============================================================================

#[pymodule]
fn bench_cpp(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_sum_array, m)?)?;
    m.add_function(wrap_pyfunction!(py_sum_array_parallel, m)?)?;
    m.add_function(wrap_pyfunction!(py_sine_series, m)?)?;
    Ok(())
}
