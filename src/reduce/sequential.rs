//! Sequential array summation.

/// Sum a one-dimensional array of `f64` values.
///
/// Values are accumulated left to right, index 0 to N-1, into an accumulator
/// that starts at `0.0`. Plain IEEE-754 addition: no compensated summation,
/// so overflow goes to infinity and a NaN element poisons the result.
///
/// The slice is only borrowed for the duration of the call.
pub fn sum_array(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    for &value in values {
        sum += value;
    }
    sum
}
