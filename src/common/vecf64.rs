//! Checks on plain slices of f64 values.

/// Returns true if every value in the slice is finite
pub fn are_all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Returns true if each value is strictly greater than the one before it. Empty and single
/// element slices are considered ascending.
pub fn are_strictly_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] > w[0])
}

/// Returns true if each value is strictly less than the one before it.
pub fn are_strictly_descending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] < w[0])
}

/// Returns a reversed copy of the slice
pub fn reversed(values: &[f64]) -> Vec<f64> {
    values.iter().rev().copied().collect()
}
