//! Greedy filtering of a `(y, z)` point sequence into one which is strictly monotonic in `y`.
//!
//! A fuselage cross-section branch traced from the top (or bottom) center toward the side is
//! usually, but not necessarily, monotonic in `y`: bulges and sponsons fold the outline back on
//! itself. Interpolating over such a branch requires a strictly ordered abscissa, so points which
//! would break the ordering are dropped.

use crate::common::vecf64::reversed;
use crate::errors::InvalidGeometry;
use crate::func1::Interpolator1;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Two parallel sequences of `y` and `z` values in which `y` is strictly increasing or strictly
/// decreasing. Always non-empty and always of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonotonicYZSequence {
    y: Vec<f64>,
    z: Vec<f64>,
    increasing: bool,
}

impl MonotonicYZSequence {
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// True if `y` is strictly increasing, false if it is strictly decreasing
    pub fn is_increasing(&self) -> bool {
        self.increasing
    }

    /// Interpolate the `z` value of the sequence at the given `y`. The samples are presented to
    /// the interpolator with `y` ascending.
    pub fn z_at_y(&self, interp: &dyn Interpolator1, y: f64) -> Result<f64> {
        if self.increasing {
            interp.interpolate(&self.y, &self.z, y)
        } else {
            interp.interpolate(&reversed(&self.y), &reversed(&self.z), y)
        }
    }

    /// Interpolate the `y` value of the sequence at the given `z`, treating `z` as the abscissa.
    /// The samples are reversed when the sequence runs toward lower `z`, which is the case for
    /// both branches of a fuselage section traced from the center line toward the side. The `z`
    /// values must be strictly monotonic for this to succeed.
    pub fn y_at_z(&self, interp: &dyn Interpolator1, z: f64) -> Result<f64> {
        let descending = self.z.first() > self.z.last();
        if descending {
            interp.interpolate(&reversed(&self.z), &reversed(&self.y), z)
        } else {
            interp.interpolate(&self.z, &self.y, z)
        }
    }
}

/// Filter an ordered `(y, z)` sequence so that `y` is strictly monotonic. The first pair is
/// always kept; each following pair is kept only if its `y` is strictly greater (or strictly
/// less, when `strictly_increasing` is false) than the `y` of the last pair which was kept.
/// Rejected pairs are dropped without any interpolation.
///
/// # Arguments
///
/// * `y`: the `y` values of the sequence, in order
/// * `z`: the `z` values of the sequence, one for each `y`
/// * `strictly_increasing`: the required direction of `y` in the output
///
/// returns: Result<MonotonicYZSequence, Box<dyn Error, Global>>
///
/// # Examples
///
/// ```
/// use fairgeom::func1::obtain_monotonic_sequence;
/// let y = vec![0.0, 1.0, 0.5, 2.0, 2.0, 3.0];
/// let z = vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0];
/// let seq = obtain_monotonic_sequence(&y, &z, true).unwrap();
/// assert_eq!(seq.y(), &[0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(seq.z(), &[5.0, 4.0, 2.0, 0.0]);
/// ```
pub fn obtain_monotonic_sequence(
    y: &[f64],
    z: &[f64],
    strictly_increasing: bool,
) -> Result<MonotonicYZSequence> {
    if y.len() != z.len() {
        return Err(Box::new(InvalidGeometry::MismatchedLengths(y.len(), z.len())));
    }
    if y.is_empty() {
        return Err(Box::new(InvalidGeometry::EmptyPointSet));
    }

    let mut ym = vec![y[0]];
    let mut zm = vec![z[0]];
    for (yi, zi) in y.iter().zip(z.iter()).skip(1) {
        let last = ym[ym.len() - 1];
        let accept = if strictly_increasing {
            *yi > last
        } else {
            *yi < last
        };

        if accept {
            ym.push(*yi);
            zm.push(*zi);
        }
    }

    if ym.len() < y.len() {
        debug!(
            kept = ym.len(),
            dropped = y.len() - ym.len(),
            strictly_increasing,
            "Dropped points breaking y monotonicity"
        );
    }

    Ok(MonotonicYZSequence {
        y: ym,
        z: zm,
        increasing: strictly_increasing,
    })
}
