//! Mean camber line of a normalized airfoil shape, taken as the average of the upper and lower
//! surfaces at common chordwise stations.

use crate::airfoil::AirfoilShape;
use crate::common::linear_space;
use crate::common::points::mid_point;
use crate::errors::InvalidGeometry;
use crate::func1::{obtain_monotonic_sequence, Spline1};
use crate::{Point2, Result};

/// Two points closer than this along x at the leading edge are treated as the same station
const LE_SPLIT_TOL: f64 = 1e-5;

/// Compute the mean camber line of an airfoil shape. The shape is split at its leading edge (the
/// point of minimum x) into an upper and a lower surface, each surface is interpolated with a
/// natural cubic spline, and the camber point at each station is the midpoint between the two
/// surfaces. The stations are evenly spaced over the chordwise range shared by both surfaces,
/// from the leading edge toward the trailing edge.
///
/// # Arguments
///
/// * `shape`: the normalized airfoil shape
/// * `count`: the number of camber stations to generate, at least 2
///
/// returns: Result<Vec<OPoint<f64, Const<2>>, Global>, Box<dyn Error, Global>>
pub fn camber_line(shape: &AirfoilShape, count: usize) -> Result<Vec<Point2>> {
    let x = shape.x();
    let z = shape.z();
    let i_min = x
        .iter()
        .enumerate()
        .fold(0, |best, (i, v)| if *v < x[best] { i } else { best });

    if i_min == 0 || i_min + 1 >= x.len() {
        return Err(Box::new(InvalidGeometry::NotEnoughPoints {
            needed: 3,
            found: x.len(),
        }));
    }

    // Upper surface runs trailing edge to leading edge in the shape, so reverse it
    let x_upper = x[..=i_min].iter().rev().copied().collect::<Vec<_>>();
    let z_upper = z[..=i_min].iter().rev().copied().collect::<Vec<_>>();

    // The lower surface starts from the leading edge point unless the shape already repeats
    // a point at the same station
    let lower_start = if (x[i_min + 1] - x[i_min]).abs() > LE_SPLIT_TOL {
        i_min
    } else {
        i_min + 1
    };
    let x_lower = &x[lower_start..];
    let z_lower = &z[lower_start..];

    let upper = obtain_monotonic_sequence(&x_upper, &z_upper, true)?;
    let lower = obtain_monotonic_sequence(x_lower, z_lower, true)?;
    let upper = Spline1::try_new(upper.y(), upper.z())?;
    let lower = Spline1::try_new(lower.y(), lower.z())?;

    let start = upper.domain().values()[0].max(lower.domain().values()[0]);
    let end = upper.domain().values()[upper.domain().len() - 1]
        .min(lower.domain().values()[lower.domain().len() - 1]);

    let mut result = Vec::with_capacity(count);
    for xc in linear_space(start, end, count.max(2)) {
        let pu = Point2::new(xc, upper.value(xc)?);
        let pl = Point2::new(xc, lower.value(xc)?);
        result.push(mid_point(&pu, &pl));
    }

    Ok(result)
}
