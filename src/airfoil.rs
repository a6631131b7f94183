//! This module contains structures for working with airfoil sections: the normalized shape of an
//! airfoil as it is specified at a lifting surface break point, and the placed point set of a
//! section taken at a spanwise station, with its top, bottom, leading and trailing edge points.

mod camber;
mod naca;
mod point_set;

use crate::common::points::remove_duplicates;
use crate::errors::InvalidGeometry;
use crate::{Point2, Result};
use serde::{Deserialize, Serialize};

pub use camber::camber_line;
pub use naca::Naca4;
pub use point_set::AirfoilPointSet;

/// Closed trailing edges (first and last points at the same height within this distance) are
/// opened before an airfoil is placed on a surface.
const CLOSED_TE_TOL: f64 = 1e-5;

/// Half of the vertical gap introduced when opening a closed trailing edge, in chord fractions.
const TE_OPENING: f64 = 5e-4;

/// The normalized shape of an airfoil, with coordinates expressed as fractions of the chord.
/// Points are ordered from the trailing edge along the upper surface to the leading edge, then
/// back along the lower surface to the trailing edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilShape {
    x: Vec<f64>,
    z: Vec<f64>,
    thickness_to_chord: f64,
}

impl AirfoilShape {
    /// Create an airfoil shape from its normalized coordinates.
    ///
    /// # Arguments
    ///
    /// * `x`: chordwise coordinates, as fractions of the chord
    /// * `z`: vertical coordinates, as fractions of the chord
    /// * `thickness_to_chord`: the maximum thickness to chord ratio of the airfoil. If `None`,
    /// the difference between the highest and lowest point is used as an estimate.
    ///
    /// returns: Result<AirfoilShape, Box<dyn Error, Global>>
    pub fn try_new(x: Vec<f64>, z: Vec<f64>, thickness_to_chord: Option<f64>) -> Result<Self> {
        if x.len() != z.len() {
            return Err(Box::new(InvalidGeometry::MismatchedLengths(x.len(), z.len())));
        }
        if x.len() < 3 {
            return Err(Box::new(InvalidGeometry::NotEnoughPoints {
                needed: 3,
                found: x.len(),
            }));
        }
        if x.iter().chain(z.iter()).any(|v| !v.is_finite()) {
            return Err(Box::new(InvalidGeometry::NonFinite));
        }

        let thickness_to_chord = thickness_to_chord.unwrap_or_else(|| {
            let (lo, hi) = z
                .iter()
                .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
            hi - lo
        });

        Ok(Self {
            x,
            z,
            thickness_to_chord,
        })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn thickness_to_chord(&self) -> f64 {
        self.thickness_to_chord
    }

    /// The normalized coordinates as points, with `Point2::x` the chordwise and `Point2::y` the
    /// vertical coordinate.
    pub fn points(&self) -> Vec<Point2> {
        self.x
            .iter()
            .zip(self.z.iter())
            .map(|(x, z)| Point2::new(*x, *z))
            .collect()
    }

    /// Prepare the normalized points for placement on a surface. Repeated points are removed
    /// (keeping the first occurrence), the vertical coordinates are multiplied by `z_scale`, and a
    /// closed trailing edge is opened by moving the first point up and the last point down.
    pub fn section_points(&self, z_scale: f64) -> Vec<Point2> {
        let mut points = remove_duplicates(&self.points());
        for p in points.iter_mut() {
            p.y *= z_scale;
        }

        let n = points.len();
        if n > 1 && (points[0].y - points[n - 1].y).abs() < CLOSED_TE_TOL {
            points[0].y += TE_OPENING;
            points[n - 1].y -= TE_OPENING;
        }

        points
    }
}

impl From<Naca4> for AirfoilShape {
    fn from(naca: Naca4) -> Self {
        naca.shape(naca::DEFAULT_HALF_POINTS)
    }
}
