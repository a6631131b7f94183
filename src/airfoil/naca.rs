use crate::airfoil::AirfoilShape;
use crate::common::linear_space;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Number of stations per surface used when a NACA airfoil is converted without an explicit
/// point count.
pub(crate) const DEFAULT_HALF_POINTS: usize = 61;

/// A [4-digit NACA airfoil](https://en.wikipedia.org/wiki/NACA_airfoil), described by its maximum
/// camber, the chordwise location of the maximum camber, and its maximum thickness, all as
/// fractions of the chord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Naca4 {
    /// Maximum camber
    pub m: f64,

    /// Location of maximum camber
    pub p: f64,

    /// Maximum thickness
    pub t: f64,
}

impl Naca4 {
    pub fn new(m: f64, p: f64, t: f64) -> Self {
        Self { m, p, t }
    }

    /// Create the airfoil from its designation, e.g. `Naca4::from_digits(2412)`
    pub fn from_digits(digits: u16) -> Self {
        let m = (digits / 1000) as f64 / 100.0;
        let p = ((digits / 100) % 10) as f64 / 10.0;
        let t = (digits % 100) as f64 / 100.0;
        Self { m, p, t }
    }

    fn camber(&self, x: f64) -> (f64, f64) {
        if self.m == 0.0 || self.p <= 0.0 {
            (0.0, 0.0)
        } else if x <= self.p {
            let yc = self.m / (self.p * self.p) * (2.0 * self.p * x - x * x);
            let dyc = 2.0 * self.m / (self.p * self.p) * (self.p - x);
            (yc, dyc)
        } else {
            let q = 1.0 - self.p;
            let yc = self.m / (q * q) * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x * x);
            let dyc = 2.0 * self.m / (q * q) * (self.p - x);
            (yc, dyc)
        }
    }

    fn half_thickness(&self, x: f64) -> f64 {
        5.0 * self.t
            * (0.2969 * x.sqrt() + (-0.126 + (-0.3516 + (0.2843 - 0.1015 * x) * x) * x) * x)
    }

    /// Generate the normalized airfoil shape with `half_points` cosine-spaced stations on each
    /// surface. The leading edge station is shared by both surfaces, so the shape has
    /// `2 * half_points - 1` points.
    pub fn shape(&self, half_points: usize) -> AirfoilShape {
        let half_points = half_points.max(2);
        let stations = linear_space(0.0, PI, half_points)
            .into_iter()
            .map(|beta| 0.5 * (1.0 - beta.cos()))
            .collect::<Vec<_>>();

        let mut x = Vec::with_capacity(2 * half_points - 1);
        let mut z = Vec::with_capacity(2 * half_points - 1);

        // Upper surface, trailing edge to leading edge
        for xs in stations.iter().rev() {
            let (yc, dyc) = self.camber(*xs);
            let theta = dyc.atan();
            let yt = self.half_thickness(*xs);
            x.push(xs - yt * theta.sin());
            z.push(yc + yt * theta.cos());
        }

        // Lower surface, leading edge (excluded) to trailing edge
        for xs in stations.iter().skip(1) {
            let (yc, dyc) = self.camber(*xs);
            let theta = dyc.atan();
            let yt = self.half_thickness(*xs);
            x.push(xs + yt * theta.sin());
            z.push(yc - yt * theta.cos());
        }

        AirfoilShape {
            x,
            z,
            thickness_to_chord: self.t,
        }
    }
}
