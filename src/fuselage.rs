//! A fuselage described by its side and plan view outlines and by a parametric cross-section
//! shape, and the extraction of lateral section curves at longitudinal stations.

use crate::common::linear_space;
use crate::errors::InvalidGeometry;
use crate::func1::Linear1;
use crate::{Point2, Point3, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// The capabilities of a fuselage which are needed to build a fairing against a lifting surface.
/// All longitudinal stations are measured from the fuselage apex, and all returned coordinates
/// are relative to the apex as well.
pub trait FuselageGeometry {
    /// The position of the fuselage nose (the origin of its construction axes) in the body frame
    fn apex(&self) -> Point3;

    /// The right side of the cross section at the station `x`, as `(y, z)` points in the
    /// order top center, side, bottom center.
    fn section_at_x(&self, x: f64) -> Result<Vec<Point2>>;

    /// The z of the camber line of the side view at the station `x`, halfway between the upper
    /// and lower outlines
    fn camber_z_at_x(&self, x: f64) -> f64;

    /// The full width of the fuselage at the station `x`
    fn width_at_x(&self, x: f64) -> f64;
}

/// The outline of the fuselage at one longitudinal station, relative to the apex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuselageStation {
    pub x: f64,
    pub z_upper: f64,
    pub z_lower: f64,
    pub half_width: f64,
}

/// The parametric cross-section shape. Each half of the section (above and below the line of
/// maximum width) is a superellipse quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionShape {
    /// Height of the line of maximum width above the bottom, as a fraction of the total height
    pub lower_to_total_height: f64,

    /// Superellipse exponent of the upper half, 2.0 being an ellipse and larger values squarer
    pub upper_exponent: f64,

    /// Superellipse exponent of the lower half
    pub lower_exponent: f64,

    /// Number of points generated on each half of the section
    pub points_per_half: usize,
}

impl Default for SectionShape {
    fn default() -> Self {
        Self {
            lower_to_total_height: 0.5,
            upper_exponent: 2.0,
            lower_exponent: 2.0,
            points_per_half: 30,
        }
    }
}

impl SectionShape {
    /// Generate the right half of a section with the given outline values, from the top center
    /// around to the bottom center. The side point is shared by both halves and appears once.
    pub fn generate(&self, z_upper: f64, z_lower: f64, half_width: f64) -> Vec<Point2> {
        let z_side = z_lower + self.lower_to_total_height * (z_upper - z_lower);
        let m = self.points_per_half.max(2);
        let mut points = Vec::with_capacity(2 * m - 1);

        for t in linear_space(0.0, FRAC_PI_2, m) {
            let (s, c) = t.sin_cos();
            points.push(Point2::new(
                half_width * superellipse_term(s, self.upper_exponent),
                z_side + (z_upper - z_side) * superellipse_term(c, self.upper_exponent),
            ));
        }

        for t in linear_space(FRAC_PI_2, 2.0 * FRAC_PI_2, m).into_iter().skip(1) {
            let (s, c) = t.sin_cos();
            points.push(Point2::new(
                half_width * superellipse_term(s, self.lower_exponent),
                z_side - (z_side - z_lower) * superellipse_term(c, self.lower_exponent),
            ));
        }

        points
    }
}

fn superellipse_term(v: f64, exponent: f64) -> f64 {
    v.abs().powf(2.0 / exponent)
}

/// The overall dimensions of a conventional nose/cabin/tail fuselage, used to generate its
/// outline stations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuselageParameters {
    pub nose_length: f64,
    pub cabin_length: f64,
    pub tail_length: f64,

    /// Height of the cabin section
    pub height: f64,

    /// Width of the cabin section
    pub width: f64,

    /// Height of the nose tip above the cabin camber line
    #[serde(default)]
    pub nose_tip_offset: f64,

    /// Height of the tail tip above the cabin camber line
    #[serde(default)]
    pub tail_tip_offset: f64,

    /// Height and width of the tail tip as a fraction of the cabin height and width
    #[serde(default = "default_tail_tip_fraction")]
    pub tail_tip_fraction: f64,
}

fn default_tail_tip_fraction() -> f64 {
    0.1
}

impl FuselageParameters {
    pub fn length(&self) -> f64 {
        self.nose_length + self.cabin_length + self.tail_length
    }

    /// Generate outline stations: the nose grows elliptically from its tip to the cabin section,
    /// the cabin is constant, and the tail tapers linearly to its tip.
    pub fn stations(&self, per_segment: usize) -> Vec<FuselageStation> {
        let n = per_segment.max(2);
        let h = self.height * 0.5;
        let w = self.width * 0.5;
        let mut stations = Vec::with_capacity(3 * n);

        for x in linear_space(0.0, self.nose_length, n) {
            let f = if self.nose_length > 0.0 {
                let u = 1.0 - x / self.nose_length;
                (1.0 - u * u).max(0.0).sqrt()
            } else {
                1.0
            };
            let zc = self.nose_tip_offset * (1.0 - f);
            stations.push(FuselageStation {
                x,
                z_upper: zc + h * f,
                z_lower: zc - h * f,
                half_width: w * f,
            });
        }

        let cabin_end = self.nose_length + self.cabin_length;
        for x in linear_space(self.nose_length, cabin_end, n).into_iter().skip(1) {
            stations.push(FuselageStation {
                x,
                z_upper: h,
                z_lower: -h,
                half_width: w,
            });
        }

        for x in linear_space(cabin_end, self.length(), n).into_iter().skip(1) {
            let u = if self.tail_length > 0.0 {
                (x - cabin_end) / self.tail_length
            } else {
                1.0
            };
            let f = 1.0 + u * (self.tail_tip_fraction - 1.0);
            let zc = self.tail_tip_offset * u;
            stations.push(FuselageStation {
                x,
                z_upper: zc + h * f,
                z_lower: zc - h * f,
                half_width: w * f,
            });
        }

        // Zero length segments repeat their start station
        stations.dedup_by(|s, prev| s.x <= prev.x);
        stations
    }
}

#[derive(Debug, Clone)]
pub struct Fuselage {
    apex: Point3,
    shape: SectionShape,
    stations: Vec<FuselageStation>,
    z_upper: Linear1,
    z_lower: Linear1,
    half_width: Linear1,
}

impl Fuselage {
    /// Create a fuselage from its outline stations, which must be in strictly ascending `x`.
    /// Outside of the stations the end values are held constant.
    pub fn try_new(apex: Point3, stations: Vec<FuselageStation>, shape: SectionShape) -> Result<Self> {
        if stations.len() < 2 {
            return Err(Box::new(InvalidGeometry::NotEnoughPoints {
                needed: 2,
                found: stations.len(),
            }));
        }

        let xs = stations.iter().map(|s| s.x).collect::<Vec<_>>();
        let z_upper = stations.iter().map(|s| s.z_upper).collect::<Vec<_>>();
        let z_lower = stations.iter().map(|s| s.z_lower).collect::<Vec<_>>();
        let half_width = stations.iter().map(|s| s.half_width).collect::<Vec<_>>();

        Ok(Self {
            apex,
            shape,
            z_upper: Linear1::try_new(&xs, &z_upper)?,
            z_lower: Linear1::try_new(&xs, &z_lower)?,
            half_width: Linear1::try_new(&xs, &half_width)?,
            stations,
        })
    }

    /// Create a conventional fuselage from its overall dimensions
    pub fn from_parameters(apex: Point3, params: &FuselageParameters, shape: SectionShape) -> Result<Self> {
        Self::try_new(apex, params.stations(25), shape)
    }

    pub fn stations(&self) -> &[FuselageStation] {
        &self.stations
    }

    pub fn shape(&self) -> &SectionShape {
        &self.shape
    }

    pub fn length(&self) -> f64 {
        self.stations[self.stations.len() - 1].x - self.stations[0].x
    }

    pub fn z_upper_at_x(&self, x: f64) -> f64 {
        self.z_upper.value_clamped(x)
    }

    pub fn z_lower_at_x(&self, x: f64) -> f64 {
        self.z_lower.value_clamped(x)
    }

    pub fn half_width_at_x(&self, x: f64) -> f64 {
        self.half_width.value_clamped(x)
    }

    /// The left side of the cross section at the station `x`: the right side mirrored and
    /// reversed, so that it runs from the bottom center around to the top center.
    pub fn section_left_at_x(&self, x: f64) -> Result<Vec<Point2>> {
        let mut points = self.section_at_x(x)?;
        points.iter_mut().for_each(|p| p.x = -p.x);
        points.reverse();
        Ok(points)
    }
}

impl FuselageGeometry for Fuselage {
    fn apex(&self) -> Point3 {
        self.apex
    }

    fn section_at_x(&self, x: f64) -> Result<Vec<Point2>> {
        if !x.is_finite() {
            return Err(Box::new(InvalidGeometry::NonFinite));
        }
        Ok(self
            .shape
            .generate(self.z_upper_at_x(x), self.z_lower_at_x(x), self.half_width_at_x(x)))
    }

    fn camber_z_at_x(&self, x: f64) -> f64 {
        0.5 * (self.z_upper_at_x(x) + self.z_lower_at_x(x))
    }

    fn width_at_x(&self, x: f64) -> f64 {
        2.0 * self.half_width_at_x(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn airliner() -> Fuselage {
        let params = FuselageParameters {
            nose_length: 6.0,
            cabin_length: 20.0,
            tail_length: 10.0,
            height: 4.0,
            width: 3.6,
            nose_tip_offset: -0.5,
            tail_tip_offset: 1.0,
            tail_tip_fraction: 0.1,
        };
        Fuselage::from_parameters(Point3::new(0.0, 0.0, 0.0), &params, SectionShape::default())
            .unwrap()
    }

    #[test]
    fn test_section_order_and_ends() {
        let fus = airliner();
        let section = fus.section_at_x(15.0).unwrap();
        assert_eq!(section.len(), 59);
        assert_relative_eq!(section[0], Point2::new(0.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(section[29], Point2::new(1.8, 0.0), epsilon = 1e-12);
        assert_relative_eq!(section[58], Point2::new(0.0, -2.0), epsilon = 1e-9);
    }

    #[test]
    fn test_elliptic_section_on_ellipse() {
        let fus = airliner();
        for p in fus.section_at_x(15.0).unwrap() {
            let r = (p.x / 1.8).powi(2) + (p.y / 2.0).powi(2);
            assert_relative_eq!(r, 1.0, epsilon = 1e-9);
        }
    }

    #[test_case(15.0, 0.0, 3.6)]
    #[test_case(36.0, 1.0, 0.36)]
    #[test_case(50.0, 1.0, 0.36)]
    #[test_case(-3.0, -0.5, 0.0)]
    fn test_outline_lookup(x: f64, camber: f64, width: f64) {
        let fus = airliner();
        assert_relative_eq!(fus.camber_z_at_x(x), camber, epsilon = 1e-9);
        assert_relative_eq!(fus.width_at_x(x), width, epsilon = 1e-9);
    }

    #[test]
    fn test_side_point_height() {
        let shape = SectionShape {
            lower_to_total_height: 0.25,
            ..SectionShape::default()
        };
        let section = shape.generate(1.0, -1.0, 1.0);
        let side = section
            .iter()
            .fold(section[0], |best, p| if p.x > best.x { *p } else { best });
        assert_relative_eq!(side.y, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_left_section_mirrors() {
        let fus = airliner();
        let right = fus.section_at_x(10.0).unwrap();
        let left = fus.section_left_at_x(10.0).unwrap();
        assert_eq!(left.len(), right.len());
        assert_relative_eq!(left[0].x, -right[right.len() - 1].x);
        assert_relative_eq!(left[0].y, right[right.len() - 1].y);
    }

    #[test]
    fn test_rejects_single_station() {
        let station = FuselageStation {
            x: 0.0,
            z_upper: 1.0,
            z_lower: -1.0,
            half_width: 1.0,
        };
        assert!(Fuselage::try_new(Point3::origin(), vec![station], SectionShape::default()).is_err());
    }
}
