//! A lifting surface (wing, tail plane, fin or canard) described by its spanwise break points,
//! and the extraction of placed airfoil sections at arbitrary spanwise stations.

use crate::airfoil::{camber_line, AirfoilPointSet, AirfoilShape};
use crate::common::points::transform_points;
use crate::errors::InvalidGeometry;
use crate::func1::Linear1;
use crate::{Iso3, Point2, Point3, Result, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Break points closer than this to a station are considered to contain it
const STATION_TOL: f64 = 1e-5;

/// The capabilities of a lifting surface which are needed to build a fairing against a fuselage.
pub trait LiftingSurfaceGeometry {
    /// The type of surface, used to name the joined components
    fn kind(&self) -> LiftingSurfaceKind;

    /// The chord at the root station, in meters
    fn root_chord(&self) -> f64;

    /// The thickness to chord ratio of the root airfoil
    fn root_thickness_to_chord(&self) -> f64;

    /// The placed airfoil section at the spanwise station `y`, measured from the surface apex
    fn airfoil_at_y(&self, y: f64) -> Result<AirfoilPointSet>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiftingSurfaceKind {
    Wing,
    HorizontalTail,
    VerticalTail,
    Canard,
}

impl Display for LiftingSurfaceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LiftingSurfaceKind::Wing => "WING",
            LiftingSurfaceKind::HorizontalTail => "HORIZONTAL_TAIL",
            LiftingSurfaceKind::VerticalTail => "VERTICAL_TAIL",
            LiftingSurfaceKind::Canard => "CANARD",
        };
        write!(f, "{}", s)
    }
}

/// The definition of a lifting surface at one spanwise break point. Lengths are in meters and
/// are relative to the surface apex; the twist is in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakPoint {
    pub y: f64,
    pub x_le: f64,
    pub z_le: f64,
    pub chord: f64,
    pub twist: f64,
    pub airfoil: AirfoilShape,
}

#[derive(Debug, Clone)]
pub struct LiftingSurface {
    kind: LiftingSurfaceKind,
    apex: Point3,
    rigging_angle: f64,
    break_points: Vec<BreakPoint>,
    x_le: Linear1,
    z_le: Linear1,
    chord: Linear1,
    twist: Linear1,
}

impl LiftingSurface {
    /// Create a lifting surface from its break points.
    ///
    /// # Arguments
    ///
    /// * `kind`: the type of surface. Vertical tails extend along +z instead of +y.
    /// * `apex`: the position of the root leading edge in the body frame
    /// * `rigging_angle`: the incidence of the whole surface, in radians, added to the twist
    /// * `break_points`: at least two break points in strictly ascending spanwise order, the
    /// first of which defines the root
    ///
    /// returns: Result<LiftingSurface, Box<dyn Error, Global>>
    pub fn try_new(
        kind: LiftingSurfaceKind,
        apex: Point3,
        rigging_angle: f64,
        break_points: Vec<BreakPoint>,
    ) -> Result<Self> {
        if break_points.len() < 2 {
            return Err(Box::new(InvalidGeometry::NotEnoughPoints {
                needed: 2,
                found: break_points.len(),
            }));
        }

        let ys = break_points.iter().map(|b| b.y).collect::<Vec<_>>();
        let table = |f: fn(&BreakPoint) -> f64| {
            Linear1::try_new(&ys, &break_points.iter().map(f).collect::<Vec<_>>())
        };

        Ok(Self {
            kind,
            apex,
            rigging_angle,
            x_le: table(|b| b.x_le)?,
            z_le: table(|b| b.z_le)?,
            chord: table(|b| b.chord)?,
            twist: table(|b| b.twist)?,
            break_points,
        })
    }

    pub fn kind(&self) -> LiftingSurfaceKind {
        self.kind
    }

    pub fn apex(&self) -> Point3 {
        self.apex
    }

    pub fn rigging_angle(&self) -> f64 {
        self.rigging_angle
    }

    pub fn break_points(&self) -> &[BreakPoint] {
        &self.break_points
    }

    /// The spanwise station of the root
    pub fn root_station(&self) -> f64 {
        self.break_points[0].y
    }

    /// The spanwise station of the tip
    pub fn semispan(&self) -> f64 {
        self.break_points[self.break_points.len() - 1].y
    }

    /// The chord at the spanwise station `y`
    pub fn chord_at(&self, y: f64) -> f64 {
        self.chord.value_clamped(y)
    }

    /// Find the panel (pair of consecutive break points) which contains the station `y`. A
    /// station on a break point belongs to the inner panel.
    fn panel_index(&self, y: f64) -> Result<usize> {
        let (min, max) = (self.root_station(), self.semispan());
        self.break_points
            .windows(2)
            .position(|w| {
                (y > w[0].y && y < w[1].y)
                    || (y - w[0].y).abs() <= STATION_TOL
                    || (y - w[1].y).abs() <= STATION_TOL
            })
            .ok_or_else(|| InvalidGeometry::StationOutOfRange { station: y, min, max }.into())
    }

    /// Generate the airfoil section at the spanwise station `y`. The airfoil of the inner break
    /// point of the containing panel is used, with its thickness scaled linearly across the panel
    /// toward the thickness ratio of the outer break point airfoil.
    ///
    /// # Arguments
    ///
    /// * `y`: the spanwise station, relative to the apex, which must lie on the surface
    ///
    /// returns: Result<AirfoilPointSet, Box<dyn Error, Global>>
    pub fn generate_airfoil_at_y(&self, y: f64) -> Result<AirfoilPointSet> {
        let i = self.panel_index(y)?;
        let inner = &self.break_points[i];
        let outer = &self.break_points[i + 1];

        let tc_in = inner.airfoil.thickness_to_chord();
        let tc_out = outer.airfoil.thickness_to_chord();
        let ratio = if tc_in.abs() > f64::EPSILON {
            tc_out / tc_in
        } else {
            1.0
        };
        let scale = Linear1::try_new(&[inner.y, outer.y], &[1.0, ratio])?.value_extrapolated(y);

        let points = inner.airfoil.section_points(scale);
        AirfoilPointSet::try_new(self.generate_pts_at_y(&points, y))
    }

    /// Generate the chord line at the spanwise station `y`, as the trailing edge point followed
    /// by the leading edge point.
    pub fn generate_chord_at_y(&self, y: f64) -> Result<[Point3; 2]> {
        self.panel_index(y)?;
        let points = self.generate_pts_at_y(&[Point2::new(1.0, 0.0), Point2::new(0.0, 0.0)], y);
        Ok([points[0], points[1]])
    }

    /// Generate the mean camber line of the airfoil at the spanwise station `y`, from the leading
    /// edge toward the trailing edge.
    pub fn generate_camber_at_y(&self, y: f64, count: usize) -> Result<Vec<Point3>> {
        let i = self.panel_index(y)?;
        let camber = camber_line(&self.break_points[i].airfoil, count)?;
        Ok(self.generate_pts_at_y(&camber, y))
    }

    /// Place normalized section points (x and z as chord fractions) at the station `y`: scale by
    /// the local chord, rotate by the local twist plus the rigging angle about the leading edge,
    /// and move to the local leading edge.
    fn generate_pts_at_y(&self, points: &[Point2], y: f64) -> Vec<Point3> {
        let x_le = self.x_le.value_extrapolated(y);
        let z_le = self.z_le.value_extrapolated(y);
        let chord = self.chord.value_extrapolated(y);
        let twist = self.twist.value_extrapolated(y);

        let local = points
            .iter()
            .map(|p| Point3::new(p.x * chord, 0.0, p.y * chord))
            .collect::<Vec<_>>();
        let rotation = Iso3::rotation(Vector3::y() * (twist + self.rigging_angle));

        transform_points(&local, &rotation)
            .into_iter()
            .map(|p| match self.kind {
                LiftingSurfaceKind::VerticalTail => Point3::new(
                    self.apex.x + x_le + p.x,
                    self.apex.y - p.z,
                    self.apex.z + y,
                ),
                _ => Point3::new(
                    self.apex.x + x_le + p.x,
                    self.apex.y + y,
                    self.apex.z + z_le + p.z,
                ),
            })
            .collect()
    }
}

impl LiftingSurfaceGeometry for LiftingSurface {
    fn kind(&self) -> LiftingSurfaceKind {
        self.kind
    }

    fn root_chord(&self) -> f64 {
        self.break_points[0].chord
    }

    fn root_thickness_to_chord(&self) -> f64 {
        self.break_points[0].airfoil.thickness_to_chord()
    }

    fn airfoil_at_y(&self, y: f64) -> Result<AirfoilPointSet> {
        self.generate_airfoil_at_y(y)
    }
}
