use crate::common::points::{max_by_axis, min_by_axis};
use crate::errors::InvalidGeometry;
use crate::{Point3, Result};

/// The ordered points of one airfoil section of a lifting surface, placed in the body reference
/// frame. A point set is never empty, so its extreme points always exist. Each extreme point is
/// the first point encountered with the extreme coordinate value.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilPointSet {
    points: Vec<Point3>,
    top: Point3,
    bottom: Point3,
    leading_edge: Point3,
    trailing_edge: Point3,
}

impl AirfoilPointSet {
    pub fn try_new(points: Vec<Point3>) -> Result<Self> {
        let top = max_by_axis(&points, 2).ok_or(InvalidGeometry::EmptyPointSet)?;
        let bottom = min_by_axis(&points, 2).ok_or(InvalidGeometry::EmptyPointSet)?;
        let leading_edge = min_by_axis(&points, 0).ok_or(InvalidGeometry::EmptyPointSet)?;
        let trailing_edge = max_by_axis(&points, 0).ok_or(InvalidGeometry::EmptyPointSet)?;

        Ok(Self {
            points,
            top,
            bottom,
            leading_edge,
            trailing_edge,
        })
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point with the largest z
    pub fn top(&self) -> Point3 {
        self.top
    }

    /// The point with the smallest z
    pub fn bottom(&self) -> Point3 {
        self.bottom
    }

    /// The point with the smallest x
    pub fn leading_edge(&self) -> Point3 {
        self.leading_edge
    }

    /// The point with the largest x
    pub fn trailing_edge(&self) -> Point3 {
        self.trailing_edge
    }
}

impl TryFrom<Vec<Point3>> for AirfoilPointSet {
    type Error = Box<dyn std::error::Error>;

    fn try_from(points: Vec<Point3>) -> Result<Self> {
        Self::try_new(points)
    }
}
