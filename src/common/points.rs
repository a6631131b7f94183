//! Common operations on f64 points in D-dimensional space.

use parry3d_f64::na::{AbstractRotation, Isometry, Point};
use std::collections::HashSet;

/// Returns the distance between two points in D-dimensional space.
///
/// # Arguments
///
/// * `a`: the first point
/// * `b`: the second point
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use fairgeom::common::points::dist;
/// use fairgeom::Point2;
/// let a = Point2::new(1.0, 2.0);
/// let b = Point2::new(3.0, 2.0);
/// let d = dist(&a, &b);
/// assert_eq!(d, 2.0);
/// ```
pub fn dist<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> f64 {
    (a - b).norm()
}

/// Returns the midpoint between two points in D-dimensional space.
///
/// # Examples
///
/// ```
/// use fairgeom::common::points::mid_point;
/// use fairgeom::Point2;
/// let a = Point2::new(1.0, 2.0);
/// let b = Point2::new(3.0, 4.0);
/// let mid = mid_point(&a, &b);
/// assert_eq!(mid, Point2::new(2.0, 3.0));
/// ```
pub fn mid_point<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> Point<f64, D> {
    b + (a - b) * 0.5
}

/// Find the point with the largest value of coordinate `axis`. When several points share the
/// largest value the first one encountered is returned. Returns `None` for an empty slice.
///
/// # Arguments
///
/// * `points`: the points to search
/// * `axis`: the index of the coordinate to compare (0 = x, 1 = y, 2 = z)
///
/// returns: Option<OPoint<f64, Const<{ D }>>>
///
/// # Examples
///
/// ```
/// use fairgeom::common::points::max_by_axis;
/// use fairgeom::Point3;
/// let points = vec![Point3::new(0.0, 0.0, 1.0), Point3::new(1.0, 0.0, 1.0)];
/// assert_eq!(max_by_axis(&points, 2), Some(points[0]));
/// ```
pub fn max_by_axis<const D: usize>(points: &[Point<f64, D>], axis: usize) -> Option<Point<f64, D>> {
    extreme_by_axis(points, axis, |candidate, best| candidate > best)
}

/// Find the point with the smallest value of coordinate `axis`, keeping the first point
/// encountered when several share the smallest value. Returns `None` for an empty slice.
pub fn min_by_axis<const D: usize>(points: &[Point<f64, D>], axis: usize) -> Option<Point<f64, D>> {
    extreme_by_axis(points, axis, |candidate, best| candidate < best)
}

fn extreme_by_axis<const D: usize>(
    points: &[Point<f64, D>],
    axis: usize,
    replaces: impl Fn(f64, f64) -> bool,
) -> Option<Point<f64, D>> {
    let mut iter = points.iter();
    let mut best = *iter.next()?;
    for p in iter {
        if replaces(p[axis], best[axis]) {
            best = *p;
        }
    }
    Some(best)
}

/// Removes exact duplicate points from an ordered point list, keeping the first occurrence of
/// each. The first point of the list is exempt from the check, so a closed list whose last point
/// repeats its first point keeps both ends.
///
/// # Examples
///
/// ```
/// use fairgeom::common::points::remove_duplicates;
/// use fairgeom::Point2;
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 0.0),
/// ];
/// let cleaned = remove_duplicates(&points);
/// assert_eq!(cleaned.len(), 3);
/// ```
pub fn remove_duplicates<const D: usize>(points: &[Point<f64, D>]) -> Vec<Point<f64, D>> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let key = p.coords.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        if i == 0 || seen.insert(key) {
            result.push(*p);
        }
    }
    result
}

/// Generic 2 or 3 dimensional transformation of a slice of `Point` entities by an `Isometry`,
/// resulting in an owned `Vec` of new point entities being created and returned.
///
/// # Arguments
///
/// * `points`: a slice of `Point` entities to transform
/// * `transform`: the `Isometry` to apply to each point
///
/// returns: Vec<OPoint<f64, Const<{ D }>>, Global>
///
/// # Examples
///
/// ```
/// use fairgeom::{Point3, Iso3};
/// use fairgeom::common::points::transform_points;
///
/// let points = vec![Point3::new(1.0, 2.0, 0.0)];
/// let transform = Iso3::translation(1.0, 2.0, 3.0);
/// let transformed_points = transform_points(&points, &transform);
/// assert_eq!(transformed_points[0], Point3::new(2.0, 4.0, 3.0));
/// ```
pub fn transform_points<R, const D: usize>(
    points: &[Point<f64, D>],
    transform: &Isometry<f64, R, D>,
) -> Vec<Point<f64, D>>
where
    R: AbstractRotation<f64, D>,
{
    points.iter().map(|p| transform * p).collect()
}
