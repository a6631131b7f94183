//! One dimensional functions sampled at discrete points: interpolators over a strictly ascending
//! domain, and the filter which turns a fuselage section branch into a sequence that can be
//! safely interpolated.

mod linear;
pub mod monotonic;
mod spline;

use crate::Result;

pub use linear::Linear1;
pub use monotonic::{obtain_monotonic_sequence, MonotonicYZSequence};
pub use spline::Spline1;

/// A capability which estimates `y(x)` from a set of samples `(xs, ys)`. The samples must have a
/// strictly ascending `xs`. Implementations decide how the query is treated outside of the
/// sampled range.
pub trait Interpolator1 {
    fn interpolate(&self, xs: &[f64], ys: &[f64], x: f64) -> Result<f64>;
}

/// Natural cubic spline interpolation. Queries outside of the sampled range (beyond a small
/// tolerance relative to the range) are rejected with `InvalidGeometry::OutOfDomain`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplineInterpolator;

impl Interpolator1 for SplineInterpolator {
    fn interpolate(&self, xs: &[f64], ys: &[f64], x: f64) -> Result<f64> {
        Spline1::try_new(xs, ys)?.value(x)
    }
}

/// Piecewise linear interpolation which holds the end values constant outside of the sampled
/// range.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator;

impl Interpolator1 for LinearInterpolator {
    fn interpolate(&self, xs: &[f64], ys: &[f64], x: f64) -> Result<f64> {
        Ok(Linear1::try_new(xs, ys)?.value_clamped(x))
    }
}

/// Absolute tolerance used when deciding whether a query lies inside a sampled range of the
/// given span.
fn domain_tol(span: f64) -> f64 {
    1e-9 * span.abs().max(1.0)
}
