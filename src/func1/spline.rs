//! Natural cubic spline through a set of samples with a strictly ascending abscissa.

use super::domain_tol;
use crate::common::DiscreteDomain;
use crate::errors::InvalidGeometry;
use crate::Result;
use itertools::Itertools;

/// A natural cubic spline (zero second derivative at both ends) through `n >= 2` samples. Each
/// interval `i` holds the polynomial `y_i + b_i t + c_i t^2 + d_i t^3` with `t = x - x_i`.
#[derive(Debug, Clone)]
pub struct Spline1 {
    domain: DiscreteDomain,
    ys: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl Spline1 {
    /// Build the spline through the samples `(xs[i], ys[i])`.
    ///
    /// # Arguments
    ///
    /// * `xs`: the abscissas, which must be finite and strictly ascending
    /// * `ys`: the ordinates, one for each abscissa
    ///
    /// returns: Result<Spline1, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use fairgeom::func1::Spline1;
    /// let spline = Spline1::try_new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    /// assert!((spline.value(1.0).unwrap() - 1.0).abs() < 1e-12);
    /// ```
    pub fn try_new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Box::new(InvalidGeometry::MismatchedLengths(xs.len(), ys.len())));
        }
        if xs.len() < 2 {
            return Err(Box::new(InvalidGeometry::NotEnoughPoints {
                needed: 2,
                found: xs.len(),
            }));
        }
        if ys.iter().any(|y| !y.is_finite()) {
            return Err(Box::new(InvalidGeometry::NonFinite));
        }

        let domain = DiscreteDomain::try_from(xs.to_vec())?;
        let n = xs.len() - 1;
        let h = xs.iter().tuple_windows().map(|(a, b)| b - a).collect::<Vec<_>>();

        // Forward sweep of the tridiagonal system for the second derivative terms
        let mut mu = vec![0.0; n];
        let mut z = vec![0.0; n + 1];
        for i in 1..n {
            let g = 2.0 * (xs[i + 1] - xs[i - 1]) - h[i - 1] * mu[i - 1];
            mu[i] = h[i] / g;
            z[i] = (3.0 * (ys[i + 1] * h[i - 1] - ys[i] * (xs[i + 1] - xs[i - 1]) + ys[i - 1] * h[i])
                / (h[i - 1] * h[i])
                - h[i - 1] * z[i - 1])
                / g;
        }

        // Back substitution
        let mut b = vec![0.0; n];
        let mut c = vec![0.0; n + 1];
        let mut d = vec![0.0; n];
        for j in (0..n).rev() {
            c[j] = z[j] - mu[j] * c[j + 1];
            b[j] = (ys[j + 1] - ys[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
            d[j] = (c[j + 1] - c[j]) / (3.0 * h[j]);
        }
        c.truncate(n);

        Ok(Self {
            domain,
            ys: ys.to_vec(),
            b,
            c,
            d,
        })
    }

    pub fn domain(&self) -> &DiscreteDomain {
        &self.domain
    }

    /// Evaluate the spline at `x`. Values outside of the sampled range (beyond a tolerance
    /// scaled to the range) are an error rather than an extrapolation.
    pub fn value(&self, x: f64) -> Result<f64> {
        if !x.is_finite() {
            return Err(Box::new(InvalidGeometry::NonFinite));
        }

        // Both bounds exist since construction requires two samples
        let (min, max) = (self.domain.values()[0], self.domain.values()[self.domain.len() - 1]);
        if !self.domain.contains(x, domain_tol(max - min)) {
            return Err(Box::new(InvalidGeometry::OutOfDomain { x, min, max }));
        }

        let i = self
            .domain
            .interval_of(x)
            .ok_or(InvalidGeometry::NotEnoughPoints { needed: 2, found: self.domain.len() })?;
        let t = x - self.domain.values()[i];
        Ok(self.ys[i] + t * (self.b[i] + t * (self.c[i] + t * self.d[i])))
    }
}
