use crate::common::DiscreteDomain;
use crate::errors::InvalidGeometry;
use crate::Result;

/// Piecewise linear function through a set of samples with a strictly ascending abscissa. This
/// is how outline tables and spanwise break-point distributions are looked up.
#[derive(Debug, Clone)]
pub struct Linear1 {
    domain: DiscreteDomain,
    ys: Vec<f64>,
}

impl Linear1 {
    pub fn try_new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Box::new(InvalidGeometry::MismatchedLengths(xs.len(), ys.len())));
        }
        if xs.is_empty() {
            return Err(Box::new(InvalidGeometry::NotEnoughPoints { needed: 1, found: 0 }));
        }
        if ys.iter().any(|y| !y.is_finite()) {
            return Err(Box::new(InvalidGeometry::NonFinite));
        }

        Ok(Self {
            domain: DiscreteDomain::try_from(xs.to_vec())?,
            ys: ys.to_vec(),
        })
    }

    pub fn domain(&self) -> &DiscreteDomain {
        &self.domain
    }

    /// Evaluate at `x`, holding the first and last values constant outside of the domain.
    pub fn value_clamped(&self, x: f64) -> f64 {
        let xs = self.domain.values();
        let n = xs.len();
        if x <= xs[0] {
            return self.ys[0];
        }
        if x >= xs[n - 1] {
            return self.ys[n - 1];
        }

        match self.domain.interval_of(x) {
            Some(i) => {
                let f = (x - xs[i]) / (xs[i + 1] - xs[i]);
                self.ys[i] + f * (self.ys[i + 1] - self.ys[i])
            }
            None => self.ys[0],
        }
    }

    /// Evaluate at `x`, extending the end segments linearly outside of the domain. A single
    /// sample is treated as a constant.
    pub fn value_extrapolated(&self, x: f64) -> f64 {
        let xs = self.domain.values();
        match self.domain.interval_of(x) {
            Some(i) => {
                let f = (x - xs[i]) / (xs[i + 1] - xs[i]);
                self.ys[i] + f * (self.ys[i + 1] - self.ys[i])
            }
            None => self.ys[0],
        }
    }
}
