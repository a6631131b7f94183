//! This module contains an abstraction for working with a discrete domain of scalar f64 values,
//! where the values are always strictly ascending and only finite values are allowed. It is the
//! sample domain used by the 1D interpolators.

use crate::common::vecf64::{are_all_finite, are_strictly_ascending};
use crate::errors::InvalidGeometry;
use crate::Result;
use std::error::Error;

/// A discrete domain of scalar f64 values, in which all values are guaranteed to be finite and
/// in strictly ascending order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DiscreteDomain {
    values: Vec<f64>,
}

impl DiscreteDomain {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Try to push a value onto the end of the domain. The value must be finite and strictly
    /// greater than the last value in the domain (unless the domain is empty).
    ///
    /// # Arguments
    ///
    /// * `value`: a finite value to add to the domain, must be greater than the last value in the
    /// domain (unless the domain is empty)
    ///
    /// returns: Result<(), Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use fairgeom::common::DiscreteDomain;
    /// let mut domain = DiscreteDomain::default();
    /// domain.push(1.0).unwrap();
    /// domain.push(2.0).unwrap();
    /// assert!(domain.push(2.0).is_err());
    ///
    /// assert_eq!(domain.values(), vec![1.0, 2.0]);
    /// ```
    pub fn push(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Box::new(InvalidGeometry::NonFinite));
        }
        if let Some(last) = self.last() {
            if value <= last {
                return Err(Box::new(InvalidGeometry::NotStrictlyAscending));
            }
        }
        self.values.push(value);
        Ok(())
    }

    /// Find the index `i` of the interval `[values[i], values[i + 1]]` which contains `x`. Values
    /// before the domain map to the first interval and values after it map to the last, so the
    /// caller decides whether extrapolation is acceptable. Returns `None` if the domain has fewer
    /// than two values.
    pub fn interval_of(&self, x: f64) -> Option<usize> {
        let n = self.values.len();
        if n < 2 {
            return None;
        }

        // partition_point gives the count of values <= x
        let i = self.values.partition_point(|v| *v <= x);
        Some(i.saturating_sub(1).min(n - 2))
    }

    /// Returns true if `x` lies within the domain bounds, widened by `tol` on both ends
    pub fn contains(&self, x: f64, tol: f64) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => x >= a - tol && x <= b + tol,
            _ => false,
        }
    }
}

impl TryFrom<Vec<f64>> for DiscreteDomain {
    type Error = Box<dyn Error>;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        if !are_all_finite(&values) {
            return Err(Box::new(InvalidGeometry::NonFinite));
        }

        if !are_strictly_ascending(&values) {
            return Err(Box::new(InvalidGeometry::NotStrictlyAscending));
        }

        Ok(Self { values })
    }
}
