use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum InvalidGeometry {
    /// A curve or sample set has fewer points than the operation requires
    NotEnoughPoints { needed: usize, found: usize },

    /// A point set which must contain at least one point was empty
    EmptyPointSet,

    /// Two parallel value sequences have different lengths
    MismatchedLengths(usize, usize),

    /// A sequence of abscissas is not strictly ascending
    NotStrictlyAscending,

    /// A value is NaN or infinite
    NonFinite,

    /// A spanwise station lies outside of the lifting surface
    StationOutOfRange { station: f64, min: f64, max: f64 },

    /// An interpolator was queried outside of its sampled domain
    OutOfDomain { x: f64, min: f64, max: f64 },
}

impl Display for InvalidGeometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGeometry::NotEnoughPoints { needed, found } => {
                write!(f, "not enough points: needed {}, found {}", needed, found)
            }
            InvalidGeometry::MismatchedLengths(a, b) => {
                write!(f, "mismatched sequence lengths: {} and {}", a, b)
            }
            InvalidGeometry::StationOutOfRange { station, min, max } => write!(
                f,
                "station {} is outside of the surface span [{}, {}]",
                station, min, max
            ),
            InvalidGeometry::OutOfDomain { x, min, max } => write!(
                f,
                "value {} is outside of the interpolation domain [{}, {}]",
                x, min, max
            ),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl Error for InvalidGeometry {}
