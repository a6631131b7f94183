//! Geometry for the construction of wing/fuselage fairings. Airfoil sections of a lifting
//! surface and cross sections of a fuselage are extracted at the stations of interest, the
//! relative position of the two components is classified, and the contact points and principal
//! dimensions of the fairing are computed for use by downstream solid builders.

use std::error::Error;

pub mod airfoil;
pub mod common;
pub mod config;
pub mod errors;
pub mod fairing;
pub mod func1;
pub mod fuselage;
mod geom2;
mod geom3;
pub mod lifting_surface;

pub use self::geom2::Point2;
pub use self::geom3::{Iso3, Point3, Vector3};

pub use airfoil::{AirfoilPointSet, AirfoilShape};
pub use errors::InvalidGeometry;
pub use fairing::{FairingDataCollection, FairingFactors, FairingPosition};
pub use fuselage::{Fuselage, FuselageGeometry};
pub use lifting_surface::{LiftingSurface, LiftingSurfaceGeometry, LiftingSurfaceKind};

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

