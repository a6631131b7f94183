//! Aircraft configuration files. A configuration describes one fuselage, one lifting surface and
//! the fairing factors to join them, and is read from JSON.
//!
//! ```
//! use fairgeom::config::AircraftConfig;
//! let text = r#"{
//!     "fuselage": {
//!         "apex": [0.0, 0.0, 0.0],
//!         "outline": {"parameters": {"nose_length": 4.0, "cabin_length": 12.0,
//!             "tail_length": 8.0, "height": 3.0, "width": 3.0}}
//!     },
//!     "lifting_surface": {
//!         "kind": "Wing",
//!         "apex": [9.0, 0.0, -0.6],
//!         "break_points": [
//!             {"y": 0.0, "x_le": 0.0, "chord": 3.0, "airfoil": {"naca": 2415}},
//!             {"y": 10.0, "x_le": 1.5, "chord": 1.2, "airfoil": {"naca": 2412}}
//!         ]
//!     }
//! }"#;
//! let config = AircraftConfig::from_json_str(text).unwrap();
//! assert_eq!(config.lifting_surface.break_points.len(), 2);
//! ```

use crate::airfoil::{AirfoilShape, Naca4};
use crate::fairing::{FairingDataCollection, FairingFactors};
use crate::fuselage::{Fuselage, FuselageParameters, FuselageStation, SectionShape};
use crate::lifting_surface::{BreakPoint, LiftingSurface, LiftingSurfaceKind};
use crate::{Point3, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub fuselage: FuselageConfig,
    pub lifting_surface: LiftingSurfaceConfig,

    #[serde(default)]
    pub fairing: FairingFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuselageOutline {
    /// Overall dimensions of a nose, cabin and tail fuselage
    Parameters(FuselageParameters),

    /// Explicit outline stations, in strictly ascending `x`
    Stations(Vec<FuselageStation>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuselageConfig {
    #[serde(default)]
    pub apex: [f64; 3],
    pub outline: FuselageOutline,

    #[serde(default)]
    pub section: SectionShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirfoilConfig {
    /// A NACA 4-digit designation
    Naca(u16),

    /// Explicit normalized coordinates, trailing edge around the upper surface to the leading
    /// edge and back along the lower surface
    Coordinates {
        x: Vec<f64>,
        z: Vec<f64>,
        #[serde(default)]
        thickness_to_chord: Option<f64>,
    },
}

impl AirfoilConfig {
    pub fn shape(&self) -> Result<AirfoilShape> {
        match self {
            AirfoilConfig::Naca(digits) => Ok(Naca4::from_digits(*digits).into()),
            AirfoilConfig::Coordinates {
                x,
                z,
                thickness_to_chord,
            } => AirfoilShape::try_new(x.clone(), z.clone(), *thickness_to_chord),
        }
    }
}

/// A break point as written in a configuration file; angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakPointConfig {
    pub y: f64,
    #[serde(default)]
    pub x_le: f64,
    #[serde(default)]
    pub z_le: f64,
    pub chord: f64,
    #[serde(default)]
    pub twist_deg: f64,
    pub airfoil: AirfoilConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftingSurfaceConfig {
    pub kind: LiftingSurfaceKind,
    pub apex: [f64; 3],
    #[serde(default)]
    pub rigging_angle_deg: f64,
    pub break_points: Vec<BreakPointConfig>,
}

impl FuselageConfig {
    pub fn build(&self) -> Result<Fuselage> {
        let apex = Point3::from(self.apex);
        match &self.outline {
            FuselageOutline::Parameters(params) => Fuselage::from_parameters(apex, params, self.section),
            FuselageOutline::Stations(stations) => Fuselage::try_new(apex, stations.clone(), self.section),
        }
    }
}

impl LiftingSurfaceConfig {
    pub fn build(&self) -> Result<LiftingSurface> {
        let break_points = self
            .break_points
            .iter()
            .map(|b| {
                Ok(BreakPoint {
                    y: b.y,
                    x_le: b.x_le,
                    z_le: b.z_le,
                    chord: b.chord,
                    twist: b.twist_deg.to_radians(),
                    airfoil: b.airfoil.shape()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        LiftingSurface::try_new(
            self.kind,
            Point3::from(self.apex),
            self.rigging_angle_deg.to_radians(),
            break_points,
        )
    }
}

impl AircraftConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading aircraft configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the fuselage and lifting surface and compute the fairing between them
    pub fn build_fairing(&self) -> Result<FairingDataCollection> {
        let fuselage = self.fuselage.build()?;
        let surface = self.lifting_surface.build()?;
        FairingDataCollection::build(&fuselage, &surface, self.fairing)
    }
}
