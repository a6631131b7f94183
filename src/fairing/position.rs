use crate::airfoil::AirfoilPointSet;
use crate::errors::InvalidGeometry;
use crate::fuselage::FuselageGeometry;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The position of a lifting surface root relative to the fuselage it is joined to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FairingPosition {
    /// The root section protrudes above the fuselage top skin
    DetachedUp,

    /// The root sits in the upper half of the fuselage, crossing the side skin
    AttachedUp,

    /// The root section protrudes below the fuselage bottom skin
    DetachedDown,

    /// The root sits in the lower half of the fuselage, crossing the side skin
    AttachedDown,

    /// The root sits across the fuselage camber line
    Middle,
}

impl FairingPosition {
    pub fn is_attached(&self) -> bool {
        matches!(self, FairingPosition::AttachedUp | FairingPosition::AttachedDown)
    }

    pub fn is_up(&self) -> bool {
        matches!(self, FairingPosition::AttachedUp | FairingPosition::DetachedUp)
    }

    pub fn is_down(&self) -> bool {
        matches!(self, FairingPosition::AttachedDown | FairingPosition::DetachedDown)
    }
}

impl Display for FairingPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FairingPosition::DetachedUp => "DETACHED_UP",
            FairingPosition::AttachedUp => "ATTACHED_UP",
            FairingPosition::DetachedDown => "DETACHED_DOWN",
            FairingPosition::AttachedDown => "ATTACHED_DOWN",
            FairingPosition::Middle => "MIDDLE",
        };
        write!(f, "{}", s)
    }
}

/// The fuselage skin and camber heights at the chordwise stations of the side airfoil's top and
/// bottom points, in the body frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinProbe {
    pub top_skin_at_top_x: f64,
    pub camber_at_top_x: f64,
    pub camber_at_bottom_x: f64,
    pub bottom_skin_at_bottom_x: f64,
}

impl SkinProbe {
    pub fn measure<F: FuselageGeometry + ?Sized>(fuselage: &F, side: &AirfoilPointSet) -> Result<Self> {
        let apex = fuselage.apex();
        let x_top = side.top().x - apex.x;
        let x_bottom = side.bottom().x - apex.x;

        let at_top = fuselage.section_at_x(x_top)?;
        let at_bottom = fuselage.section_at_x(x_bottom)?;
        let top = at_top.first().ok_or(InvalidGeometry::EmptyPointSet)?;
        let bottom = at_bottom.last().ok_or(InvalidGeometry::EmptyPointSet)?;

        Ok(Self {
            top_skin_at_top_x: top.y + apex.z,
            camber_at_top_x: fuselage.camber_z_at_x(x_top) + apex.z,
            camber_at_bottom_x: fuselage.camber_z_at_x(x_bottom) + apex.z,
            bottom_skin_at_bottom_x: bottom.y + apex.z,
        })
    }
}

/// Decide the fairing position. The checks are made in a fixed order and the first one which
/// matches wins, so a root which protrudes above the top skin is always `DetachedUp` even when
/// the attached-down condition also holds.
///
/// # Arguments
///
/// * `root`: the airfoil at the root station of the lifting surface
/// * `side`: the airfoil at the station of the fuselage side
/// * `probe`: the fuselage heights at the side airfoil's top and bottom stations
///
/// returns: FairingPosition
pub fn classify(root: &AirfoilPointSet, side: &AirfoilPointSet, probe: &SkinProbe) -> FairingPosition {
    let side_top = side.top().z;
    let side_bottom = side.bottom().z;

    if root.top().z > probe.top_skin_at_top_x {
        return FairingPosition::DetachedUp;
    } else if side_top < probe.top_skin_at_top_x && side_bottom > probe.camber_at_bottom_x {
        return FairingPosition::AttachedUp;
    }

    if root.bottom().z < probe.bottom_skin_at_bottom_x {
        FairingPosition::DetachedDown
    } else if side_top < probe.camber_at_top_x && side_bottom > probe.bottom_skin_at_bottom_x {
        FairingPosition::AttachedDown
    } else {
        FairingPosition::Middle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point3;
    use test_case::test_case;

    fn section(z_top: f64, z_bottom: f64) -> AirfoilPointSet {
        AirfoilPointSet::try_new(vec![
            Point3::new(1.0, 0.0, 0.5 * (z_top + z_bottom)),
            Point3::new(0.4, 0.0, z_top),
            Point3::new(0.0, 0.0, 0.5 * (z_top + z_bottom)),
            Point3::new(0.4, 0.0, z_bottom),
        ])
        .unwrap()
    }

    fn probe() -> SkinProbe {
        SkinProbe {
            top_skin_at_top_x: 2.0,
            camber_at_top_x: 0.0,
            camber_at_bottom_x: 0.0,
            bottom_skin_at_bottom_x: -2.0,
        }
    }

    #[test_case(2.2, 1.8, 2.1, 1.7, FairingPosition::DetachedUp; "root above top skin")]
    #[test_case(1.6, 1.2, 1.5, 1.1, FairingPosition::AttachedUp; "upper half")]
    #[test_case(-1.8, -2.3, -1.9, -2.2, FairingPosition::DetachedDown; "root below bottom skin")]
    #[test_case(-1.2, -1.6, -1.3, -1.7, FairingPosition::AttachedDown; "lower half")]
    #[test_case(0.3, -0.3, 0.2, -0.2, FairingPosition::Middle; "across camber")]
    fn test_classify(root_top: f64, root_bottom: f64, side_top: f64, side_bottom: f64, expected: FairingPosition) {
        let root = section(root_top, root_bottom);
        let side = section(side_top, side_bottom);
        assert_eq!(classify(&root, &side, &probe()), expected);
    }

    #[test]
    fn test_detached_up_wins_over_attached_down() {
        // The side section alone satisfies the attached-down condition
        let root = section(2.5, -1.0);
        let side = section(-0.5, -1.5);
        let p = probe();
        assert!(side.top().z < p.camber_at_top_x && side.bottom().z > p.bottom_skin_at_bottom_x);
        assert_eq!(classify(&root, &side, &p), FairingPosition::DetachedUp);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(FairingPosition::AttachedDown.to_string(), "ATTACHED_DOWN");
        assert!(FairingPosition::AttachedUp.is_attached());
        assert!(FairingPosition::DetachedUp.is_up());
        assert!(!FairingPosition::Middle.is_down());
    }
}
