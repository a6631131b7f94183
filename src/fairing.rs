//! The geometric data of a fairing between a lifting surface root and a fuselage: reference
//! airfoils and fuselage sections, the position of the root relative to the fuselage, the contact
//! points between the components, and the principal dimensions and height bounds of the fairing.

mod factors;
mod position;

use crate::airfoil::AirfoilPointSet;
use crate::errors::InvalidGeometry;
use crate::func1::{obtain_monotonic_sequence, Interpolator1, MonotonicYZSequence, SplineInterpolator};
use crate::fuselage::FuselageGeometry;
use crate::lifting_surface::{LiftingSurfaceGeometry, LiftingSurfaceKind};
use crate::{Point2, Point3, Result};
use std::fmt::{Display, Formatter};
use tracing::{debug, info};

pub use factors::FairingFactors;
pub use position::{classify, FairingPosition, SkinProbe};

/// The complete set of fairing data for one lifting surface and fuselage pair. A value of this
/// type is only ever produced by a successful [`FairingDataCollection::build`], so every quantity
/// it holds has been computed. Contact points which do not apply to the fairing position or to
/// the width factor are `None`, and the fairing height bounds of a `Middle` fairing are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FairingDataCollection {
    surface_kind: LiftingSurfaceKind,
    factors: FairingFactors,
    root_chord: f64,
    root_thickness: f64,
    fuselage_apex: Point3,

    root_airfoil: AirfoilPointSet,
    side_airfoil: AirfoilPointSet,
    tip_airfoil: AirfoilPointSet,

    fuselage_half_width: f64,
    fuselage_camber_z: f64,
    middle_section_top: Point3,
    middle_section_bottom: Point3,
    front_section_top: Point3,
    front_section_bottom: Point3,
    back_section_top: Point3,
    back_section_bottom: Point3,
    upper_branch: MonotonicYZSequence,
    lower_branch: MonotonicYZSequence,
    fuselage_minimum_z: f64,
    fuselage_maximum_z: f64,

    position: FairingPosition,
    surface_contact: Option<Point3>,
    fairing_upper_contact: Option<Point3>,
    fairing_lower_contact: Option<Point3>,

    front_length: f64,
    back_length: f64,
    width: f64,
    fairing_minimum_z: f64,
    fairing_maximum_z: f64,
    fairing_reference_z: f64,
}

/// The top and bottom points of a fuselage section at the apex-relative station `x`, in the
/// body frame
fn section_ends<F: FuselageGeometry + ?Sized>(fuselage: &F, x: f64) -> Result<(Point3, Point3)> {
    let apex = fuselage.apex();
    let section = fuselage.section_at_x(x)?;
    let top = section.first().ok_or(InvalidGeometry::EmptyPointSet)?;
    let bottom = section.last().ok_or(InvalidGeometry::EmptyPointSet)?;
    Ok((
        Point3::new(x + apex.x, top.x + apex.y, top.y + apex.z),
        Point3::new(x + apex.x, bottom.x + apex.y, bottom.y + apex.z),
    ))
}

/// Split a body frame section, running from the top center to the bottom center, into the branch
/// above the camber line and the branch below it. Both branches meet at `(side_y, camber_z)`: it
/// closes the upper branch and opens the lower one. The bottom center point is not used. The
/// upper branch is filtered to a strictly increasing `y` and the lower to a strictly decreasing
/// `y`.
fn split_branches(
    section: &[Point2],
    camber_z: f64,
    side_y: f64,
) -> Result<(MonotonicYZSequence, MonotonicYZSequence)> {
    let mut upper_y = Vec::new();
    let mut upper_z = Vec::new();
    let mut lower_y = vec![side_y];
    let mut lower_z = vec![camber_z];

    for p in section.iter().take(section.len().saturating_sub(1)) {
        if p.y > camber_z {
            upper_y.push(p.x);
            upper_z.push(p.y);
        } else if p.y < camber_z {
            lower_y.push(p.x);
            lower_z.push(p.y);
        }
    }

    upper_y.push(side_y);
    upper_z.push(camber_z);

    let upper = obtain_monotonic_sequence(&upper_y, &upper_z, true)?;
    let lower = obtain_monotonic_sequence(&lower_y, &lower_z, false)?;
    Ok((upper, lower))
}

impl FairingDataCollection {
    /// Compute the fairing data for a lifting surface joined to a fuselage, interpolating the
    /// fuselage section branches with natural cubic splines.
    ///
    /// # Arguments
    ///
    /// * `fuselage`: the fuselage the fairing attaches to
    /// * `surface`: the lifting surface whose root the fairing covers
    /// * `factors`: the dimensionless fairing sizing factors
    ///
    /// returns: Result<FairingDataCollection, Box<dyn Error, Global>>
    pub fn build<F, L>(fuselage: &F, surface: &L, factors: FairingFactors) -> Result<Self>
    where
        F: FuselageGeometry + ?Sized,
        L: LiftingSurfaceGeometry + ?Sized,
    {
        Self::build_with(fuselage, surface, factors, &SplineInterpolator)
    }

    /// Compute the fairing data with a specific interpolator for the fuselage section branches.
    /// See [`FairingDataCollection::build`].
    pub fn build_with<F, L>(
        fuselage: &F,
        surface: &L,
        factors: FairingFactors,
        interp: &dyn Interpolator1,
    ) -> Result<Self>
    where
        F: FuselageGeometry + ?Sized,
        L: LiftingSurfaceGeometry + ?Sized,
    {
        let root_chord = surface.root_chord();
        let root_thickness = surface.root_thickness_to_chord() * root_chord;
        let apex = fuselage.apex();

        let root_airfoil = surface.airfoil_at_y(0.0)?;
        let root_top = root_airfoil.top();
        let root_bottom = root_airfoil.bottom();

        // Fuselage references at the chordwise station of the root airfoil top
        let x_mid = root_top.x - apex.x;
        let half_width = fuselage.width_at_x(x_mid) * 0.5;
        let camber_z = fuselage.camber_z_at_x(x_mid) + apex.z;

        let front_length = factors.front_length * root_chord;
        let back_length = factors.back_length * root_chord;
        let x_front = root_airfoil.leading_edge().x - front_length - apex.x;
        let x_back = root_airfoil.trailing_edge().x + back_length - apex.x;
        debug!(x_mid, x_front, x_back, half_width, camber_z, "Fuselage reference stations");

        let middle = fuselage
            .section_at_x(x_mid)?
            .into_iter()
            .map(|p| Point2::new(p.x + apex.y, p.y + apex.z))
            .collect::<Vec<_>>();
        let (middle_section_top, middle_section_bottom) = match (middle.first(), middle.last()) {
            (Some(t), Some(b)) => (
                Point3::new(root_top.x, t.x, t.y),
                Point3::new(root_top.x, b.x, b.y),
            ),
            _ => return Err(Box::new(InvalidGeometry::EmptyPointSet)),
        };
        let (front_section_top, front_section_bottom) = section_ends(fuselage, x_front)?;
        let (back_section_top, back_section_bottom) = section_ends(fuselage, x_back)?;

        let mut fuselage_maximum_z = front_section_top.z.min(back_section_top.z);
        let mut fuselage_minimum_z = front_section_bottom.z.max(back_section_bottom.z);

        let (upper_branch, lower_branch) = split_branches(&middle, camber_z, half_width + apex.y)?;
        debug!(
            upper = upper_branch.len(),
            lower = lower_branch.len(),
            "Middle section branches"
        );

        let side_airfoil = surface.airfoil_at_y(half_width)?;
        let probe = SkinProbe::measure(fuselage, &side_airfoil)?;
        let position = classify(&root_airfoil, &side_airfoil, &probe);
        debug!(%position, ?probe, "Classified fairing position");

        let surface_contact = match position {
            FairingPosition::AttachedUp => {
                let b = side_airfoil.bottom();
                Some(Point3::new(b.x, upper_branch.y_at_z(interp, b.z)?, b.z))
            }
            FairingPosition::AttachedDown => {
                let t = side_airfoil.top();
                Some(Point3::new(t.x, lower_branch.y_at_z(interp, t.z)?, t.z))
            }
            _ => None,
        };

        let wf = factors.width;
        let width = match surface_contact {
            Some(c) if wf < 1.0 => {
                let contact_y = c.y - apex.y;
                wf * (half_width - contact_y) + contact_y
            }
            _ => wf * half_width,
        };

        let tip_airfoil = surface.airfoil_at_y(width)?;
        let tip_top = tip_airfoil.top();
        let tip_bottom = tip_airfoil.bottom();

        let mut fairing_upper_contact = None;
        let mut fairing_lower_contact = None;
        let mut fairing_minimum_z = 0.0;
        let mut fairing_maximum_z = 0.0;
        let mut fairing_reference_z = 0.0;

        let height = root_thickness * factors.height;
        let detached_up_max = root_top.z.max(tip_top.z) + height;
        let attached_up_max = root_top.z + (middle_section_top.z - root_top.z) * factors.height;
        let attached_down_min = middle_section_bottom.z - height;
        let detached_down_min = root_bottom.z.min(tip_bottom.z) - height;

        if wf < 1.0 {
            let y = apex.y + width;
            let upper = Point3::new(tip_top.x, y, upper_branch.z_at_y(interp, y)?);
            let lower = Point3::new(tip_top.x, y, lower_branch.z_at_y(interp, y)?);
            fairing_upper_contact = Some(upper);
            fairing_lower_contact = Some(lower);

            if position.is_up() {
                fairing_reference_z = upper.z;
                fairing_minimum_z = front_section_bottom.z.max(lower.z).max(back_section_bottom.z);
                fuselage_maximum_z = front_section_top.z.min(back_section_top.z);
                fairing_maximum_z = if position == FairingPosition::DetachedUp {
                    detached_up_max
                } else {
                    attached_up_max
                };
            } else if position.is_down() {
                fairing_reference_z = lower.z;
                fairing_maximum_z = front_section_top.z.min(upper.z).min(back_section_top.z);
                fuselage_minimum_z = front_section_bottom.z.max(back_section_bottom.z);
                fairing_minimum_z = if position == FairingPosition::AttachedDown {
                    attached_down_min
                } else {
                    detached_down_min
                };
            }
        } else if position.is_up() {
            fairing_reference_z = camber_z + (root_bottom.z.min(tip_bottom.z) - camber_z) * 0.5;
            fairing_minimum_z = front_section_bottom.z.max(back_section_bottom.z);
            fuselage_maximum_z = front_section_top.z.min(back_section_top.z);
            fairing_maximum_z = if position == FairingPosition::DetachedUp {
                detached_up_max
            } else {
                attached_up_max
            };
        } else if position.is_down() {
            fairing_reference_z = camber_z - (camber_z - root_top.z.max(tip_top.z)) * 0.5;
            fairing_maximum_z = front_section_top.z.min(back_section_top.z);
            fuselage_minimum_z = front_section_bottom.z.max(back_section_bottom.z);
            fairing_minimum_z = if position == FairingPosition::AttachedDown {
                attached_down_min
            } else {
                detached_down_min
            };
        }

        info!(
            %position,
            front_length,
            back_length,
            width,
            fairing_minimum_z,
            fairing_reference_z,
            fairing_maximum_z,
            "Computed fairing data"
        );

        Ok(Self {
            surface_kind: surface.kind(),
            factors,
            root_chord,
            root_thickness,
            fuselage_apex: apex,
            root_airfoil,
            side_airfoil,
            tip_airfoil,
            fuselage_half_width: half_width,
            fuselage_camber_z: camber_z,
            middle_section_top,
            middle_section_bottom,
            front_section_top,
            front_section_bottom,
            back_section_top,
            back_section_bottom,
            upper_branch,
            lower_branch,
            fuselage_minimum_z,
            fuselage_maximum_z,
            position,
            surface_contact,
            fairing_upper_contact,
            fairing_lower_contact,
            front_length,
            back_length,
            width,
            fairing_minimum_z,
            fairing_maximum_z,
            fairing_reference_z,
        })
    }

    /// Always true: a collection only exists once every quantity has been computed
    pub fn is_populated(&self) -> bool {
        true
    }

    /// The type of the lifting surface the fairing joins to the fuselage
    pub fn surface_kind(&self) -> LiftingSurfaceKind {
        self.surface_kind
    }

    pub fn factors(&self) -> &FairingFactors {
        &self.factors
    }

    pub fn root_chord(&self) -> f64 {
        self.root_chord
    }

    /// The maximum thickness of the root airfoil, in meters
    pub fn root_thickness(&self) -> f64 {
        self.root_thickness
    }

    pub fn fuselage_apex(&self) -> Point3 {
        self.fuselage_apex
    }

    pub fn root_airfoil(&self) -> &AirfoilPointSet {
        &self.root_airfoil
    }

    /// The airfoil at the spanwise station of the fuselage side
    pub fn side_airfoil(&self) -> &AirfoilPointSet {
        &self.side_airfoil
    }

    /// The airfoil at the spanwise station of the fairing's lateral extent
    pub fn tip_airfoil(&self) -> &AirfoilPointSet {
        &self.tip_airfoil
    }

    /// Half of the fuselage width at the chordwise station of the root airfoil top
    pub fn fuselage_half_width(&self) -> f64 {
        self.fuselage_half_width
    }

    /// The fuselage camber z at the chordwise station of the root airfoil top, in the body frame
    pub fn fuselage_camber_z(&self) -> f64 {
        self.fuselage_camber_z
    }

    pub fn middle_section_top(&self) -> Point3 {
        self.middle_section_top
    }

    pub fn middle_section_bottom(&self) -> Point3 {
        self.middle_section_bottom
    }

    pub fn front_section_top(&self) -> Point3 {
        self.front_section_top
    }

    pub fn front_section_bottom(&self) -> Point3 {
        self.front_section_bottom
    }

    pub fn back_section_top(&self) -> Point3 {
        self.back_section_top
    }

    pub fn back_section_bottom(&self) -> Point3 {
        self.back_section_bottom
    }

    /// The middle section branch above the camber line, strictly increasing in `y`
    pub fn upper_branch(&self) -> &MonotonicYZSequence {
        &self.upper_branch
    }

    /// The middle section branch below the camber line, strictly decreasing in `y`
    pub fn lower_branch(&self) -> &MonotonicYZSequence {
        &self.lower_branch
    }

    pub fn fuselage_minimum_z(&self) -> f64 {
        self.fuselage_minimum_z
    }

    pub fn fuselage_maximum_z(&self) -> f64 {
        self.fuselage_maximum_z
    }

    pub fn position(&self) -> FairingPosition {
        self.position
    }

    /// The point where the side airfoil meets the fuselage skin, only for attached positions
    pub fn surface_contact(&self) -> Option<Point3> {
        self.surface_contact
    }

    /// The point where the fairing meets the upper fuselage skin, only for width factors below 1
    pub fn fairing_upper_contact(&self) -> Option<Point3> {
        self.fairing_upper_contact
    }

    /// The point where the fairing meets the lower fuselage skin, only for width factors below 1
    pub fn fairing_lower_contact(&self) -> Option<Point3> {
        self.fairing_lower_contact
    }

    pub fn front_length(&self) -> f64 {
        self.front_length
    }

    pub fn back_length(&self) -> f64 {
        self.back_length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn fairing_minimum_z(&self) -> f64 {
        self.fairing_minimum_z
    }

    pub fn fairing_maximum_z(&self) -> f64 {
        self.fairing_maximum_z
    }

    pub fn fairing_reference_z(&self) -> f64 {
        self.fairing_reference_z
    }
}

fn fmt_z(p: Option<Point3>) -> String {
    match p {
        Some(p) => format!("{:.2}", p.z),
        None => "n/a".to_string(),
    }
}

impl Display for FairingDataCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rows = [
            ("Components", format!("{}, FUSELAGE", self.surface_kind)),
            ("Position", self.position.to_string()),
            ("Front length factor", format!("{:.2}", self.factors.front_length)),
            ("Back length factor", format!("{:.2}", self.factors.back_length)),
            ("Width factor", format!("{:.2}", self.factors.width)),
            ("Height factor", format!("{:.2}", self.factors.height)),
            ("Height below reference factor", format!("{:.2}", self.factors.height_below_reference)),
            ("Height above reference factor", format!("{:.2}", self.factors.height_above_reference)),
            ("Fillet radius factor", format!("{:.2}", self.factors.fillet_radius)),
            ("Root chord (m)", format!("{:.2}", self.root_chord)),
            ("Root thickness (m)", format!("{:.2}", self.root_thickness)),
            ("Root airfoil x LE (m)", format!("{:.2}", self.root_airfoil.leading_edge().x)),
            ("Root airfoil x TE (m)", format!("{:.2}", self.root_airfoil.trailing_edge().x)),
            ("Root airfoil z top (m)", format!("{:.2}", self.root_airfoil.top().z)),
            ("Root airfoil z bottom (m)", format!("{:.2}", self.root_airfoil.bottom().z)),
            ("Side airfoil z top (m)", format!("{:.2}", self.side_airfoil.top().z)),
            ("Side airfoil z bottom (m)", format!("{:.2}", self.side_airfoil.bottom().z)),
            ("Tip airfoil z top (m)", format!("{:.2}", self.tip_airfoil.top().z)),
            ("Tip airfoil z bottom (m)", format!("{:.2}", self.tip_airfoil.bottom().z)),
            ("Fuselage middle section z top (m)", format!("{:.2}", self.middle_section_top.z)),
            ("Fuselage middle section z bottom (m)", format!("{:.2}", self.middle_section_bottom.z)),
            ("Fuselage front section z top (m)", format!("{:.2}", self.front_section_top.z)),
            ("Fuselage front section z bottom (m)", format!("{:.2}", self.front_section_bottom.z)),
            ("Fuselage back section z top (m)", format!("{:.2}", self.back_section_top.z)),
            ("Fuselage back section z bottom (m)", format!("{:.2}", self.back_section_bottom.z)),
            ("Fuselage minimum z (m)", format!("{:.2}", self.fuselage_minimum_z)),
            ("Fuselage maximum z (m)", format!("{:.2}", self.fuselage_maximum_z)),
            ("Fuselage-fairing lower contact z (m)", fmt_z(self.fairing_lower_contact)),
            ("Fuselage-fairing upper contact z (m)", fmt_z(self.fairing_upper_contact)),
            ("Front length (m)", format!("{:.2}", self.front_length)),
            ("Back length (m)", format!("{:.2}", self.back_length)),
            ("Width (m)", format!("{:.2}", self.width)),
            ("Fairing minimum z (m)", format!("{:.2}", self.fairing_minimum_z)),
            ("Fairing reference z (m)", format!("{:.2}", self.fairing_reference_z)),
            ("Fairing maximum z (m)", format!("{:.2}", self.fairing_maximum_z)),
        ];

        writeln!(f, "Fairing data summary:")?;
        for (label, value) in rows.iter() {
            writeln!(f, "  {}: {}", label, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// A box-like fuselage with a constant section: flat sides between z = -1 and z = 1 at
    /// y = 1, flat top and bottom
    struct BoxFuselage;

    impl FuselageGeometry for BoxFuselage {
        fn apex(&self) -> Point3 {
            Point3::origin()
        }

        fn section_at_x(&self, _x: f64) -> Result<Vec<Point2>> {
            Ok(vec![
                Point2::new(0.0, 1.0),
                Point2::new(0.5, 1.0),
                Point2::new(1.0, 0.5),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, -0.5),
                Point2::new(0.5, -1.0),
                Point2::new(0.0, -1.0),
            ])
        }

        fn camber_z_at_x(&self, _x: f64) -> f64 {
            0.0
        }

        fn width_at_x(&self, _x: f64) -> f64 {
            2.0
        }
    }

    #[test]
    fn test_split_branches_box() {
        let section = BoxFuselage.section_at_x(0.0).unwrap();
        let (upper, lower) = split_branches(&section, 0.0, 1.0).unwrap();

        // The closing point repeats y = 1 and is dropped
        assert_eq!(upper.y(), &[0.0, 0.5, 1.0]);
        assert_eq!(upper.z(), &[1.0, 1.0, 0.5]);
        assert!(upper.is_increasing());

        // Starts at the side/camber point, the bottom center is excluded
        assert_eq!(lower.y(), &[1.0, 0.5]);
        assert_eq!(lower.z(), &[0.0, -1.0]);
        assert!(!lower.is_increasing());
    }

    #[test]
    fn test_split_branches_excludes_last_point() {
        let section = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 0.0), Point2::new(0.0, -1.0)];
        let (upper, lower) = split_branches(&section, 0.0, 1.0).unwrap();
        assert_eq!(upper.y(), &[0.0, 1.0]);
        assert_eq!(lower.len(), 1);
        assert_relative_eq!(lower.z()[0], 0.0);
    }

    #[test]
    fn test_section_ends_shift_by_apex() {
        struct Shifted;
        impl FuselageGeometry for Shifted {
            fn apex(&self) -> Point3 {
                Point3::new(2.0, 0.0, -0.5)
            }
            fn section_at_x(&self, x: f64) -> Result<Vec<Point2>> {
                BoxFuselage.section_at_x(x)
            }
            fn camber_z_at_x(&self, _x: f64) -> f64 {
                0.0
            }
            fn width_at_x(&self, _x: f64) -> f64 {
                2.0
            }
        }

        let (top, bottom) = section_ends(&Shifted, 3.0).unwrap();
        assert_relative_eq!(top, Point3::new(5.0, 0.0, 0.5));
        assert_relative_eq!(bottom, Point3::new(5.0, 0.0, -1.5));
    }

    #[test]
    fn test_empty_section_fails() {
        struct Empty;
        impl FuselageGeometry for Empty {
            fn apex(&self) -> Point3 {
                Point3::origin()
            }
            fn section_at_x(&self, _x: f64) -> Result<Vec<Point2>> {
                Ok(Vec::new())
            }
            fn camber_z_at_x(&self, _x: f64) -> f64 {
                0.0
            }
            fn width_at_x(&self, _x: f64) -> f64 {
                2.0
            }
        }
        assert!(section_ends(&Empty, 0.0).is_err());
    }
}
