//! End to end fairing construction with the concrete fuselage and lifting surface models, and
//! with small hand written fuselages where a specific section shape is needed.

use approx::assert_relative_eq;
use fairgeom::airfoil::Naca4;
use fairgeom::common::points::dist;
use fairgeom::common::vecf64::{are_strictly_ascending, are_strictly_descending};
use fairgeom::fuselage::{FuselageStation, SectionShape};
use fairgeom::lifting_surface::BreakPoint;
use fairgeom::{
    FairingDataCollection, FairingFactors, FairingPosition, Fuselage, FuselageGeometry, LiftingSurface,
    LiftingSurfaceKind, Point2, Point3, Result,
};
use test_case::test_case;

/// A straight fuselage with a circular section of radius 1.5 centered on z = 0
fn tube() -> Fuselage {
    let station = |x| FuselageStation {
        x,
        z_upper: 1.5,
        z_lower: -1.5,
        half_width: 1.5,
    };
    let shape = SectionShape {
        points_per_half: 40,
        ..SectionShape::default()
    };
    Fuselage::try_new(Point3::origin(), vec![station(0.0), station(40.0)], shape).unwrap()
}

/// A wing with a NACA 0015 section throughout, root chord `chord` and half of it at the tip
fn wing(z_apex: f64, chord: f64) -> LiftingSurface {
    let airfoil = Naca4::from_digits(15);
    let root = BreakPoint {
        y: 0.0,
        x_le: 0.0,
        z_le: 0.0,
        chord,
        twist: 0.0,
        airfoil: airfoil.into(),
    };
    let tip = BreakPoint {
        y: 10.0,
        x_le: 1.0,
        z_le: 0.0,
        chord: chord * 0.5,
        twist: 0.0,
        airfoil: airfoil.into(),
    };
    LiftingSurface::try_new(
        LiftingSurfaceKind::Wing,
        Point3::new(10.0, 0.0, z_apex),
        0.0,
        vec![root, tip],
    )
    .unwrap()
}

fn factors(width: f64) -> FairingFactors {
    FairingFactors {
        width,
        ..FairingFactors::default()
    }
}

#[test_case(1.5, FairingPosition::DetachedUp; "high wing above the skin")]
#[test_case(0.9, FairingPosition::AttachedUp; "shoulder wing")]
#[test_case(0.0, FairingPosition::Middle; "mid wing")]
#[test_case(-0.9, FairingPosition::AttachedDown; "low wing")]
#[test_case(-1.5, FairingPosition::DetachedDown; "wing below the skin")]
fn classifies_wing_height(z_apex: f64, expected: FairingPosition) {
    let data = FairingDataCollection::build(&tube(), &wing(z_apex, 3.0), factors(0.5)).unwrap();
    assert_eq!(data.position(), expected);
    assert!(data.is_populated());
    assert_eq!(data.surface_contact().is_some(), expected.is_attached());
}

#[test]
fn front_and_back_lengths_scale_root_chord() {
    let f = FairingFactors {
        front_length: 0.5,
        back_length: 0.75,
        ..FairingFactors::default()
    };
    let data = FairingDataCollection::build(&tube(), &wing(0.0, 2.0), f).unwrap();
    assert_eq!(data.front_length(), 1.0);
    assert_eq!(data.back_length(), 1.5);
    assert_relative_eq!(data.root_chord(), 2.0);
    assert_relative_eq!(data.root_thickness(), 0.3, epsilon = 1e-12);
    assert_relative_eq!(
        data.front_section_top().x,
        data.root_airfoil().leading_edge().x - 1.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        data.back_section_top().x,
        data.root_airfoil().trailing_edge().x + 1.5,
        epsilon = 1e-12
    );
}

#[test]
fn low_wing_contact_on_skin() {
    let data = FairingDataCollection::build(&tube(), &wing(-0.9, 3.0), factors(0.5)).unwrap();
    assert_eq!(data.position(), FairingPosition::AttachedDown);

    let contact = data.surface_contact().unwrap();
    let side_top = data.side_airfoil().top();
    assert_relative_eq!(contact.x, side_top.x);
    assert_relative_eq!(contact.z, side_top.z);
    let radius = dist(&Point2::new(contact.y, contact.z), &Point2::origin());
    assert_relative_eq!(radius, 1.5, epsilon = 1e-2);

    let expected_width = 0.5 * (1.5 - contact.y) + contact.y;
    assert_relative_eq!(data.width(), expected_width, epsilon = 1e-12);
    assert!(data.width() > contact.y && data.width() < 1.5);

    let upper = data.fairing_upper_contact().unwrap();
    let lower = data.fairing_lower_contact().unwrap();
    let circle_z = (2.25 - data.width() * data.width()).sqrt();
    assert_relative_eq!(upper.z, circle_z, epsilon = 5e-2);
    assert_relative_eq!(lower.z, -circle_z, epsilon = 5e-2);

    assert_relative_eq!(data.fairing_reference_z(), lower.z);
    assert_relative_eq!(data.fairing_maximum_z(), upper.z);
    assert_relative_eq!(data.fairing_minimum_z(), -1.5 - 0.45 * 0.1, epsilon = 1e-9);
    assert_relative_eq!(data.fuselage_minimum_z(), -1.5, epsilon = 1e-9);
}

#[test]
fn shoulder_wing_contact_on_skin() {
    let data = FairingDataCollection::build(&tube(), &wing(0.9, 3.0), factors(0.5)).unwrap();
    assert_eq!(data.position(), FairingPosition::AttachedUp);

    let contact = data.surface_contact().unwrap();
    assert_relative_eq!(contact.z, data.side_airfoil().bottom().z);
    assert_relative_eq!(contact.y, (2.25 - contact.z * contact.z).sqrt(), epsilon = 1e-2);

    let upper = data.fairing_upper_contact().unwrap();
    let root_top = data.root_airfoil().top().z;
    assert_relative_eq!(data.fairing_reference_z(), upper.z);
    assert_relative_eq!(
        data.fairing_maximum_z(),
        root_top + (1.5 - root_top) * 0.1,
        epsilon = 1e-9
    );
}

#[test]
fn detached_high_wing_bounds() {
    let data = FairingDataCollection::build(&tube(), &wing(1.5, 3.0), factors(0.5)).unwrap();
    assert_eq!(data.position(), FairingPosition::DetachedUp);
    assert_relative_eq!(data.width(), 0.75, epsilon = 1e-12);

    let lower = data.fairing_lower_contact().unwrap();
    let top = data.root_airfoil().top().z.max(data.tip_airfoil().top().z);
    assert_relative_eq!(data.fairing_maximum_z(), top + 0.045, epsilon = 1e-9);
    assert_relative_eq!(data.fairing_minimum_z(), lower.z.max(-1.5));
    assert_relative_eq!(data.fuselage_maximum_z(), 1.5, epsilon = 1e-9);
}

#[test]
fn wide_fairing_uses_camber_reference() {
    let data = FairingDataCollection::build(&tube(), &wing(-0.9, 3.0), factors(1.0)).unwrap();
    assert_eq!(data.position(), FairingPosition::AttachedDown);
    assert!(data.surface_contact().is_some());
    assert!(data.fairing_upper_contact().is_none());
    assert!(data.fairing_lower_contact().is_none());

    assert_relative_eq!(data.width(), 1.5, epsilon = 1e-12);
    let top = data.root_airfoil().top().z.max(data.tip_airfoil().top().z);
    assert_relative_eq!(data.fairing_reference_z(), 0.5 * top, epsilon = 1e-9);
    assert_relative_eq!(data.fairing_maximum_z(), 1.5, epsilon = 1e-9);
    assert_relative_eq!(data.fairing_minimum_z(), -1.545, epsilon = 1e-9);
}

#[test]
fn detached_low_wing_bounds() {
    let data = FairingDataCollection::build(&tube(), &wing(-1.5, 3.0), factors(0.5)).unwrap();
    assert_eq!(data.position(), FairingPosition::DetachedDown);
    assert_relative_eq!(data.width(), 0.75, epsilon = 1e-12);

    let upper = data.fairing_upper_contact().unwrap();
    let lower = data.fairing_lower_contact().unwrap();
    let bottom = data.root_airfoil().bottom().z.min(data.tip_airfoil().bottom().z);
    assert_relative_eq!(data.fairing_reference_z(), lower.z);
    assert_relative_eq!(data.fairing_maximum_z(), upper.z.min(1.5));
    assert_relative_eq!(data.fairing_minimum_z(), bottom - 0.045, epsilon = 1e-9);
    assert_relative_eq!(data.fuselage_minimum_z(), -1.5, epsilon = 1e-9);
}

#[test]
fn wide_detached_low_wing_bounds() {
    let data = FairingDataCollection::build(&tube(), &wing(-1.5, 3.0), factors(1.0)).unwrap();
    assert_eq!(data.position(), FairingPosition::DetachedDown);
    assert!(data.fairing_lower_contact().is_none());
    assert_relative_eq!(data.width(), 1.5, epsilon = 1e-12);

    let top = data.root_airfoil().top().z.max(data.tip_airfoil().top().z);
    let bottom = data.root_airfoil().bottom().z.min(data.tip_airfoil().bottom().z);
    assert_relative_eq!(data.fairing_reference_z(), 0.5 * top, epsilon = 1e-9);
    assert_relative_eq!(data.fairing_maximum_z(), 1.5, epsilon = 1e-9);
    assert_relative_eq!(data.fairing_minimum_z(), bottom - 0.045, epsilon = 1e-9);
}

#[test_case(0.9, FairingPosition::AttachedUp; "shoulder wing")]
#[test_case(1.5, FairingPosition::DetachedUp; "high wing above the skin")]
fn wide_high_wing_uses_camber_reference(z_apex: f64, expected: FairingPosition) {
    let data = FairingDataCollection::build(&tube(), &wing(z_apex, 3.0), factors(1.0)).unwrap();
    assert_eq!(data.position(), expected);
    assert!(data.fairing_upper_contact().is_none());
    assert_relative_eq!(data.width(), 1.5, epsilon = 1e-12);

    let root_top = data.root_airfoil().top().z;
    let top = root_top.max(data.tip_airfoil().top().z);
    let bottom = data.root_airfoil().bottom().z.min(data.tip_airfoil().bottom().z);
    assert_relative_eq!(data.fairing_reference_z(), 0.5 * bottom, epsilon = 1e-9);
    assert_relative_eq!(data.fairing_minimum_z(), -1.5, epsilon = 1e-9);
    assert_relative_eq!(data.fuselage_maximum_z(), 1.5, epsilon = 1e-9);

    let max = if expected == FairingPosition::DetachedUp {
        top + 0.045
    } else {
        root_top + (1.5 - root_top) * 0.1
    };
    assert_relative_eq!(data.fairing_maximum_z(), max, epsilon = 1e-9);
}

#[test]
fn narrow_fairing_inside_lower_branch_fails() {
    // The lower branch stops one point short of the bottom center, so its y range does not
    // reach the fuselage center line
    let data = FairingDataCollection::build(&tube(), &wing(0.0, 3.0), factors(0.5)).unwrap();
    let innermost = data.lower_branch().y()[data.lower_branch().len() - 1];
    assert!(innermost > 0.015);
    assert!(FairingDataCollection::build(&tube(), &wing(0.0, 3.0), factors(0.01)).is_err());
}

#[test]
fn mid_wing_keeps_zero_bounds() {
    let data = FairingDataCollection::build(&tube(), &wing(0.0, 3.0), factors(0.5)).unwrap();
    assert_eq!(data.position(), FairingPosition::Middle);
    assert!(data.surface_contact().is_none());
    assert!(data.fairing_upper_contact().is_some());
    assert_eq!(data.fairing_minimum_z(), 0.0);
    assert_eq!(data.fairing_maximum_z(), 0.0);
    assert_eq!(data.fairing_reference_z(), 0.0);
}

#[test]
fn repeated_builds_are_identical() {
    let fuselage = tube();
    let surface = wing(-0.9, 3.0);
    let a = FairingDataCollection::build(&fuselage, &surface, factors(0.5)).unwrap();
    let b = FairingDataCollection::build(&fuselage, &surface, factors(0.5)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn summary_lists_position_and_dimensions() {
    let data = FairingDataCollection::build(&tube(), &wing(-0.9, 3.0), factors(0.5)).unwrap();
    let summary = data.to_string();
    assert!(summary.contains("Components: WING, FUSELAGE"));
    assert!(summary.contains("Position: ATTACHED_DOWN"));
    assert!(summary.contains("Front length (m): 3.75"));
}

/// A fuselage whose upper side folds back on itself above the widest point
struct FoldedFuselage;

impl FuselageGeometry for FoldedFuselage {
    fn apex(&self) -> Point3 {
        Point3::origin()
    }

    fn section_at_x(&self, _x: f64) -> Result<Vec<Point2>> {
        Ok(vec![
            Point2::new(0.0, 1.5),
            Point2::new(0.8, 1.3),
            Point2::new(1.2, 1.0),
            Point2::new(1.0, 0.7),
            Point2::new(1.5, 0.0),
            Point2::new(1.2, -1.0),
            Point2::new(0.6, -1.4),
            Point2::new(0.0, -1.5),
        ])
    }

    fn camber_z_at_x(&self, _x: f64) -> f64 {
        0.0
    }

    fn width_at_x(&self, _x: f64) -> f64 {
        3.0
    }
}

#[test]
fn folded_section_is_filtered() {
    let data = FairingDataCollection::build(&FoldedFuselage, &wing(0.0, 3.0), factors(0.5)).unwrap();
    assert_eq!(data.position(), FairingPosition::Middle);
    assert_eq!(data.upper_branch().y(), &[0.0, 0.8, 1.2, 1.5]);
    assert_eq!(data.upper_branch().z(), &[1.5, 1.3, 1.0, 0.0]);
    assert_eq!(data.lower_branch().y(), &[1.5, 1.2, 0.6]);
    assert!(are_strictly_ascending(data.upper_branch().y()));
    assert!(are_strictly_descending(data.lower_branch().y()));
    assert!(data.fairing_upper_contact().is_some());
}

#[test]
fn tip_outside_surface_fails() {
    // A fairing wider than the whole surface cannot take a tip section
    let f = FairingFactors {
        width: 20.0,
        ..FairingFactors::default()
    };
    assert!(FairingDataCollection::build(&tube(), &wing(0.0, 3.0), f).is_err());
}
