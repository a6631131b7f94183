/// A point in a fuselage cross-section plane, with `x` holding the spanwise (body y)
/// coordinate and `y` holding the vertical (body z) coordinate.
pub type Point2 = parry2d_f64::na::Point2<f64>;
