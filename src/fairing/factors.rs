use serde::{Deserialize, Serialize};

/// Dimensionless factors which size a fairing relative to the root chord, the root thickness
/// and the fuselage width. Missing fields take the values of a typical wing fairing when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FairingFactors {
    /// Length of the fairing ahead of the root leading edge, as a fraction of the root chord
    pub front_length: f64,

    /// Length of the fairing behind the root trailing edge, as a fraction of the root chord
    pub back_length: f64,

    /// Lateral extent of the fairing, as a fraction of the fuselage half width (or of the span
    /// between the contact point and the fuselage side, for attached positions)
    pub width: f64,

    /// Height of the fairing above (or below) the root, as a fraction of the root thickness
    pub height: f64,

    pub height_below_reference: f64,
    pub height_above_reference: f64,
    pub fillet_radius: f64,
}

impl Default for FairingFactors {
    fn default() -> Self {
        Self {
            front_length: 1.25,
            back_length: 1.25,
            width: 0.5,
            height: 0.1,
            height_below_reference: 0.7,
            height_above_reference: 0.5,
            fillet_radius: 0.6,
        }
    }
}
