use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{EQUATOR_BAND_TOLERANCE, EQUATOR_ROW_CEILING};
use crate::interfaces::Winding;
use crate::lattice::hex_directions::HexDirection;

/// Symmetry band of an element relative to the eye's equator.
///
/// The label tracks how many photoreceptor types meet in the element's cartridge.
/// It is descriptive only and never influences neighbor or wiring computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquatorBand {
    /// Off the equator
    Six,
    /// Two rows away from the equator (R1,R2,R3,R3,R4,R5,R6)
    Seven,
    /// On the equator row (R2,R2,R3,R3,R4,R4,R5,R5)
    EightA,
    /// Next to the equator row (R1,R2,R3,R3,R4,R4,R5,R6)
    EightB,
}

impl EquatorBand {
    pub fn label(self) -> &'static str {
        match self {
            EquatorBand::Six => "6",
            EquatorBand::Seven => "7",
            EquatorBand::EightA => "8a",
            EquatorBand::EightB => "8b",
        }
    }
}

impl fmt::Display for EquatorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn within(y: f64, low: f64, high: f64) -> bool {
    y >= low && y <= high
}

/// Classify an element by its y coordinate.
///
/// Reference rows are the y components of the unit axes; each row is matched within a
/// relative window of [`EQUATOR_BAND_TOLERANCE`]. The thresholds are empirical and only
/// meaningful for the first three rings around the equator.
pub fn classify_equator_band(y: f64, spacing: f64) -> EquatorBand {
    // y of the unit axes does not depend on the winding
    let yi: Vec<f64> = HexDirection::ALL
        .iter()
        .map(|d| d.unit_axis(spacing, Winding::Clockwise).y)
        .collect();
    let lo = 1.0 - EQUATOR_BAND_TOLERANCE;
    let hi = 1.0 + EQUATOR_BAND_TOLERANCE;

    if within(y, yi[2] * hi, EQUATOR_ROW_CEILING) {
        EquatorBand::EightA
    } else if within(y, yi[3] * hi, yi[3] * lo) || within(y, yi[1] * lo, yi[1] * hi) {
        EquatorBand::EightB
    } else if within(y, yi[2] * (3.0 + EQUATOR_BAND_TOLERANCE), yi[2] * (3.0 - EQUATOR_BAND_TOLERANCE))
        || within(y, yi[0] * lo, yi[0] * hi)
    {
        EquatorBand::Seven
    } else {
        EquatorBand::Six
    }
}
