use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{EyeError, Result};
use crate::interfaces::Winding;

/// The six principal directions of the hexagonal grid.
///
/// ```text
///         1
///     6       2
///         o
///     5       3
///         4
/// ```
/// Code 0 denotes the element itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum HexDirection {
    Up = 1,
    UpperRight = 2,
    LowerRight = 3,
    Down = 4,
    LowerLeft = 5,
    UpperLeft = 6,
}

/// Two-hop expansions of the composite direction codes 7-18.
static COMPOSITE_HOPS: [[HexDirection; 2]; 12] = {
    use HexDirection::*;
    [
        [Up, Up],                 // 7
        [Up, UpperRight],         // 8
        [UpperRight, UpperRight], // 9
        [UpperRight, LowerRight], // 10
        [LowerRight, LowerRight], // 11
        [LowerRight, Down],       // 12
        [Down, Down],             // 13
        [Down, LowerLeft],        // 14
        [LowerLeft, LowerLeft],   // 15
        [LowerLeft, UpperLeft],   // 16
        [UpperLeft, UpperLeft],   // 17
        [Up, UpperLeft],          // 18
    ]
};

static SINGLE_HOPS: [HexDirection; 6] = HexDirection::ALL;

/// Largest valid direction code.
pub const MAX_DIRECTION_CODE: u8 = 18;

impl HexDirection {
    /// All directions in cyclic order 1..=6.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::Up,
        HexDirection::UpperRight,
        HexDirection::LowerRight,
        HexDirection::Down,
        HexDirection::LowerLeft,
        HexDirection::UpperLeft,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=6 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Slot of this direction in an element's neighbor table.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The direction pointing back (d + 3, wrapped to 1..=6).
    pub fn opposite(self) -> Self {
        Self::ALL[(self.slot() + 2) % 6]
    }

    /// Displacement of one step in this direction for the given element spacing.
    ///
    /// The x component flips for counter-clockwise lattices.
    pub fn unit_axis(self, spacing: f64, winding: Winding) -> Vector2<f64> {
        let half_sqrt3 = 0.5 * 3.0_f64.sqrt();
        let d = match self {
            HexDirection::Up => Vector2::new(0.0, spacing),
            HexDirection::UpperRight => Vector2::new(spacing * half_sqrt3, spacing * 0.5),
            HexDirection::LowerRight => Vector2::new(spacing * half_sqrt3, -spacing * 0.5),
            HexDirection::Down => Vector2::new(0.0, -spacing),
            HexDirection::LowerLeft => Vector2::new(-spacing * half_sqrt3, -spacing * 0.5),
            HexDirection::UpperLeft => Vector2::new(-spacing * half_sqrt3, spacing * 0.5),
        };
        match winding {
            Winding::Clockwise => d,
            Winding::CounterClockwise => Vector2::new(-d.x, d.y),
        }
    }
}

/// Expand a direction code into the hops it stands for.
///
/// 0 stays in place, 1-6 are single hops and 7-18 are two-hop composites.
pub fn expand_direction_code(code: u8) -> Result<&'static [HexDirection]> {
    match code {
        0 => Ok(&[]),
        1..=6 => {
            let i = code as usize;
            Ok(&SINGLE_HOPS[i - 1..i])
        }
        7..=MAX_DIRECTION_CODE => Ok(&COMPOSITE_HOPS[(code - 7) as usize]),
        _ => Err(EyeError::InvalidDirectionCode(code)),
    }
}
