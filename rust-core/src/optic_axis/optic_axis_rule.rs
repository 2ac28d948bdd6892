use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EyeError, Result};
use crate::optic_axis::photoreceptor_slot::PhotoreceptorSlot;

/// Direction rule deciding which neighbor each photoreceptor's optic axis points to.
///
/// Paths are sequences of direction codes relative to the home element
/// (0 = self, 1-6 = single hop, 7-18 = two-hop composite):
/// ```text
///         1
///     6       2
///         o
///     5       3
///         4
/// ```
/// The layout is the right eye seen from inside (left eye seen from outside);
/// 5 and 6 are anterior, 2 and 3 posterior.
///
/// The send and provide tables are not inverse functions of each other; they only
/// agree after conflict resolution in [`WiringMap`](crate::optic_axis::WiringMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpticAxisRule {
    /// Every photoreceptor looks through its own ommatidium
    Plain,
    /// Neural superposition for the dorsal half
    SuperpositionTop,
    /// Neural superposition for the ventral half
    SuperpositionBottom,
}

impl OpticAxisRule {
    pub const ALL: [OpticAxisRule; 3] = [
        OpticAxisRule::Plain,
        OpticAxisRule::SuperpositionTop,
        OpticAxisRule::SuperpositionBottom,
    ];

    /// Identifier used in configuration ("Plain", "SuperpositionTop", "SuperpositionBottom").
    pub fn key(self) -> &'static str {
        match self {
            OpticAxisRule::Plain => "Plain",
            OpticAxisRule::SuperpositionTop => "SuperpositionTop",
            OpticAxisRule::SuperpositionBottom => "SuperpositionBottom",
        }
    }

    /// Descriptive name of the rule.
    pub fn name(self) -> &'static str {
        match self {
            OpticAxisRule::Plain => "plain",
            OpticAxisRule::SuperpositionTop | OpticAxisRule::SuperpositionBottom => {
                "neural superposition"
            }
        }
    }

    /// Path to the neighbor that receives this photoreceptor's projection.
    pub fn send_path(self, slot: PhotoreceptorSlot) -> &'static [u8] {
        use PhotoreceptorSlot::*;
        match self {
            OpticAxisRule::Plain => &[0],
            OpticAxisRule::SuperpositionTop => match slot {
                R1 => &[2],
                R2 => &[3],
                R3 => &[12],
                R4 => &[4],
                R5 => &[5],
                R6 => &[6],
                R7 | R8 => &[0],
            },
            OpticAxisRule::SuperpositionBottom => match slot {
                R1 => &[3],
                R2 => &[2],
                R3 => &[8],
                R4 => &[1],
                R5 => &[6],
                R6 => &[5],
                R7 | R8 => &[0],
            },
        }
    }

    /// Path to the neighbor that provides this photoreceptor to the home element.
    pub fn provide_path(self, slot: PhotoreceptorSlot) -> &'static [u8] {
        use PhotoreceptorSlot::*;
        match self {
            OpticAxisRule::Plain => &[0],
            OpticAxisRule::SuperpositionTop => match slot {
                R1 => &[5],
                R2 => &[6],
                R3 => &[18],
                R4 => &[1],
                R5 => &[2],
                R6 => &[3],
                R7 | R8 => &[0],
            },
            OpticAxisRule::SuperpositionBottom => match slot {
                R1 => &[6],
                R2 => &[5],
                R3 => &[14],
                R4 => &[4],
                R5 => &[3],
                R6 => &[2],
                R7 | R8 => &[0],
            },
        }
    }

    /// [`send_path`](Self::send_path) for a raw slot index (1-8).
    pub fn send_path_for_index(self, index: u8) -> Result<&'static [u8]> {
        Ok(self.send_path(PhotoreceptorSlot::from_index(index)?))
    }

    /// [`provide_path`](Self::provide_path) for a raw slot index (1-8).
    pub fn provide_path_for_index(self, index: u8) -> Result<&'static [u8]> {
        Ok(self.provide_path(PhotoreceptorSlot::from_index(index)?))
    }
}

impl fmt::Display for OpticAxisRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OpticAxisRule {
    type Err = EyeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|rule| rule.key() == s)
            .ok_or_else(|| EyeError::UnsupportedRule(s.to_string()))
    }
}
