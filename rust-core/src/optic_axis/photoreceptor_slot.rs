use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EyeError, Result};

/// The eight canonical photoreceptors of an ommatidium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhotoreceptorSlot {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
}

impl PhotoreceptorSlot {
    /// All slots in canonical order.
    pub const ALL: [PhotoreceptorSlot; 8] = [
        PhotoreceptorSlot::R1,
        PhotoreceptorSlot::R2,
        PhotoreceptorSlot::R3,
        PhotoreceptorSlot::R4,
        PhotoreceptorSlot::R5,
        PhotoreceptorSlot::R6,
        PhotoreceptorSlot::R7,
        PhotoreceptorSlot::R8,
    ];

    /// Slot index, 1-8.
    pub fn index(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            1..=8 => Ok(Self::ALL[(index - 1) as usize]),
            _ => Err(EyeError::SlotIndexOutOfRange(index)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PhotoreceptorSlot::R1 => "R1",
            PhotoreceptorSlot::R2 => "R2",
            PhotoreceptorSlot::R3 => "R3",
            PhotoreceptorSlot::R4 => "R4",
            PhotoreceptorSlot::R5 => "R5",
            PhotoreceptorSlot::R6 => "R6",
            PhotoreceptorSlot::R7 => "R7",
            PhotoreceptorSlot::R8 => "R8",
        }
    }

    /// Whether `name` is one of R1-R8.
    pub fn is_photoreceptor(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }
}

impl fmt::Display for PhotoreceptorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhotoreceptorSlot {
    type Err = EyeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.name() == s)
            .ok_or_else(|| EyeError::UnknownPhotoreceptor(s.to_string()))
    }
}
