//! Sticker colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six sticker colors of a standard cube.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sticker {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Sticker {
    /// All six colors.
    pub const ALL: [Sticker; 6] = [
        Sticker::White,
        Sticker::Yellow,
        Sticker::Red,
        Sticker::Orange,
        Sticker::Blue,
        Sticker::Green,
    ];

    /// Display color as a CSS hex string.
    pub fn hex(self) -> &'static str {
        match self {
            Self::White => "#FFFFFF",
            Self::Yellow => "#FFD500",
            Self::Red => "#B90000",
            Self::Orange => "#FF5900",
            Self::Blue => "#0045AD",
            Self::Green => "#009B48",
        }
    }

    /// Single-letter code used by the text net.
    pub fn letter(self) -> char {
        match self {
            Self::White => 'W',
            Self::Yellow => 'Y',
            Self::Red => 'R',
            Self::Orange => 'O',
            Self::Blue => 'B',
            Self::Green => 'G',
        }
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
