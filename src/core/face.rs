//! The six faces of the cube.

use super::sticker::Sticker;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A face of the cube, named by its position relative to the viewer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    /// All faces, in storage order.
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    /// Position of this face in `Face::ALL` and in cube storage.
    pub const fn index(self) -> usize {
        match self {
            Self::U => 0,
            Self::D => 1,
            Self::F => 2,
            Self::B => 3,
            Self::L => 4,
            Self::R => 5,
        }
    }

    /// Color this face shows on a solved cube.
    pub const fn home_color(self) -> Sticker {
        match self {
            Self::U => Sticker::White,
            Self::D => Sticker::Yellow,
            Self::F => Sticker::Green,
            Self::B => Sticker::Blue,
            Self::L => Sticker::Orange,
            Self::R => Sticker::Red,
        }
    }

    /// Notation letter.
    pub const fn letter(self) -> char {
        match self {
            Self::U => 'U',
            Self::D => 'D',
            Self::F => 'F',
            Self::B => 'B',
            Self::L => 'L',
            Self::R => 'R',
        }
    }

    /// Parse a notation letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_storage_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn letters_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('X'), None);
        assert_eq!(Face::from_letter('r'), None);
    }

    #[test]
    fn home_colors_are_distinct() {
        let colors: std::collections::HashSet<Sticker> =
            Face::ALL.iter().map(|f| f.home_color()).collect();
        assert_eq!(colors.len(), 6);
        assert_eq!(Face::U.home_color(), Sticker::White);
        assert_eq!(Face::R.home_color(), Sticker::Red);
    }
}
