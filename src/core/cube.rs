//! Sticker-level cube representation.

use super::face::Face;
use super::sticker::Sticker;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stickers of one face, row-major, center at index 4.
pub type FaceStickers = [Sticker; 9];

/// Index of the center sticker on every face.
pub const CENTER: usize = 4;

/// A full cube configuration: 6 faces of 9 stickers.
///
/// States are values. Turning the cube produces a new state (see
/// [`apply_move`](super::apply_move)); nothing mutates a state that has
/// already been handed out. Two states are equal iff all 54 stickers match
/// positionally.
///
/// # Example
///
/// ```rust
/// use cube_trainer::core::{CubeState, Face, Sticker};
///
/// let cube = CubeState::solved();
/// assert!(cube.is_solved());
/// assert_eq!(cube.sticker(Face::F, 0), Sticker::Green);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CubeState {
    faces: [FaceStickers; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// The solved cube: every face shows its home color.
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|face| [face.home_color(); 9]),
        }
    }

    /// Build a state from explicit stickers, indexed like `Face::ALL`.
    pub fn from_faces(faces: [FaceStickers; 6]) -> Self {
        Self { faces }
    }

    pub fn face(&self, face: Face) -> &FaceStickers {
        &self.faces[face.index()]
    }

    /// Sticker at `index` (0..9) on `face`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn sticker(&self, face: Face, index: usize) -> Sticker {
        self.faces[face.index()][index]
    }

    pub fn center(&self, face: Face) -> Sticker {
        self.sticker(face, CENTER)
    }

    /// All faces in `Face::ALL` order.
    pub fn faces(&self) -> &[FaceStickers; 6] {
        &self.faces
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceStickers {
        &mut self.faces[face.index()]
    }

    /// True iff every face is a single color matching its own center.
    pub fn is_solved(&self) -> bool {
        is_solved(self)
    }
}

/// Solved check: each face's stickers all equal that face's center.
pub fn is_solved(state: &CubeState) -> bool {
    state
        .faces
        .iter()
        .all(|stickers| stickers.iter().all(|s| *s == stickers[CENTER]))
}

/// Unfolded net:
///
/// ```text
///     U
///   L F R B
///     D
/// ```
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |face: Face, r: usize| -> String {
            self.face(face)[r * 3..r * 3 + 3]
                .iter()
                .map(|s| s.letter())
                .collect()
        };

        for r in 0..3 {
            writeln!(f, "    {}", row(Face::U, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(Face::L, r),
                row(Face::F, r),
                row(Face::R, r),
                row(Face::B, r)
            )?;
        }
        for r in 0..3 {
            writeln!(f, "    {}", row(Face::D, r))?;
        }
        Ok(())
    }
}
