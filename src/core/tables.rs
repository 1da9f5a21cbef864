//! Permutation tables for face turns.
//!
//! Sticker indices are row-major on each face:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! A turn permutes the turned face's own stickers and cycles three
//! stickers on each of the four neighboring faces. Both halves live here as
//! data so the applier has no per-face branching.

use super::face::Face;

/// `rotated[i] = face[CLOCKWISE[i]]` for a clockwise quarter turn.
pub(crate) const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Inverse of [`CLOCKWISE`].
pub(crate) const COUNTER_CLOCKWISE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Antipodal swap around the center.
pub(crate) const HALF: [usize; 9] = [8, 7, 6, 5, 4, 3, 2, 1, 0];

/// Three stickers of a neighboring face, listed in the order they travel.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Strip {
    pub face: Face,
    pub indices: [usize; 3],
}

const fn strip(face: Face, indices: [usize; 3]) -> Strip {
    Strip { face, indices }
}

/// The four neighbor strips touched by turning a face.
///
/// On a clockwise quarter turn, strip `k` receives the stickers of strip
/// `k + 1` (mod 4), element by element.
pub(crate) type Ring = [Strip; 4];

const RING_U: Ring = [
    strip(Face::F, [0, 1, 2]),
    strip(Face::R, [0, 1, 2]),
    strip(Face::B, [0, 1, 2]),
    strip(Face::L, [0, 1, 2]),
];

const RING_D: Ring = [
    strip(Face::F, [6, 7, 8]),
    strip(Face::L, [6, 7, 8]),
    strip(Face::B, [6, 7, 8]),
    strip(Face::R, [6, 7, 8]),
];

const RING_F: Ring = [
    strip(Face::U, [6, 7, 8]),
    strip(Face::L, [8, 5, 2]),
    strip(Face::D, [2, 1, 0]),
    strip(Face::R, [0, 3, 6]),
];

const RING_B: Ring = [
    strip(Face::U, [0, 1, 2]),
    strip(Face::R, [2, 5, 8]),
    strip(Face::D, [8, 7, 6]),
    strip(Face::L, [6, 3, 0]),
];

const RING_L: Ring = [
    strip(Face::U, [0, 3, 6]),
    strip(Face::B, [8, 5, 2]),
    strip(Face::D, [0, 3, 6]),
    strip(Face::F, [0, 3, 6]),
];

const RING_R: Ring = [
    strip(Face::U, [2, 5, 8]),
    strip(Face::F, [2, 5, 8]),
    strip(Face::D, [2, 5, 8]),
    strip(Face::B, [6, 3, 0]),
];

pub(crate) const fn ring(face: Face) -> &'static Ring {
    match face {
        Face::U => &RING_U,
        Face::D => &RING_D,
        Face::F => &RING_F,
        Face::B => &RING_B,
        Face::L => &RING_L,
        Face::R => &RING_R,
    }
}
