//! Visual rotation direction per face.
//!
//! Renderers rotate a face layer about a shared axis per opposite-face pair
//! (x for L/R, y for U/D, z for F/B). The sign below makes a clockwise
//! turn look clockwise from each face's own side. It is a lookup table,
//! not derived from a rule, and the cube algebra does not depend on it.

use crate::core::{Face, Move, Turn};

/// Sign applied to a clockwise turn of `face`.
pub const fn visual_sign(face: Face) -> f32 {
    match face {
        Face::R | Face::U | Face::F => -1.0,
        Face::L | Face::D | Face::B => 1.0,
    }
}

/// Signed angle in degrees a renderer should sweep for `mv`.
///
/// Quarter turns sweep 90°, half turns 180°. Counter-clockwise turns flip
/// the face's sign.
pub fn target_angle(mv: Move) -> f32 {
    let sign = visual_sign(mv.face());
    match mv.turn() {
        Turn::Clockwise => sign * 90.0,
        Turn::CounterClockwise => -sign * 90.0,
        Turn::Double => sign * 180.0,
    }
}
