//! Applying moves to cube states.
//!
//! Pure functions: each call returns a fresh state and leaves its input
//! untouched. There is no error path; every [`Move`] is legal on every
//! state.

use super::cube::{CubeState, FaceStickers};
use super::moves::{Move, Turn};
use super::tables::{self, Ring};

/// Apply one move, returning the resulting state.
///
/// # Example
///
/// ```rust
/// use cube_trainer::core::{apply_move, CubeState, Move};
///
/// let r: Move = "R".parse().unwrap();
/// let turned = apply_move(&CubeState::solved(), r);
/// assert!(!turned.is_solved());
/// assert!(apply_move(&turned, r.inverse()).is_solved());
/// ```
pub fn apply_move(state: &CubeState, mv: Move) -> CubeState {
    let mut next = state.clone();
    let face = mv.face();

    let permutation = match mv.turn() {
        Turn::Clockwise => &tables::CLOCKWISE,
        Turn::CounterClockwise => &tables::COUNTER_CLOCKWISE,
        Turn::Double => &tables::HALF,
    };
    let rotated = permute(state.face(face), permutation);
    *next.face_mut(face) = rotated;

    let ring = tables::ring(face);
    match mv.turn() {
        Turn::Clockwise => cycle_ring(&mut next, ring, 1),
        Turn::CounterClockwise => cycle_ring(&mut next, ring, 3),
        Turn::Double => {
            cycle_ring(&mut next, ring, 1);
            cycle_ring(&mut next, ring, 1);
        }
    }

    next
}

/// Apply moves left to right.
pub fn apply_moves<'a, I>(state: &CubeState, moves: I) -> CubeState
where
    I: IntoIterator<Item = &'a Move>,
{
    moves
        .into_iter()
        .fold(state.clone(), |acc, mv| apply_move(&acc, *mv))
}

impl CubeState {
    /// See [`apply_move`].
    pub fn apply(&self, mv: Move) -> CubeState {
        apply_move(self, mv)
    }

    /// See [`apply_moves`].
    pub fn apply_all(&self, moves: &[Move]) -> CubeState {
        apply_moves(self, moves)
    }
}

fn permute(stickers: &FaceStickers, permutation: &[usize; 9]) -> FaceStickers {
    permutation.map(|from| stickers[from])
}

/// Strip `k` takes the old stickers of strip `k + offset`. An offset of 1
/// is one clockwise step, 3 is one counter-clockwise step.
fn cycle_ring(state: &mut CubeState, ring: &Ring, offset: usize) {
    let before: Vec<[_; 3]> = ring
        .iter()
        .map(|strip| strip.indices.map(|i| state.sticker(strip.face, i)))
        .collect();

    for (k, strip) in ring.iter().enumerate() {
        let source = before[(k + offset) % ring.len()];
        let target = state.face_mut(strip.face);
        for (slot, sticker) in strip.indices.iter().zip(source) {
            target[*slot] = sticker;
        }
    }
}
