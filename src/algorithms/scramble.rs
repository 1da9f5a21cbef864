//! Random scramble generation.

use crate::core::{apply_moves, CubeState, Face, Move, Turn};
use rand::Rng;

/// Scramble length used when the caller has no preference.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Generate a scramble of exactly `length` moves using the thread RNG.
///
/// No two consecutive moves turn the same face.
///
/// # Example
///
/// ```rust
/// use cube_trainer::algorithms::scramble;
///
/// let moves = scramble(50);
/// assert_eq!(moves.len(), 50);
/// assert!(moves.windows(2).all(|w| w[0].face() != w[1].face()));
/// ```
pub fn scramble(length: usize) -> Vec<Move> {
    scramble_with(&mut rand::thread_rng(), length)
}

/// Generate a scramble from a caller-supplied RNG.
///
/// Each position draws a face uniformly, redrawing while it equals the
/// previous face, then draws the turn (clockwise, counter-clockwise,
/// double) uniformly and independently.
pub fn scramble_with<R: Rng>(rng: &mut R, length: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(length);
    let mut previous: Option<Face> = None;

    for _ in 0..length {
        let face = loop {
            let candidate = Face::ALL[rng.gen_range(0..Face::ALL.len())];
            if Some(candidate) != previous {
                break candidate;
            }
        };
        let turn = Turn::ALL[rng.gen_range(0..Turn::ALL.len())];

        moves.push(Move::new(face, turn));
        previous = Some(face);
    }

    moves
}

/// A solved cube scrambled by a fresh random sequence, along with the
/// sequence that produced it.
pub fn scrambled_cube(length: usize) -> (CubeState, Vec<Move>) {
    let moves = scramble(length);
    let cube = apply_moves(&CubeState::solved(), &moves);
    (cube, moves)
}
