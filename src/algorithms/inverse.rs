//! Sequence inversion.

use crate::core::Move;

/// The sequence that undoes `moves`: reversed, each move inverted.
///
/// For every state `s`, applying `moves` and then `inverse(moves)` gives back
/// `s` sticker for sticker.
///
/// # Example
///
/// ```rust
/// use cube_trainer::algorithms::{inverse, parse_algorithm};
/// use cube_trainer::core::{apply_moves, CubeState};
///
/// let alg = parse_algorithm("R U R' F D B' L2 U'");
/// let mixed = apply_moves(&CubeState::solved(), &alg);
/// let back = apply_moves(&mixed, &inverse(&alg));
/// assert_eq!(back, CubeState::solved());
/// ```
pub fn inverse(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}
