//! Reading and writing algorithm strings like `"R U R' U'"`.

use crate::core::{Move, MoveParseError};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Permissive parser: splits on whitespace and keeps only tokens that are
/// one of the 18 moves. Anything else is dropped without complaint.
///
/// # Example
///
/// ```rust
/// use cube_trainer::algorithms::{format_algorithm, parse_algorithm};
///
/// let moves = parse_algorithm("  R U  x R' (U') U'  ");
/// assert_eq!(format_algorithm(&moves), "R U R' U'");
/// ```
pub fn parse_algorithm(text: &str) -> Vec<Move> {
    text.split_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect()
}

/// Strict parser: every token must be a move.
///
/// Reports ALL bad tokens at once rather than stopping at the first.
pub fn parse_algorithm_strict(text: &str) -> Validation<Vec<Move>, NonEmptyVec<MoveParseError>> {
    let checks: Vec<Validation<Move, NonEmptyVec<MoveParseError>>> = text
        .split_whitespace()
        .map(|token| match token.parse::<Move>() {
            Ok(mv) => Validation::success(mv),
            Err(err) => Validation::fail(err),
        })
        .collect();

    Validation::all_vec(checks)
}

/// Space-separated notation.
pub fn format_algorithm(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
