//! Move-sequence utilities built on the core move alphabet.
//!
//! - Random scrambles with no face repeated twice in a row
//! - Algebraic inverses of sequences
//! - Reading and writing algorithm strings

mod inverse;
mod parse;
mod scramble;

pub use inverse::inverse;
pub use parse::{format_algorithm, parse_algorithm, parse_algorithm_strict};
pub use scramble::{scramble, scramble_with, scrambled_cube, DEFAULT_SCRAMBLE_LENGTH};
