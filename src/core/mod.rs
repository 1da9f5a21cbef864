//! Pure cube algebra.
//!
//! This module contains the combinatorial core of the trainer:
//! - Sticker, face, and move vocabulary
//! - The 54-sticker `CubeState` value
//! - The move applier, driven by declarative permutation tables
//! - The solved check
//!
//! Everything here is pure. States are values; applying a move returns a
//! new state.

mod apply;
mod cube;
mod face;
mod moves;
mod sticker;
mod tables;

pub use apply::{apply_move, apply_moves};
pub use cube::{is_solved, CubeState, FaceStickers, CENTER};
pub use face::Face;
pub use moves::{Move, MoveParseError, Turn};
pub use sticker::Sticker;
