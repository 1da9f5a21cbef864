//! Cube Trainer: a 3×3 Rubik's Cube engine for interactive trainers
//!
//! The crate follows a "pure core, imperative shell" split. Cube states are
//! values and moves are pure functions over them; history, animation and
//! playback are small state machines that own those values and advance only
//! when the caller ticks them.
//!
//! # Core Concepts
//!
//! - **Cube**: Sticker-level state and the 18 face moves (`core`)
//! - **Algorithms**: Notation parsing, inversion and scrambles (`algorithms`)
//! - **History**: Snapshot timeline with cursor and branching (`history`)
//! - **Animation**: Single-flight move coordinator driven by frame ticks (`animation`)
//! - **Trainer**: Session shell with algorithm playback (`trainer`)
//!
//! # Example
//!
//! ```rust
//! use cube_trainer::algorithms::{inverse, parse_algorithm};
//! use cube_trainer::core::{apply_moves, CubeState};
//!
//! let sequence = parse_algorithm("R U R' F D B' L2 U'");
//! let scrambled = apply_moves(&CubeState::solved(), &sequence);
//! assert!(!scrambled.is_solved());
//!
//! let restored = apply_moves(&scrambled, &inverse(&sequence));
//! assert!(restored.is_solved());
//! ```

pub mod algorithms;
pub mod animation;
pub mod config;
pub mod core;
pub mod history;
pub mod trainer;

// Re-export commonly used types
pub use animation::{Admission, AnimationState, Coordinator, Phase, TickOutcome};
pub use config::{ConfigError, TrainerConfig, TrainerConfigBuilder};
pub use core::{apply_move, apply_moves, is_solved, CubeState, Face, Move, Sticker, Turn};
pub use history::{HistoryEntry, Timeline};
pub use trainer::Trainer;
