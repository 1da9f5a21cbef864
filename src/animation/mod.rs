//! Turn animation coordination.
//!
//! The coordinator is a small tick-driven state machine that lets one move
//! at a time into the timeline:
//!
//! ```text
//! Idle --request_move--> Animating --tick...--> CommitPending --tick--> Idle
//! ```
//!
//! Requests that arrive while a move is in flight are dropped, not queued.
//! The timeline only ever sees whole moves; in-between angles exist solely
//! in the transient [`AnimationState`] handed to renderers.

mod coordinator;
mod orientation;
mod phase;

pub use coordinator::{Admission, Coordinator, TickOutcome};
pub use orientation::{target_angle, visual_sign};
pub use phase::{AnimationState, Phase};
