//! Coordinator phases and the renderer-facing animation snapshot.

use super::orientation::target_angle;
use crate::core::{Face, Move};
use serde::{Deserialize, Serialize};

/// Where the coordinator is in its cycle.
///
/// There is no terminal phase; the machine returns to `Idle` after every
/// commit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a move request
    Idle,

    /// A move is being tweened
    Animating {
        mv: Move,
        current_angle: f32,
        target_angle: f32,
    },

    /// The tween reached its target; the move commits on the next tick
    CommitPending { mv: Move, target_angle: f32 },
}

impl Phase {
    pub(crate) fn start(mv: Move) -> Self {
        Self::Animating {
            mv,
            current_angle: 0.0,
            target_angle: target_angle(mv),
        }
    }

    /// Stable label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Animating { .. } => "Animating",
            Self::CommitPending { .. } => "CommitPending",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Move currently in flight, if any.
    pub fn in_flight(&self) -> Option<Move> {
        match self {
            Self::Idle => None,
            Self::Animating { mv, .. } | Self::CommitPending { mv, .. } => Some(*mv),
        }
    }

    /// Renderer view of the turn in progress.
    pub fn animation(&self) -> Option<AnimationState> {
        match *self {
            Self::Idle => None,
            Self::Animating {
                mv,
                current_angle,
                target_angle,
            } => Some(AnimationState {
                face: mv.face(),
                current_angle,
                target_angle,
                animating: true,
            }),
            Self::CommitPending { mv, target_angle } => Some(AnimationState {
                face: mv.face(),
                current_angle: target_angle,
                target_angle,
                animating: true,
            }),
        }
    }
}

/// Transient view of a face turn for renderers. Never part of the
/// timeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Face layer being turned
    pub face: Face,
    /// Degrees swept so far
    pub current_angle: f32,
    /// Degrees to sweep in total, signed
    pub target_angle: f32,
    /// True while the move is in flight
    pub animating: bool,
}
