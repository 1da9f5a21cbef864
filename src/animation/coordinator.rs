//! Single-flight move coordinator.

use super::phase::{AnimationState, Phase};
use crate::algorithms;
use crate::core::{apply_moves, CubeState, Move};
use crate::history::Timeline;
use std::time::Duration;

/// Degrees swept by a quarter turn.
const QUARTER_TURN_DEGREES: f32 = 90.0;

/// Answer to a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The move started animating
    Accepted,
    /// Another move is in flight; the request was dropped
    Busy,
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Nothing in flight
    Idle,
    /// The tween moved to `angle`
    Advanced { angle: f32 },
    /// The tween reached its target; the move commits on the next tick.
    /// Until then [`Coordinator::current`] still shows the pre-move state.
    Settled(Move),
    /// The move was committed to the timeline
    Committed(Move),
}

/// Gates moves into the timeline one at a time.
///
/// The coordinator owns the [`Timeline`] and the transient animation
/// phase. Each [`tick`](Self::tick) performs at most one phase transition.
///
/// Committing is its own transition: the tick that brings the angle to
/// its target returns [`TickOutcome::Settled`] and leaves the timeline
/// alone, and the following tick commits. The authoritative state
/// therefore lags the settled angle by exactly one tick, and a renderer
/// should keep drawing the turned layer at the target angle until
/// [`TickOutcome::Committed`] arrives.
///
/// # Example
///
/// ```rust
/// use cube_trainer::animation::{Admission, Coordinator, TickOutcome};
/// use cube_trainer::core::{CubeState, Move};
/// use cube_trainer::history::Timeline;
/// use std::time::Duration;
///
/// let r: Move = "R".parse().unwrap();
/// let u: Move = "U".parse().unwrap();
/// let mut coordinator =
///     Coordinator::new(Timeline::new(CubeState::solved()), Duration::from_millis(100));
///
/// assert_eq!(coordinator.request_move(r), Admission::Accepted);
/// assert_eq!(coordinator.request_move(u), Admission::Busy);
///
/// assert_eq!(coordinator.tick(Duration::from_millis(100)), TickOutcome::Settled(r));
/// assert_eq!(coordinator.tick(Duration::from_millis(16)), TickOutcome::Committed(r));
/// assert_eq!(coordinator.timeline().executed_moves(), vec![r]);
/// ```
#[derive(Clone, Debug)]
pub struct Coordinator {
    timeline: Timeline,
    phase: Phase,
    quarter_turn: Duration,
}

impl Coordinator {
    /// Create an idle coordinator around `timeline`. `quarter_turn` is how
    /// long a 90° tween takes; half turns take twice as long.
    pub fn new(timeline: Timeline, quarter_turn: Duration) -> Self {
        Self {
            timeline,
            phase: Phase::Idle,
            quarter_turn,
        }
    }

    /// Start animating `mv` if nothing is in flight.
    ///
    /// A request while busy changes nothing and returns
    /// [`Admission::Busy`]. There is no queue.
    pub fn request_move(&mut self, mv: Move) -> Admission {
        if !self.phase.is_idle() {
            tracing::trace!(
                requested = %mv,
                phase = self.phase.name(),
                "dropped move request while busy"
            );
            return Admission::Busy;
        }

        self.phase = Phase::start(mv);
        tracing::debug!(mv = %mv, "move accepted");
        Admission::Accepted
    }

    /// Advance the machine by one frame of length `delta`.
    ///
    /// While animating, the angle advances at a fixed angular velocity of
    /// 90° per `quarter_turn` and clamps at the target. A tick in
    /// `CommitPending` commits the move and returns to `Idle`.
    pub fn tick(&mut self, delta: Duration) -> TickOutcome {
        match self.phase {
            Phase::Idle => TickOutcome::Idle,
            Phase::Animating {
                mv,
                current_angle,
                target_angle,
            } => {
                let next = current_angle + self.step(delta) * target_angle.signum();
                if next.abs() >= target_angle.abs() {
                    self.phase = Phase::CommitPending { mv, target_angle };
                    TickOutcome::Settled(mv)
                } else {
                    self.phase = Phase::Animating {
                        mv,
                        current_angle: next,
                        target_angle,
                    };
                    TickOutcome::Advanced { angle: next }
                }
            }
            Phase::CommitPending { mv, .. } => {
                self.timeline.commit(mv);
                self.phase = Phase::Idle;
                tracing::debug!(mv = %mv, cursor = self.timeline.cursor(), "move committed");
                TickOutcome::Committed(mv)
            }
        }
    }

    fn step(&self, delta: Duration) -> f32 {
        if self.quarter_turn.is_zero() {
            return f32::INFINITY;
        }
        let ratio = delta.as_nanos() as f64 / self.quarter_turn.as_nanos() as f64;
        (f64::from(QUARTER_TURN_DEGREES) * ratio) as f32
    }

    /// Replace the timeline with a single root at `seed`.
    pub fn reset(&mut self, seed: CubeState) {
        self.warn_if_busy("reset");
        self.timeline.reset(seed);
    }

    /// Replace the timeline with a single root at a scrambled `seed`.
    pub fn scramble(&mut self, seed: CubeState) {
        self.warn_if_busy("scramble");
        self.timeline.scramble(seed);
    }

    /// Undo every executed move and start a fresh timeline at the result.
    ///
    /// The inverse of the executed-move list is applied to the current
    /// state, which lands back on the root snapshot.
    pub fn rewind(&mut self) -> &CubeState {
        self.warn_if_busy("rewind");

        let undo = algorithms::inverse(&self.timeline.executed_moves());
        let rewound = apply_moves(self.timeline.current(), &undo);
        tracing::debug!(undone = undo.len(), "rewinding");

        self.timeline.reset(rewound);
        self.timeline.current()
    }

    /// Move the timeline cursor. Out-of-range indices are ignored.
    pub fn jump(&mut self, index: usize) -> bool {
        self.warn_if_busy("jump");
        self.timeline.jump(index)
    }

    fn warn_if_busy(&self, action: &str) {
        if let Some(mv) = self.phase.in_flight() {
            tracing::warn!(
                action,
                in_flight = %mv,
                "timeline changed while a move is in flight"
            );
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Renderer view of the turn in progress, `None` when idle.
    pub fn animation(&self) -> Option<AnimationState> {
        self.phase.animation()
    }

    pub fn is_animating(&self) -> bool {
        !self.phase.is_idle()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Authoritative cube state; never a partially turned configuration.
    pub fn current(&self) -> &CubeState {
        self.timeline.current()
    }

    pub fn quarter_turn(&self) -> Duration {
        self.quarter_turn
    }

    /// Change the animation speed. Applies to the tween in flight too.
    pub fn set_quarter_turn(&mut self, quarter_turn: Duration) {
        self.quarter_turn = quarter_turn;
    }
}
