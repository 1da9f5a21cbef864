//! Top-level trainer: the imperative shell around the cube engine.
//!
//! A [`Trainer`] owns the [`Coordinator`] (and through it the timeline)
//! plus playback state for a loaded algorithm. Input handlers call the
//! action methods; the frame loop calls [`Trainer::tick`]; renderers read
//! the query methods.

use crate::algorithms;
use crate::animation::{Admission, AnimationState, Coordinator, TickOutcome};
use crate::config::{ConfigError, TrainerConfig};
use crate::core::{CubeState, Move};
use crate::history::Timeline;
use rand::Rng;
use std::time::Duration;

/// Step-by-step playback of a loaded move list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Playback {
    moves: Vec<Move>,
    index: usize,
    playing: bool,
}

impl Playback {
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Index of the next move to play.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True once every loaded move has been played.
    pub fn is_finished(&self) -> bool {
        self.index >= self.moves.len()
    }

    fn rewind(&mut self) {
        self.index = 0;
        self.playing = false;
    }
}

/// Interactive cube session.
///
/// # Example
///
/// ```rust
/// use cube_trainer::algorithms::parse_algorithm;
/// use cube_trainer::config::TrainerConfig;
/// use cube_trainer::trainer::Trainer;
/// use std::time::Duration;
///
/// let mut trainer = Trainer::new(TrainerConfig::default());
/// trainer.load_algorithm(parse_algorithm("R U R' U'"));
/// trainer.play();
///
/// while trainer.playback().is_playing() {
///     trainer.tick(Duration::from_millis(50));
/// }
///
/// assert_eq!(trainer.executed_moves(), parse_algorithm("R U R' U'"));
/// ```
#[derive(Clone, Debug)]
pub struct Trainer {
    config: TrainerConfig,
    coordinator: Coordinator,
    playback: Playback,
}

impl Trainer {
    /// Start from a solved cube.
    pub fn new(config: TrainerConfig) -> Self {
        Self::with_seed(config, CubeState::solved())
    }

    /// Start from an arbitrary state.
    pub fn with_seed(config: TrainerConfig, seed: CubeState) -> Self {
        let coordinator = Coordinator::new(Timeline::new(seed), config.quarter_turn);
        Self {
            config,
            coordinator,
            playback: Playback::default(),
        }
    }

    /// Scramble a solved cube with a fresh random sequence and start a new
    /// timeline from it. Returns the scramble, or `None` without touching
    /// anything while a move is in flight.
    pub fn scramble(&mut self) -> Option<Vec<Move>> {
        self.scramble_with(&mut rand::thread_rng())
    }

    /// [`scramble`](Self::scramble) with a caller-supplied RNG.
    pub fn scramble_with<R: Rng>(&mut self, rng: &mut R) -> Option<Vec<Move>> {
        if self.refuse_while_busy("scramble") {
            return None;
        }

        let moves = algorithms::scramble_with(rng, self.config.scramble_length);
        let seed = CubeState::solved().apply_all(&moves);

        self.coordinator.scramble(seed);
        self.playback.rewind();
        tracing::debug!(
            scramble = %algorithms::format_algorithm(&moves),
            "scrambled"
        );
        Some(moves)
    }

    /// Back to a solved cube with an empty history.
    pub fn reset(&mut self) -> Admission {
        if self.refuse_while_busy("reset") {
            return Admission::Busy;
        }

        self.coordinator.reset(CubeState::solved());
        self.playback.rewind();
        tracing::debug!("reset to solved");
        Admission::Accepted
    }

    /// Undo every executed move and start a fresh timeline there.
    pub fn rewind(&mut self) -> Admission {
        if self.refuse_while_busy("rewind") {
            return Admission::Busy;
        }

        self.coordinator.rewind();
        self.playback.rewind();
        Admission::Accepted
    }

    /// Request a single move. Dropped if a move is already in flight.
    pub fn execute_move(&mut self, mv: Move) -> Admission {
        self.coordinator.request_move(mv)
    }

    /// Load a move list for playback. Playback restarts paused.
    pub fn load_algorithm(&mut self, moves: Vec<Move>) {
        tracing::debug!(
            algorithm = %algorithms::format_algorithm(&moves),
            "algorithm loaded"
        );
        self.playback = Playback {
            moves,
            index: 0,
            playing: false,
        };
    }

    /// Start or resume playback. A finished playback starts over.
    pub fn play(&mut self) {
        if self.playback.is_finished() {
            self.playback.index = 0;
        }
        self.playback.playing = true;
        tracing::debug!(index = self.playback.index, "playback started");
    }

    pub fn pause(&mut self) {
        self.playback.playing = false;
        tracing::debug!(index = self.playback.index, "playback paused");
    }

    /// Change how long a quarter turn takes.
    ///
    /// The new duration goes through the same validation as a built
    /// config; a rejected value leaves the speed unchanged.
    pub fn set_speed(&mut self, quarter_turn: Duration) -> Result<(), ConfigError> {
        let candidate = TrainerConfig {
            quarter_turn,
            ..self.config.clone()
        };
        candidate.validate()?;

        self.config = candidate;
        self.coordinator.set_quarter_turn(quarter_turn);
        Ok(())
    }

    /// Move the timeline cursor; see [`Timeline::jump`].
    ///
    /// Returns `false` without moving while a move is in flight.
    pub fn jump(&mut self, index: usize) -> bool {
        if self.refuse_while_busy("jump") {
            return false;
        }
        self.coordinator.jump(index)
    }

    /// Timeline actions wait for the move in flight to commit.
    fn refuse_while_busy(&self, action: &str) -> bool {
        match self.coordinator.phase().in_flight() {
            Some(mv) => {
                tracing::debug!(action, in_flight = %mv, "action refused while a move is in flight");
                true
            }
            None => false,
        }
    }

    /// Advance one frame.
    ///
    /// Ticks the coordinator, then, if playback is running and nothing is
    /// in flight, feeds it the next loaded move. Playback stops once the
    /// list is exhausted.
    pub fn tick(&mut self, delta: Duration) -> TickOutcome {
        let outcome = self.coordinator.tick(delta);

        if self.playback.playing && !self.coordinator.is_animating() {
            match self.playback.moves.get(self.playback.index).copied() {
                Some(mv) => {
                    if self.coordinator.request_move(mv) == Admission::Accepted {
                        self.playback.index += 1;
                    }
                }
                None => {
                    self.playback.playing = false;
                    tracing::debug!("playback finished");
                }
            }
        }

        outcome
    }

    pub fn cube(&self) -> &CubeState {
        self.coordinator.current()
    }

    pub fn is_solved(&self) -> bool {
        self.cube().is_solved()
    }

    pub fn timeline(&self) -> &Timeline {
        self.coordinator.timeline()
    }

    pub fn executed_moves(&self) -> Vec<Move> {
        self.coordinator.timeline().executed_moves()
    }

    pub fn animation(&self) -> Option<AnimationState> {
        self.coordinator.animation()
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::parse_algorithm;
    use crate::config::TrainerConfigBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FRAME: Duration = Duration::from_millis(100);

    fn trainer() -> Trainer {
        let config = TrainerConfigBuilder::new()
            .quarter_turn(Duration::from_millis(200))
            .scramble_length(15)
            .build()
            .unwrap();
        Trainer::new(config)
    }

    fn mv(token: &str) -> Move {
        token.parse().unwrap()
    }

    fn settle(trainer: &mut Trainer) {
        for _ in 0..1000 {
            if !trainer.coordinator().is_animating() && !trainer.playback().is_playing() {
                return;
            }
            trainer.tick(FRAME);
        }
        panic!("trainer never settled");
    }

    #[test]
    fn new_trainer_is_solved() {
        let trainer = trainer();
        assert!(trainer.is_solved());
        assert_eq!(trainer.timeline().len(), 1);
        assert!(trainer.animation().is_none());
    }

    #[test]
    fn execute_move_commits_after_ticks() {
        let mut trainer = trainer();
        assert_eq!(trainer.execute_move(mv("R")), Admission::Accepted);
        assert!(trainer.is_solved());

        settle(&mut trainer);
        assert_eq!(trainer.executed_moves(), vec![mv("R")]);
        assert!(!trainer.is_solved());
    }

    #[test]
    fn scramble_uses_configured_length() {
        let mut trainer = trainer();
        trainer.execute_move(mv("R"));
        settle(&mut trainer);

        let moves = trainer
            .scramble_with(&mut StdRng::seed_from_u64(11))
            .unwrap();

        assert_eq!(moves.len(), 15);
        assert_eq!(trainer.timeline().len(), 1);
        assert_eq!(trainer.cube(), &CubeState::solved().apply_all(&moves));
        assert!(trainer.executed_moves().is_empty());
    }

    #[test]
    fn reset_returns_to_solved() {
        let mut trainer = trainer();
        trainer.scramble().unwrap();
        assert_eq!(trainer.reset(), Admission::Accepted);
        assert!(trainer.is_solved());
        assert_eq!(trainer.timeline().len(), 1);
    }

    #[test]
    fn rewind_restores_scrambled_root() {
        let mut trainer = trainer();
        trainer.scramble_with(&mut StdRng::seed_from_u64(5));
        let scrambled = trainer.cube().clone();

        trainer.load_algorithm(parse_algorithm("R U R' U' F2"));
        trainer.play();
        settle(&mut trainer);
        assert_ne!(trainer.cube(), &scrambled);

        assert_eq!(trainer.rewind(), Admission::Accepted);
        assert_eq!(trainer.cube(), &scrambled);
        assert!(trainer.executed_moves().is_empty());
        assert_eq!(trainer.playback().index(), 0);
    }

    #[test]
    fn playback_feeds_moves_one_at_a_time() {
        let mut trainer = trainer();
        let alg = parse_algorithm("R U R' U'");
        trainer.load_algorithm(alg.clone());
        trainer.play();

        trainer.tick(FRAME);
        assert_eq!(trainer.playback().index(), 1);
        assert_eq!(trainer.animation().unwrap().face, mv("R").face());

        // Mid-flight ticks never start a second move.
        trainer.tick(FRAME);
        assert_eq!(trainer.playback().index(), 1);

        settle(&mut trainer);
        assert_eq!(trainer.executed_moves(), alg);
        assert!(trainer.playback().is_finished());
        assert!(!trainer.playback().is_playing());
    }

    #[test]
    fn pause_stops_feeding() {
        let mut trainer = trainer();
        trainer.load_algorithm(parse_algorithm("R U"));
        trainer.play();
        trainer.tick(FRAME);
        trainer.pause();

        settle(&mut trainer);
        assert_eq!(trainer.executed_moves(), vec![mv("R")]);
        assert_eq!(trainer.playback().index(), 1);

        trainer.play();
        settle(&mut trainer);
        assert_eq!(trainer.executed_moves(), parse_algorithm("R U"));
    }

    #[test]
    fn play_after_finish_starts_over() {
        let mut trainer = trainer();
        trainer.load_algorithm(parse_algorithm("U2"));
        trainer.play();
        settle(&mut trainer);
        assert!(trainer.playback().is_finished());

        trainer.play();
        assert_eq!(trainer.playback().index(), 0);
        settle(&mut trainer);
        assert_eq!(trainer.executed_moves(), parse_algorithm("U2 U2"));
        assert!(trainer.is_solved());
    }

    #[test]
    fn sexy_move_playback_six_times_solves() {
        let mut trainer = trainer();
        trainer.load_algorithm(parse_algorithm("R U R' U'"));
        for _ in 0..6 {
            trainer.play();
            settle(&mut trainer);
        }
        assert!(trainer.is_solved());
        assert_eq!(trainer.timeline().len(), 25);
    }

    #[test]
    fn load_algorithm_pauses_and_restarts() {
        let mut trainer = trainer();
        trainer.load_algorithm(parse_algorithm("R"));
        trainer.play();
        trainer.load_algorithm(parse_algorithm("F B"));
        assert!(!trainer.playback().is_playing());
        assert_eq!(trainer.playback().index(), 0);
        assert_eq!(trainer.playback().moves().len(), 2);
    }

    #[test]
    fn manual_move_during_playback_is_dropped() {
        let mut trainer = trainer();
        trainer.load_algorithm(parse_algorithm("L"));
        trainer.play();
        trainer.tick(FRAME);

        assert_eq!(trainer.execute_move(mv("D")), Admission::Busy);
        settle(&mut trainer);
        assert_eq!(trainer.executed_moves(), vec![mv("L")]);
    }

    #[test]
    fn jump_then_move_branches() {
        let mut trainer = trainer();
        for m in parse_algorithm("R U") {
            trainer.execute_move(m);
            settle(&mut trainer);
        }
        assert!(trainer.jump(0));
        trainer.execute_move(mv("F"));
        settle(&mut trainer);

        assert_eq!(trainer.timeline().len(), 2);
        assert_eq!(trainer.executed_moves(), vec![mv("F")]);
    }

    #[test]
    fn set_speed_updates_config_and_coordinator() {
        let mut trainer = trainer();
        trainer.set_speed(Duration::from_millis(50)).unwrap();
        assert_eq!(trainer.config().quarter_turn, Duration::from_millis(50));
        assert_eq!(
            trainer.coordinator().quarter_turn(),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn set_speed_rejects_zero_duration() {
        let mut trainer = trainer();
        let result = trainer.set_speed(Duration::ZERO);

        assert!(matches!(result, Err(ConfigError::ZeroTurnDuration)));
        assert_eq!(trainer.config().quarter_turn, Duration::from_millis(200));
        assert_eq!(
            trainer.coordinator().quarter_turn(),
            Duration::from_millis(200)
        );
        assert!(trainer.config().validate().is_ok());
    }

    #[test]
    fn timeline_actions_wait_for_move_in_flight() {
        let mut trainer = trainer();
        trainer.load_algorithm(parse_algorithm("R U R' U'"));
        trainer.play();
        trainer.tick(FRAME);
        assert!(trainer.coordinator().is_animating());

        assert!(trainer.scramble().is_none());
        assert_eq!(trainer.reset(), Admission::Busy);
        assert_eq!(trainer.rewind(), Admission::Busy);
        assert!(!trainer.jump(0));

        // Nothing was replaced; playback carries on where it was.
        assert_eq!(trainer.timeline().len(), 1);
        assert!(trainer.playback().is_playing());
        assert_eq!(trainer.playback().index(), 1);

        trainer.pause();
        settle(&mut trainer);
        assert_eq!(trainer.executed_moves(), vec![mv("R")]);

        let moves = trainer
            .scramble_with(&mut StdRng::seed_from_u64(9))
            .unwrap();
        for _ in 0..200 {
            trainer.tick(FRAME);
        }

        assert!(trainer.executed_moves().is_empty());
        assert_eq!(trainer.timeline().len(), 1);
        assert_eq!(trainer.cube(), &CubeState::solved().apply_all(&moves));
        assert_eq!(trainer.playback().index(), 0);
    }

    #[test]
    fn reset_during_commit_pending_is_refused() {
        let mut trainer = trainer();
        trainer.execute_move(mv("F"));
        trainer.tick(Duration::from_secs(1));
        assert!(trainer.animation().is_some());

        assert_eq!(trainer.reset(), Admission::Busy);
        trainer.tick(FRAME);

        assert_eq!(trainer.executed_moves(), vec![mv("F")]);
        assert_eq!(trainer.reset(), Admission::Accepted);
        assert!(trainer.is_solved());
        assert_eq!(trainer.timeline().len(), 1);
    }

    #[test]
    fn with_seed_starts_from_given_state() {
        let seed = CubeState::solved().apply(mv("B'"));
        let trainer = Trainer::with_seed(TrainerConfig::default(), seed.clone());
        assert_eq!(trainer.cube(), &seed);
        assert_eq!(trainer.timeline().root(), &seed);
    }
}
