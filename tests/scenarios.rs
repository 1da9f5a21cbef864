//! End-to-end scenarios across the public API.

use cube_trainer::algorithms::{inverse, parse_algorithm, parse_algorithm_strict, scramble};
use cube_trainer::animation::{Admission, Coordinator, TickOutcome};
use cube_trainer::config::TrainerConfigBuilder;
use cube_trainer::core::{apply_move, apply_moves, is_solved, CubeState, Move, MoveParseError};
use cube_trainer::history::Timeline;
use cube_trainer::trainer::Trainer;
use std::time::Duration;
use stillwater::validation::Validation;

const FRAME: Duration = Duration::from_millis(16);

fn mv(token: &str) -> Move {
    token.parse().unwrap()
}

fn drain(coordinator: &mut Coordinator) -> Vec<TickOutcome> {
    let mut outcomes = Vec::new();
    while coordinator.is_animating() {
        outcomes.push(coordinator.tick(FRAME));
    }
    outcomes
}

#[test]
fn committing_after_jump_discards_the_redo_branch() {
    let mut timeline = Timeline::new(CubeState::solved());
    timeline.commit(mv("R"));
    timeline.commit(mv("U"));
    assert!(timeline.jump(0));
    timeline.commit(mv("F"));

    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.entries()[1].origin, Some(mv("F")));
    assert_eq!(timeline.current(), &CubeState::solved().apply(mv("F")));
}

#[test]
fn sexy_move_six_times_returns_to_solved() {
    let sexy = parse_algorithm("R U R' U'");
    let mut cube = CubeState::solved();
    for round in 1..=6 {
        cube = apply_moves(&cube, &sexy);
        assert_eq!(cube.is_solved(), round == 6, "after {round} rounds");
    }
}

#[test]
fn sequence_then_inverse_is_sticker_identical() {
    let sequence = parse_algorithm("R U R' F D B' L2 U'");
    assert_eq!(sequence.len(), 8);

    let scrambled = apply_moves(&CubeState::solved(), &sequence);
    assert!(!is_solved(&scrambled));

    let undo = inverse(&sequence);
    assert_eq!(undo, parse_algorithm("U L2 B D' F' R U' R'"));

    let restored = apply_moves(&scrambled, &undo);
    assert_eq!(restored, CubeState::solved());
}

#[test]
fn second_request_while_animating_is_dropped() {
    let mut coordinator = Coordinator::new(
        Timeline::new(CubeState::solved()),
        Duration::from_millis(300),
    );

    assert_eq!(coordinator.request_move(mv("R")), Admission::Accepted);
    coordinator.tick(FRAME);
    let before = coordinator.animation();

    assert_eq!(coordinator.request_move(mv("U")), Admission::Busy);
    assert_eq!(coordinator.animation(), before);
    assert_eq!(coordinator.timeline().len(), 1);

    let outcomes = drain(&mut coordinator);
    let committed: Vec<Move> = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            TickOutcome::Committed(mv) => Some(*mv),
            _ => None,
        })
        .collect();

    assert_eq!(committed, vec![mv("R")]);
    assert_eq!(coordinator.timeline().executed_moves(), vec![mv("R")]);
}

#[test]
fn solved_check_distinguishes_one_turn() {
    let solved = CubeState::solved();
    assert!(is_solved(&solved));
    assert!(!is_solved(&apply_move(&solved, mv("R"))));
}

#[test]
fn long_scramble_has_no_repeated_faces() {
    let moves = scramble(50);
    assert_eq!(moves.len(), 50);
    assert!(moves.windows(2).all(|pair| pair[0].face() != pair[1].face()));
}

#[test]
fn strict_parse_reports_every_bad_token() {
    match parse_algorithm_strict("R Q U3 F") {
        Validation::Success(_) => panic!("expected failure"),
        Validation::Failure(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(errors
                .iter()
                .all(|e| !matches!(e, MoveParseError::Empty)));
        }
    }
}

#[test]
fn trainer_session_scramble_solve_rewind() {
    let config = TrainerConfigBuilder::new()
        .quarter_turn(Duration::from_millis(100))
        .scramble_length(12)
        .build()
        .unwrap();
    let mut trainer = Trainer::new(config);

    let scrambled_with = trainer.scramble().unwrap();
    assert_eq!(scrambled_with.len(), 12);
    let scrambled = trainer.cube().clone();

    trainer.load_algorithm(inverse(&scrambled_with));
    trainer.play();
    while trainer.playback().is_playing() || trainer.coordinator().is_animating() {
        trainer.tick(FRAME);
    }

    assert!(trainer.is_solved());
    assert_eq!(trainer.timeline().len(), 13);

    trainer.rewind();
    assert_eq!(trainer.cube(), &scrambled);
    assert_eq!(trainer.timeline().len(), 1);
}
