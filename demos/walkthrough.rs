//! Trainer Walkthrough
//!
//! This example drives a trainer session the way a frame loop would.
//!
//! Key concepts:
//! - Scrambling into a fresh timeline
//! - Algorithm playback fed one move per animation
//! - Dropped requests while a move is in flight
//! - Jumping through history and rewinding
//!
//! Run with: RUST_LOG=cube_trainer=debug cargo run --example walkthrough

use cube_trainer::algorithms::{format_algorithm, inverse, parse_algorithm};
use cube_trainer::animation::{Admission, TickOutcome};
use cube_trainer::config::TrainerConfigBuilder;
use cube_trainer::trainer::Trainer;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cube_trainer=info".into()),
        )
        .init();

    println!("=== Cube Trainer Walkthrough ===\n");

    let config = TrainerConfigBuilder::new()
        .quarter_turn(Duration::from_millis(120))
        .scramble_length(10)
        .build()
        .unwrap();
    let mut trainer = Trainer::new(config);

    let scramble = trainer.scramble().unwrap();
    println!("Scramble: {}", format_algorithm(&scramble));
    println!("{}", trainer.cube());

    // Solve by playing the scramble backwards
    let solution = inverse(&scramble);
    println!("Playing solution: {}\n", format_algorithm(&solution));
    trainer.load_algorithm(solution);
    trainer.play();

    let mut frames = 0;
    while trainer.playback().is_playing() || trainer.coordinator().is_animating() {
        if let TickOutcome::Committed(mv) = trainer.tick(FRAME) {
            println!("  frame {frames:>4}: committed {mv}");
        }
        frames += 1;
    }
    println!("\nSolved after {frames} frames: {}\n", trainer.is_solved());

    // Only one move may be in flight
    let first = trainer.execute_move("R".parse().unwrap());
    let second = trainer.execute_move("U".parse().unwrap());
    println!("Request R: {first:?}");
    println!("Request U while R animates: {second:?}");
    assert_eq!(second, Admission::Busy);
    while trainer.coordinator().is_animating() {
        if let Some(animation) = trainer.animation() {
            println!(
                "  {} at {:>6.1} of {:>6.1} degrees",
                animation.face, animation.current_angle, animation.target_angle
            );
        }
        trainer.tick(FRAME);
    }

    // History is snapshot based
    let entries = trainer.timeline().len();
    println!("\nTimeline has {entries} entries");
    trainer.jump(0);
    println!("Jumped to root, cube is the scramble again:");
    println!("{}", trainer.cube());

    for mv in parse_algorithm("F2") {
        trainer.execute_move(mv);
    }
    while trainer.coordinator().is_animating() {
        trainer.tick(FRAME);
    }
    println!(
        "Committed F2 from the root; redo branch dropped, {} entries remain",
        trainer.timeline().len()
    );

    trainer.rewind();
    println!("Rewound to: \n{}", trainer.cube());

    println!("=== Walkthrough Complete ===");
}
