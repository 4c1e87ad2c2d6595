//! Autoplay
//!
//! A headless player that echoes the sequence back perfectly until it
//! reaches a chosen level, then presses the wrong button on purpose.
//!
//! Key concepts:
//! - The observer plays the role of the presentation layer
//! - The caller owns the pause between rounds
//! - A seeded config makes the run reproducible
//!
//! Run with: RUST_LOG=debug cargo run --example autoplay

use sequence_game::{GameConfig, GameObserver, SequenceGame, SubmitOutcome, Symbol};
use tracing_subscriber::EnvFilter;

const MISTAKE_AT_LEVEL: u32 = 6;

/// Prints what a real front end would flash and play.
struct ConsoleBoard;

impl GameObserver for ConsoleBoard {
    fn on_level_advanced(&mut self, level: u32, symbol: &Symbol) {
        println!("Level {level}: flash {symbol}");
    }

    fn on_input_accepted(&mut self, symbol: &Symbol) {
        println!("  pressed {symbol}");
    }

    fn on_round_complete(&mut self, level: u32) {
        println!("  round {level} complete");
    }

    fn on_game_over(&mut self) {
        println!("Game Over, Press Any Key to Restart");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = GameConfig {
        seed: Some(2024),
        ..GameConfig::default()
    };
    let mut game = match SequenceGame::from_config(&config) {
        Ok(game) => game.observed_by(ConsoleBoard),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = play(&mut game) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    println!(
        "\nReached level {} with sequence {:?}",
        game.current_level(),
        game.sequence_so_far()
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
    );
    println!("Phase path: {} transitions", game.history().len());
}

fn play<O: GameObserver>(
    game: &mut SequenceGame<sequence_game::RandomSource, O>,
) -> Result<(), sequence_game::GameError> {
    game.start()?;

    loop {
        let mut answer = game.sequence_so_far().to_vec();
        if game.current_level() == MISTAKE_AT_LEVEL {
            // Swap the last symbol for its neighbour in the alphabet.
            let alphabet = game.alphabet().clone();
            if let Some(last) = answer.last_mut() {
                let index = alphabet.index_of(last).unwrap_or(0);
                *last = alphabet.symbols()[(index + 1) % alphabet.len()].clone();
            }
        }

        for symbol in answer {
            match game.submit(symbol)? {
                SubmitOutcome::Accepted { .. } => {}
                SubmitOutcome::RoundComplete { .. } => {
                    // A real front end would pause here before the next flash.
                    game.advance_round()?;
                    break;
                }
                SubmitOutcome::GameOver(mismatch) => {
                    println!(
                        "  expected {} at position {}, got {}",
                        mismatch.expected, mismatch.position, mismatch.actual
                    );
                    return Ok(());
                }
            }
        }
    }
}
