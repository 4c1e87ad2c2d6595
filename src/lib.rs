//! Sequence Game: the core of a "Simon"-style memory game
//!
//! The game grows a random sequence of symbols one level at a time and
//! checks the player's attempt to reproduce it, one symbol at a time. The
//! first wrong symbol ends the game. Rendering, sound and input devices live
//! outside this crate; they drive the game through its operations and are
//! told what happened through a [`GameObserver`].
//!
//! # Core Concepts
//!
//! - **Phases**: [`GameState`] implements the [`State`] trait
//! - **Guards**: every operation checks a [`Guard`] before touching state
//! - **History**: each phase change is appended to a [`StateHistory`]
//! - **Sources**: the only randomness comes from an injected [`SymbolSource`]
//!
//! # Example
//!
//! ```rust
//! use sequence_game::{Alphabet, GameState, ScriptedSource, SequenceGame, SubmitOutcome};
//!
//! let mut game = SequenceGame::with_source(
//!     Alphabet::default(),
//!     ScriptedSource::new(["blue", "red"]),
//! );
//!
//! game.start().unwrap();
//! assert_eq!(game.submit("blue").unwrap(), SubmitOutcome::RoundComplete { level: 1 });
//!
//! // The presentation layer decides when the next level begins.
//! game.advance_round().unwrap();
//! assert_eq!(game.current_level(), 2);
//!
//! game.submit("blue").unwrap();
//! let outcome = game.submit("yellow").unwrap();
//! assert!(matches!(outcome, SubmitOutcome::GameOver(_)));
//! assert_eq!(game.current_state(), GameState::GameOver);
//! ```

pub mod config;
pub mod core;
pub mod game;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use config::{ConfigError, GameConfig};
pub use game::{
    Alphabet, EventLog, GameError, GameEvent, GameObserver, GameState, Mismatch, Operation,
    RandomSource, ScriptedSource, SequenceGame, SubmitOutcome, Symbol, SymbolSource,
};
pub use snapshot::{GameSnapshot, SnapshotError};
