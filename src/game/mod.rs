//! The memory sequence game: symbols, phases, randomness, notifications and
//! the state machine tying them together.

mod error;
mod machine;
mod observer;
mod source;
mod state;
mod symbol;

pub use error::GameError;
pub use machine::{Mismatch, SequenceGame, SubmitOutcome};
pub use observer::{EventLog, GameEvent, GameObserver};
pub use source::{RandomSource, ScriptedSource, SymbolSource};
pub use state::{GameState, Operation};
pub use symbol::{Alphabet, Symbol, ALPHABET_SIZE, DEFAULT_SYMBOLS};
