//! Misuse errors raised by game operations.

use super::state::{GameState, Operation};
use super::symbol::Symbol;
use thiserror::Error;

/// Errors returned when an operation is called incorrectly.
///
/// A wrong answer is not an error; it moves the game to
/// [`GameState::GameOver`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GameError {
    /// The operation is not allowed from the current phase. Nothing was
    /// changed.
    #[error("cannot {operation} while the game is {state}")]
    InvalidState {
        operation: Operation,
        state: GameState,
    },

    /// A symbol outside the alphabet was submitted or produced by the
    /// symbol source. Nothing was changed.
    #[error("symbol '{symbol}' is not part of the alphabet")]
    InvalidSymbol { symbol: Symbol },
}
