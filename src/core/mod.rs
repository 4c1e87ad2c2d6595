//! Core state machine types and logic.
//!
//! This module contains the pure building blocks the game is assembled from:
//! - Phase definitions via the `State` trait and the `state_enum!` macro
//! - Guard predicates for operation preconditions
//! - Immutable transition history
//!
//! Nothing in this module performs I/O or keeps hidden state.

mod guard;
mod history;
mod macros;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
