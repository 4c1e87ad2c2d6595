//! Game phases and the operations guarded by them.

use crate::core::Guard;
use crate::state_enum;
use std::fmt;

state_enum! {
    /// Phase of a [`SequenceGame`](crate::SequenceGame).
    #[derive(Copy, Eq, Hash, Default)]
    pub enum GameState {
        /// Nothing generated yet; waiting for `start`.
        #[default]
        Idle,
        /// The player is reproducing the sequence.
        AwaitingInput,
        /// The round was reproduced; waiting for `advance_round`.
        RoundTransition,
        /// The player diverged; waiting for `start` or `reset`.
        GameOver,
    }
    final: [GameOver]
}

/// Operations whose validity depends on the current phase.
///
/// `reset` is absent because it is valid everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Start,
    Submit,
    AdvanceRound,
}

impl Operation {
    /// Phases this operation may be invoked from.
    pub fn allowed_from(self) -> Vec<GameState> {
        match self {
            Operation::Start => vec![GameState::Idle, GameState::GameOver],
            Operation::Submit => vec![GameState::AwaitingInput],
            Operation::AdvanceRound => vec![GameState::RoundTransition],
        }
    }

    /// Precondition for this operation as a guard.
    pub fn guard(self) -> Guard<GameState> {
        Guard::any_of(self.allowed_from())
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Start => "start",
            Operation::Submit => "submit",
            Operation::AdvanceRound => "advance_round",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
