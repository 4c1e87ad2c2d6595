//! Notifications from the game to the presentation layer.

use super::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// Receives game notifications. Every method defaults to doing nothing,
/// so implementors only override what they render.
pub trait GameObserver {
    /// A new symbol was appended; `level` is the new sequence length.
    fn on_level_advanced(&mut self, _level: u32, _symbol: &Symbol) {}

    /// A correct symbol was entered and more are expected this round.
    fn on_input_accepted(&mut self, _symbol: &Symbol) {}

    /// The whole sequence for `level` was reproduced.
    fn on_round_complete(&mut self, _level: u32) {}

    /// The player's input diverged from the sequence.
    fn on_game_over(&mut self) {}
}

/// Silent observer.
impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_level_advanced(&mut self, level: u32, symbol: &Symbol) {
        (**self).on_level_advanced(level, symbol)
    }

    fn on_input_accepted(&mut self, symbol: &Symbol) {
        (**self).on_input_accepted(symbol)
    }

    fn on_round_complete(&mut self, level: u32) {
        (**self).on_round_complete(level)
    }

    fn on_game_over(&mut self) {
        (**self).on_game_over()
    }
}

/// A notification, as recorded by [`EventLog`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelAdvanced { level: u32, symbol: Symbol },
    InputAccepted { symbol: Symbol },
    RoundComplete { level: u32 },
    GameOver,
}

/// Observer that records every notification in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn count_game_overs(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver))
            .count()
    }
}

impl GameObserver for EventLog {
    fn on_level_advanced(&mut self, level: u32, symbol: &Symbol) {
        self.events.push(GameEvent::LevelAdvanced {
            level,
            symbol: symbol.clone(),
        });
    }

    fn on_input_accepted(&mut self, symbol: &Symbol) {
        self.events.push(GameEvent::InputAccepted {
            symbol: symbol.clone(),
        });
    }

    fn on_round_complete(&mut self, level: u32) {
        self.events.push(GameEvent::RoundComplete { level });
    }

    fn on_game_over(&mut self) {
        self.events.push(GameEvent::GameOver);
    }
}
