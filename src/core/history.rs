//! Phase transition history tracking.
//!
//! Provides immutable tracking of state machine transitions over time.
//! Timestamps are recorded for inspection only; no game rule reads them.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase transition.
///
/// # Example
///
/// ```rust
/// use sequence_game::core::StateTransition;
/// use sequence_game::GameState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: GameState::Idle,
///     to: GameState::AwaitingInput,
///     timestamp: Utc::now(),
///     level: 1,
/// };
/// assert_eq!(transition.level, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Level of the game once the transition completed
    pub level: u32,
}

/// Ordered history of phase transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition added.
///
/// # Example
///
/// ```rust
/// use sequence_game::core::{StateHistory, StateTransition};
/// use sequence_game::GameState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: GameState::Idle,
///         to: GameState::AwaitingInput,
///         timestamp: Utc::now(),
///         level: 1,
///     })
///     .record(StateTransition {
///         from: GameState::AwaitingInput,
///         to: GameState::GameOver,
///         timestamp: Utc::now(),
///         level: 1,
///     });
///
/// let path = history.get_path();
/// assert_eq!(
///     path,
///     vec![&GameState::Idle, &GameState::AwaitingInput, &GameState::GameOver]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of phases traversed.
    ///
    /// Returns the `from` phase of the first transition followed by the
    /// `to` phase of every transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Wall-clock time between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Count how many transitions entered the given phase.
    pub fn entries_into(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Alphabet, GameState, ScriptedSource, SequenceGame};

    /// History of a game that clears level 1 and fails on level 2.
    fn lost_on_level_two() -> StateHistory<GameState> {
        let mut game = SequenceGame::with_source(
            Alphabet::default(),
            ScriptedSource::new(["red", "blue"]),
        );
        game.start().unwrap();
        game.submit("red").unwrap();
        game.advance_round().unwrap();
        game.submit("red").unwrap();
        game.submit("yellow").unwrap();
        game.history().clone()
    }

    fn at(from: GameState, to: GameState, timestamp: DateTime<Utc>) -> StateTransition<GameState> {
        StateTransition {
            from,
            to,
            timestamp,
            level: 1,
        }
    }

    #[test]
    fn empty_history_has_no_path_or_duration() {
        let history: StateHistory<GameState> = StateHistory::default();

        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn game_path_lists_every_phase_entered() {
        let history = lost_on_level_two();

        assert_eq!(
            history.get_path(),
            vec![
                &GameState::Idle,
                &GameState::AwaitingInput,
                &GameState::RoundTransition,
                &GameState::AwaitingInput,
                &GameState::GameOver,
            ]
        );
        assert_eq!(history.entries_into(&GameState::AwaitingInput), 2);
        assert_eq!(history.entries_into(&GameState::Idle), 0);
        assert_eq!(history.last().map(|t| (t.to, t.level)), Some((GameState::GameOver, 2)));
    }

    #[test]
    fn levels_follow_the_game() {
        let levels: Vec<u32> = lost_on_level_two()
            .transitions()
            .iter()
            .map(|t| t.level)
            .collect();

        assert_eq!(levels, vec![1, 1, 2, 2]);
    }

    #[test]
    fn recording_leaves_the_original_untouched() {
        let before = lost_on_level_two();
        let after = before.record(at(GameState::GameOver, GameState::AwaitingInput, Utc::now()));

        assert_eq!(before.len(), 4);
        assert_eq!(after.len(), 5);
        assert_eq!(after.transitions()[..4], before.transitions()[..]);
    }

    #[test]
    fn duration_spans_first_to_last_transition() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(at(GameState::Idle, GameState::AwaitingInput, start))
            .record(at(
                GameState::AwaitingInput,
                GameState::RoundTransition,
                start + chrono::Duration::milliseconds(900),
            ))
            .record(at(
                GameState::RoundTransition,
                GameState::AwaitingInput,
                start + chrono::Duration::milliseconds(1400),
            ));

        assert_eq!(history.duration(), Some(Duration::from_millis(1400)));
    }

    #[test]
    fn game_history_survives_json() {
        let history = lost_on_level_two();

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<GameState> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, history);
        assert!(json.contains("\"RoundTransition\""));
    }
}
