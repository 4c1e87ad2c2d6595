//! Point-in-time copies of a game, for inspection and debugging.
//!
//! A snapshot holds everything but the symbol source and the observer, which
//! are supplied again on [`SequenceGame::restore`](crate::SequenceGame::restore).
//! The crate never writes snapshots anywhere itself.

use crate::core::{State, StateHistory};
use crate::game::{Alphabet, GameState, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a game's state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub alphabet: Alphabet,
    pub sequence: Vec<Symbol>,
    pub input: Vec<Symbol>,
    pub level: u32,
    pub state: GameState,
    pub history: StateHistory<GameState>,
}

impl GameSnapshot {
    pub(crate) fn capture(
        alphabet: &Alphabet,
        sequence: &[Symbol],
        input: &[Symbol],
        level: u32,
        state: GameState,
        history: &StateHistory<GameState>,
    ) -> Self {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            alphabet: alphabet.clone(),
            sequence: sequence.to_vec(),
            input: input.to_vec(),
            level,
            state,
            history: history.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: GameSnapshot = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: GameSnapshot = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Check that the snapshot describes a game reachable through the
    /// public operations.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        self.check_version()?;

        let mut seen = HashSet::new();
        for symbol in self.alphabet.symbols() {
            if symbol.as_str().trim().is_empty() || !seen.insert(symbol) {
                return inconsistent(format!("alphabet entry '{symbol}' is blank or repeated"));
            }
        }
        if let Some(stray) = self
            .sequence
            .iter()
            .chain(&self.input)
            .find(|s| !self.alphabet.contains(s))
        {
            return inconsistent(format!("symbol '{stray}' is not in the alphabet"));
        }

        if self.sequence.len() != self.level as usize {
            return inconsistent(format!(
                "sequence holds {} symbols at level {}",
                self.sequence.len(),
                self.level
            ));
        }
        if self.input.len() > self.sequence.len() {
            return inconsistent("input is longer than the sequence".to_string());
        }

        let matched = self
            .input
            .iter()
            .zip(&self.sequence)
            .take_while(|(given, expected)| given == expected)
            .count();

        match self.state {
            GameState::Idle => {
                if self.level != 0 || !self.input.is_empty() {
                    return inconsistent("an idle game holds a sequence or input".to_string());
                }
            }
            GameState::AwaitingInput => {
                if self.level == 0 || matched != self.input.len() || matched == self.sequence.len()
                {
                    return inconsistent(
                        "input must be a strict prefix of the sequence while awaiting input"
                            .to_string(),
                    );
                }
            }
            GameState::RoundTransition => {
                if self.level == 0 || matched != self.sequence.len() {
                    return inconsistent(
                        "a finished round must reproduce the whole sequence".to_string(),
                    );
                }
            }
            GameState::GameOver => {
                if self.input.is_empty() || matched + 1 != self.input.len() {
                    return inconsistent(
                        "a lost game must end on its first wrong symbol".to_string(),
                    );
                }
            }
        }

        if let Some(last) = self.history.last() {
            if last.to != self.state {
                return inconsistent(format!(
                    "history ends in {} but the game is {}",
                    last.to.name(),
                    self.state.name()
                ));
            }
        }

        Ok(())
    }

    fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}

fn inconsistent(reason: String) -> Result<(), SnapshotError> {
    Err(SnapshotError::Inconsistent(reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EventLog, GameEvent, ScriptedSource, SequenceGame};

    fn game_at_level_two() -> SequenceGame<ScriptedSource, ()> {
        let mut game =
            SequenceGame::with_source(Alphabet::default(), ScriptedSource::new(["green", "blue"]));
        game.start().unwrap();
        game.submit("green").unwrap();
        game.advance_round().unwrap();
        game.submit("green").unwrap();
        game
    }

    #[test]
    fn snapshot_captures_game() {
        let game = game_at_level_two();
        let snapshot = game.snapshot();

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.level, 2);
        assert_eq!(snapshot.state, GameState::AwaitingInput);
        assert_eq!(snapshot.sequence, vec![Symbol::from("green"), Symbol::from("blue")]);
        assert_eq!(snapshot.input, vec![Symbol::from("green")]);
        assert_eq!(snapshot.history.len(), 3);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn snapshots_get_distinct_ids() {
        let game = game_at_level_two();
        assert_ne!(game.snapshot().id, game.snapshot().id);
    }

    #[test]
    fn json_and_binary_encodings_decode_to_same_snapshot() {
        let snapshot = game_at_level_two().snapshot();

        let from_json = GameSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        let from_bytes = GameSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();

        assert_eq!(from_json, snapshot);
        assert_eq!(from_bytes, snapshot);
    }

    #[test]
    fn restored_game_continues_where_it_left_off() {
        let snapshot = game_at_level_two().snapshot();
        let mut game =
            SequenceGame::restore(snapshot, ScriptedSource::new(["yellow"]), EventLog::new())
                .unwrap();

        game.submit("blue").unwrap();
        assert_eq!(game.current_state(), GameState::RoundTransition);
        game.advance_round().unwrap();

        assert_eq!(game.current_level(), 3);
        assert_eq!(
            game.observer().events(),
            &[
                GameEvent::RoundComplete { level: 2 },
                GameEvent::LevelAdvanced {
                    level: 3,
                    symbol: Symbol::from("yellow"),
                },
            ]
        );
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = game_at_level_two().snapshot();
        snapshot.version = 99;

        let json = snapshot.to_json().unwrap();
        let result = GameSnapshot::from_json(&json);

        assert!(matches!(
            result,
            Err(SnapshotError::UnsupportedVersion {
                found: 99,
                supported: SNAPSHOT_VERSION,
            })
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let result = GameSnapshot::from_bytes(&[0xff, 0x01]);
        assert!(matches!(result, Err(SnapshotError::DeserializationFailed(_))));
    }

    #[test]
    fn level_must_match_sequence_length() {
        let mut snapshot = game_at_level_two().snapshot();
        snapshot.level = 5;
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::Inconsistent(_))
        ));
    }

    #[test]
    fn awaiting_input_requires_matching_prefix() {
        let mut snapshot = game_at_level_two().snapshot();
        snapshot.input = vec![Symbol::from("red")];

        let result =
            SequenceGame::restore(snapshot, ScriptedSource::new(["red"]), ());
        assert!(matches!(result, Err(SnapshotError::Inconsistent(_))));
    }

    #[test]
    fn foreign_symbols_are_rejected() {
        let mut snapshot = game_at_level_two().snapshot();
        snapshot.sequence[1] = Symbol::from("magenta");
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn game_over_snapshot_is_valid() {
        let mut game = game_at_level_two();
        game.submit("red").unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.state, GameState::GameOver);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn idle_snapshot_must_be_empty() {
        let mut snapshot = game_at_level_two().snapshot();
        snapshot.state = GameState::Idle;
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn finished_round_needs_the_whole_sequence() {
        let mut game = game_at_level_two();
        game.submit("blue").unwrap();
        let mut snapshot = game.snapshot();
        assert_eq!(snapshot.state, GameState::RoundTransition);
        assert!(snapshot.validate().is_ok());

        snapshot.input.pop();

        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::Inconsistent(reason))
                if reason == "a finished round must reproduce the whole sequence"
        ));
    }

    #[test]
    fn lost_game_needs_a_wrong_final_symbol() {
        let lost = |input: &[&str]| {
            let mut snapshot = game_at_level_two().snapshot();
            snapshot.state = GameState::GameOver;
            snapshot.input = input.iter().map(|s| Symbol::from(*s)).collect();
            snapshot.validate()
        };
        let rejected = |input: &[&str]| {
            matches!(
                lost(input),
                Err(SnapshotError::Inconsistent(reason))
                    if reason == "a lost game must end on its first wrong symbol"
            )
        };

        // Input still agrees with the sequence.
        assert!(rejected(&["green"]));
        // Play continued past the first mismatch.
        assert!(rejected(&["red", "blue"]));
        assert!(rejected(&[]));
    }
}
