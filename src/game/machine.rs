//! The sequence game state machine.

use super::error::GameError;
use super::observer::GameObserver;
use super::source::{RandomSource, SymbolSource};
use super::state::{GameState, Operation};
use super::symbol::{Alphabet, Symbol};
use crate::config::{ConfigError, GameConfig};
use crate::core::{StateHistory, StateTransition};
use crate::snapshot::{GameSnapshot, SnapshotError};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Result of a single [`SequenceGame::submit`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Correct, and `remaining` more symbols are expected this round.
    Accepted { remaining: usize },

    /// Correct, and the round for `level` is finished. The game now waits
    /// for [`SequenceGame::advance_round`].
    RoundComplete { level: u32 },

    /// Wrong symbol; the game is over.
    GameOver(Mismatch),
}

/// Where and how the player's input diverged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Zero-based index into the sequence.
    pub position: usize,
    pub expected: Symbol,
    pub actual: Symbol,
    /// Level the game was at when it ended.
    pub level: u32,
}

/// Memory sequence game: grows a random sequence one symbol per level and
/// checks the player's reproduction of it symbol by symbol.
///
/// `R` supplies new symbols and `O` is told about everything that happens.
/// The game never waits on a clock; after a round completes the caller
/// decides when to call [`advance_round`](Self::advance_round).
///
/// # Example
///
/// ```rust
/// use sequence_game::{Alphabet, EventLog, GameEvent, GameState, ScriptedSource, SequenceGame};
///
/// let mut game = SequenceGame::with_source(Alphabet::default(), ScriptedSource::new(["blue"]))
///     .observed_by(EventLog::new());
///
/// game.start().unwrap();
/// assert_eq!(game.current_level(), 1);
///
/// game.submit("blue").unwrap();
/// assert_eq!(game.current_state(), GameState::RoundTransition);
/// assert_eq!(
///     game.observer().last(),
///     Some(&GameEvent::RoundComplete { level: 1 })
/// );
/// ```
pub struct SequenceGame<R = RandomSource, O = ()> {
    alphabet: Alphabet,
    sequence: Vec<Symbol>,
    input: Vec<Symbol>,
    level: u32,
    state: GameState,
    history: StateHistory<GameState>,
    source: R,
    observer: O,
}

impl SequenceGame<RandomSource, ()> {
    /// Classic colours, OS-seeded randomness, no observer.
    pub fn new() -> Self {
        Self::with_source(Alphabet::default(), RandomSource::new())
    }

    /// Build a game from configuration. A configured seed makes the
    /// generated sequences reproducible.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let alphabet = config.alphabet()?;
        let source = match config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::new(),
        };
        Ok(Self::with_source(alphabet, source))
    }
}

impl Default for SequenceGame<RandomSource, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SymbolSource> SequenceGame<R, ()> {
    pub fn with_source(alphabet: Alphabet, source: R) -> Self {
        Self::with_parts(alphabet, source, ())
    }
}

impl<R: SymbolSource, O: GameObserver> SequenceGame<R, O> {
    pub fn with_parts(alphabet: Alphabet, source: R, observer: O) -> Self {
        SequenceGame {
            alphabet,
            sequence: Vec::new(),
            input: Vec::new(),
            level: 0,
            state: GameState::Idle,
            history: StateHistory::new(),
            source,
            observer,
        }
    }

    /// Swap the observer, keeping all game state.
    pub fn observed_by<P: GameObserver>(self, observer: P) -> SequenceGame<R, P> {
        SequenceGame {
            alphabet: self.alphabet,
            sequence: self.sequence,
            input: self.input,
            level: self.level,
            state: self.state,
            history: self.history,
            source: self.source,
            observer,
        }
    }

    /// Begin a new game from `Idle` or `GameOver`.
    ///
    /// Clears the previous sequence, then generates the first symbol.
    /// Returns that symbol.
    pub fn start(&mut self) -> Result<Symbol, GameError> {
        self.ensure(Operation::Start)?;
        let symbol = self.draw()?;

        if self.state == GameState::GameOver {
            info!(level = self.level, "restarting after game over");
        }
        self.level = 0;
        self.sequence.clear();
        self.input.clear();

        info!("game started");
        Ok(self.push_level(symbol))
    }

    /// Check the next symbol of the player's reproduction.
    ///
    /// The symbol is validated against the alphabet before anything is
    /// recorded. On a mismatch the sequence and input are kept so the
    /// caller can inspect what went wrong.
    pub fn submit(&mut self, symbol: impl Into<Symbol>) -> Result<SubmitOutcome, GameError> {
        let symbol = symbol.into();
        self.ensure(Operation::Submit)?;
        if !self.alphabet.contains(&symbol) {
            warn!(symbol = %symbol, "rejected symbol outside the alphabet");
            return Err(GameError::InvalidSymbol { symbol });
        }

        let position = self.input.len();
        self.input.push(symbol.clone());
        // AwaitingInput guarantees input was strictly shorter than sequence.
        let expected = &self.sequence[position];

        if *expected != symbol {
            let mismatch = Mismatch {
                position,
                expected: expected.clone(),
                actual: symbol,
                level: self.level,
            };
            self.enter(GameState::GameOver);
            info!(
                level = self.level,
                position,
                expected = %mismatch.expected,
                actual = %mismatch.actual,
                "game over"
            );
            self.observer.on_game_over();
            return Ok(SubmitOutcome::GameOver(mismatch));
        }

        if self.input.len() == self.sequence.len() {
            self.enter(GameState::RoundTransition);
            info!(level = self.level, "round complete");
            self.observer.on_round_complete(self.level);
            return Ok(SubmitOutcome::RoundComplete { level: self.level });
        }

        let remaining = self.sequence.len() - self.input.len();
        debug!(symbol = %symbol, remaining, "input accepted");
        self.observer.on_input_accepted(&symbol);
        Ok(SubmitOutcome::Accepted { remaining })
    }

    /// Move to the next level after a completed round.
    ///
    /// Returns the symbol appended to the sequence.
    pub fn advance_round(&mut self) -> Result<Symbol, GameError> {
        self.ensure(Operation::AdvanceRound)?;
        let symbol = self.draw()?;
        Ok(self.push_level(symbol))
    }

    /// Return to `Idle` from any phase, discarding the sequence, input,
    /// level and history.
    pub fn reset(&mut self) {
        if self.state != GameState::Idle {
            info!(level = self.level, from = %self.state, "game reset");
        }
        self.sequence.clear();
        self.input.clear();
        self.level = 0;
        self.state = GameState::Idle;
        self.history = StateHistory::new();
    }

    pub fn current_level(&self) -> u32 {
        self.level
    }

    pub fn current_state(&self) -> GameState {
        self.state
    }

    /// The generated sequence, oldest symbol first.
    pub fn sequence_so_far(&self) -> &[Symbol] {
        &self.sequence
    }

    /// The player's submissions for the current level.
    pub fn input_so_far(&self) -> &[Symbol] {
        &self.input
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn history(&self) -> &StateHistory<GameState> {
        &self.history
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Symbols still expected before the current round completes.
    pub fn remaining_inputs(&self) -> usize {
        match self.state {
            GameState::AwaitingInput => self.sequence.len() - self.input.len(),
            _ => 0,
        }
    }

    /// Capture the current game for inspection.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(
            &self.alphabet,
            &self.sequence,
            &self.input,
            self.level,
            self.state,
            &self.history,
        )
    }

    /// Rebuild a game from a snapshot, after checking it is consistent.
    pub fn restore(snapshot: GameSnapshot, source: R, observer: O) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        Ok(SequenceGame {
            alphabet: snapshot.alphabet,
            sequence: snapshot.sequence,
            input: snapshot.input,
            level: snapshot.level,
            state: snapshot.state,
            history: snapshot.history,
            source,
            observer,
        })
    }

    fn ensure(&self, operation: Operation) -> Result<(), GameError> {
        if operation.guard().check(&self.state) {
            return Ok(());
        }
        warn!(operation = %operation, state = %self.state, "operation rejected");
        Err(GameError::InvalidState {
            operation,
            state: self.state,
        })
    }

    fn draw(&mut self) -> Result<Symbol, GameError> {
        let symbol = self.source.draw(&self.alphabet);
        if !self.alphabet.contains(&symbol) {
            warn!(symbol = %symbol, "symbol source produced a symbol outside the alphabet");
            return Err(GameError::InvalidSymbol { symbol });
        }
        Ok(symbol)
    }

    fn push_level(&mut self, symbol: Symbol) -> Symbol {
        self.input.clear();
        self.level += 1;
        self.sequence.push(symbol.clone());
        self.enter(GameState::AwaitingInput);
        debug!(level = self.level, symbol = %symbol, "level advanced");
        self.observer.on_level_advanced(self.level, &symbol);
        symbol
    }

    fn enter(&mut self, to: GameState) {
        self.history = self.history.record(StateTransition {
            from: self.state,
            to,
            timestamp: Utc::now(),
            level: self.level,
        });
        self.state = to;
    }
}
