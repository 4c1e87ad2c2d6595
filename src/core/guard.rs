//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether an operation may
//! run from the current phase. The game consults one before every guarded
//! operation and refuses to mutate anything when it rejects.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use sequence_game::core::Guard;
/// use sequence_game::GameState;
///
/// let accepts_input = Guard::new(|s: &GameState| matches!(s, GameState::AwaitingInput));
///
/// assert!(accepts_input.check(&GameState::AwaitingInput));
/// assert!(!accepts_input.check(&GameState::Idle));
/// assert!(!accepts_input.check(&GameState::GameOver));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that accepts any of the listed phases.
    ///
    /// ```rust
    /// use sequence_game::core::Guard;
    /// use sequence_game::GameState;
    ///
    /// let restartable = Guard::any_of(vec![GameState::Idle, GameState::GameOver]);
    /// assert!(restartable.check(&GameState::GameOver));
    /// assert!(!restartable.check(&GameState::RoundTransition));
    /// ```
    pub fn any_of(allowed: Vec<S>) -> Self
    where
        S: 'static,
    {
        Self::new(move |state: &S| allowed.contains(state))
    }

    /// Check if the guard allows a transition from this phase.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
