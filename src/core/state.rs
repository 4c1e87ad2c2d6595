//! Core State trait for game phases.
//!
//! Every phase a game can be in implements this trait, which provides
//! pure methods for inspecting phase properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure - no side effects. Phases are plain values that
/// describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: phases are copied into the transition history
/// - `PartialEq`: guards and transitions compare phases
/// - `Debug`: phases show up in diagnostics
/// - `Serialize` + `Deserialize`: phases are part of game snapshots
///
/// # Example
///
/// ```rust
/// use sequence_game::core::State;
/// use sequence_game::GameState;
///
/// fn describe<S: State>(phase: &S) -> String {
///     if phase.is_final() {
///         format!("{} (restart required)", phase.name())
///     } else {
///         phase.name().to_string()
///     }
/// }
///
/// assert_eq!(describe(&GameState::AwaitingInput), "AwaitingInput");
/// assert_eq!(describe(&GameState::GameOver), "GameOver (restart required)");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the phase's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) phase.
    ///
    /// Final phases accept no further moves until the machine is
    /// explicitly restarted.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error phase.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
