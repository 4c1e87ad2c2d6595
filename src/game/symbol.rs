//! Symbols and the fixed four-symbol alphabet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of symbols every alphabet holds.
pub const ALPHABET_SIZE: usize = 4;

/// Classic colour names, in button order.
pub const DEFAULT_SYMBOLS: [&str; ALPHABET_SIZE] = ["red", "blue", "green", "yellow"];

/// One discrete choice the player can make.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol(name)
    }
}

/// The ordered set of symbols a game draws from.
///
/// Always exactly [`ALPHABET_SIZE`] distinct, non-blank symbols. Build one
/// from names through [`GameConfig`](crate::config::GameConfig), which
/// reports every problem with the names at once.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: [Symbol; ALPHABET_SIZE],
}

impl Alphabet {
    /// Build an alphabet from already-validated symbols.
    pub(crate) fn from_symbols(symbols: [Symbol; ALPHABET_SIZE]) -> Self {
        Alphabet { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    /// Position of a symbol in the alphabet.
    pub fn index_of(&self, symbol: &Symbol) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn len(&self) -> usize {
        ALPHABET_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::from_symbols(DEFAULT_SYMBOLS.map(Symbol::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alphabet_uses_classic_colours() {
        let alphabet = Alphabet::default();
        let names: Vec<&str> = alphabet.symbols().iter().map(Symbol::as_str).collect();
        assert_eq!(names, vec!["red", "blue", "green", "yellow"]);
        assert_eq!(alphabet.len(), ALPHABET_SIZE);
    }

    #[test]
    fn contains_and_index_of() {
        let alphabet = Alphabet::default();
        assert!(alphabet.contains(&Symbol::from("green")));
        assert!(!alphabet.contains(&Symbol::from("purple")));
        assert_eq!(alphabet.index_of(&Symbol::from("yellow")), Some(3));
        assert_eq!(alphabet.index_of(&Symbol::from("Red")), None);
    }

    #[test]
    fn symbol_serializes_as_plain_string() {
        let json = serde_json::to_string(&Symbol::from("blue")).unwrap();
        assert_eq!(json, "\"blue\"");
    }
}
