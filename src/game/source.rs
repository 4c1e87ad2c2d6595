//! Symbol sources: the game's single point of randomness.

use super::symbol::{Alphabet, Symbol};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Supplies the symbol appended to the sequence at each new level.
///
/// Implementations are expected to return a member of `alphabet`; the game
/// rejects anything else with [`GameError::InvalidSymbol`](crate::GameError).
pub trait SymbolSource {
    fn draw(&mut self, alphabet: &Alphabet) -> Symbol;
}

/// Uniform, independent draws over the alphabet.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed from the operating system.
    pub fn new() -> Self {
        RandomSource {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible draws for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource for RandomSource {
    fn draw(&mut self, alphabet: &Alphabet) -> Symbol {
        let symbols = alphabet.symbols();
        symbols[self.rng.random_range(0..symbols.len())].clone()
    }
}

/// Replays a fixed script of symbols, starting over when it runs out.
///
/// An empty script always yields the first symbol of the alphabet.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<Symbol>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new<I, T>(script: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Symbol>,
    {
        ScriptedSource {
            script: script.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    /// Append more symbols to the end of the script.
    pub fn push(&mut self, symbol: impl Into<Symbol>) {
        self.script.push(symbol.into());
    }
}

impl SymbolSource for ScriptedSource {
    fn draw(&mut self, alphabet: &Alphabet) -> Symbol {
        if self.script.is_empty() {
            return alphabet.symbols()[0].clone();
        }
        let symbol = self.script[self.cursor % self.script.len()].clone();
        self.cursor += 1;
        symbol
    }
}

impl<S: SymbolSource + ?Sized> SymbolSource for Box<S> {
    fn draw(&mut self, alphabet: &Alphabet) -> Symbol {
        (**self).draw(alphabet)
    }
}
