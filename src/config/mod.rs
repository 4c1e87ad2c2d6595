//! Game configuration, loadable from TOML.
//!
//! Validation reports every problem in one pass instead of stopping at the
//! first, so a config file with three mistakes produces three violations.
//!
//! ```rust
//! use sequence_game::config::{ConfigError, GameConfig};
//!
//! let config = GameConfig::from_toml_str(
//!     r#"
//!     alphabet = ["do", "re", "mi", "fa"]
//!     seed = 7
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.seed, Some(7));
//!
//! let err = GameConfig::from_toml_str(r#"alphabet = ["do", "do", " "]"#).unwrap_err();
//! match err {
//!     ConfigError::Invalid(violations) => assert_eq!(violations.len(), 3),
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

use crate::game::{Alphabet, Symbol, ALPHABET_SIZE, DEFAULT_SYMBOLS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

/// Settings a game is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Symbol names, in display order.
    pub alphabet: Vec<String>,
    /// Fixed seed for reproducible sequences; OS randomness when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            alphabet: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Run every check, accumulating all violations.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.alphabet.len() == ALPHABET_SIZE {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::WrongSize {
                expected: ALPHABET_SIZE,
                found: self.alphabet.len(),
            })
        });

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for (index, name) in self.alphabet.iter().enumerate() {
            let check = if name.trim().is_empty() {
                Validation::fail(ConfigViolation::BlankName { index })
            } else if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
                Validation::fail(ConfigViolation::DuplicateName { name: name.clone() })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Build the validated alphabet.
    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        self.validate()?;
        let symbols: [Symbol; ALPHABET_SIZE] = self
            .alphabet
            .iter()
            .map(|name| Symbol::new(name.as_str()))
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|rejected: Vec<Symbol>| {
                ConfigError::Invalid(vec![ConfigViolation::WrongSize {
                    expected: ALPHABET_SIZE,
                    found: rejected.len(),
                }])
            })?;
        Ok(Alphabet::from_symbols(symbols))
    }
}
