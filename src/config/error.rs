//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating a configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("alphabet must hold exactly {expected} symbols (found {found})")]
    WrongSize { expected: usize, found: usize },

    #[error("alphabet entry {index} is blank")]
    BlankName { index: usize },

    #[error("alphabet entry '{name}' appears more than once")]
    DuplicateName { name: String },
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every violation found, in the order the checks ran
    #[error("invalid configuration: {}", summarize(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
