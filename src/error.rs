//! Error types shared by the parsers, the configuration layer and the harness.
//!
//! Solving a well-formed instance never produces an error: the absence of a
//! witness is an ordinary result value. Errors only arise from reading input,
//! loading configuration, writing results, verifying witnesses, or selecting a
//! strategy that has no algorithm behind it yet.

use crate::strategy::Strategy;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for np-bench operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading instances or writing results.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The instance file is malformed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input file.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// An instance breaks a data-model invariant.
    #[error("instance {id} is malformed: {reason}")]
    InvalidInstance {
        /// Id of the offending instance.
        id: u64,
        /// Which invariant was broken.
        reason: String,
    },

    /// The strategy configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    /// The strategy configuration is present but unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The strategy configuration is not valid JSON.
    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A strategy tag does not name any known strategy.
    #[error("unknown strategy '{0}' (expected one of brute_force, backtracking, simple, best_case)")]
    UnknownStrategy(String),

    /// The strategy is a reserved slot without an algorithm.
    #[error("strategy '{0}' has no algorithm implemented")]
    StrategyUnavailable(Strategy),

    /// A solver reported a witness that does not hold for its instance.
    #[error("instance {instance}: {strategy} produced an invalid witness: {reason}")]
    Verification {
        /// Id of the instance whose witness failed.
        instance: u64,
        /// Strategy that produced the witness.
        strategy: Strategy,
        /// Which check failed.
        reason: String,
    },
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
