//! Error types
//!
//! Oracle errors never escape the simulation: they are logged and the
//! opponent stays put for that poll.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure talking to a decision oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle process could not be started.
    #[error("failed to launch oracle `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The oracle's standard output could not be read.
    #[error("failed to read oracle output: {0}")]
    Read(#[source] io::Error),

    /// The request could not be serialized.
    #[error("failed to encode oracle request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The async worker thread is gone.
    #[error("oracle worker thread has stopped")]
    WorkerGone,
}

/// Failure loading a [`crate::SimConfig`] file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory JSON that did not parse.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// A tunable is outside the range the simulation can run with.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
