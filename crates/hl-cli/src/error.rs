//! Error types for the chat log, settings files and roll commands.

use std::path::PathBuf;

use hl_mechanics::{MechError, ThreatOutcome};
use thiserror::Error;
use uuid::Uuid;

/// Result type for chat log and settings operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors raised by the persistence side of the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },

    /// A file did not contain the expected JSON.
    #[error("malformed {path}: {source}")]
    Json {
        /// The file involved.
        path: PathBuf,
        /// The underlying failure.
        source: serde_json::Error,
    },

    /// No message matches the given id.
    #[error("message not found: {0}")]
    MessageNotFound(String),

    /// An id prefix matches more than one message.
    #[error("message id '{0}' is ambiguous")]
    AmbiguousMessage(String),

    /// Push Yourself only applies to threat roll messages.
    #[error("message {0} is not a threat roll")]
    NotAThreatRoll(Uuid),

    /// The message has no die for the requested risk.
    #[error("message {message} has no risk #{risk}")]
    NoSuchRisk {
        /// The threat roll message.
        message: Uuid,
        /// The requested risk index.
        risk: usize,
    },

    /// The die for the risk already came up well, so there is nothing to resist.
    #[error("risk #{risk} on message {message} came up {outcome}; nothing to push")]
    NothingToResist {
        /// The threat roll message.
        message: Uuid,
        /// The requested risk index.
        risk: usize,
        /// The outcome the risk resolved to.
        outcome: ThreatOutcome,
    },

    /// The risk was already pushed.
    #[error("risk #{risk} on message {message} was already pushed")]
    AlreadyPushed {
        /// The threat roll message.
        message: Uuid,
        /// The requested risk index.
        risk: usize,
    },

    /// The roll engine rejected its input.
    #[error(transparent)]
    Mech(#[from] MechError),

    /// A posted message could not be written out as JSON.
    #[error("cannot serialize message: {0}")]
    Output(#[source] serde_json::Error),

    /// A character sheet gives a pool above the allowed maximum.
    #[error("dice pool {pool} exceeds the maximum of {max}")]
    PoolTooLarge {
        /// The pool the sheet gives.
        pool: u32,
        /// The largest pool allowed.
        max: i64,
    },

    /// Neither a pool nor a character sheet was given for a push.
    #[error("push needs --dice or --character")]
    MissingPool,

    /// Threat rolls are switched off in the settings.
    #[error("threat rolls are disabled (enable with `hl config --enable-threat-rolls true`)")]
    ThreatRollsDisabled,
}
