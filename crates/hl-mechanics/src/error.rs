//! Error types for the dice-resolution engine.

use crate::resolution::PushAttribute;

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A dice pool below zero was requested.
    #[error("invalid pool: dice pool must not be negative (got {0})")]
    NegativePool(i32),

    /// A negative number of additional threats was requested.
    #[error("invalid pool: additional threats must not be negative (got {0})")]
    NegativeThreats(i32),

    /// A die face outside 1..=6 reached the engine.
    #[error("die face {0} is outside 1..=6")]
    FaceOutOfRange(u32),

    /// A scripted die source ran out of faces.
    #[error("dice exhausted: {requested} faces requested but only {available} scripted")]
    DiceExhausted {
        /// How many faces have been requested so far, including the failing one.
        requested: usize,
        /// How many faces the source was given.
        available: usize,
    },

    /// A situational modifier key is not in the catalog.
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),

    /// A name could not be parsed into one of the engine's enumerations.
    #[error("unknown {kind}: {value}")]
    UnknownVariant {
        /// Which enumeration was being parsed (e.g. "position").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An attribute's skill ratings add up to more than a pool can hold.
    #[error("dice pool for {0} is too large")]
    PoolOverflow(PushAttribute),

    /// A character sheet could not be read from disk.
    #[error("could not read character sheet: {0}")]
    SheetIo(#[from] std::io::Error),

    /// A character sheet is not valid JSON for this model.
    #[error("invalid character sheet: {0}")]
    InvalidSheet(#[from] serde_json::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
