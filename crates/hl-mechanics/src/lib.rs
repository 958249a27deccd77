//! Dice resolution for Hidden London.
//!
//! Provides the die classifier, the threat roll and Push Yourself engines,
//! the situational modifier catalog and a character-sheet pool lookup.
//! Every roll draws its faces from a caller-supplied [`DieSource`], so results
//! are fully reproducible with a seeded or scripted source.

pub mod dice;
pub mod error;
pub mod modifier;
pub mod resolution;
pub mod sheet;

pub use dice::{DieSource, RngDice, ScriptedDice};
pub use error::{MechError, MechResult};
pub use modifier::{ShiftHint, SituationalModifier};
pub use resolution::{
    DieResult, EffectLevel, Position, PushAttribute, PushRollResult, ThreatOutcome,
    ThreatRollParams, ThreatRollResult, classify, roll_push, roll_threat,
};
pub use sheet::{CharacterSheet, PoolLookup};
