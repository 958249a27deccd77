//! Die classification and the two roll engines built on it.
//!
//! - **Threat roll**: roll the action pool plus one die per accepted extra
//!   risk, hand the best dice to the risks and classify each one
//! - **Push Yourself**: roll an attribute pool and turn the best die into a
//!   stress cost
//!
//! Both engines share the zero-dice policy (roll two, keep the worse) and the
//! critical policy (two or more sixes, never in zero mode).

pub mod push;
pub mod threat;

pub use push::{PushAttribute, PushRollResult, roll_push};
pub use threat::{DieResult, ThreatRollParams, ThreatRollResult, roll_threat};

use serde::{Deserialize, Serialize};

use crate::dice::{FACES, validate_face};
use crate::error::{MechError, MechResult};

/// Faces a zero-dice roll always rolls for its primary risk.
pub const ZERO_MODE_DICE: usize = 2;

/// Sixes needed for a critical.
pub const CRITICAL_SIXES: usize = 2;

/// Lowest face that counts as peril in standard position.
const PERIL_MIN: u8 = 4;

/// Risk tier of an action. Sets the classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Sixes succeed, fours and fives are peril, the rest are threats.
    #[default]
    Standard,
    /// All or nothing: only a six succeeds.
    Desperate,
}

impl Position {
    /// Parse a position from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "desperate" => Some(Self::Desperate),
            _ => None,
        }
    }

    /// All positions, safest first.
    pub fn all() -> &'static [Self] {
        &[Self::Standard, Self::Desperate]
    }

    /// Desperate actions always mark experience.
    pub fn marks_xp(self) -> bool {
        self == Self::Desperate
    }
}

/// Narrative magnitude of an action. Echoed back for display only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EffectLevel {
    /// Weaker than usual.
    Limited,
    /// The usual effect.
    #[default]
    Standard,
    /// Better than usual.
    Great,
    /// Extraordinary.
    Extreme,
}

impl EffectLevel {
    /// Parse an effect level from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "limited" => Some(Self::Limited),
            "standard" => Some(Self::Standard),
            "great" => Some(Self::Great),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }

    /// All effect levels, weakest first.
    pub fn all() -> &'static [Self] {
        &[Self::Limited, Self::Standard, Self::Great, Self::Extreme]
    }
}

/// The outcome of a single die assigned to a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatOutcome {
    /// The risk is avoided.
    Success,
    /// The risk comes close: a complication.
    Peril,
    /// The risk lands.
    Threat,
    /// Two or more sixes on a real pool. Only ever set by the threat engine,
    /// never by [`classify`].
    Critical,
}

impl ThreatOutcome {
    /// Parse an outcome from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "success" => Some(Self::Success),
            "peril" => Some(Self::Peril),
            "threat" => Some(Self::Threat),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Classify a single die face against a position.
///
/// | Position  | 6       | 4-5    | 1-3    |
/// |-----------|---------|--------|--------|
/// | standard  | success | peril  | threat |
/// | desperate | success | threat | threat |
///
/// Faces outside `1..=6` are rejected with [`MechError::FaceOutOfRange`].
pub fn classify(face: u32, position: Position) -> MechResult<ThreatOutcome> {
    let face = validate_face(face)?;
    let outcome = match position {
        Position::Desperate if face == FACES => ThreatOutcome::Success,
        Position::Desperate => ThreatOutcome::Threat,
        Position::Standard if face >= FACES => ThreatOutcome::Success,
        Position::Standard if face >= PERIL_MIN => ThreatOutcome::Peril,
        Position::Standard => ThreatOutcome::Threat,
    };
    Ok(outcome)
}

/// Two or more sixes make a critical, except in zero mode.
pub(crate) fn is_critical(sixes: usize, zero_mode: bool) -> bool {
    sixes >= CRITICAL_SIXES && !zero_mode
}

macro_rules! display_and_from_str {
    ($ty:ty, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $name),)+
                }
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::MechError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| $crate::error::MechError::UnknownVariant {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

pub(crate) use display_and_from_str;

display_and_from_str!(Position, "position", {
    Standard => "standard",
    Desperate => "desperate",
});

display_and_from_str!(EffectLevel, "effect level", {
    Limited => "limited",
    Standard => "standard",
    Great => "great",
    Extreme => "extreme",
});

display_and_from_str!(ThreatOutcome, "outcome", {
    Success => "success",
    Peril => "peril",
    Threat => "threat",
    Critical => "critical",
});
