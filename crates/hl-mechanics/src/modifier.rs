//! Situational modifiers.
//!
//! A fixed catalog of circumstances the operator can tick before rolling.
//! Each declares how it would shift position or effect, but the engine only
//! carries the selection through to the result. Adjusting the pool, position
//! or effect is left to the operator.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// One entry of the modifier catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SituationalModifier {
    /// Unique key, e.g. `home_turf`.
    pub key: String,
    /// Localization key for the display label.
    pub label: String,
    /// -1 eases the position, +1 worsens it.
    #[serde(default)]
    pub position_shift: i8,
    /// -1 reduces effect, +1 increases it.
    #[serde(default)]
    pub effect_shift: i8,
}

/// A display hint derived from a modifier's shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftHint {
    /// Position shift of -1.
    ReduceThreat,
    /// Position shift of +1.
    IncreaseThreat,
    /// Effect shift of +1.
    IncreaseEffect,
    /// Effect shift of -1.
    ReduceEffect,
}

impl ShiftHint {
    /// Localization key for this hint.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::ReduceThreat => "HIDDEN_LONDON.ReduceThreat",
            Self::IncreaseThreat => "HIDDEN_LONDON.IncreaseThreat",
            Self::IncreaseEffect => "HIDDEN_LONDON.IncreaseEffect",
            Self::ReduceEffect => "HIDDEN_LONDON.ReduceEffect",
        }
    }
}

impl SituationalModifier {
    fn entry(key: &str, label: &str, position_shift: i8, effect_shift: i8) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            position_shift,
            effect_shift,
        }
    }

    /// Hints for the non-zero shifts, position first.
    pub fn hints(&self) -> Vec<ShiftHint> {
        let mut hints = Vec::new();
        match self.position_shift {
            -1 => hints.push(ShiftHint::ReduceThreat),
            1 => hints.push(ShiftHint::IncreaseThreat),
            _ => {}
        }
        match self.effect_shift {
            1 => hints.push(ShiftHint::IncreaseEffect),
            -1 => hints.push(ShiftHint::ReduceEffect),
            _ => {}
        }
        hints
    }
}

/// The full modifier catalog, in display order.
pub fn catalog() -> Vec<SituationalModifier> {
    vec![
        SituationalModifier::entry("home_turf", "HIDDEN_LONDON.Modifier.HomeTurf", -1, 0),
        SituationalModifier::entry("spirit_pact", "HIDDEN_LONDON.Modifier.SpiritPact", -1, 1),
        SituationalModifier::entry(
            "operating_blind",
            "HIDDEN_LONDON.Modifier.OperatingBlind",
            1,
            0,
        ),
        SituationalModifier::entry(
            "hostile_territory",
            "HIDDEN_LONDON.Modifier.HostileTerritory",
            1,
            0,
        ),
        SituationalModifier::entry(
            "target_vulnerable",
            "HIDDEN_LONDON.Modifier.TargetVulnerable",
            0,
            1,
        ),
        SituationalModifier::entry(
            "target_prepared",
            "HIDDEN_LONDON.Modifier.TargetPrepared",
            0,
            -1,
        ),
    ]
}

/// Find a catalog entry by key.
pub fn find(key: &str) -> Option<SituationalModifier> {
    let key = key.trim();
    catalog().into_iter().find(|m| m.key == key)
}

/// Resolve a list of keys against the catalog, keeping catalog order and
/// dropping duplicates. Any unknown key fails the whole selection.
pub fn select<'a>(
    keys: impl IntoIterator<Item = &'a str>,
) -> MechResult<Vec<SituationalModifier>> {
    let mut wanted = Vec::new();
    for key in keys {
        let found = find(key).ok_or_else(|| MechError::UnknownModifier(key.to_string()))?;
        if !wanted.contains(&found.key) {
            wanted.push(found.key);
        }
    }
    Ok(catalog()
        .into_iter()
        .filter(|m| wanted.contains(&m.key))
        .collect())
}
