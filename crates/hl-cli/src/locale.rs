//! English display strings, keyed by localization key.
//!
//! Unknown keys are shown as the key itself so a missing string is visible
//! rather than blank.

use hl_mechanics::{EffectLevel, Position, PushAttribute, ThreatOutcome};

const PREFIX: &str = "HIDDEN_LONDON";

const STRINGS: &[(&str, &str)] = &[
    ("HIDDEN_LONDON.ThreatRoll", "Threat Roll"),
    ("HIDDEN_LONDON.Outcome.Success", "Success"),
    ("HIDDEN_LONDON.Outcome.Peril", "Peril"),
    ("HIDDEN_LONDON.Outcome.Threat", "Threat"),
    ("HIDDEN_LONDON.Outcome.Critical", "Critical"),
    ("HIDDEN_LONDON.Position.Standard", "Standard"),
    ("HIDDEN_LONDON.Position.Desperate", "Desperate"),
    ("HIDDEN_LONDON.Effect.Limited", "Limited"),
    ("HIDDEN_LONDON.Effect.Standard", "Standard"),
    ("HIDDEN_LONDON.Effect.Great", "Great"),
    ("HIDDEN_LONDON.Effect.Extreme", "Extreme"),
    ("HIDDEN_LONDON.Attribute.Insight", "Insight"),
    ("HIDDEN_LONDON.Attribute.Prowess", "Prowess"),
    ("HIDDEN_LONDON.Attribute.Resolve", "Resolve"),
    ("HIDDEN_LONDON.Modifier.HomeTurf", "Home Turf"),
    ("HIDDEN_LONDON.Modifier.SpiritPact", "Spirit Pact"),
    ("HIDDEN_LONDON.Modifier.OperatingBlind", "Operating Blind"),
    ("HIDDEN_LONDON.Modifier.HostileTerritory", "Hostile Territory"),
    ("HIDDEN_LONDON.Modifier.TargetVulnerable", "Target Vulnerable"),
    ("HIDDEN_LONDON.Modifier.TargetPrepared", "Target Prepared"),
    ("HIDDEN_LONDON.ReduceThreat", "reduce threat"),
    ("HIDDEN_LONDON.IncreaseThreat", "increase threat"),
    ("HIDDEN_LONDON.IncreaseEffect", "increase effect"),
    ("HIDDEN_LONDON.ReduceEffect", "reduce effect"),
    ("HIDDEN_LONDON.Push.PushYourself", "Push Yourself"),
    ("HIDDEN_LONDON.Push.StressCost", "Stress"),
    ("HIDDEN_LONDON.Push.Result", "Result"),
];

/// Look up the English string for `key`.
pub fn localize(key: &str) -> &str {
    STRINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, v)| *v)
}

fn keyed(group: &str, name: &str) -> String {
    let key = format!("{PREFIX}.{group}.{}", capitalize(name));
    localize(&key).to_string()
}

/// Display label for an outcome.
pub fn outcome(outcome: ThreatOutcome) -> String {
    keyed("Outcome", &outcome.to_string())
}

/// Display label for a position.
pub fn position(position: Position) -> String {
    keyed("Position", &position.to_string())
}

/// Display label for an effect level.
pub fn effect(effect: EffectLevel) -> String {
    keyed("Effect", &effect.to_string())
}

/// Display label for an attribute.
pub fn attribute(attribute: PushAttribute) -> String {
    keyed("Attribute", &attribute.to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys() {
        assert_eq!(localize("HIDDEN_LONDON.Modifier.HomeTurf"), "Home Turf");
        assert_eq!(outcome(ThreatOutcome::Peril), "Peril");
        assert_eq!(position(Position::Desperate), "Desperate");
        assert_eq!(effect(EffectLevel::Great), "Great");
        assert_eq!(attribute(PushAttribute::Resolve), "Resolve");
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(localize("HIDDEN_LONDON.Nope"), "HIDDEN_LONDON.Nope");
    }

    #[test]
    fn every_catalog_label_is_translated() {
        for m in hl_mechanics::modifier::catalog() {
            assert_ne!(localize(&m.label), m.label);
            for hint in m.hints() {
                assert_ne!(localize(hint.label_key()), hint.label_key());
            }
        }
    }

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("peril"), "Peril");
        assert_eq!(capitalize(""), "");
    }
}
