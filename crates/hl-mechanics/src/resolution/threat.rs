//! Threat rolls.
//!
//! Roll the action pool plus one extra die per additional threat, sort the
//! dice high-to-low and hand the best die to the primary risk and the next
//! ones to each additional risk. A pool of zero or less rolls two dice and
//! keeps the worse one for the primary risk instead.

use serde::{Deserialize, Serialize};

use super::{EffectLevel, Position, ThreatOutcome, ZERO_MODE_DICE, classify, is_critical};
use crate::dice::{DieSource, count_sixes, roll_sorted};
use crate::error::{MechError, MechResult};
use crate::modifier::SituationalModifier;

/// Input for a threat roll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatRollParams {
    /// Action dice before additional threats. Zero means zero mode.
    pub dice_pool: i32,
    /// Position the action is taken from.
    pub position: Position,
    /// Extra risks accepted, each adding one die.
    pub additional_threats: i32,
    /// Effect level, carried through for display.
    pub effect: EffectLevel,
    /// Free-text note.
    pub note: String,
    /// Situational modifiers, carried through for display. Never applied.
    pub modifiers: Vec<SituationalModifier>,
}

impl ThreatRollParams {
    /// Start a roll with the given pool and position.
    pub fn new(dice_pool: i32, position: Position) -> Self {
        Self {
            dice_pool,
            position,
            ..Self::default()
        }
    }

    /// Accept `count` additional threats.
    pub fn with_additional_threats(mut self, count: i32) -> Self {
        self.additional_threats = count;
        self
    }

    /// Set the effect level.
    pub fn with_effect(mut self, effect: EffectLevel) -> Self {
        self.effect = effect;
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Attach situational modifiers.
    pub fn with_modifiers(mut self, modifiers: Vec<SituationalModifier>) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// One die handed to a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DieResult {
    /// Face value, 1 to 6.
    pub value: u8,
    /// How the die resolves the risk.
    pub outcome: ThreatOutcome,
    /// Which risk this die answers: 0 is the primary, 1.. the additional ones.
    pub threat_index: usize,
}

/// The full result of a threat roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatRollResult {
    /// Every die rolled, high-to-low.
    pub all_dice: Vec<u8>,
    /// Dice handed to risks; index 0 is the primary risk.
    pub assigned_dice: Vec<DieResult>,
    /// Dice nobody needed.
    pub unused_dice: Vec<u8>,
    /// The pool was zero or less: two dice, worse one counts.
    pub zero_mode: bool,
    /// Two or more sixes on a real pool.
    pub is_critical: bool,
    /// Position used for classification.
    pub position: Position,
    /// Effect level, as given.
    pub effect: EffectLevel,
    /// Note, as given.
    pub note: String,
    /// Modifiers, as given.
    pub modifiers: Vec<SituationalModifier>,
    /// Desperate rolls always mark XP.
    #[serde(rename = "markXP")]
    pub mark_xp: bool,
}

impl ThreatRollResult {
    /// The die answering the primary risk.
    pub fn primary(&self) -> Option<&DieResult> {
        self.assigned_dice.first()
    }

    /// The dice answering additional risks, in threat order.
    pub fn additional(&self) -> &[DieResult] {
        self.assigned_dice.get(1..).unwrap_or_default()
    }
}

/// Roll a threat roll.
///
/// Negative pools or threat counts are rejected up front; nothing is rolled.
/// Source failures and out-of-range faces abort the roll with no partial
/// result.
pub fn roll_threat(
    params: ThreatRollParams,
    dice: &mut dyn DieSource,
) -> MechResult<ThreatRollResult> {
    let ThreatRollParams {
        dice_pool,
        position,
        additional_threats,
        effect,
        note,
        modifiers,
    } = params;

    let pool = usize::try_from(dice_pool).map_err(|_| MechError::NegativePool(dice_pool))?;
    let extra = usize::try_from(additional_threats)
        .map_err(|_| MechError::NegativeThreats(additional_threats))?;

    let zero_mode = pool == 0;
    let base = if zero_mode { ZERO_MODE_DICE } else { pool };
    let all_dice = roll_sorted(dice, base + extra)?;

    let (assigned, unused_dice) = if zero_mode {
        assign_zero_mode(&all_dice, extra)
    } else {
        assign_highest(&all_dice, extra)
    };

    let mut assigned_dice = assigned
        .into_iter()
        .enumerate()
        .map(|(threat_index, value)| {
            Ok(DieResult {
                value,
                outcome: classify(u32::from(value), position)?,
                threat_index,
            })
        })
        .collect::<MechResult<Vec<_>>>()?;

    let sixes = count_sixes(&all_dice);
    let is_critical = is_critical(sixes, zero_mode);
    if is_critical && let Some(primary) = assigned_dice.first_mut() {
        primary.outcome = ThreatOutcome::Critical;
    }

    tracing::debug!(
        ?all_dice,
        ?position,
        pool,
        extra,
        zero_mode,
        is_critical,
        "threat roll resolved"
    );

    Ok(ThreatRollResult {
        all_dice,
        assigned_dice,
        unused_dice,
        zero_mode,
        is_critical,
        position,
        effect,
        note,
        modifiers,
        mark_xp: position.marks_xp(),
    })
}

/// Highest die to the primary risk, the next `extra` to the additional ones.
fn assign_highest(sorted: &[u8], extra: usize) -> (Vec<u8>, Vec<u8>) {
    let split = (1 + extra).min(sorted.len());
    let (assigned, unused) = sorted.split_at(split);
    (assigned.to_vec(), unused.to_vec())
}

/// The worse of the two lowest dice to the primary risk; the higher dice go
/// to the additional risks, best first.
fn assign_zero_mode(sorted: &[u8], extra: usize) -> (Vec<u8>, Vec<u8>) {
    let (higher, lowest_two) = sorted.split_at(sorted.len().saturating_sub(ZERO_MODE_DICE));
    let mut assigned = Vec::with_capacity(1 + extra);
    if let Some(&primary) = lowest_two.iter().min() {
        assigned.push(primary);
    }
    let split = extra.min(higher.len());
    let (to_threats, unused) = higher.split_at(split);
    assigned.extend_from_slice(to_threats);
    (assigned, unused.to_vec())
}
