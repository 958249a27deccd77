//! Push Yourself rolls.
//!
//! Roll an attribute's pool and pay stress according to the best die:
//!
//! | Result   | Stress |
//! |----------|--------|
//! | Critical | 0      |
//! | 6        | 1      |
//! | 4-5      | 2      |
//! | 1-3      | 3      |
//!
//! A pool of zero or less rolls two dice and keeps the worse one, and can
//! never be critical.

use serde::{Deserialize, Serialize};

use super::{ZERO_MODE_DICE, display_and_from_str, is_critical};
use crate::dice::{DieSource, FACES, count_sixes, roll_sorted};
use crate::error::{MechError, MechResult};

/// The attribute a character pushes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushAttribute {
    /// Wits and perception.
    Insight,
    /// Body and reflexes.
    Prowess,
    /// Will and nerve.
    Resolve,
}

impl PushAttribute {
    /// Parse an attribute from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "insight" => Some(Self::Insight),
            "prowess" => Some(Self::Prowess),
            "resolve" => Some(Self::Resolve),
            _ => None,
        }
    }

    /// All attributes in sheet order.
    pub fn all() -> &'static [Self] {
        &[Self::Insight, Self::Prowess, Self::Resolve]
    }
}

display_and_from_str!(PushAttribute, "attribute", {
    Insight => "insight",
    Prowess => "prowess",
    Resolve => "resolve",
});

/// Stress paid on a critical.
pub const CRITICAL_STRESS: u8 = 0;

/// Stress reference rows, best result first: (result label, stress).
pub const STRESS_TABLE: [(&str, u8); 4] = [("critical", 0), ("6", 1), ("4-5", 2), ("1-3", 3)];

/// Which attribute best resists each kind of consequence.
///
/// Advisory only; nothing in the engine reads it.
pub const ATTRIBUTE_HINTS: [(&str, PushAttribute); 11] = [
    ("deception", PushAttribute::Insight),
    ("traps", PushAttribute::Insight),
    ("surprises", PushAttribute::Insight),
    ("confusion", PushAttribute::Insight),
    ("physical_harm", PushAttribute::Prowess),
    ("exhaustion", PushAttribute::Prowess),
    ("restraint", PushAttribute::Prowess),
    ("mental_harm", PushAttribute::Resolve),
    ("fear", PushAttribute::Resolve),
    ("supernatural", PushAttribute::Resolve),
    ("temptation", PushAttribute::Resolve),
];

/// Look up the recommended attribute for a consequence kind.
pub fn recommended_attribute(consequence: &str) -> Option<PushAttribute> {
    let key = consequence.trim().to_lowercase().replace([' ', '-'], "_");
    ATTRIBUTE_HINTS
        .iter()
        .find(|(kind, _)| *kind == key)
        .map(|&(_, attribute)| attribute)
}

/// The full result of a Push Yourself roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushRollResult {
    /// Every die rolled, high-to-low.
    pub all_dice: Vec<u8>,
    /// The attribute pushed with.
    pub attribute: PushAttribute,
    /// Stress to mark, 0 to 3.
    pub stress_cost: u8,
    /// Two or more sixes on a real pool.
    pub is_critical: bool,
    /// The pool was zero or less: two dice, worse one counts.
    pub zero_mode: bool,
}

impl PushRollResult {
    /// The die the stress cost was read from.
    pub fn deciding_die(&self) -> Option<u8> {
        deciding_die(&self.all_dice, self.zero_mode)
    }
}

/// Stress cost for the deciding die.
pub fn stress_cost(deciding_die: u8, is_critical: bool) -> u8 {
    match deciding_die {
        _ if is_critical => CRITICAL_STRESS,
        d if d >= FACES => 1,
        4 | 5 => 2,
        _ => 3,
    }
}

/// Roll Push Yourself with the given attribute pool.
///
/// Negative pools are rejected before anything is rolled.
pub fn roll_push(
    attribute: PushAttribute,
    dice_pool: i32,
    dice: &mut dyn DieSource,
) -> MechResult<PushRollResult> {
    let pool = usize::try_from(dice_pool).map_err(|_| MechError::NegativePool(dice_pool))?;
    let zero_mode = pool == 0;
    let count = if zero_mode { ZERO_MODE_DICE } else { pool };

    let all_dice = roll_sorted(dice, count)?;
    let is_critical = is_critical(count_sixes(&all_dice), zero_mode);
    // At least one die is always rolled, so there is always a deciding die.
    let decider = deciding_die(&all_dice, zero_mode).unwrap_or_default();
    let stress_cost = stress_cost(decider, is_critical);

    tracing::debug!(
        ?all_dice,
        %attribute,
        pool,
        zero_mode,
        is_critical,
        stress_cost,
        "push roll resolved"
    );

    Ok(PushRollResult {
        all_dice,
        attribute,
        stress_cost,
        is_critical,
        zero_mode,
    })
}

/// Best die on a real pool, worse of the two in zero mode.
fn deciding_die(sorted: &[u8], zero_mode: bool) -> Option<u8> {
    if zero_mode {
        sorted.iter().take(ZERO_MODE_DICE).min().copied()
    } else {
        sorted.first().copied()
    }
}
