//! Six-sided dice and the sources that produce them.
//!
//! The engines never touch an RNG directly. Every face comes from a
//! [`DieSource`], so a roll can be replayed exactly by handing in a
//! [`ScriptedDice`] with the faces of interest.

pub mod source;

pub use source::{RngDice, ScriptedDice};

use crate::error::{MechError, MechResult};

/// Number of faces on every die this engine rolls.
pub const FACES: u8 = 6;

/// A supplier of d6 faces.
///
/// Implementations should return a uniformly distributed value in `1..=6`.
/// The engine validates every face it receives and reports anything else as
/// [`MechError::FaceOutOfRange`]; source errors are passed through untouched.
pub trait DieSource {
    /// Roll a single six-sided die.
    fn roll_d6(&mut self) -> MechResult<u32>;
}

/// Check that a face lies on a d6 and narrow it to `u8`.
pub fn validate_face(face: u32) -> MechResult<u8> {
    match u8::try_from(face) {
        Ok(value) if (1..=FACES).contains(&value) => Ok(value),
        _ => Err(MechError::FaceOutOfRange(face)),
    }
}

/// Roll `count` dice and return them sorted high-to-low.
pub fn roll_sorted(source: &mut dyn DieSource, count: usize) -> MechResult<Vec<u8>> {
    let mut dice = Vec::with_capacity(count);
    for _ in 0..count {
        dice.push(validate_face(source.roll_d6()?)?);
    }
    dice.sort_unstable_by(|a, b| b.cmp(a));
    Ok(dice)
}

/// How many dice in the slice show a six.
pub fn count_sixes(dice: &[u8]) -> usize {
    dice.iter().filter(|&&v| v == FACES).count()
}
