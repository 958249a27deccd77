//! Concrete die sources: seeded RNG and scripted faces.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{DieSource, FACES};
use crate::error::{MechError, MechResult};

/// A die source backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct RngDice {
    rng: StdRng,
}

impl RngDice {
    /// Create a source seeded for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl DieSource for RngDice {
    fn roll_d6(&mut self) -> MechResult<u32> {
        Ok(self.rng.random_range(1..=u32::from(FACES)))
    }
}

/// A die source that replays a fixed sequence of faces.
///
/// Faces are handed out in the order given. Asking for more faces than were
/// scripted is an error rather than a wrap-around.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
    available: usize,
    requested: usize,
}

impl ScriptedDice {
    /// Script the faces this source will return.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        let faces: VecDeque<u32> = faces.into_iter().collect();
        let available = faces.len();
        Self {
            faces,
            available,
            requested: 0,
        }
    }

    /// Faces not yet handed out.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DieSource for ScriptedDice {
    fn roll_d6(&mut self) -> MechResult<u32> {
        self.requested += 1;
        self.faces.pop_front().ok_or(MechError::DiceExhausted {
            requested: self.requested,
            available: self.available,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_produces_valid_faces() {
        let mut dice = RngDice::seeded(42);
        for _ in 0..200 {
            let face = dice.roll_d6().unwrap();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn rng_deterministic_with_seed() {
        let mut a = RngDice::seeded(99);
        let mut b = RngDice::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.roll_d6().unwrap(), b.roll_d6().unwrap());
        }
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut dice = ScriptedDice::new([4, 2, 5]);
        assert_eq!(dice.roll_d6().unwrap(), 4);
        assert_eq!(dice.roll_d6().unwrap(), 2);
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll_d6().unwrap(), 5);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn scripted_exhaustion_is_an_error() {
        let mut dice = ScriptedDice::new([1]);
        dice.roll_d6().unwrap();
        assert!(matches!(
            dice.roll_d6(),
            Err(MechError::DiceExhausted {
                requested: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn scripted_does_not_validate() {
        // Range checks belong to the engine, not the source.
        let mut dice = ScriptedDice::new([0, 7]);
        assert_eq!(dice.roll_d6().unwrap(), 0);
        assert_eq!(dice.roll_d6().unwrap(), 7);
    }
}
