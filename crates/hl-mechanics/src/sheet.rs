//! Character sheets and attribute pool lookup.
//!
//! The roll engines take a plain dice count. Where that count comes from is
//! up to whoever holds the character data; [`PoolLookup`] is the seam, and
//! [`CharacterSheet`] is the JSON-backed implementation the CLI uses.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::resolution::PushAttribute;

/// Anything that can say how many dice an attribute rolls.
pub trait PoolLookup {
    /// The dice pool for `attribute`, or `None` if the source has no data
    /// for it.
    fn dice_pool(&self, attribute: PushAttribute) -> MechResult<Option<u32>>;
}

/// The skill ratings filed under one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBlock {
    /// Skill name to rating (action dots).
    #[serde(default)]
    pub skills: BTreeMap<String, u32>,
}

impl AttributeBlock {
    /// Total rating across all skills, or `None` if it does not fit a `u32`.
    pub fn total(&self) -> Option<u32> {
        self.skills
            .values()
            .try_fold(0u32, |sum, &rating| sum.checked_add(rating))
    }
}

/// A character's attributes and their skill ratings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Attribute to its skills.
    #[serde(default)]
    pub attributes: BTreeMap<PushAttribute, AttributeBlock>,
}

impl CharacterSheet {
    /// Create an empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set a skill rating under an attribute.
    pub fn with_skill(mut self, attribute: PushAttribute, skill: &str, rating: u32) -> Self {
        self.attributes
            .entry(attribute)
            .or_default()
            .skills
            .insert(skill.to_string(), rating);
        self
    }

    /// Parse a sheet from JSON.
    pub fn from_json(json: &str) -> MechResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a sheet from a JSON file.
    pub fn load(path: &Path) -> MechResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Pools for every attribute, in sheet order. Missing attributes roll 0.
    pub fn pools(&self) -> MechResult<Vec<(PushAttribute, u32)>> {
        PushAttribute::all()
            .iter()
            .map(|&a| Ok((a, self.dice_pool(a)?.unwrap_or(0))))
            .collect()
    }
}

impl PoolLookup for CharacterSheet {
    fn dice_pool(&self, attribute: PushAttribute) -> MechResult<Option<u32>> {
        self.attributes
            .get(&attribute)
            .map(|block| block.total().ok_or(MechError::PoolOverflow(attribute)))
            .transpose()
    }
}
