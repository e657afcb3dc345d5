//! Character records as they are stored: attributes, skills, specializations.
//!
//! These mirror the persisted JSON shape (camelCase keys, most fields
//! optional). The engine reads them but never owns their storage.

pub mod hit_points;
pub mod skill;

pub use hit_points::{HitPoints, max_hit_points};
pub use skill::{base_skill_blibs, blibs_to_bonus, compose_skill_notation, skill_notation};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dice::Notation;
use crate::error::{MechError, MechResult};

/// The seven attributes of the system, in sheet order.
pub const ATTRIBUTES: [&str; 7] = [
    "Reflexe",
    "Koordination",
    "Stärke",
    "Wissen",
    "Wahrnehmung",
    "Ausstrahlung",
    "Magie",
];

/// The magic attribute. Unlike the others it starts at `0D`.
pub const MAGIC: &str = "Magie";

/// Starting value of an attribute before any points are spent.
///
/// Magic starts at `0D`; every other name, known or not, at `2D`.
pub fn attribute_baseline(name: &str) -> Notation {
    if name == MAGIC {
        Notation::new(0, 0)
    } else {
        Notation::new(2, 0)
    }
}

/// A player or non-player character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    /// Stable identifier.
    pub id: String,
    /// Character name.
    pub name: String,
    /// Owning player.
    pub player_name: String,
    /// Current level. Missing means level 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Attribute name to notation text, e.g. `"Stärke": "2D+1"`.
    pub attributes: BTreeMap<String, String>,
    /// Skills with their invested dice and specializations.
    pub skills: Vec<Skill>,
    /// Blips awarded during play on top of the starting budget.
    pub earned_blips: i64,
    /// Stored current hit points.
    #[serde(rename = "currentHP", skip_serializing_if = "Option::is_none")]
    pub current_hp: Option<i32>,
    /// Stored maximum hit points.
    #[serde(rename = "maxHP", skip_serializing_if = "Option::is_none")]
    pub max_hp: Option<i32>,
}

/// A skill governed by one attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    /// Stable identifier.
    pub id: String,
    /// Skill name.
    pub name: String,
    /// Name of the governing attribute.
    pub attribute: String,
    /// Whole dice bought on top of the attribute.
    pub bonus_dice: i32,
    /// Single steps bought on top of the attribute.
    pub bonus_steps: i32,
    /// Narrower focuses with their own Blibs.
    pub specializations: Vec<Specialization>,
    /// Rolls three dice below the attribute until anything is invested.
    pub is_weakened: bool,
    /// Added by the player rather than taken from the catalog.
    pub is_custom: bool,
    /// Hover text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A specialization of a skill, e.g. "Schwert" for armed melee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specialization {
    /// Stable identifier.
    pub id: String,
    /// Specialization name.
    pub name: String,
    /// Name of the skill this belongs to.
    pub skill_name: String,
    /// Blibs invested. Three Blibs make one die.
    pub blibs: i32,
}

impl Character {
    /// Decode one character record.
    pub fn from_json(json: &str) -> MechResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a list of character records.
    pub fn list_from_json(json: &str) -> MechResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Level, defaulting to 1.
    pub fn level(&self) -> u32 {
        self.level.filter(|l| *l > 0).unwrap_or(1)
    }

    /// The stored notation text of an attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Find a skill by name, ignoring case.
    pub fn skill(&self, name: &str) -> MechResult<&Skill> {
        let lower = name.to_lowercase();
        self.skills
            .iter()
            .find(|s| s.name.to_lowercase() == lower)
            .ok_or_else(|| MechError::UnknownSkill(name.to_string()))
    }
}

impl Skill {
    /// Create an uninvested skill.
    pub fn new(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            ..Self::default()
        }
    }

    /// Find a specialization by name, ignoring case.
    pub fn specialization(&self, name: &str) -> MechResult<&Specialization> {
        let lower = name.to_lowercase();
        self.specializations
            .iter()
            .find(|s| s.name.to_lowercase() == lower)
            .ok_or_else(|| MechError::UnknownSpecialization {
                skill: self.name.clone(),
                specialization: name.to_string(),
            })
    }

    /// Blibs across all specializations.
    pub fn total_blibs(&self) -> i64 {
        self.specializations
            .iter()
            .map(|s| i64::from(s.blibs))
            .sum()
    }
}
