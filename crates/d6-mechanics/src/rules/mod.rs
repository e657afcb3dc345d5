//! Character creation policy and the default skill catalog.
//!
//! A [`CreationPolicy`] holds the point limits a campaign plays with. It is
//! stored as JSON by the host; partial or older settings are filled in
//! from the defaults field by field.

pub mod catalog;

pub use catalog::{SKILLS_BY_ATTRIBUTE, default_skills, skills_for_attribute};

use serde::{Deserialize, Serialize};

use crate::error::MechResult;

/// Point limits for building and advancing characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreationPolicy {
    /// Whole attribute dice a character may buy above baseline.
    pub max_attribute_points: i64,
    /// Bonus skill dice a character may buy.
    pub max_skill_points: i64,
    /// Specialization Blibs a character may buy.
    pub max_blibs: i64,
    /// Blips every character starts with.
    #[serde(rename = "defaultStartBlips")]
    pub start_blips: i64,
}

impl Default for CreationPolicy {
    fn default() -> Self {
        Self {
            max_attribute_points: 7,
            max_skill_points: 8,
            max_blibs: 4,
            start_blips: 67,
        }
    }
}

impl CreationPolicy {
    /// Decode stored settings. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> MechResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the attribute point limit.
    pub fn with_attribute_points(mut self, max: i64) -> Self {
        self.max_attribute_points = max;
        self
    }

    /// Set the skill point limit.
    pub fn with_skill_points(mut self, max: i64) -> Self {
        self.max_skill_points = max;
        self
    }

    /// Set the Blib limit.
    pub fn with_blibs(mut self, max: i64) -> Self {
        self.max_blibs = max;
        self
    }

    /// Set the starting Blip budget.
    pub fn with_start_blips(mut self, blips: i64) -> Self {
        self.start_blips = blips;
        self
    }
}
