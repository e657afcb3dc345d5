//! A session's characters and policy, passed explicitly to every evaluation.
//!
//! Create one per session or request and drop it when done. Nothing in
//! here is global.

use crate::dice::{DieSource, Notation, RollOutcome, resolve};
use crate::error::{MechError, MechResult};
use crate::rules::CreationPolicy;
use crate::sheet::{Character, HitPoints, skill_notation};

use super::PointBudget;

/// The characters and creation policy of one session.
#[derive(Debug, Clone, Default)]
pub struct CharacterContext {
    policy: CreationPolicy,
    characters: Vec<Character>,
}

impl CharacterContext {
    /// An empty roster under `policy`.
    pub fn new(policy: CreationPolicy) -> Self {
        Self {
            policy,
            characters: Vec::new(),
        }
    }

    /// Add characters to the roster, replacing any with the same id.
    pub fn with_characters(mut self, characters: impl IntoIterator<Item = Character>) -> Self {
        for character in characters {
            self.upsert(character);
        }
        self
    }

    /// Load a JSON list of character records into the roster.
    /// Returns how many records were read.
    pub fn load_json(&mut self, json: &str) -> MechResult<usize> {
        let characters = Character::list_from_json(json)?;
        let count = characters.len();
        for character in characters {
            self.upsert(character);
        }
        Ok(count)
    }

    /// The policy in force.
    pub fn policy(&self) -> &CreationPolicy {
        &self.policy
    }

    /// All loaded characters, in insertion order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Insert a character, or replace the stored one with the same id.
    /// The last write wins.
    pub fn upsert(&mut self, character: Character) {
        match self.characters.iter_mut().find(|c| c.id == character.id) {
            Some(existing) => *existing = character,
            None => self.characters.push(character),
        }
    }

    /// Remove a character. Returns false if it was not loaded.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.characters.len();
        self.characters.retain(|c| c.id != id);
        self.characters.len() != before
    }

    /// Look up a character by id.
    pub fn character(&self, id: &str) -> MechResult<&Character> {
        self.characters
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| MechError::CharacterNotFound(id.to_string()))
    }

    /// Evaluate a character's points from its current values.
    pub fn budget(&self, id: &str) -> MechResult<PointBudget> {
        Ok(PointBudget::evaluate(self.character(id)?, &self.policy))
    }

    /// A character's hit point track.
    pub fn hit_points(&self, id: &str) -> MechResult<HitPoints> {
        Ok(HitPoints::for_character(self.character(id)?))
    }

    /// The notation a character rolls for a skill, optionally specialized.
    pub fn skill_notation(
        &self,
        id: &str,
        skill: &str,
        specialization: Option<&str>,
    ) -> MechResult<String> {
        let character = self.character(id)?;
        let skill = character.skill(skill)?;
        let specialization = specialization
            .map(|name| skill.specialization(name))
            .transpose()?;
        Ok(skill_notation(character, skill, specialization))
    }

    /// Roll a character's skill, optionally against a target.
    pub fn roll_skill(
        &self,
        id: &str,
        skill: &str,
        specialization: Option<&str>,
        target: Option<u32>,
        source: &mut impl DieSource,
    ) -> MechResult<RollOutcome> {
        let notation = self.skill_notation(id, skill, specialization)?;
        Ok(resolve(Notation::parse(&notation), target, source))
    }

    /// Roll a character's attribute, optionally against a target.
    pub fn roll_attribute(
        &self,
        id: &str,
        attribute: &str,
        target: Option<u32>,
        source: &mut impl DieSource,
    ) -> MechResult<RollOutcome> {
        let value = self
            .character(id)?
            .attribute(attribute)
            .ok_or_else(|| MechError::UnknownAttribute(attribute.to_string()))?;
        Ok(resolve(Notation::parse(value), target, source))
    }
}
