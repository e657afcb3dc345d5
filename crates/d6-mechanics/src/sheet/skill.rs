//! Effective skill values.
//!
//! A skill rolls its attribute's dice plus whatever was bought on top:
//! bonus dice (three steps each) and Blibs (one step each). A weakened
//! skill starts three dice lower until something is invested in it.

use super::{Character, Skill, Specialization};
use crate::dice::{Notation, ParsedNotation, STEPS_PER_DIE, classify};

/// Dice taken off a weakened skill that nobody has invested in.
pub const WEAKENED_PENALTY_DICE: u32 = 3;

/// Attribute value assumed when a character lacks the governing attribute.
const MISSING_ATTRIBUTE: &str = "1D";

/// Compose the notation a skill rolls with.
///
/// Returns the attribute text unchanged when it is not dice notation.
/// The result never drops below `0D`.
pub fn compose_skill_notation(
    attribute: &str,
    bonus_dice: i32,
    bonus_blips: i32,
    is_weakened: bool,
    is_learned: bool,
) -> String {
    let ParsedNotation::Canonical(Notation { mut dice, modifier }) = classify(attribute) else {
        tracing::debug!(attribute, "attribute is not dice notation, passing through");
        return attribute.to_string();
    };

    if is_weakened && !is_learned {
        dice = dice.saturating_sub(WEAKENED_PENALTY_DICE);
    }

    let base = i64::from(Notation::new(dice, modifier).steps());
    let bought = i64::from(bonus_dice) * i64::from(STEPS_PER_DIE) + i64::from(bonus_blips);
    Notation::from_steps((base + bought).max(0)).to_string()
}

/// The notation a character rolls for `skill`, optionally with one specialization.
///
/// A skill counts as learned once it has bonus dice or the chosen
/// specialization has Blibs. Bonus steps alone do not lift the weakening.
pub fn skill_notation(
    character: &Character,
    skill: &Skill,
    specialization: Option<&Specialization>,
) -> String {
    let attribute = character
        .attribute(&skill.attribute)
        .unwrap_or(MISSING_ATTRIBUTE);
    let spec_blibs = specialization.map_or(0, |s| s.blibs);
    let is_learned = skill.bonus_dice > 0 || spec_blibs > 0;
    compose_skill_notation(
        attribute,
        skill.bonus_dice,
        skill.bonus_steps.saturating_add(spec_blibs),
        skill.is_weakened,
        is_learned,
    )
}

/// The bonus a specialization's Blibs give on their own.
///
/// Defined for 0-4 Blibs; anything else gives no bonus.
pub fn blibs_to_bonus(blibs: i32) -> Notation {
    match blibs {
        1 => Notation::new(0, 1),
        2 => Notation::new(0, 2),
        3 => Notation::new(1, 0),
        4 => Notation::new(1, 1),
        _ => Notation::new(0, 0),
    }
}

/// The highest Blib count among a skill's specializations.
pub fn base_skill_blibs(skill: &Skill) -> i32 {
    skill
        .specializations
        .iter()
        .map(|s| s.blibs)
        .fold(0, i32::max)
}
