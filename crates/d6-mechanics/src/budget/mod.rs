//! Point accounting: what a character has spent and what is left.
//!
//! Three coarse counters track creation points (attribute dice, skill
//! dice, specialization Blibs). Blips are the fine-grained advancement
//! currency, where each group of three steps costs one Blip more per step
//! than the group before.
//!
//! Everything is recomputed from the character's current values on every
//! call. Stored "points used" fields are never read.

pub mod context;

pub use context::CharacterContext;

use serde::{Deserialize, Serialize};

use crate::dice::{Notation, ParsedNotation, STEPS_PER_DIE, classify};
use crate::rules::CreationPolicy;
use crate::sheet::{Character, attribute_baseline};

/// Blips needed to raise a value by `steps` steps.
///
/// Step `k` (from 1) costs `ceil(k / 3)`: steps 1-3 cost 1 each, 4-6 cost
/// 2 each, and so on. Zero or negative step counts cost nothing, and costs
/// too large for an `i64` saturate at `i64::MAX`.
pub fn step_cost(steps: i64) -> i64 {
    if steps <= 0 {
        return 0;
    }
    let group = i128::from(STEPS_PER_DIE);
    let full = i128::from(steps) / group;
    let rest = i128::from(steps) % group;
    let cost = group * full * (full + 1) / 2 + rest * (full + 1);
    i64::try_from(cost).unwrap_or(i64::MAX)
}

/// A character's spending measured against a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointBudget {
    /// Whole attribute dice above baseline.
    pub used_attribute_points: i64,
    /// Bonus skill dice.
    pub used_skill_points: i64,
    /// Specialization Blibs.
    pub used_blibs: i64,
    /// Blips spent on attributes, skills, and specializations.
    pub used_blips: i64,
    /// Attribute points left under the policy limit.
    pub remaining_attribute_points: i64,
    /// Skill points left under the policy limit.
    pub remaining_skill_points: i64,
    /// Blibs left under the policy limit.
    pub remaining_blibs: i64,
    /// Blips left from the total budget.
    pub remaining_blips: i64,
    /// Starting Blips plus earned Blips.
    pub total_blip_budget: i64,
    /// Some coarse counter is over its limit.
    pub needs_reduction: bool,
    /// Some coarse counter still has points to spend.
    pub has_remaining_points: bool,
}

impl PointBudget {
    /// Evaluate a character against a policy.
    pub fn evaluate(character: &Character, policy: &CreationPolicy) -> Self {
        let used_attribute_points = attribute_points_used(character);
        let used_skill_points = skill_points_used(character);
        let used_blibs = blibs_used(character);
        let used_blips = attribute_blips_used(character)
            .saturating_add(skill_blips_used(character));

        let remaining_attribute_points = policy
            .max_attribute_points
            .saturating_sub(used_attribute_points);
        let remaining_skill_points = policy.max_skill_points.saturating_sub(used_skill_points);
        let remaining_blibs = policy.max_blibs.saturating_sub(used_blibs);

        let total_blip_budget = policy.start_blips.saturating_add(character.earned_blips);

        Self {
            used_attribute_points,
            used_skill_points,
            used_blibs,
            used_blips,
            remaining_attribute_points,
            remaining_skill_points,
            remaining_blibs,
            remaining_blips: total_blip_budget.saturating_sub(used_blips),
            total_blip_budget,
            needs_reduction: used_attribute_points > policy.max_attribute_points
                || used_skill_points > policy.max_skill_points
                || used_blibs > policy.max_blibs,
            has_remaining_points: remaining_attribute_points > 0
                || remaining_skill_points > 0
                || remaining_blibs > 0,
        }
    }
}

/// Whole attribute dice bought above baseline.
///
/// Only the die count is compared; modifiers are ignored here even though
/// [`attribute_blips_used`] charges for them. Values that are not dice
/// notation count as nothing.
pub fn attribute_points_used(character: &Character) -> i64 {
    character
        .attributes
        .iter()
        .map(|(name, value)| match classify(value) {
            ParsedNotation::Canonical(Notation { dice, .. }) => {
                let baseline = attribute_baseline(name).dice;
                (i64::from(dice) - i64::from(baseline)).max(0)
            }
            ParsedNotation::LegacyReversed(_) | ParsedNotation::Unrecognized => 0,
        })
        .sum()
}

/// Bonus skill dice across all skills.
pub fn skill_points_used(character: &Character) -> i64 {
    character
        .skills
        .iter()
        .map(|skill| i64::from(skill.bonus_dice))
        .sum()
}

/// Blibs across every specialization of every skill.
pub fn blibs_used(character: &Character) -> i64 {
    character
        .skills
        .iter()
        .map(|skill| skill.total_blibs())
        .sum()
}

/// Blips spent raising attributes above baseline, modifiers included.
pub fn attribute_blips_used(character: &Character) -> i64 {
    character
        .attributes
        .iter()
        .map(|(name, value)| {
            let steps = i64::from(Notation::parse(value).steps())
                - i64::from(attribute_baseline(name).steps());
            step_cost(steps)
        })
        .fold(0, i64::saturating_add)
}

/// Blips spent on skills and specializations.
///
/// A skill's bonus dice and bonus steps are costed together as one run of
/// steps; each specialization's Blibs are costed as a separate run.
pub fn skill_blips_used(character: &Character) -> i64 {
    character
        .skills
        .iter()
        .map(|skill| {
            let steps = i64::from(skill.bonus_dice) * i64::from(STEPS_PER_DIE)
                + i64::from(skill.bonus_steps);
            skill
                .specializations
                .iter()
                .map(|s| step_cost(i64::from(s.blibs)))
                .fold(step_cost(steps), i64::saturating_add)
        })
        .fold(0, i64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{Skill, Specialization};
    use proptest::prelude::*;

    fn character(attributes: &[(&str, &str)], skills: Vec<Skill>) -> Character {
        Character {
            attributes: attributes
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            skills,
            ..Character::default()
        }
    }

    fn skill(bonus_dice: i32, blibs: &[i32]) -> Skill {
        Skill {
            bonus_dice,
            specializations: blibs
                .iter()
                .map(|b| Specialization {
                    blibs: *b,
                    ..Specialization::default()
                })
                .collect(),
            ..Skill::new("Klettern", "Reflexe")
        }
    }

    #[test]
    fn cost_staircase() {
        let costs: Vec<i64> = (0..=9).map(step_cost).collect();
        assert_eq!(costs, vec![0, 1, 2, 3, 5, 7, 9, 12, 15, 18]);
        assert_eq!(step_cost(-4), 0);
    }

    #[test]
    fn attribute_points_count_dice_only() {
        let c = character(
            &[("Stärke", "3D+2"), ("Wissen", "2D+1"), ("Magie", "1D")],
            vec![],
        );
        assert_eq!(attribute_points_used(&c), 2);
    }

    #[test]
    fn attribute_points_never_negative() {
        let c = character(&[("Reflexe", "1D"), ("Koordination", "4D")], vec![]);
        assert_eq!(attribute_points_used(&c), 2);
    }

    #[test]
    fn unrecognized_attribute_value_counts_nothing() {
        let c = character(&[("Reflexe", "lots"), ("Magie", "D2+1")], vec![]);
        assert_eq!(attribute_points_used(&c), 0);
        // Blips parse leniently: 1D is one die above Magie's 0D, below Reflexe's 2D
        assert_eq!(attribute_blips_used(&c), 3);
    }

    #[test]
    fn unknown_attribute_uses_two_dice_baseline() {
        let c = character(&[("Glück", "3D")], vec![]);
        assert_eq!(attribute_points_used(&c), 1);
        assert_eq!(attribute_blips_used(&c), 3);
    }

    #[test]
    fn attribute_blips_include_modifiers() {
        // 2D+1 is one step above 2D; 3D+1 is four steps above
        let c = character(&[("Wissen", "2D+1"), ("Stärke", "3D+1")], vec![]);
        assert_eq!(attribute_points_used(&c), 1);
        assert_eq!(attribute_blips_used(&c), 1 + 5);
    }

    #[test]
    fn skill_counters() {
        let c = character(&[], vec![skill(2, &[1, 2]), skill(1, &[3])]);
        assert_eq!(skill_points_used(&c), 3);
        assert_eq!(blibs_used(&c), 6);
        // 6 steps -> 9, 3 steps -> 3, specializations 1 + 2 + 3
        assert_eq!(skill_blips_used(&c), 9 + 3 + 1 + 2 + 3);
    }

    #[test]
    fn bonus_steps_join_the_skill_run() {
        let mut s = skill(1, &[]);
        s.bonus_steps = 1;
        let c = character(&[], vec![s]);
        assert_eq!(skill_blips_used(&c), step_cost(4));
    }

    #[test]
    fn fresh_character_has_everything_left() {
        let c = character(&[("Stärke", "2D"), ("Magie", "0D")], vec![skill(0, &[])]);
        let budget = PointBudget::evaluate(&c, &CreationPolicy::default());
        assert_eq!(budget.used_attribute_points, 0);
        assert_eq!(budget.used_blips, 0);
        assert_eq!(budget.remaining_attribute_points, 7);
        assert_eq!(budget.remaining_skill_points, 8);
        assert_eq!(budget.remaining_blibs, 4);
        assert_eq!(budget.remaining_blips, 67);
        assert!(budget.has_remaining_points);
        assert!(!budget.needs_reduction);
    }

    #[test]
    fn overspent_character_needs_reduction() {
        let c = character(&[], vec![skill(3, &[3, 2])]);
        let policy = CreationPolicy::default().with_skill_points(8).with_blibs(4);
        let budget = PointBudget::evaluate(&c, &policy);
        assert_eq!(budget.remaining_blibs, -1);
        assert!(budget.needs_reduction);
        assert!(budget.has_remaining_points);
    }

    #[test]
    fn exactly_spent_has_nothing_left() {
        let c = character(&[("Stärke", "4D")], vec![skill(1, &[1])]);
        let policy = CreationPolicy::default()
            .with_attribute_points(2)
            .with_skill_points(1)
            .with_blibs(1);
        let budget = PointBudget::evaluate(&c, &policy);
        assert!(!budget.needs_reduction);
        assert!(!budget.has_remaining_points);
    }

    #[test]
    fn huge_step_counts_saturate() {
        assert_eq!(step_cost(3_000_000_000), 1_500_000_001_500_000_000);
        assert_eq!(step_cost(i64::MAX), i64::MAX);
    }

    #[test]
    fn extreme_records_do_not_overflow() {
        let json = r#"{"skills": [{"bonusDice": 2147483647}]}"#;
        let c = Character::from_json(json).unwrap();
        let budget = PointBudget::evaluate(&c, &CreationPolicy::default());
        assert_eq!(budget.used_skill_points, 2_147_483_647);
        assert_eq!(budget.used_blips, 6_917_529_024_419_856_384);
        assert!(budget.needs_reduction);

        let json = r#"{"skills": [{"bonusDice": 2147483647}, {"bonusDice": 2147483647}]}"#;
        let c = Character::from_json(json).unwrap();
        let budget = PointBudget::evaluate(&c, &CreationPolicy::default());
        assert_eq!(budget.used_blips, i64::MAX);
        assert_eq!(budget.remaining_blips, 67 - i64::MAX);

        let json = r#"{"earnedBlips": 9223372036854775807}"#;
        let c = Character::from_json(json).unwrap();
        let budget = PointBudget::evaluate(&c, &CreationPolicy::default());
        assert_eq!(budget.total_blip_budget, i64::MAX);
        assert_eq!(budget.remaining_blips, i64::MAX);
    }

    #[test]
    fn earned_blips_extend_budget() {
        let mut c = character(&[("Stärke", "3D")], vec![]);
        c.earned_blips = 10;
        let budget = PointBudget::evaluate(&c, &CreationPolicy::default().with_start_blips(20));
        assert_eq!(budget.total_blip_budget, 30);
        assert_eq!(budget.used_blips, 3);
        assert_eq!(budget.remaining_blips, 27);
    }

    #[test]
    fn serializes_camel_case() {
        let budget = PointBudget::evaluate(&Character::default(), &CreationPolicy::default());
        let json = serde_json::to_value(&budget).unwrap();
        assert_eq!(json["remainingBlips"], 67);
        assert_eq!(json["needsReduction"], false);
    }

    proptest! {
        #[test]
        fn cost_matches_definition(steps in 0i64..500) {
            let by_definition: i64 = (1..=steps).map(|k| (k + 2) / 3).sum();
            prop_assert_eq!(step_cost(steps), by_definition);
        }

        #[test]
        fn cost_is_monotonic(steps in 0i64..10_000) {
            prop_assert!(step_cost(steps + 1) > step_cost(steps));
        }

        #[test]
        fn next_group_costs_one_more_per_step(group in 0i64..1_000) {
            let start = group * 3;
            let this_group = step_cost(start + 3) - step_cost(start);
            prop_assert_eq!(this_group, 3 * (group + 1));
        }
    }
}
