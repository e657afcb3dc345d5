//! Hit points: derived maximum, clamped current value.

use serde::{Deserialize, Serialize};

use super::Character;
use crate::dice::{Notation, ParsedNotation, classify};

/// Attribute that drives hit points.
pub const STRENGTH: &str = "Stärke";

/// Hit points per level when the strength value cannot be read.
const UNREADABLE_STRENGTH_HP: u32 = 10;

/// A character's hit points, clamped between zero and `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
}

impl HitPoints {
    /// A full track.
    pub fn full(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// A track at `current`, clamped into range.
    pub fn at(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// The track for a stored character.
    ///
    /// Stored `maxHP`/`currentHP` win; missing values come from
    /// [`max_hit_points`], and a missing current value means unhurt.
    pub fn for_character(character: &Character) -> Self {
        let max = character
            .max_hp
            .filter(|max| *max > 0)
            .unwrap_or_else(|| i32::try_from(max_hit_points(character)).unwrap_or(i32::MAX));
        Self::at(character.current_hp.unwrap_or(max), max)
    }

    /// Adjust by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = self.current.saturating_add(delta).clamp(0, self.max);
        self.current
    }

    /// Returns true if the character is down.
    pub fn is_down(&self) -> bool {
        self.current <= 0
    }
}

impl std::fmt::Display for HitPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HP {}/{}", self.current, self.max)
    }
}

/// Maximum hit points: `max(1, strength dice + strength modifier) * level`.
///
/// Missing strength counts as `2D`. A strength value that is not dice
/// notation gives ten per level.
pub fn max_hit_points(character: &Character) -> u32 {
    let level = character.level();
    let strength = character.attribute(STRENGTH).unwrap_or("2D");
    match classify(strength) {
        ParsedNotation::Canonical(Notation { dice, modifier }) => {
            dice.saturating_add(modifier).max(1).saturating_mul(level)
        }
        ParsedNotation::LegacyReversed(_) | ParsedNotation::Unrecognized => {
            UNREADABLE_STRENGTH_HP.saturating_mul(level)
        }
    }
}
