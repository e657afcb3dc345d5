//! Resolving a D6 pool: the red die, exploding sixes, and critical failures.

use serde::{Deserialize, Serialize};

use super::notation::Notation;
use super::source::{DieSource, FACES};

/// Base dice reserved up front. Larger pools grow as they are drawn.
const PREALLOCATED_DICE: usize = 64;

/// The complete record of one roll. Created once and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Base dice in roll order. The first entry is always the red die.
    pub dice: Vec<u32>,
    /// Extra dice rolled because the red die (or its chain) showed a six.
    pub exploding: Vec<u32>,
    /// Flat modifier from the notation.
    pub modifier: u32,
    /// Sum of base dice, exploding dice, and modifier.
    pub total: u32,
    /// The notation that was rolled, re-rendered from its parsed parts.
    pub notation: String,
    /// Target value the roll was made against, if any.
    pub target: Option<u32>,
    /// `None` when no target was given and the red die was not a 1.
    pub success: Option<bool>,
    /// The red die showed a 1.
    pub critical_failure: bool,
}

/// A judgement on a finished roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The red die showed a 1. Always a failure.
    CriticalFailure,
    /// The total met or beat the target.
    Success,
    /// The total fell short of the target.
    Failure,
    /// No target was set, so there is nothing to judge.
    Unjudged,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalFailure => write!(f, "Critical Failure"),
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
            Self::Unjudged => write!(f, "No Target"),
        }
    }
}

/// Lowest and highest total a notation can produce without exploding dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRange {
    /// Every die showing 1.
    pub min: u32,
    /// Every die showing 6. Exploding dice can go past this.
    pub max: u32,
}

impl RollOutcome {
    /// The red die's face.
    pub fn red_die(&self) -> u32 {
        self.dice.first().copied().unwrap_or(0)
    }

    /// Returns true if the red die started an exploding chain.
    pub fn exploded(&self) -> bool {
        !self.exploding.is_empty()
    }

    /// Classify the roll.
    pub fn verdict(&self) -> Verdict {
        if self.critical_failure {
            return Verdict::CriticalFailure;
        }
        match self.success {
            Some(true) => Verdict::Success,
            Some(false) => Verdict::Failure,
            None => Verdict::Unjudged,
        }
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice: Vec<String> = self.dice.iter().map(u32::to_string).collect();
        write!(f, "{}: [{}]", self.notation, dice.join(", "))?;
        if self.exploded() {
            let chain: Vec<String> = self.exploding.iter().map(u32::to_string).collect();
            write!(f, " ! [{}]", chain.join(", "))?;
        }
        if self.modifier > 0 {
            write!(f, " +{}", self.modifier)?;
        }
        write!(f, " = {}", self.total)
    }
}

/// Roll a notation with no target value.
pub fn roll(notation: &str, source: &mut impl DieSource) -> RollOutcome {
    resolve(Notation::parse(notation), None, source)
}

/// Roll a notation and judge it against `target`.
pub fn roll_against(notation: &str, target: u32, source: &mut impl DieSource) -> RollOutcome {
    resolve(Notation::parse(notation), Some(target), source)
}

/// Roll an already-parsed notation.
///
/// The red die is always rolled, even for `0D`. While the latest die in the
/// red chain shows a six another die is added to the chain. There is no cap.
///
/// Every base die is recorded, so memory grows with the die count. Hosts
/// that accept notation from untrusted input should bound it first.
pub fn resolve(
    notation: Notation,
    target: Option<u32>,
    source: &mut impl DieSource,
) -> RollOutcome {
    let red = source.next_face();
    let capacity = usize::try_from(notation.dice)
        .map_or(PREALLOCATED_DICE, |n| n.clamp(1, PREALLOCATED_DICE));
    let mut dice = Vec::with_capacity(capacity);
    dice.push(red);

    let mut exploding = Vec::new();
    let mut current = red;
    while current == FACES {
        current = source.next_face();
        tracing::trace!(face = current, "exploding die");
        exploding.push(current);
    }

    for _ in 1..notation.dice {
        dice.push(source.next_face());
    }

    let total = dice
        .iter()
        .chain(exploding.iter())
        .fold(notation.modifier, |sum, face| sum.saturating_add(*face));

    let critical_failure = red == 1;
    let success = if critical_failure {
        Some(false)
    } else {
        target.map(|t| total >= t)
    };

    RollOutcome {
        dice,
        exploding,
        modifier: notation.modifier,
        total,
        notation: notation.to_string(),
        target,
        success,
        critical_failure,
    }
}

/// The totals a notation can reach, ignoring exploding dice.
pub fn range(notation: &str) -> RollRange {
    let Notation { dice, modifier } = Notation::parse(notation);
    RollRange {
        min: dice.saturating_add(modifier),
        max: dice.saturating_mul(FACES).saturating_add(modifier),
    }
}
