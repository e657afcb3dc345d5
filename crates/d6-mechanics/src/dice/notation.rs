//! Dice notation (`2D`, `3D+1`) and its step embedding.
//!
//! A notation is a whole-die count plus a sub-die modifier. One die is
//! worth three steps, so `2D+1` and `1D+4` describe the same magnitude
//! (seven steps) and normalize to the same canonical form.

use serde::{Deserialize, Serialize};

/// Number of steps in one whole die.
pub const STEPS_PER_DIE: u32 = 3;

/// A parsed dice expression: `dice` six-sided dice plus a flat `modifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Notation {
    /// Number of whole dice.
    pub dice: u32,
    /// Flat bonus added to the total. Canonical values are 0-2.
    pub modifier: u32,
}

/// How a piece of text was recognized as dice notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedNotation {
    /// `<N>D` or `<N>D+<M>`.
    Canonical(Notation),
    /// The historical `D<N>+<M>` shape, still found in old records.
    LegacyReversed(Notation),
    /// Nothing usable.
    Unrecognized,
}

impl Notation {
    /// The value used whenever text cannot be read as notation.
    pub const FALLBACK: Self = Self::new(1, 0);

    /// Create a notation from its parts without normalizing.
    pub const fn new(dice: u32, modifier: u32) -> Self {
        Self { dice, modifier }
    }

    /// Parse `<N>D` or `<N>D+<M>`, ignoring case and surrounding whitespace.
    ///
    /// Never fails: any other input yields [`Notation::FALLBACK`] (`1D`).
    pub fn parse(text: &str) -> Self {
        match classify(text) {
            ParsedNotation::Canonical(notation) => notation,
            ParsedNotation::LegacyReversed(_) | ParsedNotation::Unrecognized => {
                tracing::debug!(input = text, "unrecognized dice notation, using 1D");
                Self::FALLBACK
            }
        }
    }

    /// Linear magnitude: `dice * 3 + modifier`.
    pub fn steps(self) -> u32 {
        self.dice
            .saturating_mul(STEPS_PER_DIE)
            .saturating_add(self.modifier)
    }

    /// Fold every three points of modifier into one extra die.
    pub fn normalize(self) -> Self {
        Self {
            dice: self.dice.saturating_add(self.modifier / STEPS_PER_DIE),
            modifier: self.modifier % STEPS_PER_DIE,
        }
    }

    /// Returns true if the modifier is already below one die.
    pub fn is_normalized(self) -> bool {
        self.modifier < STEPS_PER_DIE
    }

    /// Build the canonical notation for a raw step count.
    ///
    /// Negative counts are floored to zero steps (`0D`).
    pub fn from_steps(steps: i64) -> Self {
        let steps = u32::try_from(steps.max(0)).unwrap_or(u32::MAX);
        Self {
            dice: steps / STEPS_PER_DIE,
            modifier: steps % STEPS_PER_DIE,
        }
    }

    /// Reformat arbitrary text as canonical notation.
    ///
    /// Canonical input is normalized (`1D+4` becomes `2D+1`). The legacy
    /// `D<N>+<M>` shape is read as `N` dice plus `M` and normalized.
    /// Anything else goes through [`Notation::parse`] and comes out as `1D`.
    pub fn format_text(text: &str) -> String {
        match classify(text) {
            ParsedNotation::Canonical(notation) => notation.normalize().to_string(),
            ParsedNotation::LegacyReversed(notation) => {
                tracing::warn!(input = text, "legacy reversed dice notation detected");
                notation.normalize().to_string()
            }
            ParsedNotation::Unrecognized => Self::parse(text).normalize().to_string(),
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifier == 0 {
            write!(f, "{}D", self.dice)
        } else {
            write!(f, "{}D+{}", self.dice, self.modifier)
        }
    }
}

/// Work out which notation shape, if any, `text` is written in.
pub fn classify(text: &str) -> ParsedNotation {
    let upper = text.trim().to_uppercase();
    let Some((before, after)) = upper.split_once('D') else {
        return ParsedNotation::Unrecognized;
    };

    if before.is_empty() {
        return after
            .split_once('+')
            .and_then(|(dice, modifier)| Some(Notation::new(count(dice)?, count(modifier)?)))
            .map_or(ParsedNotation::Unrecognized, ParsedNotation::LegacyReversed);
    }

    let Some(dice) = count(before) else {
        return ParsedNotation::Unrecognized;
    };
    if after.is_empty() {
        return ParsedNotation::Canonical(Notation::new(dice, 0));
    }
    after
        .strip_prefix('+')
        .and_then(count)
        .map_or(ParsedNotation::Unrecognized, |modifier| {
            ParsedNotation::Canonical(Notation::new(dice, modifier))
        })
}

/// A plain run of ASCII digits. Rejects signs, which `str::parse` would accept.
fn count(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_plain_dice() {
        assert_eq!(Notation::parse("2D"), Notation::new(2, 0));
        assert_eq!(Notation::parse("0D"), Notation::new(0, 0));
        assert_eq!(Notation::parse("12D"), Notation::new(12, 0));
    }

    #[test]
    fn parse_with_modifier() {
        assert_eq!(Notation::parse("1D+1"), Notation::new(1, 1));
        assert_eq!(Notation::parse("2D+2"), Notation::new(2, 2));
        // Not normalized on parse
        assert_eq!(Notation::parse("1D+4"), Notation::new(1, 4));
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Notation::parse("  3d+1 "), Notation::new(3, 1));
        assert_eq!(Notation::parse("\t2d\n"), Notation::new(2, 0));
    }

    #[test]
    fn parse_falls_back_to_one_die() {
        for input in [
            "", "D", "foo", "2D+", "2D-1", "+2D", "2 D", "D2+1", "2D+1+1", "-1D",
        ] {
            assert_eq!(
                Notation::parse(input),
                Notation::FALLBACK,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_signed_counts() {
        assert_eq!(classify("+2D"), ParsedNotation::Unrecognized);
        assert_eq!(classify("2D++1"), ParsedNotation::Unrecognized);
    }

    #[test]
    fn classify_shapes() {
        assert_eq!(
            classify("2D+1"),
            ParsedNotation::Canonical(Notation::new(2, 1))
        );
        assert_eq!(
            classify("D2+4"),
            ParsedNotation::LegacyReversed(Notation::new(2, 4))
        );
        assert_eq!(classify("D2"), ParsedNotation::Unrecognized);
        assert_eq!(classify("xyz"), ParsedNotation::Unrecognized);
    }

    #[test]
    fn steps() {
        assert_eq!(Notation::new(0, 0).steps(), 0);
        assert_eq!(Notation::new(2, 0).steps(), 6);
        assert_eq!(Notation::new(2, 1).steps(), 7);
        assert_eq!(Notation::new(1, 4).steps(), 7);
    }

    #[test]
    fn normalize_folds_modifier() {
        assert_eq!(Notation::new(1, 3).normalize(), Notation::new(2, 0));
        assert_eq!(Notation::new(1, 4).normalize(), Notation::new(2, 1));
        assert_eq!(Notation::new(0, 8).normalize(), Notation::new(2, 2));
        assert_eq!(Notation::new(3, 2).normalize(), Notation::new(3, 2));
        assert!(Notation::new(0, 8).normalize().is_normalized());
        assert!(!Notation::new(0, 8).is_normalized());
    }

    #[test]
    fn display() {
        assert_eq!(Notation::new(2, 0).to_string(), "2D");
        assert_eq!(Notation::new(2, 1).to_string(), "2D+1");
        assert_eq!(Notation::new(0, 0).to_string(), "0D");
    }

    #[test]
    fn from_steps() {
        assert_eq!(Notation::from_steps(0).to_string(), "0D");
        assert_eq!(Notation::from_steps(7).to_string(), "2D+1");
        assert_eq!(Notation::from_steps(9).to_string(), "3D");
        assert_eq!(Notation::from_steps(-5).to_string(), "0D");
    }

    #[test]
    fn format_text_canonical() {
        assert_eq!(Notation::format_text("2d"), "2D");
        assert_eq!(Notation::format_text("1D+4"), "2D+1");
        assert_eq!(Notation::format_text(" 3D+2 "), "3D+2");
    }

    #[test]
    fn format_text_legacy_shape() {
        assert_eq!(Notation::format_text("D2+1"), "2D+1");
        assert_eq!(Notation::format_text("d1+5"), "2D+2");
    }

    #[test]
    fn format_text_falls_back() {
        assert_eq!(Notation::format_text("garbage"), "1D");
        assert_eq!(Notation::format_text(""), "1D");
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Notation::new(2, 1)).unwrap();
        assert_eq!(json, r#"{"dice":2,"modifier":1}"#);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(dice in 0u32..10_000, modifier in 0u32..10_000) {
            let once = Notation::new(dice, modifier).normalize();
            prop_assert_eq!(once.normalize(), once);
            prop_assert!(once.is_normalized());
        }

        #[test]
        fn normalize_preserves_steps(dice in 0u32..10_000, modifier in 0u32..10_000) {
            let notation = Notation::new(dice, modifier);
            prop_assert_eq!(notation.normalize().steps(), notation.steps());
        }

        #[test]
        fn format_then_parse_keeps_steps(steps in 0i64..1_000_000) {
            let text = Notation::from_steps(steps).to_string();
            prop_assert_eq!(i64::from(Notation::parse(&text).steps()), steps);
        }

        #[test]
        fn one_more_die_is_three_steps(dice in 0u32..10_000, modifier in 0u32..3) {
            let base = Notation::new(dice, modifier).steps();
            prop_assert_eq!(Notation::new(dice + 1, modifier).steps(), base + 3);
        }
    }
}
