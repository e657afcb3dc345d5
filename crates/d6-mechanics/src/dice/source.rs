//! Sources of six-sided die faces.
//!
//! Rolling code only ever asks for "the next face". Seeded RNGs give
//! reproducible rolls, and [`FixedDice`] replays faces that were rolled
//! at the table or scripted in tests.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{MechError, MechResult};

/// Number of faces on the dice used by the D6 system.
pub const FACES: u32 = 6;

/// Anything that can produce uniform d6 faces.
pub trait DieSource {
    /// The next face, in `1..=6`.
    fn next_face(&mut self) -> u32;
}

impl DieSource for StdRng {
    fn next_face(&mut self) -> u32 {
        self.random_range(1..=FACES)
    }
}

impl DieSource for rand::rngs::ThreadRng {
    fn next_face(&mut self) -> u32 {
        self.random_range(1..=FACES)
    }
}

/// Replays a fixed list of faces, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct FixedDice {
    faces: Vec<u32>,
    next: usize,
}

impl FixedDice {
    /// Create a replay source. The list must be non-empty and every face in `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> MechResult<Self> {
        let faces: Vec<u32> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(MechError::InvalidFaces("no faces given".to_string()));
        }
        if let Some(bad) = faces.iter().find(|f| !(1..=FACES).contains(*f)) {
            return Err(MechError::InvalidFaces(format!("{bad} is not a d6 face")));
        }
        Ok(Self { faces, next: 0 })
    }

    /// Parse a comma- or whitespace-separated face list such as `"4,2,5"`.
    pub fn parse(text: &str) -> MechResult<Self> {
        let faces = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| MechError::InvalidFaces(format!("'{part}' is not a number")))
            })
            .collect::<MechResult<Vec<_>>>()?;
        Self::new(faces)
    }

    /// How many faces have been handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl DieSource for FixedDice {
    fn next_face(&mut self) -> u32 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn fixed_dice_replays_and_cycles() {
        let mut dice = FixedDice::new([4, 2, 5]).unwrap();
        let faces: Vec<u32> = (0..5).map(|_| dice.next_face()).collect();
        assert_eq!(faces, vec![4, 2, 5, 4, 2]);
        assert_eq!(dice.consumed(), 5);
    }

    #[test]
    fn fixed_dice_rejects_empty() {
        assert!(matches!(FixedDice::new(Vec::new()), Err(MechError::InvalidFaces(_))));
    }

    #[test]
    fn fixed_dice_rejects_out_of_range() {
        assert!(FixedDice::new([3, 7]).is_err());
        assert!(FixedDice::new([0]).is_err());
    }

    #[test]
    fn fixed_dice_parse() {
        let mut dice = FixedDice::parse("6, 6 3").unwrap();
        assert_eq!(dice.next_face(), 6);
        assert_eq!(dice.next_face(), 6);
        assert_eq!(dice.next_face(), 3);
        assert!(FixedDice::parse("6,x").is_err());
        assert!(FixedDice::parse(" , ").is_err());
    }

    #[test]
    fn std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!((1..=FACES).contains(&rng.next_face()));
        }
    }
}
