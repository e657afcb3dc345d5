//! D6 notation, die sources, and rolling.
//!
//! Every pool in this system is made of six-sided dice. The first die of a
//! pool is the red die: it alone explodes on a six and fails critically on
//! a one.

pub mod notation;
pub mod roll;
pub mod source;

pub use notation::{Notation, ParsedNotation, STEPS_PER_DIE, classify};
pub use roll::{RollOutcome, RollRange, Verdict, range, resolve, roll, roll_against};
pub use source::{DieSource, FixedDice};
