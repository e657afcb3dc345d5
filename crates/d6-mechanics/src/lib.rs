//! D6 rules engine for Fallcrest campaigns.
//!
//! Provides dice notation and the exploding red-die roll, skill value
//! composition, and character point accounting in steps, Blibs, and
//! Blips. Everything here is pure: rolls take an injected die source and
//! budgets are recomputed from the character record on every call.

pub mod budget;
pub mod dice;
pub mod error;
pub mod rules;
pub mod sheet;

pub use budget::{CharacterContext, PointBudget, step_cost};
pub use dice::{DieSource, FixedDice, Notation, RollOutcome, RollRange, Verdict};
pub use error::{MechError, MechResult};
pub use rules::CreationPolicy;
pub use sheet::{Character, HitPoints, Skill, Specialization, compose_skill_notation};
