//! Error types for the mechanics engine.
//!
//! The dice and point rules themselves are total and never fail. These
//! errors belong to the lookups and record decoding around them.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// No character with the given id is loaded in the context.
    #[error("character '{0}' not found")]
    CharacterNotFound(String),

    /// An attribute referenced by name does not exist on the character.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A skill referenced by name does not exist on the character.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// A specialization referenced by name does not exist on the skill.
    #[error("unknown specialization '{specialization}' for skill '{skill}'")]
    UnknownSpecialization {
        /// The skill that was searched.
        skill: String,
        /// The specialization that was requested.
        specialization: String,
    },

    /// A fixed-face script was empty or contained a face outside 1-6.
    #[error("invalid dice faces: {0}")]
    InvalidFaces(String),

    /// A character record or policy could not be decoded.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
