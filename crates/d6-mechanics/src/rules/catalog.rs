//! The default skill list, grouped by governing attribute.
//!
//! New characters get every skill here with nothing invested. Players
//! can add custom skills on top.

use crate::sheet::Skill;

/// Skill names for each attribute, in sheet order.
pub const SKILLS_BY_ATTRIBUTE: [(&str, &[&str]); 7] = [
    (
        "Reflexe",
        &[
            "unbewaffneter Kampf",
            "bewaffneter Nahkampf",
            "Akrobatik",
            "Klettern",
            "Springen",
            "Reiten",
            "Schleichen",
        ],
    ),
    (
        "Koordination",
        &[
            "Fernkampf",
            "Steuern",
            "Fingerfertigkeit",
            "Schlösser öffnen",
        ],
    ),
    ("Stärke", &["Ausdauer", "Heben", "Rennen", "Schwimmen"]),
    (
        "Wissen",
        &[
            "Schulwissen",
            "Handwerk",
            "Navigation",
            "Geschäftssinn",
            "Heilkunde",
        ],
    ),
    ("Wahrnehmung", &["Überleben", "schöne Künste", "Spielen"]),
    (
        "Ausstrahlung",
        &[
            "Betören",
            "Bedrohen",
            "Betrügen",
            "Verkleiden",
            "Kommandieren",
            "mentaler Widerstand",
        ],
    ),
    (
        "Magie",
        &[
            "magisches Wissen",
            "magische Kraft",
            "magische Konzentration",
            "magische Ausdauer",
        ],
    ),
];

/// Skill names governed by `attribute`. Empty for unknown attributes.
pub fn skills_for_attribute(attribute: &str) -> &'static [&'static str] {
    SKILLS_BY_ATTRIBUTE
        .iter()
        .find(|(attr, _)| *attr == attribute)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

/// Fresh, uninvested skill records for the whole catalog.
pub fn default_skills() -> Vec<Skill> {
    SKILLS_BY_ATTRIBUTE
        .iter()
        .flat_map(|(attribute, skills)| skills.iter().map(move |name| (*attribute, *name)))
        .enumerate()
        .map(|(idx, (attribute, name))| Skill {
            id: format!("skill-{idx}"),
            ..Skill::new(name, attribute)
        })
        .collect()
}
