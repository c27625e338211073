//! # Domain models for a resume
//!
//! Defines the aggregate ([`ResumeData`]) and every section entry it holds.
//! These types are `Serialize + Deserialize` so they can be logged, snapshotted
//! in tests, or handed to a future persistence layer without change.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`PersonalInfo`] | The singleton header block: name, contact details, optional photo (as a data URI) and links, and the professional summary. |
//! | [`Experience`] | One job. `current` marks an ongoing position; when set, `end_date` is empty and the preview shows "Present". |
//! | [`Education`] | One degree or programme, with an optional GPA. |
//! | [`Skill`] | A named skill with a closed [`SkillLevel`]. |
//! | [`Certification`] | A certification with issuer, date and optional credential id. |
//! | [`Project`] | A project with free-text technologies and an optional link. |
//! | [`Language`] | A spoken language with a closed [`Proficiency`]. |
//! | [`ResumeData`] | The aggregate root holding all of the above. |
//!
//! Dates are `"YYYY-MM"` strings as produced by a month input. An absent date
//! is the empty string, never a missing field.

use serde::{Deserialize, Serialize};

/// Header block of the resume. Not list-valued.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Embeddable data URI, e.g. `"data:image/png;base64,..."`.
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
    pub summary: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    /// Ignored (and kept empty) while `current` is set.
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub gpa: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free text, e.g. "Rust, Dioxus, WASM".
    pub technologies: String,
    #[serde(default)]
    pub link: Option<String>,
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: Proficiency,
}

/// The whole resume. Created empty at startup and only ever replaced wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub languages: Vec<Language>,
}

/// Skill level. New skills start at `Intermediate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Intermediate,
    Advanced,
    Expert,
    #[serde(other)]
    Beginner,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    /// Stored form, as used in form `<option value>`s.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }

    /// Display weight from 1 (lowest) to 4.
    pub fn weight(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    /// Parse a stored value. Anything unrecognised is the lowest tier.
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "intermediate" => SkillLevel::Intermediate,
            "advanced" => SkillLevel::Advanced,
            "expert" => SkillLevel::Expert,
            _ => SkillLevel::Beginner,
        }
    }
}

/// Language proficiency. New languages start at `Conversational`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[default]
    Conversational,
    Fluent,
    Native,
    #[serde(other)]
    Basic,
}

impl Proficiency {
    pub const ALL: [Proficiency; 4] = [
        Proficiency::Basic,
        Proficiency::Conversational,
        Proficiency::Fluent,
        Proficiency::Native,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Basic => "basic",
            Proficiency::Conversational => "conversational",
            Proficiency::Fluent => "fluent",
            Proficiency::Native => "native",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Basic => "Basic",
            Proficiency::Conversational => "Conversational",
            Proficiency::Fluent => "Fluent",
            Proficiency::Native => "Native",
        }
    }

    pub fn weight(&self) -> u8 {
        match self {
            Proficiency::Basic => 1,
            Proficiency::Conversational => 2,
            Proficiency::Fluent => 3,
            Proficiency::Native => 4,
        }
    }

    pub fn from_label(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "conversational" => Proficiency::Conversational,
            "fluent" => Proficiency::Fluent,
            "native" => Proficiency::Native,
            _ => Proficiency::Basic,
        }
    }
}
