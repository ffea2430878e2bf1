use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

// ────────────────────────────────────────────────────────────────────────────
// Personal details
// ────────────────────────────────────────────────────────────────────────────

/// Identity and contact block. Empty strings mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub full_name: String,
    pub post_seeking: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub description: String,
    /// Kept for compatibility with exported data files. The displayed photo is
    /// the `PhotoHandle` held by the render context.
    pub photo_url: String,
}

/// The three optional contact fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Phone,
    Email,
    Address,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Phone,
        ContactField::Email,
        ContactField::Address,
    ];
}

impl PersonalDetails {
    pub fn contact(&self, field: ContactField) -> &str {
        match field {
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Address => &self.address,
        }
    }

    /// Non-empty contact fields in display order.
    pub fn present_contacts(&self) -> impl Iterator<Item = (ContactField, &str)> + '_ {
        ContactField::ALL
            .into_iter()
            .map(move |f| (f, self.contact(f)))
            .filter(|(_, v)| !v.is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Timeline entries
// ────────────────────────────────────────────────────────────────────────────

/// A job. `end_date` empty means the position is ongoing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub job_title: String,
    pub company_name: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Languages, skills, hobbies
// ────────────────────────────────────────────────────────────────────────────

/// Closed proficiency scale. Any unrecognized input deserializes to `Unset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Proficiency {
    #[default]
    Unset,
    Beginner,
    Intermediate,
    Advanced,
}

impl Proficiency {
    /// Total parse: French labels (the application locale) and English aliases.
    pub fn parse(level: &str) -> Self {
        match level.trim() {
            "Débutant" | "Beginner" => Proficiency::Beginner,
            "Intermédiaire" | "Intermediate" => Proficiency::Intermediate,
            "Avancé" | "Advanced" => Proficiency::Advanced,
            _ => Proficiency::Unset,
        }
    }

    /// Display label in the fixed fr-FR locale. `Unset` has no label.
    pub fn label(self) -> &'static str {
        match self {
            Proficiency::Unset => "",
            Proficiency::Beginner => "Débutant",
            Proficiency::Intermediate => "Intermédiaire",
            Proficiency::Advanced => "Avancé",
        }
    }
}

impl From<String> for Proficiency {
    fn from(value: String) -> Self {
        Proficiency::parse(&value)
    }
}

impl From<Proficiency> for String {
    fn from(value: Proficiency) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hobby {
    pub name: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate
// ────────────────────────────────────────────────────────────────────────────

/// Everything the user types in. Serializable; the photo is not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_details: PersonalDetails,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub languages: Vec<Language>,
    pub skills: Vec<Skill>,
    pub hobbies: Vec<Hobby>,
}

impl ResumeData {
    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        serde_json::from_str(raw).map_err(ModelError::InvalidInput)
    }
}
