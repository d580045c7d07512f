//! Volunteer application draft and the fixed option catalogs.
//!
//! DESIGN
//! ======
//! The draft (`VolunteerApplication`) keeps every field in its raw, editable
//! form: selects are plain strings where empty means "not chosen" and skills
//! are labels. Only `validate` turns a draft into the typed
//! `ValidApplication`, so a draft can always represent whatever the user (or a
//! remote client) sent.

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// CATALOGS
// =============================================================================

/// Age bracket offered by the age-group select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46-55")]
    From46To55,
    #[serde(rename = "55+")]
    Over55,
}

impl AgeGroup {
    pub const ALL: [Self; 5] = [Self::From18To25, Self::From26To35, Self::From36To45, Self::From46To55, Self::Over55];
    pub const VALUES: [&'static str; 5] = ["18-25", "26-35", "36-45", "46-55", "55+"];

    #[must_use]
    pub fn value(self) -> &'static str {
        Self::VALUES[self as usize]
    }

    /// Age brackets display as their wire value.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.value()
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == raw)
    }
}

/// Prior teaching experience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "informal")]
    Informal,
    #[serde(rename = "1-3")]
    OneToThreeYears,
    #[serde(rename = "3-5")]
    ThreeToFiveYears,
    #[serde(rename = "5+")]
    OverFiveYears,
}

impl Experience {
    pub const ALL: [Self; 5] =
        [Self::None, Self::Informal, Self::OneToThreeYears, Self::ThreeToFiveYears, Self::OverFiveYears];
    pub const VALUES: [&'static str; 5] = ["none", "informal", "1-3", "3-5", "5+"];
    const LABELS: [&'static str; 5] = ["No experience", "Informal teaching", "1-3 years", "3-5 years", "5+ years"];

    #[must_use]
    pub fn value(self) -> &'static str {
        Self::VALUES[self as usize]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == raw)
    }
}

/// When the volunteer can take sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "weekends")]
    Weekends,
    #[serde(rename = "weekdays")]
    Weekdays,
    #[serde(rename = "flexible")]
    Flexible,
    #[serde(rename = "evenings")]
    Evenings,
}

impl Availability {
    pub const ALL: [Self; 4] = [Self::Weekends, Self::Weekdays, Self::Flexible, Self::Evenings];
    pub const VALUES: [&'static str; 4] = ["weekends", "weekdays", "flexible", "evenings"];
    const LABELS: [&'static str; 4] = ["Weekends only", "Weekdays only", "Flexible", "Evenings only"];

    #[must_use]
    pub fn value(self) -> &'static str {
        Self::VALUES[self as usize]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.value() == raw)
    }
}

/// Skill catalog in display order. The label doubles as the wire value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Teaching,
    #[serde(rename = "Art & Crafts")]
    ArtAndCrafts,
    Music,
    Sports,
    Mathematics,
    English,
    Science,
    #[serde(rename = "Computer Skills")]
    ComputerSkills,
    Mentoring,
}

impl Skill {
    pub const ALL: [Self; 9] = [
        Self::Teaching,
        Self::ArtAndCrafts,
        Self::Music,
        Self::Sports,
        Self::Mathematics,
        Self::English,
        Self::Science,
        Self::ComputerSkills,
        Self::Mentoring,
    ];
    pub const LABELS: [&'static str; 9] = [
        "Teaching",
        "Art & Crafts",
        "Music",
        "Sports",
        "Mathematics",
        "English",
        "Science",
        "Computer Skills",
        "Mentoring",
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == raw)
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Addressable field of the application form.
///
/// Declaration order is form order; `FieldErrors` iterates in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    Experience,
    Availability,
    Skills,
    Motivation,
    TermsAccepted,
}

impl Field {
    pub const ALL: [Self; 10] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Age,
        Self::Experience,
        Self::Availability,
        Self::Skills,
        Self::Motivation,
        Self::TermsAccepted,
    ];

    /// camelCase key used on the wire and as the HTML element id.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Age => "age",
            Self::Experience => "experience",
            Self::Availability => "availability",
            Self::Skills => "skills",
            Self::Motivation => "motivation",
            Self::TermsAccepted => "termsAccepted",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Age => "Age Group",
            Self::Experience => "Teaching Experience",
            Self::Availability => "Availability",
            Self::Skills => "Skills & Interests",
            Self::Motivation => "Why do you want to volunteer with us?",
            Self::TermsAccepted => "Terms and conditions",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// New value for a single field edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Borrowed view of one field, used to evaluate rules uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldInput<'a> {
    Text(&'a str),
    List(&'a [String]),
    Flag(bool),
}

// =============================================================================
// DRAFT
// =============================================================================

/// Editable application draft. Starts empty; mutated one field at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub experience: String,
    pub availability: String,
    pub skills: Vec<String>,
    pub motivation: String,
    pub terms_accepted: bool,
}

impl VolunteerApplication {
    /// Set one field. Mismatched value kinds are ignored, as is `Field::Skills`
    /// (skills only change through [`Self::toggle_skill`]).
    pub fn update_field(&mut self, field: Field, value: FieldValue) {
        match (field, value) {
            (Field::TermsAccepted, FieldValue::Flag(accepted)) => self.terms_accepted = accepted,
            (Field::TermsAccepted | Field::Skills, _) | (_, FieldValue::Flag(_)) => {}
            (field, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_slot(field) {
                    *slot = text;
                }
            }
        }
    }

    /// Add `skill` if absent, remove it if present.
    pub fn toggle_skill(&mut self, skill: Skill) {
        let label = skill.label();
        if let Some(pos) = self.skills.iter().position(|s| s == label) {
            self.skills.remove(pos);
        } else {
            self.skills.push(label.to_owned());
        }
    }

    #[must_use]
    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.iter().any(|s| s == skill.label())
    }

    /// Current value of `field` in the shape its rule expects.
    #[must_use]
    pub fn input(&self, field: Field) -> FieldInput<'_> {
        match field {
            Field::FirstName => FieldInput::Text(&self.first_name),
            Field::LastName => FieldInput::Text(&self.last_name),
            Field::Email => FieldInput::Text(&self.email),
            Field::Phone => FieldInput::Text(&self.phone),
            Field::Age => FieldInput::Text(&self.age),
            Field::Experience => FieldInput::Text(&self.experience),
            Field::Availability => FieldInput::Text(&self.availability),
            Field::Skills => FieldInput::List(&self.skills),
            Field::Motivation => FieldInput::Text(&self.motivation),
            Field::TermsAccepted => FieldInput::Flag(self.terms_accepted),
        }
    }

    fn text_slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::Age => Some(&mut self.age),
            Field::Experience => Some(&mut self.experience),
            Field::Availability => Some(&mut self.availability),
            Field::Motivation => Some(&mut self.motivation),
            Field::Skills | Field::TermsAccepted => None,
        }
    }
}

/// Application that passed every rule. Only produced by [`crate::validate`].
///
/// Serializes with the same keys and values as [`VolunteerApplication`], so a
/// receiver can decode it as a draft and validate it again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: AgeGroup,
    pub experience: Experience,
    pub availability: Availability,
    pub skills: Vec<Skill>,
    pub motivation: String,
    pub terms_accepted: bool,
}

impl ValidApplication {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
