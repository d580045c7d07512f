//! Declarative validation of a volunteer application.
//!
//! DESIGN
//! ======
//! Every constraint lives in the `RULES` table as a `(field, rule, message)`
//! row. `validate` walks the whole table and collects every failing row, so a
//! rejected draft always reports all invalid fields at once.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::application::{
    AgeGroup, Availability, Experience, Field, FieldInput, Skill, ValidApplication, VolunteerApplication,
};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PHONE_CHARS: usize = 10;
pub const MIN_MOTIVATION_CHARS: usize = 50;

/// A single constraint applied to one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Text with at least this many characters (Unicode scalar values).
    MinChars(usize),
    /// Text in standard email syntax.
    Email,
    /// Text equal to one of the listed values.
    OneOf(&'static [&'static str]),
    /// A non-empty list of distinct members that all appear in the catalog.
    NonEmptySubsetOf(&'static [&'static str]),
    /// A flag that must be set.
    MustBeTrue,
}

impl Rule {
    /// Whether `input` satisfies the rule. An input of the wrong shape fails.
    #[must_use]
    pub fn check(self, input: FieldInput<'_>) -> bool {
        match (self, input) {
            (Self::MinChars(min), FieldInput::Text(text)) => text.chars().count() >= min,
            (Self::Email, FieldInput::Text(text)) => is_standard_email(text),
            (Self::OneOf(choices), FieldInput::Text(text)) => choices.contains(&text),
            (Self::NonEmptySubsetOf(catalog), FieldInput::List(items)) => {
                let mut seen = HashSet::with_capacity(items.len());
                !items.is_empty() && items.iter().all(|item| catalog.contains(&item.as_str()) && seen.insert(item))
            }
            (Self::MustBeTrue, FieldInput::Flag(flag)) => flag,
            _ => false,
        }
    }
}

/// Email syntax check: `validator` plus a dotted domain ending in a label of
/// two or more ASCII letters, and no `..` in the local part.
fn is_standard_email(text: &str) -> bool {
    if !text.validate_email() {
        return false;
    }
    let Some((local, domain)) = text.rsplit_once('@') else {
        return false;
    };
    let tld_ok = domain
        .rsplit_once('.')
        .is_some_and(|(_, tld)| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    tld_ok && !local.contains("..")
}

/// One row of the rule table.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

pub const RULES: [FieldRule; 10] = [
    FieldRule {
        field: Field::FirstName,
        rule: Rule::MinChars(MIN_NAME_CHARS),
        message: "First name must be at least 2 characters",
    },
    FieldRule {
        field: Field::LastName,
        rule: Rule::MinChars(MIN_NAME_CHARS),
        message: "Last name must be at least 2 characters",
    },
    FieldRule { field: Field::Email, rule: Rule::Email, message: "Please enter a valid email address" },
    FieldRule {
        field: Field::Phone,
        rule: Rule::MinChars(MIN_PHONE_CHARS),
        message: "Please enter a valid phone number",
    },
    FieldRule { field: Field::Age, rule: Rule::OneOf(&AgeGroup::VALUES), message: "Please select your age group" },
    FieldRule {
        field: Field::Experience,
        rule: Rule::OneOf(&Experience::VALUES),
        message: "Please select your experience level",
    },
    FieldRule {
        field: Field::Availability,
        rule: Rule::OneOf(&Availability::VALUES),
        message: "Please select your availability",
    },
    FieldRule {
        field: Field::Skills,
        rule: Rule::NonEmptySubsetOf(&Skill::LABELS),
        message: "Please select at least one skill",
    },
    FieldRule {
        field: Field::Motivation,
        rule: Rule::MinChars(MIN_MOTIVATION_CHARS),
        message: "Please tell us why you want to volunteer (minimum 50 characters)",
    },
    FieldRule {
        field: Field::TermsAccepted,
        rule: Rule::MustBeTrue,
        message: "You must accept the terms and conditions",
    },
];

/// Message shown when `field` fails its rule.
#[must_use]
pub fn message_for(field: Field) -> &'static str {
    RULES.iter().find(|r| r.field == field).map_or("Invalid value", |r| r.message)
}

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// Human-readable error per invalid field, ordered by form position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(f, m)| (f, m.into())).collect())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys = self.fields().map(Field::key).collect::<Vec<_>>();
        write!(f, "invalid fields: {}", keys.join(", "))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field.key(), message)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, message)| {
                Field::from_key(&key)
                    .map(|field| (field, message))
                    .ok_or_else(|| D::Error::custom(format!("unknown field: {key}")))
            })
            .collect()
    }
}

// =============================================================================
// VALIDATE
// =============================================================================

/// Check `application` against every row of [`RULES`].
///
/// # Errors
///
/// Returns the message for every field that violates its rule.
pub fn validate(application: &VolunteerApplication) -> Result<ValidApplication, FieldErrors> {
    let errors: FieldErrors = RULES
        .iter()
        .filter(|row| !row.rule.check(application.input(row.field)))
        .map(|row| (row.field, row.message))
        .collect();
    if !errors.is_empty() {
        return Err(errors);
    }

    let age = AgeGroup::parse(&application.age).ok_or_else(|| single(Field::Age))?;
    let experience = Experience::parse(&application.experience).ok_or_else(|| single(Field::Experience))?;
    let availability = Availability::parse(&application.availability).ok_or_else(|| single(Field::Availability))?;
    let skills = application
        .skills
        .iter()
        .map(|label| Skill::parse(label).ok_or_else(|| single(Field::Skills)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidApplication {
        first_name: application.first_name.clone(),
        last_name: application.last_name.clone(),
        email: application.email.clone(),
        phone: application.phone.clone(),
        age,
        experience,
        availability,
        skills,
        motivation: application.motivation.clone(),
        terms_accepted: true,
    })
}

fn single(field: Field) -> FieldErrors {
    std::iter::once((field, message_for(field))).collect()
}
